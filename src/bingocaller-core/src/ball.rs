//! Ball identifiers and the fixed 75-ball pool.
//!
//! Each column of the board owns a contiguous run of 15 numbers:
//! B = 1-15, I = 16-30, N = 31-45, G = 46-60, O = 61-75.

use std::fmt;
use std::str::FromStr;

use crate::error::BingoError;

/// Numbers per column.
pub const COLUMN_SIZE: u8 = 15;

/// Size of the full pool.
pub const TOTAL_BALLS: usize = 75;

/// Column letter of a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

impl Letter {
    /// All letters in column order.
    pub const ALL: [Letter; 5] = [Letter::B, Letter::I, Letter::N, Letter::G, Letter::O];

    /// Zero-based column index.
    pub fn column(self) -> usize {
        self as usize
    }

    /// First number of this column.
    pub fn first_number(self) -> u8 {
        1 + self.column() as u8 * COLUMN_SIZE
    }

    /// Last number of this column.
    pub fn last_number(self) -> u8 {
        self.first_number() + COLUMN_SIZE - 1
    }

    /// Column that owns `number`, if it is within 1-75.
    pub fn for_number(number: u8) -> Option<Letter> {
        if number == 0 || number as usize > TOTAL_BALLS {
            return None;
        }
        Letter::ALL.get(((number - 1) / COLUMN_SIZE) as usize).copied()
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::B => 'B',
            Letter::I => 'I',
            Letter::N => 'N',
            Letter::G => 'G',
            Letter::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'B' => Some(Letter::B),
            'I' => Some(Letter::I),
            'N' => Some(Letter::N),
            'G' => Some(Letter::G),
            'O' => Some(Letter::O),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single ball, such as `B7` or `O75`.
///
/// Construction validates that the number belongs to the letter's column, so
/// every `BallId` value is a member of the 75-ball pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BallId {
    letter: Letter,
    number: u8,
}

impl BallId {
    /// Create a ball from its number alone; the letter is implied by the column.
    pub fn from_number(number: u8) -> Option<BallId> {
        Letter::for_number(number).map(|letter| BallId { letter, number })
    }

    /// Create a ball from an explicit letter and number.
    pub fn new(letter: Letter, number: u8) -> Result<BallId, BingoError> {
        if number < letter.first_number() || number > letter.last_number() {
            return Err(BingoError::InvalidBall(format!("{}{}", letter, number)));
        }
        Ok(BallId { letter, number })
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

impl FromStr for BallId {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| BingoError::InvalidBall(s.to_string()))?;
        let number = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| BingoError::InvalidBall(s.to_string()))?;
        BallId::new(letter, number).map_err(|_| BingoError::InvalidBall(s.to_string()))
    }
}

/// Every ball in the pool, in column order (B1 .. O75).
pub fn all_balls() -> Vec<BallId> {
    (1..=TOTAL_BALLS as u8)
        .filter_map(BallId::from_number)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_balls_is_full_pool() {
        let balls = all_balls();
        assert_eq!(balls.len(), TOTAL_BALLS);

        let unique: HashSet<_> = balls.iter().collect();
        assert_eq!(unique.len(), TOTAL_BALLS);

        assert_eq!(balls[0].to_string(), "B1");
        assert_eq!(balls[74].to_string(), "O75");
    }

    #[test]
    fn test_column_ranges() {
        assert_eq!(Letter::B.first_number(), 1);
        assert_eq!(Letter::B.last_number(), 15);
        assert_eq!(Letter::I.first_number(), 16);
        assert_eq!(Letter::N.last_number(), 45);
        assert_eq!(Letter::G.first_number(), 46);
        assert_eq!(Letter::O.last_number(), 75);

        for ball in all_balls() {
            let letter = ball.letter();
            assert!(ball.number() >= letter.first_number());
            assert!(ball.number() <= letter.last_number());
        }
    }

    #[test]
    fn test_letter_for_number_boundaries() {
        assert_eq!(Letter::for_number(0), None);
        assert_eq!(Letter::for_number(15), Some(Letter::B));
        assert_eq!(Letter::for_number(16), Some(Letter::I));
        assert_eq!(Letter::for_number(60), Some(Letter::G));
        assert_eq!(Letter::for_number(61), Some(Letter::O));
        assert_eq!(Letter::for_number(76), None);
    }

    #[test]
    fn test_parse_ball() {
        let ball: BallId = "n31".parse().unwrap();
        assert_eq!(ball.letter(), Letter::N);
        assert_eq!(ball.number(), 31);
        assert_eq!(ball.to_string(), "N31");
    }

    #[test]
    fn test_parse_rejects_wrong_column() {
        assert!("B16".parse::<BallId>().is_err());
        assert!("O60".parse::<BallId>().is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<BallId>().is_err());
        assert!("X5".parse::<BallId>().is_err());
        assert!("B".parse::<BallId>().is_err());
        assert!("Bx".parse::<BallId>().is_err());
        assert!("B999".parse::<BallId>().is_err());
    }
}
