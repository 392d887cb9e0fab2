//! Console rendering of the board and round status.

use bingocaller_core::{Board, BoardCell, CallerMode, CellStatus, Letter};
use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 40;

/// Clear the terminal and move the cursor home.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

pub fn print_header() {
    println!("{}", "═".repeat(RULE_WIDTH).bright_blue());
    println!("{}", "  BINGO Caller".bright_blue().bold());
    println!("{}", "═".repeat(RULE_WIDTH).bright_blue());
    println!();
}

/// Uncoloured text of one cell, five columns wide.
pub fn cell_text(cell: &BoardCell) -> String {
    match cell.status {
        CellStatus::MostRecent => format!("[{:>3}]", cell.ball.to_string()),
        CellStatus::Called => format!(" {:>3} ", cell.ball.to_string()),
        CellStatus::Uncalled => "  .  ".to_string(),
    }
}

fn styled_cell(cell: &BoardCell) -> ColoredString {
    let text = cell_text(cell);
    match cell.status {
        CellStatus::MostRecent => text.black().on_yellow().bold(),
        CellStatus::Called => text.white().on_green(),
        CellStatus::Uncalled => text.dimmed(),
    }
}

pub fn print_board(board: &Board) {
    let header: String = Letter::ALL
        .iter()
        .map(|letter| format!("{:^5} ", letter.to_string()))
        .collect();
    println!("{}", header.bright_blue().bold());

    for row in board.rows() {
        let line = row
            .iter()
            .map(|cell| styled_cell(cell).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", line);
    }
}

/// Everything the status block below the board needs.
pub struct Status<'a> {
    pub last_ball: Option<String>,
    pub prompt: Option<&'a str>,
    pub remaining: usize,
    pub mode: CallerMode,
    pub auto_call: bool,
    pub paused: bool,
}

pub fn print_status(status: &Status<'_>) {
    println!();
    if let Some(ball) = &status.last_ball {
        println!("{}", format!(">>> {} <<<", ball).bright_yellow().bold());
    }
    if let Some(prompt) = status.prompt {
        println!("  {}", prompt.italic());
    }
    println!();
    println!(
        "{} {}    {} {}",
        "Balls remaining:".bright_cyan().bold(),
        status.remaining.to_string().bold(),
        "Mode:".bright_cyan().bold(),
        status.mode.display_name()
    );
    if status.paused {
        println!("{}", "Auto-call paused.".yellow());
    }
    println!("{}", instructions(status.auto_call).dimmed());
}

pub fn instructions(auto_call: bool) -> &'static str {
    if auto_call {
        "Press Enter to call now, 'p' to pause/resume auto-call, 'q' to quit this round."
    } else {
        "Press Enter to call next ball, 'q' to quit this round."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingocaller_core::BallId;

    fn cell(number: u8, status: CellStatus) -> BoardCell {
        BoardCell {
            ball: BallId::from_number(number).unwrap(),
            status,
        }
    }

    #[test]
    fn test_cell_text_widths() {
        assert_eq!(cell_text(&cell(7, CellStatus::MostRecent)), "[ B7]");
        assert_eq!(cell_text(&cell(7, CellStatus::Called)), "  B7 ");
        assert_eq!(cell_text(&cell(70, CellStatus::Called)), " O70 ");
        assert_eq!(cell_text(&cell(70, CellStatus::Uncalled)), "  .  ");
    }

    #[test]
    fn test_instructions_mention_pause_only_in_auto_mode() {
        assert!(instructions(true).contains("pause"));
        assert!(!instructions(false).contains("pause"));
    }
}
