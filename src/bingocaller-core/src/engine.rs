//! The draw engine.
//!
//! Owns the undrawn pool and the called set for one round at a time. Draws
//! are uniform over whatever is left in the pool, without replacement.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::ball::{BallId, TOTAL_BALLS, all_balls};
use crate::caller_mode::CallerMode;
use crate::error::BingoError;
use crate::random::{IndexSource, RandomIndex};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Balls remain to be drawn.
    InRound,
    /// Every ball has been called.
    RoundComplete,
}

/// Draws balls from the 75-ball pool.
///
/// `pool` and `history` always partition the full set of balls: a draw moves
/// exactly one ball from the former to the latter, and `start_round` moves
/// everything back.
pub struct DrawEngine {
    pool: Vec<BallId>,
    /// Called balls in draw order.
    history: Vec<BallId>,
    called: BTreeSet<BallId>,
    last_called: Option<BallId>,
    caller_mode: CallerMode,
    source: Box<dyn IndexSource>,
}

impl DrawEngine {
    /// Create an engine drawing from the given index source. A fresh round is
    /// already started.
    pub fn new(source: Box<dyn IndexSource>) -> Self {
        Self {
            pool: all_balls(),
            history: Vec::with_capacity(TOTAL_BALLS),
            called: BTreeSet::new(),
            last_called: None,
            caller_mode: CallerMode::default(),
            source,
        }
    }

    /// Create an engine backed by `RandomIndex`.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(Box::new(RandomIndex::new(seed)))
    }

    /// Discard any round in progress and restore the full pool.
    pub fn start_round(&mut self) {
        self.pool = all_balls();
        self.history.clear();
        self.called.clear();
        self.last_called = None;
        info!(mode = %self.caller_mode, "new round started");
    }

    /// Start a round and select its caller mode in one step.
    pub fn start_round_with_mode(&mut self, mode: CallerMode) {
        self.caller_mode = mode;
        self.start_round();
    }

    /// Draw the next ball, or `None` once the pool is exhausted.
    pub fn draw_next(&mut self) -> Option<BallId> {
        if self.pool.is_empty() {
            return None;
        }

        let index = self.source.next_index(self.pool.len());
        // Guard against a misbehaving source rather than panicking.
        let index = index.min(self.pool.len() - 1);
        let ball = self.pool.swap_remove(index);

        self.history.push(ball);
        self.called.insert(ball);
        self.last_called = Some(ball);

        debug!(ball = %ball, remaining = self.pool.len(), "ball drawn");
        if self.pool.is_empty() {
            info!("all balls have been called");
        }

        Some(ball)
    }

    /// Number of balls still in the pool.
    pub fn remaining_count(&self) -> usize {
        self.pool.len()
    }

    /// Number of balls called this round.
    pub fn called_count(&self) -> usize {
        self.history.len()
    }

    /// Snapshot of the balls called this round.
    pub fn called_set(&self) -> BTreeSet<BallId> {
        self.called.clone()
    }

    pub fn is_called(&self, ball: &BallId) -> bool {
        self.called.contains(ball)
    }

    /// Called balls in the order they were drawn.
    pub fn history(&self) -> &[BallId] {
        &self.history
    }

    pub fn last_called(&self) -> Option<BallId> {
        self.last_called
    }

    pub fn state(&self) -> RoundState {
        if self.pool.is_empty() {
            RoundState::RoundComplete
        } else {
            RoundState::InRound
        }
    }

    pub fn caller_mode(&self) -> CallerMode {
        self.caller_mode
    }

    /// Change the caller mode.
    ///
    /// Allowed before the first draw of a round or after the round is
    /// complete; a round that is partly called keeps its mode.
    pub fn set_caller_mode(&mut self, mode: CallerMode) -> Result<(), BingoError> {
        if !self.history.is_empty() && !self.pool.is_empty() {
            return Err(BingoError::RoundInProgress);
        }
        self.caller_mode = mode;
        Ok(())
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::with_seed(None)
    }
}
