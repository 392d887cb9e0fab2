//! Bingo Caller Core Library
//!
//! Provides the 75-ball draw engine, caller prompt formatting, and the speech
//! sinks used to announce each call.

pub mod ball;
pub mod board;
pub mod caller;
pub mod caller_mode;
pub mod calls;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod random;
pub mod speech;

pub use ball::{BallId, Letter, TOTAL_BALLS, all_balls};
pub use board::{Board, BoardCell, CellStatus};
pub use caller::{CallEvent, CalledBall, Caller};
pub use caller_mode::CallerMode;
pub use config::{Config, SpeechBackend};
pub use engine::{DrawEngine, RoundState};
pub use error::BingoError;
pub use prompt::{PromptFormatter, to_spoken_form};
pub use random::{IndexSource, RandomIndex, ScriptedIndex};
pub use speech::{CommandSpeaker, KokoroRecorder, SilentSpeaker, SpeechSink};
