//! Call orchestration.
//!
//! Ties the draw engine, the prompt formatter and a speech sink together so a
//! front end only has to decide *when* to call the next ball.

use tracing::{info, warn};

use crate::ball::BallId;
use crate::caller_mode::CallerMode;
use crate::config::Config;
use crate::engine::DrawEngine;
use crate::error::BingoError;
use crate::prompt::PromptFormatter;
use crate::speech::{SpeechSink, announce};

/// A ball that has just been called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalledBall {
    pub ball: BallId,
    /// The announcement text for the round's caller mode.
    pub prompt: String,
    /// Balls still in the pool after this call.
    pub remaining: usize,
}

/// Callback for call events.
pub type CallCallback = Box<dyn Fn(CallEvent) + Send + Sync>;

/// Events emitted while calling a round.
#[derive(Debug, Clone)]
pub enum CallEvent {
    /// A new round has started.
    RoundStarted { mode: CallerMode },
    /// A ball was drawn and announced.
    BallCalled(CalledBall),
    /// The last ball of the round has been called.
    RoundComplete,
}

/// Runs rounds of calls.
pub struct Caller {
    engine: DrawEngine,
    formatter: PromptFormatter,
    speech: Box<dyn SpeechSink>,
    callback: Option<CallCallback>,
}

impl Caller {
    pub fn new(engine: DrawEngine, formatter: PromptFormatter, speech: Box<dyn SpeechSink>) -> Self {
        Self {
            engine,
            formatter,
            speech,
            callback: None,
        }
    }

    /// Build a caller from configuration.
    ///
    /// With a seed, draws and phrase choices are both reproducible but come
    /// from separate streams.
    pub fn from_config(config: &Config, speech: Box<dyn SpeechSink>) -> Result<Self, BingoError> {
        config.validate()?;
        let seed = config.caller.seed;
        let mut engine = DrawEngine::with_seed(seed);
        engine.set_caller_mode(config.caller.mode)?;

        let formatter = PromptFormatter::with_seed(seed.map(|s| s.wrapping_add(1))).with_phrases(
            config.phrases.kid_friendly.clone(),
            config.phrases.pirate.clone(),
        );

        Ok(Self::new(engine, formatter, speech))
    }

    /// Set a callback for call events.
    pub fn with_callback(mut self, callback: CallCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Start a new round in the given mode, discarding any round in progress.
    pub fn start_round(&mut self, mode: CallerMode) {
        self.engine.start_round_with_mode(mode);
        self.emit_event(CallEvent::RoundStarted { mode });
    }

    /// Draw, format and announce the next ball.
    ///
    /// Returns `None` once every ball has been called. Speech failures are
    /// logged and otherwise ignored.
    pub fn call_next(&mut self) -> Option<CalledBall> {
        let ball = self.engine.draw_next()?;
        let prompt = self.formatter.prompt_for(ball, self.engine.caller_mode());
        let remaining = self.engine.remaining_count();

        info!(ball = %ball, remaining, "calling {}", prompt);
        announce(self.speech.as_mut(), &prompt);

        let called = CalledBall {
            ball,
            prompt,
            remaining,
        };
        self.emit_event(CallEvent::BallCalled(called.clone()));

        if remaining == 0 {
            self.emit_event(CallEvent::RoundComplete);
            self.end_round();
        }

        Some(called)
    }

    /// Let the speech sink wrap up the round (e.g. write a recording).
    ///
    /// Safe to call more than once; failures are logged, not returned.
    pub fn end_round(&mut self) {
        if let Err(e) = self.speech.finish_round() {
            warn!("speech backend failed to finish round: {}", e);
        }
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    pub fn mode(&self) -> CallerMode {
        self.engine.caller_mode()
    }

    pub fn remaining_count(&self) -> usize {
        self.engine.remaining_count()
    }

    /// Emit an event if a callback is registered.
    fn emit_event(&self, event: CallEvent) {
        if let Some(ref callback) = self.callback {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::SilentSpeaker;
    use std::sync::{Arc, Mutex};

    /// Records everything it is asked to say.
    #[derive(Clone, Default)]
    struct RecordingSpeaker {
        spoken: Arc<Mutex<Vec<String>>>,
        rounds_finished: Arc<Mutex<usize>>,
    }

    impl SpeechSink for RecordingSpeaker {
        fn speak(&mut self, text: &str) -> Result<(), BingoError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn finish_round(&mut self) -> Result<(), BingoError> {
            *self.rounds_finished.lock().unwrap() += 1;
            Ok(())
        }
    }

    struct BrokenSpeaker;

    impl SpeechSink for BrokenSpeaker {
        fn speak(&mut self, _text: &str) -> Result<(), BingoError> {
            Err(BingoError::SpeechError("offline".to_string()))
        }

        fn finish_round(&mut self) -> Result<(), BingoError> {
            Err(BingoError::SpeechError("offline".to_string()))
        }
    }

    fn seeded_caller(speech: Box<dyn SpeechSink>) -> Caller {
        Caller::new(
            DrawEngine::with_seed(Some(10)),
            PromptFormatter::with_seed(Some(11)),
            speech,
        )
    }

    #[test]
    fn test_call_next_announces_prompt() {
        let speaker = RecordingSpeaker::default();
        let mut caller = seeded_caller(Box::new(speaker.clone()));
        caller.start_round(CallerMode::Plain);

        let called = caller.call_next().unwrap();
        assert_eq!(called.remaining, 74);
        assert_eq!(called.prompt, crate::prompt::spoken_form(called.ball));
        assert_eq!(*speaker.spoken.lock().unwrap(), vec![called.prompt]);
    }

    #[test]
    fn test_full_round_finishes_once() {
        let speaker = RecordingSpeaker::default();
        let mut caller = seeded_caller(Box::new(speaker.clone()));
        caller.start_round(CallerMode::Traditional);

        let mut count = 0;
        while caller.call_next().is_some() {
            count += 1;
        }
        assert_eq!(count, 75);
        assert_eq!(speaker.spoken.lock().unwrap().len(), 75);
        assert_eq!(*speaker.rounds_finished.lock().unwrap(), 1);
        assert!(caller.call_next().is_none());
        assert_eq!(*speaker.rounds_finished.lock().unwrap(), 1);
    }

    #[test]
    fn test_speech_failure_does_not_affect_round() {
        let mut caller = seeded_caller(Box::new(BrokenSpeaker));
        caller.start_round(CallerMode::KidFriendly);

        for n in 1..=75 {
            let called = caller.call_next().unwrap();
            assert_eq!(called.remaining, 75 - n);
        }
        assert_eq!(caller.engine().called_count(), 75);
    }

    #[test]
    fn test_events_emitted_in_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut caller = seeded_caller(Box::new(SilentSpeaker)).with_callback(Box::new(
            move |event| {
                let label = match event {
                    CallEvent::RoundStarted { .. } => "start",
                    CallEvent::BallCalled(_) => "ball",
                    CallEvent::RoundComplete => "complete",
                };
                sink.lock().unwrap().push(label);
            },
        ));

        caller.start_round(CallerMode::Plain);
        while caller.call_next().is_some() {}

        let events = events.lock().unwrap();
        assert_eq!(events.first(), Some(&"start"));
        assert_eq!(events.iter().filter(|e| **e == "ball").count(), 75);
        assert_eq!(events.last(), Some(&"complete"));
    }

    #[test]
    fn test_start_round_resets_and_sets_mode() {
        let mut caller = seeded_caller(Box::new(SilentSpeaker));
        caller.start_round(CallerMode::Plain);
        caller.call_next();
        caller.start_round(CallerMode::Pirate);

        assert_eq!(caller.mode(), CallerMode::Pirate);
        assert_eq!(caller.remaining_count(), 75);
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = Config::from_str("[caller]\nmode = \"traditional\"\nseed = 7\n").unwrap();
        let mut a = Caller::from_config(&config, Box::new(SilentSpeaker)).unwrap();
        let mut b = Caller::from_config(&config, Box::new(SilentSpeaker)).unwrap();
        assert_eq!(a.mode(), CallerMode::Traditional);

        for _ in 0..10 {
            assert_eq!(a.call_next(), b.call_next());
        }
    }
}
