//! Speech output for announced calls.
//!
//! A [`SpeechSink`] takes the finished prompt text. Sinks may fail, but a
//! failure must never reach the draw engine: [`announce`] logs and drops it.

use kokoro_tiny::TtsEngine;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::BingoError;

/// Output sample rate of kokoro-tiny.
pub const SAMPLE_RATE: u32 = 24_000;

/// Silence between recorded calls, in seconds.
const CALL_GAP_SECONDS: f32 = 0.75;

/// Something that can say a prompt out loud.
pub trait SpeechSink {
    /// Speak (or record) one prompt.
    fn speak(&mut self, text: &str) -> Result<(), BingoError>;

    /// Called once when a round ends.
    fn finish_round(&mut self) -> Result<(), BingoError> {
        Ok(())
    }
}

/// Speak `text`, logging and discarding any failure.
pub fn announce(sink: &mut dyn SpeechSink, text: &str) {
    if let Err(e) = sink.speak(text) {
        warn!("speech failed for '{}': {}", text, e);
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct SilentSpeaker;

impl SpeechSink for SilentSpeaker {
    fn speak(&mut self, _text: &str) -> Result<(), BingoError> {
        Ok(())
    }
}

/// Runs an external TTS program with the prompt as its last argument.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl SpeechSink for CommandSpeaker {
    fn speak(&mut self, text: &str) -> Result<(), BingoError> {
        debug!(program = %self.program, "speaking via command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .status()
            .map_err(|e| {
                BingoError::SpeechError(format!("Failed to run '{}': {}", self.program, e))
            })?;

        if !status.success() {
            return Err(BingoError::SpeechError(format!(
                "'{}' exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Synthesizes calls with kokoro-tiny and records the round to a WAV file.
pub struct KokoroRecorder {
    engine: TtsEngine,
    voice: String,
    rate: f32,
    record_path: Option<PathBuf>,
    segments: Vec<Vec<f32>>,
    rounds_written: u32,
}

impl KokoroRecorder {
    /// Initialize the TTS engine (downloads model on first run).
    pub async fn new(
        voice: impl Into<String>,
        rate: f32,
        record_path: Option<PathBuf>,
    ) -> Result<Self, BingoError> {
        let engine = TtsEngine::new()
            .await
            .map_err(|e| BingoError::SpeechError(format!("Failed to initialize TTS: {}", e)))?;

        let recorder = Self {
            engine,
            voice: voice.into(),
            rate,
            record_path,
            segments: Vec::new(),
            rounds_written: 0,
        };
        validate_voice(&recorder.engine.voices(), &recorder.voice)?;
        Ok(recorder)
    }
}

/// English voices kokoro offers, without checking any configured voice.
pub async fn available_english_voices() -> Result<Vec<String>, BingoError> {
    let engine = TtsEngine::new()
        .await
        .map_err(|e| BingoError::SpeechError(format!("Failed to initialize TTS: {}", e)))?;
    Ok(english_voices(&engine.voices()))
}

impl SpeechSink for KokoroRecorder {
    fn speak(&mut self, text: &str) -> Result<(), BingoError> {
        let samples = self
            .engine
            .synthesize(text, Some(self.voice.as_str()))
            .map_err(|e| BingoError::SpeechError(format!("Synthesis failed: {}", e)))?;

        self.segments.push(adjust_audio_speed(samples, self.rate));
        Ok(())
    }

    fn finish_round(&mut self) -> Result<(), BingoError> {
        let segments = std::mem::take(&mut self.segments);
        let Some(base) = self.record_path.as_ref() else {
            return Ok(());
        };
        if segments.is_empty() {
            return Ok(());
        }

        self.rounds_written += 1;
        let path = recording_path(base, self.rounds_written);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let combined = combine_audio_segments(segments, CALL_GAP_SECONDS, SAMPLE_RATE);
        write_wav(&path, &combined, SAMPLE_RATE)?;
        debug!(path = %path.display(), "round recording written");
        Ok(())
    }
}

/// Check a voice id against the engine's list.
pub fn validate_voice(available: &[String], voice_id: &str) -> Result<(), BingoError> {
    if voice_id.is_empty() {
        return Err(BingoError::SpeechError(format!(
            "Voice ID cannot be empty. Available voices:\n{}",
            format_voice_list(available)
        )));
    }

    if !available.iter().any(|v| v == voice_id) {
        return Err(BingoError::SpeechError(format!(
            "Unknown voice '{}'. Available voices:\n{}",
            voice_id,
            format_voice_list(available)
        )));
    }

    Ok(())
}

/// kokoro voice ids with an English prefix (`af_`, `am_`, `bf_`, `bm_`), sorted.
pub fn english_voices(available: &[String]) -> Vec<String> {
    let mut voices: Vec<String> = available
        .iter()
        .filter(|v| ["af_", "am_", "bf_", "bm_"].iter().any(|p| v.starts_with(p)))
        .cloned()
        .collect();
    voices.sort();
    voices
}

fn format_voice_list(available: &[String]) -> String {
    english_voices(available)
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Path of the recording for a given round: the base path for round 1,
/// `<stem>-<round>.<ext>` after that.
pub fn recording_path(base: &Path, round: u32) -> PathBuf {
    if round <= 1 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "round".to_string());
    let file_name = match base.extension() {
        Some(ext) => format!("{}-{}.{}", stem, round, ext.to_string_lossy()),
        None => format!("{}-{}", stem, round),
    };
    base.with_file_name(file_name)
}

/// Adjust audio playback speed using linear interpolation.
/// Rate < 1.0 = slower, rate > 1.0 = faster.
pub fn adjust_audio_speed(samples: Vec<f32>, rate: f32) -> Vec<f32> {
    if (rate - 1.0).abs() < 0.001 || rate <= 0.0 {
        return samples;
    }

    let new_len = (samples.len() as f32 / rate) as usize;
    let mut result = Vec::with_capacity(new_len);

    for i in 0..new_len {
        let src_pos = i as f32 * rate;
        let src_idx = src_pos as usize;
        let frac = src_pos - src_idx as f32;

        if src_idx + 1 < samples.len() {
            result.push(samples[src_idx] * (1.0 - frac) + samples[src_idx + 1] * frac);
        } else if src_idx < samples.len() {
            result.push(samples[src_idx]);
        }
    }

    result
}

/// Join segments with a silence gap between each pair.
pub fn combine_audio_segments(
    segments: Vec<Vec<f32>>,
    gap_seconds: f32,
    sample_rate: u32,
) -> Vec<f32> {
    let gap_samples = (gap_seconds * sample_rate as f32) as usize;
    let mut combined = Vec::new();

    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            combined.resize(combined.len() + gap_samples, 0.0);
        }
        combined.extend(segment);
    }

    combined
}

/// Write mono 32-bit float samples to a WAV file.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), BingoError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let to_speech_error =
        |e: hound::Error| BingoError::SpeechError(format!("Failed to write WAV: {}", e));

    let mut writer = hound::WavWriter::create(path, spec).map_err(to_speech_error)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(to_speech_error)?;
    }
    writer.finalize().map_err(to_speech_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSpeaker;

    impl SpeechSink for FailingSpeaker {
        fn speak(&mut self, _text: &str) -> Result<(), BingoError> {
            Err(BingoError::SpeechError("no audio device".to_string()))
        }
    }

    #[test]
    fn test_announce_swallows_errors() {
        let mut sink = FailingSpeaker;
        announce(&mut sink, "B-one");
    }

    #[test]
    fn test_command_speaker_missing_program() {
        let mut sink = CommandSpeaker::new("definitely-not-a-tts-program", Vec::new());
        let err = sink.speak("B-one").unwrap_err();
        assert!(matches!(err, BingoError::SpeechError(_)));
    }

    #[test]
    fn test_validate_voice() {
        let voices = vec!["af_sky".to_string(), "bm_george".to_string(), "jf_x".to_string()];
        assert!(validate_voice(&voices, "af_sky").is_ok());
        assert!(validate_voice(&voices, "").is_err());

        let err = validate_voice(&voices, "zz_none").unwrap_err().to_string();
        assert!(err.contains("Unknown voice 'zz_none'"));
        assert!(err.contains("  - bm_george"));
        assert!(!err.contains("jf_x"));
    }

    #[test]
    fn test_english_voices_sorted() {
        let voices = vec!["bm_george".to_string(), "zf_x".to_string(), "af_sky".to_string()];
        assert_eq!(english_voices(&voices), vec!["af_sky", "bm_george"]);
    }

    #[test]
    fn test_recording_path() {
        let base = Path::new("/tmp/calls.wav");
        assert_eq!(recording_path(base, 1), PathBuf::from("/tmp/calls.wav"));
        assert_eq!(recording_path(base, 3), PathBuf::from("/tmp/calls-3.wav"));
        assert_eq!(
            recording_path(Path::new("/tmp/calls"), 2),
            PathBuf::from("/tmp/calls-2")
        );
    }

    #[test]
    fn test_combine_audio_segments() {
        let combined = combine_audio_segments(vec![vec![1.0, 1.0], vec![2.0, 2.0]], 0.1, 10);
        assert_eq!(combined, vec![1.0, 1.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn test_adjust_audio_speed() {
        let samples = vec![0.0; 100];
        assert_eq!(adjust_audio_speed(samples.clone(), 1.0).len(), 100);
        assert_eq!(adjust_audio_speed(samples.clone(), 2.0).len(), 50);
        assert_eq!(adjust_audio_speed(samples, 0.5).len(), 200);
    }

    #[test]
    fn test_write_wav_roundtrip() {
        let path = std::env::temp_dir().join(format!("bingocaller-test-{}.wav", std::process::id()));
        write_wav(&path, &[0.0, 0.5, -0.5], SAMPLE_RATE).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
        assert_eq!(reader.len(), 3);
        std::fs::remove_file(&path).ok();
    }
}
