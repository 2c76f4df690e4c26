//! Conversational Session Module
//!
//! Glue between user text and the engine. The engine only ever sees vectors
//! and a feedback scalar; everything here — word learning, the tone keyword
//! scan, profile notes — is plain I/O and string matching layered on top.

pub mod codec;
mod profile;
mod vocabulary;

pub use profile::UserProfile;
pub use vocabulary::Vocabulary;

use std::path::PathBuf;

use log::info;

use crate::config::EngineConfig;
use crate::engine::Model;
use crate::error::Result;

/// Feedback scalar for positively toned input.
const POSITIVE_FEEDBACK: f32 = 1.0;

/// Feedback scalar for negatively toned input.
const NEGATIVE_FEEDBACK: f32 = -0.5;

/// Feedback scalar when no tone keyword matches.
const NEUTRAL_FEEDBACK: f32 = 0.1;

/// Tone detected in user input by keyword scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Scalar handed to [`Model::adjust`] for this tone.
    pub fn feedback(self) -> f32 {
        match self {
            Tone::Positive => POSITIVE_FEEDBACK,
            Tone::Negative => NEGATIVE_FEEDBACK,
            Tone::Neutral => NEUTRAL_FEEDBACK,
        }
    }

    /// Canned remark echoed alongside the engine output.
    pub fn remark(self) -> &'static str {
        match self {
            Tone::Positive => "Glad to hear you're happy!",
            Tone::Negative => "That sounds a little sad, but I'm here to help.",
            Tone::Neutral => "I'm learning from what you say. Let me think...",
        }
    }
}

/// Scan `text` for tone keywords.
pub fn detect_tone(text: &str) -> Tone {
    let lower = text.to_lowercase();
    if lower.contains("sad") {
        Tone::Negative
    } else if lower.contains("happy") {
        Tone::Positive
    } else {
        Tone::Neutral
    }
}

/// File locations for everything a session persists.
#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub state: PathBuf,
    pub vocabulary: PathBuf,
    pub profile: PathBuf,
}

impl Default for SessionPaths {
    fn default() -> Self {
        Self {
            state: PathBuf::from("model_state.bin"),
            vocabulary: PathBuf::from("vocabulary.txt"),
            profile: PathBuf::from("user_profile.txt"),
        }
    }
}

impl SessionPaths {
    /// Place all session files inside `dir`, keeping the default names.
    pub fn in_dir(dir: &std::path::Path) -> Self {
        Self {
            state: dir.join("model_state.bin"),
            vocabulary: dir.join("vocabulary.txt"),
            profile: dir.join("user_profile.txt"),
        }
    }
}

/// One reply from the session.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Best-effort decode of the engine output.
    pub text: String,
    /// Canned remark matching the detected tone.
    pub remark: &'static str,
    /// Words newly added to the vocabulary by this input.
    pub learned: Vec<String>,
    /// Feedback scalar that was applied to the model.
    pub feedback: f32,
}

/// A conversational session driving one model.
///
/// Each interaction runs learn → encode → process → decode → adjust and
/// records a profile note; [`Session::shutdown`] persists the model state
/// and both stores.
pub struct Session {
    model: Model,
    vocabulary: Vocabulary,
    profile: UserProfile,
    paths: SessionPaths,
}

impl Session {
    /// Open a session: build a fresh model and load the stores.
    pub fn open(
        layer_count: usize,
        sub_layer_count: usize,
        config: &EngineConfig,
        paths: SessionPaths,
    ) -> Result<Self> {
        let model = Model::with_config(layer_count, sub_layer_count, config)?;
        let vocabulary = Vocabulary::load(&paths.vocabulary)?;
        let profile = UserProfile::load(&paths.profile)?;

        info!(
            "Session opened: {} vocabulary words known",
            vocabulary.len()
        );
        Ok(Self {
            model,
            vocabulary,
            profile,
            paths,
        })
    }

    /// Run one interaction through the engine.
    pub fn respond(&mut self, input: &str) -> Result<Reply> {
        let learned = self.vocabulary.learn(input);

        let encoded = codec::encode(input, self.model.dimension());
        let output = self.model.process(&encoded)?;
        let text = codec::decode(&output, input.chars().count());

        let tone = detect_tone(input);
        let feedback = tone.feedback();
        self.model.adjust(feedback);
        self.profile.record(input);

        Ok(Reply {
            text,
            remark: tone.remark(),
            learned,
            feedback,
        })
    }

    /// Persist model state, vocabulary, and profile.
    pub fn shutdown(&self) -> Result<()> {
        self.model.save_state(&self.paths.state)?;
        self.vocabulary.save(&self.paths.vocabulary)?;
        self.profile.save(&self.paths.profile)?;
        info!("Session persisted");
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_config() -> EngineConfig {
        EngineConfig::default().with_dimension(8).with_seed(5)
    }

    #[test]
    fn test_detect_tone_keywords() {
        assert_eq!(detect_tone("I feel sad today"), Tone::Negative);
        assert_eq!(detect_tone("so happy right now"), Tone::Positive);
        assert_eq!(detect_tone("tell me about rust"), Tone::Neutral);
        // "sad" wins when both keywords appear, matching scan order.
        assert_eq!(detect_tone("happy and sad"), Tone::Negative);
    }

    #[test]
    fn test_respond_learns_and_adjusts() {
        let dir = tempdir().unwrap();
        let paths = SessionPaths::in_dir(dir.path());
        let mut session = Session::open(2, 2, &test_config(), paths).unwrap();

        let reply = session.respond("hello world").unwrap();
        assert_eq!(reply.learned, vec!["hello", "world"]);
        assert_eq!(reply.feedback, NEUTRAL_FEEDBACK);

        // Second occurrence learns nothing new.
        let reply = session.respond("hello again").unwrap();
        assert_eq!(reply.learned, vec!["again"]);
    }

    #[test]
    fn test_respond_applies_tone_feedback() {
        let dir = tempdir().unwrap();
        let paths = SessionPaths::in_dir(dir.path());
        let mut session = Session::open(1, 2, &test_config(), paths).unwrap();

        let reply = session.respond("I am happy").unwrap();
        assert_eq!(reply.feedback, POSITIVE_FEEDBACK);
        let reply = session.respond("I am sad").unwrap();
        assert_eq!(reply.feedback, NEGATIVE_FEEDBACK);
    }

    #[test]
    fn test_shutdown_persists_everything() {
        let dir = tempdir().unwrap();
        let paths = SessionPaths::in_dir(dir.path());
        let mut session = Session::open(2, 3, &test_config(), paths.clone()).unwrap();
        session.respond("remember me").unwrap();
        session.shutdown().unwrap();

        assert!(paths.state.exists());
        let vocabulary = Vocabulary::load(&paths.vocabulary).unwrap();
        assert!(vocabulary.contains("remember"));
        let profile = UserProfile::load(&paths.profile).unwrap();
        assert!(profile.text().contains("User said: remember me"));

        let shape = crate::state::load_shape(&paths.state).unwrap();
        assert_eq!(shape.layer_count, 2);
        assert_eq!(shape.sub_layer_count, 3);
    }
}
