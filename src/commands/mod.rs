//! Command implementations

pub mod prompt;
pub mod trials;

pub use prompt::PromptAssessor;
pub use trials::{
    SecretSource, TrialConfig, TrialObserver, TrialResult, TrialSummary, run_trials,
};
