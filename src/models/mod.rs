pub mod comment;
pub mod exercise;
pub mod loaders;
pub mod params;
pub mod report;
pub mod submission;
pub mod verdict;

pub use comment::{templates, Comment};
pub use exercise::{ExerciseConfig, ExerciseConfigEntry};
pub use loaders::load_exercise_config;
pub use params::{Options, RunParams};
pub use report::Report;
pub use submission::{Stage, Submission};
pub use verdict::{FinalVerdict, Verdict};
