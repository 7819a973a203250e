pub mod exercise_loader;

pub use exercise_loader::load_exercise_config;
