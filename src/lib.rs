pub mod config;
pub mod engine;
pub mod error;
pub mod genome;
pub mod operators;
pub mod progress;

pub use config::EvolutionConfig;
pub use engine::{run, EvolutionEngine, SearchOutcome};
pub use error::{EvolutionError, Result};
pub use genome::Genome;
pub use progress::{ConsoleProgressCallback, ProgressCallback, SilentProgressCallback};
