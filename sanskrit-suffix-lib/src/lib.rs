pub mod types;
pub mod error;
pub mod registry;
pub mod analyzer;
pub mod output;
pub mod shell;

pub use analyzer::{analyze, analyze_detailed, find_best_match};
pub use error::{Error, Result};
pub use registry::{RegistryConfig, SuffixRegistry};
pub use shell::Shell;
pub use types::{Analysis, AnalysisOutcome, DetailedAnalysis, SuffixEntry, NO_STEM};
