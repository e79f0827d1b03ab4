// Interest Calculator - Core Library
// Simple and compound interest from principal, time and rate.

pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod session;
pub mod cli;

// Re-export commonly used types
pub use engine::{
    CalculationMode, CompoundFrequency, InterestInputs, InterestReport, InterestResult,
    SimpleComparison,
    simple_interest, compound_interest, continuous_interest,
};
pub use error::{CalculatorError, Field};
pub use input::{
    FrequencySelection, ModeChoice, Prompter,
    parse_number, validate_inputs, parse_mode, parse_frequency,
};
pub use report::{format_report, format_report_json};
pub use session::{OutputFormat, SessionOptions, SessionOutcome, run_session};
pub use cli::{CliConfig, init_logging};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
