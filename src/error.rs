// ❗ Error Taxonomy
// Every failure a calculator run can hit. Display text is what the user sees.

use std::fmt;
use std::io;

// ============================================================================
// INPUT FIELDS
// ============================================================================

/// The three numeric values a run asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    Time,
    Rate,
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Principal => "principal",
            Field::Time => "time",
            Field::Rate => "rate",
        }
    }

    /// Console prompt for this field
    pub fn prompt(&self) -> &str {
        match self {
            Field::Principal => "本金（元）: ",
            Field::Time => "时间（年）: ",
            Field::Rate => "年利率（%）: ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// CALCULATOR ERROR
// ============================================================================

/// All errors are terminal for the run; there is no retry loop.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("错误：请输入有效的数字")]
    InvalidNumber { field: Field, input: String },

    #[error("错误：所有输入值必须大于0")]
    NonPositiveValue { field: Field, value: f64 },

    #[error("错误：无效的计算方式选择")]
    InvalidModeSelection(String),

    #[error("发生错误: 输入已结束")]
    UnexpectedEof,

    #[error("发生错误: {0}")]
    Io(#[from] io::Error),

    #[error("发生错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalculatorError {
    /// Short machine-friendly tag, used in log events
    pub fn kind(&self) -> &str {
        match self {
            CalculatorError::InvalidNumber { .. } => "InvalidNumber",
            CalculatorError::NonPositiveValue { .. } => "NonPositiveValue",
            CalculatorError::InvalidModeSelection(_) => "InvalidModeSelection",
            CalculatorError::UnexpectedEof
            | CalculatorError::Io(_)
            | CalculatorError::Serialization(_) => "UnexpectedError",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
