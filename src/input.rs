// ⌨️ Input/Validation - Console prompts and input checks
// Reads principal, time, rate and menu choices; rejects bad input.

use crate::engine::{CalculationMode, CompoundFrequency, InterestInputs};
use crate::error::{CalculatorError, Field, Result};
use std::io::{BufRead, Write};

// ============================================================================
// PARSING & VALIDATION
// ============================================================================

/// Parse one numeric answer. Surrounding whitespace is ignored.
pub fn parse_number(field: Field, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| CalculatorError::InvalidNumber {
        field,
        input: trimmed.to_string(),
    })
}

/// All three values must be strictly greater than zero. NaN is rejected too.
pub fn validate_inputs(principal: f64, time: f64, rate: f64) -> Result<InterestInputs> {
    for (field, value) in [
        (Field::Principal, principal),
        (Field::Time, time),
        (Field::Rate, rate),
    ] {
        if !(value > 0.0) {
            return Err(CalculatorError::NonPositiveValue { field, value });
        }
    }

    Ok(InterestInputs { principal, time, rate })
}

/// Menu choice for the calculation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChoice {
    Simple,
    Compound,
}

/// "1" = simple, "2" = compound; anything else ends the run
pub fn parse_mode(raw: &str) -> Result<ModeChoice> {
    match raw.trim() {
        "1" => Ok(ModeChoice::Simple),
        "2" => Ok(ModeChoice::Compound),
        other => Err(CalculatorError::InvalidModeSelection(other.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencySelection {
    pub frequency: CompoundFrequency,
    /// True when the choice was unrecognized and annual was used instead
    pub fell_back: bool,
}

/// Unlike `parse_mode`, an unknown choice is not an error: it falls back
/// to annual compounding and the caller prints a notice.
pub fn parse_frequency(raw: &str) -> FrequencySelection {
    match CompoundFrequency::from_menu_choice(raw.trim()) {
        Some(frequency) => FrequencySelection {
            frequency,
            fell_back: false,
        },
        None => FrequencySelection {
            frequency: CompoundFrequency::default(),
            fell_back: true,
        },
    }
}

impl From<FrequencySelection> for CalculationMode {
    fn from(selection: FrequencySelection) -> Self {
        CalculationMode::Compound {
            frequency: selection.frequency,
        }
    }
}

// ============================================================================
// PROMPTER
// ============================================================================

pub const FREQUENCY_FALLBACK_NOTICE: &str = "提示：无效的复利频率选择，默认按年复利计算";

/// Line-oriented prompts over any reader/writer pair (stdin/stdout in the binary)
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print `prompt` without a newline, then read one line
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(CalculatorError::UnexpectedEof);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_number(&mut self, field: Field) -> Result<f64> {
        let answer = self.ask(field.prompt())?;
        parse_number(field, &answer)
    }

    /// Ask principal, time and rate in order, then check positivity.
    /// A parse failure stops before the remaining prompts are shown.
    pub fn ask_inputs(&mut self) -> Result<InterestInputs> {
        let principal = self.ask_number(Field::Principal)?;
        let time = self.ask_number(Field::Time)?;
        let rate = self.ask_number(Field::Rate)?;

        validate_inputs(principal, time, rate)
    }

    pub fn ask_mode(&mut self) -> Result<ModeChoice> {
        writeln!(self.writer, "\n请选择计算方式：")?;
        writeln!(self.writer, "1. 单利")?;
        writeln!(self.writer, "2. 复利")?;
        let answer = self.ask("请选择（1/2）: ")?;
        parse_mode(&answer)
    }

    pub fn ask_frequency(&mut self) -> Result<FrequencySelection> {
        writeln!(self.writer, "\n请选择复利频率：")?;
        for (i, freq) in CompoundFrequency::ALL.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. {}（{} 次/年）",
                i + 1,
                freq.label(),
                freq.periods_per_year()
            )?;
        }
        let answer = self.ask("请选择（1-5）: ")?;

        let selection = parse_frequency(&answer);
        if selection.fell_back {
            tracing::warn!(choice = %answer.trim(), "unknown frequency choice, using annual");
            writeln!(self.writer, "{}", FREQUENCY_FALLBACK_NOTICE)?;
        }

        Ok(selection)
    }
}

// ============================================================================
// TESTS
// ============================================================================
