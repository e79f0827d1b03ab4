// 🔁 Calculator Session - One interactive run
//
// Input/Validation → Interest Engine → formatted output.
// Every error ends the run; the user restarts the program to try again.

use crate::engine::{CalculationMode, InterestReport};
use crate::error::{CalculatorError, Result};
use crate::input::{ModeChoice, Prompter};
use crate::report::{format_report, format_report_json};
use std::io::{BufRead, Write};

// ============================================================================
// OPTIONS & OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub output: OutputFormat,
}

#[derive(Debug)]
pub enum SessionOutcome {
    /// Calculation ran and the result was printed
    Completed(InterestReport),
    /// Run ended early; the error message was already printed
    Aborted(CalculatorError),
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionOutcome::Completed(_))
    }
}

// ============================================================================
// RUN
// ============================================================================

/// Run one calculator session. Input errors are reported to `writer` and
/// returned as `Aborted`; only a failure to write that report escapes.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    options: SessionOptions,
) -> anyhow::Result<SessionOutcome> {
    let mut prompter = Prompter::new(reader, writer);

    match drive(&mut prompter, options) {
        Ok(report) => Ok(SessionOutcome::Completed(report)),
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = ?err, "run aborted");
            let out = prompter.writer();
            writeln!(out, "{}", err)?;
            out.flush()?;
            Ok(SessionOutcome::Aborted(err))
        }
    }
}

fn drive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: SessionOptions,
) -> Result<InterestReport> {
    writeln!(prompter.writer(), "=== 利息计算器 ===")?;
    writeln!(prompter.writer(), "请输入以下信息：")?;

    let inputs = prompter.ask_inputs()?;
    tracing::debug!(
        principal = inputs.principal,
        time = inputs.time,
        rate = inputs.rate,
        "inputs validated"
    );

    let calculation = match prompter.ask_mode()? {
        ModeChoice::Simple => CalculationMode::Simple,
        ModeChoice::Compound => prompter.ask_frequency()?.into(),
    };
    tracing::info!(mode = calculation.label(), "calculation selected");

    let report = InterestReport::calculate(inputs, calculation);

    let rendered = match options.output {
        OutputFormat::Text => format_report(&report),
        OutputFormat::Json => format_report_json(&report)?,
    };

    let out = prompter.writer();
    writeln!(out, "\n{}", rendered)?;
    out.flush()?;

    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================
