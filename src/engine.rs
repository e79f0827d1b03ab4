// 💰 Interest Engine - Pure interest calculations
//
// Simple:   interest = principal × (rate / 100) × time
// Compound: final    = principal × (1 + (rate / 100) / n) ^ (n × time)
//           interest = final − principal
//
// Inputs are assumed already validated as strictly positive.
// No rounding happens here; two decimals is a display concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// COMPOUND FREQUENCY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompoundFrequency {
    #[default]
    Annual,
    SemiAnnual,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundFrequency {
    /// Menu order, matching choices "1" through "5"
    pub const ALL: [CompoundFrequency; 5] = [
        CompoundFrequency::Annual,
        CompoundFrequency::SemiAnnual,
        CompoundFrequency::Quarterly,
        CompoundFrequency::Monthly,
        CompoundFrequency::Daily,
    ];

    /// Number of compounding events per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundFrequency::Annual => 1,
            CompoundFrequency::SemiAnnual => 2,
            CompoundFrequency::Quarterly => 4,
            CompoundFrequency::Monthly => 12,
            CompoundFrequency::Daily => 365,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CompoundFrequency::Annual => "每年",
            CompoundFrequency::SemiAnnual => "每半年",
            CompoundFrequency::Quarterly => "每季度",
            CompoundFrequency::Monthly => "每月",
            CompoundFrequency::Daily => "每日",
        }
    }

    /// Map a menu choice ("1".."5") to a frequency
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(CompoundFrequency::Annual),
            "2" => Some(CompoundFrequency::SemiAnnual),
            "3" => Some(CompoundFrequency::Quarterly),
            "4" => Some(CompoundFrequency::Monthly),
            "5" => Some(CompoundFrequency::Daily),
            _ => None,
        }
    }
}

// ============================================================================
// INPUTS & RESULTS
// ============================================================================

/// Validated inputs for one calculation (see `input::validate_inputs`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestInputs {
    /// Currency units
    pub principal: f64,
    /// Years
    pub time: f64,
    /// Annual rate in percent (5.0 means 5%)
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub interest: f64,
    pub final_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculationMode {
    Simple,
    Compound { frequency: CompoundFrequency },
}

impl CalculationMode {
    pub fn label(&self) -> &str {
        match self {
            CalculationMode::Simple => "单利",
            CalculationMode::Compound { .. } => "复利",
        }
    }
}

/// Compound vs. simple interest for the same inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleComparison {
    pub simple_interest: f64,
    /// compound interest − simple interest
    pub difference: f64,
}

// ============================================================================
// CORE FORMULAS
// ============================================================================

pub fn simple_interest(principal: f64, time: f64, rate_percent: f64) -> f64 {
    let rate_decimal = rate_percent / 100.0;
    principal * rate_decimal * time
}

pub fn compound_interest(
    principal: f64,
    time: f64,
    rate_percent: f64,
    frequency: CompoundFrequency,
) -> InterestResult {
    let n = frequency.periods_per_year() as f64;
    let rate_decimal = rate_percent / 100.0;
    let final_amount = principal * (1.0 + rate_decimal / n).powf(n * time);

    InterestResult {
        interest: final_amount - principal,
        final_amount,
    }
}

/// Interest under continuous compounding: principal × (e^(rate × time) − 1).
/// The limit that `compound_interest` approaches as frequency grows.
pub fn continuous_interest(principal: f64, time: f64, rate_percent: f64) -> f64 {
    principal * ((rate_percent / 100.0 * time).exp() - 1.0)
}

// ============================================================================
// INTEREST REPORT
// ============================================================================

/// Everything one run computes, ready for display or JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestReport {
    pub inputs: InterestInputs,
    pub calculation: CalculationMode,
    pub result: InterestResult,
    /// Present only for compound calculations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<SimpleComparison>,
    pub calculated_at: DateTime<Utc>,
}

impl InterestReport {
    pub fn calculate(inputs: InterestInputs, calculation: CalculationMode) -> Self {
        let InterestInputs { principal, time, rate } = inputs;
        let simple = simple_interest(principal, time, rate);

        let (result, comparison) = match calculation {
            CalculationMode::Simple => (
                InterestResult {
                    interest: simple,
                    final_amount: principal + simple,
                },
                None,
            ),
            CalculationMode::Compound { frequency } => {
                let result = compound_interest(principal, time, rate, frequency);
                let comparison = SimpleComparison {
                    simple_interest: simple,
                    difference: result.interest - simple,
                };
                (result, Some(comparison))
            }
        };

        tracing::debug!(
            mode = calculation.label(),
            interest = result.interest,
            final_amount = result.final_amount,
            "interest calculated"
        );

        InterestReport {
            inputs,
            calculation,
            result,
            comparison,
            calculated_at: Utc::now(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample_inputs() -> Vec<(f64, f64, f64)> {
        vec![
            (1000.0, 2.0, 5.0),
            (1.0, 1.0, 0.01),
            (250_000.0, 30.0, 3.75),
            (99.99, 0.5, 12.0),
            (5000.0, 10.0, 100.0),
        ]
    }

    #[test]
    fn test_simple_interest_formula() {
        for (p, t, r) in sample_inputs() {
            let expected = p * (r / 100.0) * t;
            assert!((simple_interest(p, t, r) - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_compound_interest_formula() {
        for (p, t, r) in sample_inputs() {
            for freq in CompoundFrequency::ALL {
                let n = freq.periods_per_year() as f64;
                let expected_final = p * (1.0 + (r / 100.0) / n).powf(n * t);
                let result = compound_interest(p, t, r, freq);

                let tolerance = EPS * expected_final.max(1.0);
                assert!((result.final_amount - expected_final).abs() < tolerance);
                assert!((result.interest - (result.final_amount - p)).abs() < tolerance);
            }
        }
    }

    #[test]
    fn test_compound_not_below_simple_for_whole_periods() {
        // Holds whenever n × time >= 1 (Bernoulli's inequality)
        for (p, t, r) in sample_inputs() {
            for freq in CompoundFrequency::ALL {
                if freq.periods_per_year() as f64 * t < 1.0 {
                    continue;
                }
                let compound = compound_interest(p, t, r, freq).interest;
                let simple = simple_interest(p, t, r);
                assert!(compound >= simple - EPS, "{:?} {} {} {}", freq, p, t, r);
            }
        }
    }

    #[test]
    fn test_compound_below_simple_for_partial_year_annual() {
        // A half year compounded annually earns less than simple interest
        let compound = compound_interest(1000.0, 0.5, 5.0, CompoundFrequency::Annual).interest;
        let simple = simple_interest(1000.0, 0.5, 5.0);
        assert!(compound < simple);
    }

    #[test]
    fn test_daily_closer_to_continuous_than_annual() {
        for (p, t, r) in sample_inputs() {
            if t < 1.0 {
                continue;
            }
            let continuous = continuous_interest(p, t, r);
            let daily = compound_interest(p, t, r, CompoundFrequency::Daily).interest;
            let annual = compound_interest(p, t, r, CompoundFrequency::Annual).interest;

            assert!((continuous - daily).abs() <= (continuous - annual).abs());
        }
    }

    #[test]
    fn test_example_simple() {
        let interest = simple_interest(1000.0, 2.0, 5.0);
        assert!((interest - 100.0).abs() < EPS);
        assert!((1000.0 + interest - 1100.0).abs() < EPS);
    }

    #[test]
    fn test_example_annual_compound() {
        let result = compound_interest(1000.0, 1.0, 5.0, CompoundFrequency::Annual);
        assert!((result.interest - 50.0).abs() < EPS);
        assert!((result.final_amount - 1050.0).abs() < EPS);
    }

    #[test]
    fn test_example_monthly_compound() {
        let result = compound_interest(1000.0, 1.0, 5.0, CompoundFrequency::Monthly);
        assert_eq!(format!("{:.2}", result.final_amount), "1051.16");
        assert_eq!(format!("{:.2}", result.interest), "51.16");
    }

    #[test]
    fn test_frequency_menu_mapping() {
        let periods: Vec<u32> = ["1", "2", "3", "4", "5"]
            .iter()
            .map(|c| CompoundFrequency::from_menu_choice(c).unwrap().periods_per_year())
            .collect();
        assert_eq!(periods, vec![1, 2, 4, 12, 365]);

        assert_eq!(CompoundFrequency::from_menu_choice("9"), None);
        assert_eq!(CompoundFrequency::from_menu_choice(""), None);
        assert_eq!(CompoundFrequency::default(), CompoundFrequency::Annual);
    }

    #[test]
    fn test_report_simple_has_no_comparison() {
        let inputs = InterestInputs { principal: 1000.0, time: 2.0, rate: 5.0 };
        let report = InterestReport::calculate(inputs, CalculationMode::Simple);

        assert!((report.result.interest - 100.0).abs() < EPS);
        assert!((report.result.final_amount - 1100.0).abs() < EPS);
        assert!(report.comparison.is_none());
    }

    #[test]
    fn test_report_compound_comparison() {
        let inputs = InterestInputs { principal: 1000.0, time: 1.0, rate: 5.0 };
        let report = InterestReport::calculate(
            inputs,
            CalculationMode::Compound { frequency: CompoundFrequency::Monthly },
        );

        let comparison = report.comparison.expect("compound report carries comparison");
        assert!((comparison.simple_interest - 50.0).abs() < EPS);
        assert!((comparison.difference - (report.result.interest - 50.0)).abs() < EPS);
        assert!(comparison.difference > 0.0);

        println!("✅ Monthly compounding beats simple by {:.2}", comparison.difference);
    }
}
