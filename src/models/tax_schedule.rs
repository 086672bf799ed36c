//! Progressive income-tax brackets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};

/// One marginal-rate slice of a [`TaxSchedule`].
///
/// The slice runs from the previous bracket's threshold (or zero for the
/// first bracket) up to and including `threshold`. A `threshold` of `None`
/// means the slice has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of the slice; `None` for the top bracket.
    #[serde(default)]
    pub threshold: Option<Decimal>,
    /// Marginal rate as a fraction in `[0, 1)`.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bounded bracket.
    pub fn up_to(threshold: Decimal, rate: Decimal) -> Self {
        Self {
            threshold: Some(threshold),
            rate,
        }
    }

    /// Creates the unbounded top bracket.
    pub fn above(rate: Decimal) -> Self {
        Self {
            threshold: None,
            rate,
        }
    }
}

/// An ordered, validated set of tax brackets.
///
/// # Invariants
///
/// - at least one bracket
/// - bounded thresholds are positive and strictly increasing
/// - only the last bracket is unbounded, and it must be
/// - every rate lies in `[0, 1)`
///
/// # Example
///
/// ```
/// use fudget::models::{TaxBracket, TaxSchedule};
/// use rust_decimal::Decimal;
///
/// let schedule = TaxSchedule::new(
///     "flat above 10k",
///     vec![
///         TaxBracket::up_to(Decimal::new(10_000, 0), Decimal::ZERO),
///         TaxBracket::above(Decimal::new(20, 2)),
///     ],
/// )
/// .unwrap();
/// assert_eq!(schedule.brackets().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    name: String,
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Validates and creates a schedule.
    pub fn new(name: impl Into<String>, brackets: Vec<TaxBracket>) -> BudgetResult<Self> {
        if brackets.is_empty() {
            return Err(invalid("a schedule needs at least one bracket"));
        }

        let last = brackets.len() - 1;
        let mut previous = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {} has rate {} outside [0, 1)",
                    index, bracket.rate
                )));
            }

            match bracket.threshold {
                Some(threshold) if index == last => {
                    return Err(invalid(format!(
                        "top bracket must be unbounded, found threshold {}",
                        threshold
                    )));
                }
                Some(threshold) if threshold <= previous => {
                    return Err(invalid(format!(
                        "bracket {} threshold {} does not exceed {}",
                        index, threshold, previous
                    )));
                }
                Some(threshold) => previous = threshold,
                None if index != last => {
                    return Err(invalid(format!(
                        "bracket {} is unbounded but is not the top bracket",
                        index
                    )));
                }
                None => {}
            }
        }

        Ok(Self {
            name: name.into(),
            brackets,
        })
    }

    /// Australian resident income-tax rates for 2023-24.
    ///
    /// | Taxable income      | Marginal rate |
    /// |---------------------|---------------|
    /// | 0 – 18,200          | 0%            |
    /// | 18,201 – 45,000     | 19%           |
    /// | 45,001 – 120,000    | 32.5%         |
    /// | 120,001 – 180,000   | 37%           |
    /// | 180,001 and over    | 45%           |
    pub fn australian_resident_2023_24() -> Self {
        Self {
            name: "Australian resident 2023-24".to_string(),
            brackets: vec![
                TaxBracket::up_to(Decimal::new(18_200, 0), Decimal::ZERO),
                TaxBracket::up_to(Decimal::new(45_000, 0), Decimal::new(19, 2)),
                TaxBracket::up_to(Decimal::new(120_000, 0), Decimal::new(325, 3)),
                TaxBracket::up_to(Decimal::new(180_000, 0), Decimal::new(37, 2)),
                TaxBracket::above(Decimal::new(45, 2)),
            ],
        }
    }

    /// Returns the schedule's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brackets in ascending threshold order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::australian_resident_2023_24()
    }
}

fn invalid(message: impl Into<String>) -> BudgetError {
    BudgetError::InvalidTaxSchedule {
        message: message.into(),
    }
}
