//! Recurrence frequency for expenses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;

/// How often a recurring expense is paid.
///
/// Matching on this enum is exhaustive; an unrecognised tag can only appear
/// when parsing untrusted text, which fails with
/// [`BudgetError::UnknownFrequency`]. Tags must match their lowercase form
/// exactly.
///
/// # Example
///
/// ```
/// use fudget::models::Frequency;
///
/// let frequency: Frequency = "fortnightly".parse().unwrap();
/// assert_eq!(frequency, Frequency::Fortnightly);
/// assert!("hourly".parse::<Frequency>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every two weeks.
    Fortnightly,
    /// Every month. New expense rows start with this frequency.
    #[default]
    Monthly,
    /// Every three months.
    Quarterly,
    /// Once a year.
    Yearly,
}

impl Frequency {
    /// Every supported frequency, shortest period first.
    pub const ALL: [Frequency; 6] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Fortnightly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
    ];

    /// Returns the lowercase tag used in forms and persisted state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Fortnightly => "fortnightly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = BudgetError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "fortnightly" => Ok(Frequency::Fortnightly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(BudgetError::UnknownFrequency {
                tag: tag.to_string(),
            }),
        }
    }
}
