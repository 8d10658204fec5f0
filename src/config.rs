//! Statutory rate configuration.
//!
//! The `config` module defines the [`RateConfig`] structure holding
//! every contribution rate, wage cap and tax parameter the payroll
//! engine needs.  The defaults reflect the simplified Malaysian-style
//! scheme the application ships with (KWSP, SOCSO, EIS and a mock PCB
//! table); an operator may override them with a JSON file loaded at
//! startup.  The configuration is read once and never mutated while
//! calculations run.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One row of the progressive-tax lookup table.  Brackets are
/// evaluated from the highest threshold downward and the first match
/// applies its rate to the entire annualised income.  This is a
/// deliberate simplification, not true marginal banding; swapping the
/// strategy only requires reinterpreting this table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Annual taxable income above which this bracket applies.
    pub annual_income_threshold: f64,
    /// Flat rate applied to the whole annualised income.
    pub rate: f64,
}

/// Process-wide payroll rate configuration.
///
/// All rate fields are decimal fractions (0.11 means 11%); caps and
/// reliefs are currency amounts.  A calculation is a pure function of
/// (`RateConfig`, input), so a single instance may be shared across
/// any number of concurrent calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Employee retirement-fund (KWSP/EPF) contribution rate.
    pub kwsp_employee_rate: f64,
    /// Employer retirement-fund contribution rate.
    pub kwsp_employer_rate: f64,
    /// Employee social-security (SOCSO) contribution rate.
    pub socso_employee_rate: f64,
    /// Employer social-security contribution rate.
    pub socso_employer_rate: f64,
    /// Wage ceiling above which SOCSO is not charged on the excess.
    pub socso_wage_cap: f64,
    /// Employee insurance-scheme (EIS) contribution rate.
    pub eis_employee_rate: f64,
    /// Employer insurance-scheme contribution rate.
    pub eis_employer_rate: f64,
    /// Wage ceiling for EIS contributions.
    pub eis_wage_cap: f64,
    /// Overtime pay multiplier over the base hourly rate.
    pub ot_multiplier: f64,
    /// Divisor for deriving the daily rate from the monthly basic.
    pub working_days_per_month: u32,
    /// Divisor for deriving the hourly rate from the daily rate.
    pub working_hours_per_day: u32,
    /// Progressive-tax lookup table; order is irrelevant, the lookup
    /// selects the highest matching threshold.
    pub tax_brackets: Vec<TaxBracket>,
    /// Flat annual deduction applied before the bracket lookup.
    pub tax_personal_relief: f64,
    /// Cap on the annual KWSP contribution deductible before tax.
    pub tax_kwsp_relief_cap: f64,
    /// Default annual medical-claim ceiling absent a tenure-based
    /// override.
    pub medical_claim_annual_limit: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        RateConfig {
            kwsp_employee_rate: 0.11,
            kwsp_employer_rate: 0.13,
            socso_employee_rate: 0.005,
            socso_employer_rate: 0.0175,
            socso_wage_cap: 5000.0,
            eis_employee_rate: 0.002,
            eis_employer_rate: 0.002,
            eis_wage_cap: 5000.0,
            ot_multiplier: 1.5,
            working_days_per_month: 26,
            working_hours_per_day: 8,
            tax_brackets: vec![
                TaxBracket { annual_income_threshold: 100_000.0, rate: 0.21 },
                TaxBracket { annual_income_threshold: 50_000.0, rate: 0.13 },
                TaxBracket { annual_income_threshold: 35_000.0, rate: 0.08 },
            ],
            tax_personal_relief: 9000.0,
            tax_kwsp_relief_cap: 4000.0,
            medical_claim_annual_limit: 1000.0,
        }
    }
}

impl RateConfig {
    /// Returns the annual tax owed on `annual_taxable_income` by
    /// evaluating the bracket table from the highest threshold down.
    /// Income at or below the lowest threshold is untaxed.
    pub fn annual_tax(&self, annual_taxable_income: f64) -> f64 {
        self.tax_brackets
            .iter()
            .filter(|bracket| annual_taxable_income > bracket.annual_income_threshold)
            .max_by(|a, b| {
                a.annual_income_threshold
                    .partial_cmp(&b.annual_income_threshold)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|bracket| annual_taxable_income * bracket.rate)
            .unwrap_or(0.0)
    }
}

/// Load a rate configuration from a JSON file.  Fields absent from
/// the file keep their default values, so an override file only needs
/// to name the rates it changes.
pub fn load_rate_config(path: &std::path::Path) -> Result<RateConfig> {
    let data = std::fs::read_to_string(path)?;
    let config = serde_json::from_str::<RateConfig>(&data)?;
    Ok(config)
}
