//! Tenure-based entitlement calculation.
//!
//! The `entitlement` module derives an employee's annual-leave day
//! entitlement and medical-claim ceiling from their join date and
//! basic salary.  The reference date ("today") is an explicit
//! parameter rather than an ambient clock so the calculation stays
//! pure and deterministic under test.

use crate::models::EntitlementResult;
use chrono::{Datelike, NaiveDate};

/// Base amount of the tenure-derived medical claim ceiling.
const MEDICAL_BASE: f64 = 500.0;
/// Upper bound on the tenure-derived medical claim ceiling.
const MEDICAL_CAP: f64 = 3000.0;
/// Fraction of annual salary added on top of the base.
const MEDICAL_SALARY_FRACTION: f64 = 0.01;

/// Whole calendar years elapsed between `join_date` and `today`.
///
/// A year counts only once the month-and-day anniversary has passed,
/// matching calendar-age computation rather than elapsed-days/365.
/// Future-dated joins clamp to zero.
fn years_of_service(join_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - join_date.year();
    if (today.month(), today.day()) < (join_date.month(), join_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Derive leave and medical-claim entitlements.
///
/// A missing join date means "no tenure yet" (pre-hire applicants
/// still get their entitlement fields displayed), not an error.  The
/// medical ceiling is `500 + 1%` of annual salary, truncated to a
/// whole amount and capped at 3000; it can legitimately fall below
/// the configured default claim ceiling for low earners, and which of
/// the two applies is a policy decision left to the caller.
pub fn compute_entitlements(
    join_date: Option<NaiveDate>,
    basic_salary: f64,
    today: NaiveDate,
) -> EntitlementResult {
    let years = join_date
        .map(|joined| years_of_service(joined, today))
        .unwrap_or(0);

    let annual_leave_total = if years >= 5 {
        20
    } else if years >= 2 {
        16
    } else {
        12
    };

    let medical_limit =
        (MEDICAL_BASE + MEDICAL_SALARY_FRACTION * basic_salary * 12.0).trunc().min(MEDICAL_CAP);

    EntitlementResult {
        years_of_service: years,
        annual_leave_total,
        medical_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn four_year_tenure_mid_band() {
        let result =
            compute_entitlements(Some(date(2020, 3, 1)), 6500.0, date(2024, 10, 1));
        assert_eq!(result.years_of_service, 4);
        assert_eq!(result.annual_leave_total, 16);
        assert_eq!(result.medical_limit, 1280.0);
    }

    #[test]
    fn fifth_anniversary_unlocks_top_tier() {
        let today = date(2024, 10, 1);
        let on_anniversary = compute_entitlements(Some(date(2019, 10, 1)), 3000.0, today);
        assert_eq!(on_anniversary.years_of_service, 5);
        assert_eq!(on_anniversary.annual_leave_total, 20);

        // One day short of the anniversary still counts as four years.
        let day_short = compute_entitlements(Some(date(2019, 10, 2)), 3000.0, today);
        assert_eq!(day_short.years_of_service, 4);
        assert_eq!(day_short.annual_leave_total, 16);
    }

    #[test]
    fn fresh_hires_get_floor_tier() {
        let result =
            compute_entitlements(Some(date(2024, 9, 15)), 4200.0, date(2024, 10, 1));
        assert_eq!(result.years_of_service, 0);
        assert_eq!(result.annual_leave_total, 12);
    }

    #[test]
    fn future_join_date_clamps_to_zero() {
        let result =
            compute_entitlements(Some(date(2025, 1, 1)), 4200.0, date(2024, 10, 1));
        assert_eq!(result.years_of_service, 0);
        assert_eq!(result.annual_leave_total, 12);
    }

    #[test]
    fn missing_join_date_means_no_tenure() {
        let result = compute_entitlements(None, 4200.0, date(2024, 10, 1));
        assert_eq!(result.years_of_service, 0);
        assert_eq!(result.annual_leave_total, 12);
        // Salary component still applies: 500 + 1% of 50400 = 1004.
        assert_eq!(result.medical_limit, 1004.0);
    }

    #[test]
    fn medical_limit_caps_at_three_thousand() {
        let result =
            compute_entitlements(Some(date(2015, 1, 1)), 50_000.0, date(2024, 10, 1));
        assert_eq!(result.medical_limit, 3000.0);
    }

    #[test]
    fn medical_limit_truncates_toward_zero() {
        // 500 + 1% of (3333 * 12) = 899.96, truncated to 899.
        let result = compute_entitlements(None, 3333.0, date(2024, 10, 1));
        assert_eq!(result.medical_limit, 899.0);
    }

    #[test]
    fn low_earner_limit_may_undercut_default_ceiling() {
        // 500 + 1% of 24000 = 740, below the configured default of
        // 1000.  Intentional tiered-benefit behaviour.
        let result = compute_entitlements(Some(date(2023, 1, 1)), 2000.0, date(2024, 10, 1));
        assert_eq!(result.medical_limit, 740.0);
    }
}
