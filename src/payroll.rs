//! Payslip computation core.
//!
//! The `payroll` module turns a [`PayrollInput`] and a [`RateConfig`]
//! into a fully itemised [`Payslip`].  The computation is a pure
//! function with no I/O and no shared mutable state, so it may be
//! invoked concurrently from any number of callers without
//! coordination.
//!
//! The calculation proceeds in a fixed order: rate derivation, unpaid
//! leave deduction, overtime, gross income, statutory contributions,
//! tax estimate, totals.  Each step feeds the next, and all
//! intermediate arithmetic uses full precision; rounding to two
//! decimal places happens once, when the final payslip is built.

use crate::config::RateConfig;
use crate::models::{PayrollInput, Payslip};

/// Round a currency amount to two decimal places for presentation.
fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Compute a payslip with full internal precision, without the final
/// presentation rounding.  Exposed so that invariants (totals summing
/// exactly) can be checked free of rounding noise.
pub fn compute_payslip_raw(input: &PayrollInput, config: &RateConfig) -> Payslip {
    // Daily and hourly rates derive from the monthly basic.
    let daily_rate = input.basic_salary / config.working_days_per_month as f64;
    let hourly_rate = daily_rate / config.working_hours_per_day as f64;

    // Unpaid leave reduces basic pay, clamped so it never goes
    // negative even if the day count exceeds the month's divisor.
    let unpaid_leave_deduction = daily_rate * input.unpaid_leave_days;
    let adjusted_basic = (input.basic_salary - unpaid_leave_deduction).max(0.0);

    // Overtime is paid on the un-adjusted hourly rate: OT is logged
    // from actual worked hours, independent of attendance-based
    // base-pay adjustments.
    let ot_amount = hourly_rate * config.ot_multiplier * input.overtime_hours;

    // Gross (taxable) income.  Claims reimbursement is tax-exempt and
    // only enters at the net-pay step.
    let gross = adjusted_basic + input.allowance + ot_amount + input.bonus;

    // Statutory contributions all scale with gross income for the
    // period, not raw basic salary.
    let kwsp_employee = gross * config.kwsp_employee_rate;
    let kwsp_employer = gross * config.kwsp_employer_rate;

    let socso_wage = gross.min(config.socso_wage_cap);
    let socso_employee = socso_wage * config.socso_employee_rate;
    let socso_employer = socso_wage * config.socso_employer_rate;

    let eis_wage = gross.min(config.eis_wage_cap);
    let eis_employee = eis_wage * config.eis_employee_rate;
    let eis_employer = eis_wage * config.eis_employer_rate;

    // Monthly PCB-style tax estimate: annualise, subtract KWSP relief
    // (capped) and personal relief, then look up the bracket table.
    let annual_taxable = (gross * 12.0)
        - (kwsp_employee * 12.0).min(config.tax_kwsp_relief_cap)
        - config.tax_personal_relief;
    let annual_tax = config.annual_tax(annual_taxable);
    let tax_deduction = (annual_tax / 12.0).max(0.0);

    let total_deductions = kwsp_employee + socso_employee + eis_employee + tax_deduction;
    let net_salary = gross + input.claims_reimbursement - total_deductions;

    Payslip {
        ot_amount,
        unpaid_leave_deduction,
        gross_salary: gross,
        kwsp_employee,
        kwsp_employer,
        socso_employee,
        socso_employer,
        eis_employee,
        eis_employer,
        tax_deduction,
        total_deductions,
        net_salary,
        claims_reimbursement: input.claims_reimbursement,
    }
}

/// Compute a payslip for one employee-month.
///
/// Inputs are expected to be non-negative; negative values are the
/// caller's responsibility to reject.  The function is total: it never
/// fails, and the only clamping it performs is holding the
/// post-deduction basic pay at zero.  Net pay may still go negative
/// when deductions exceed gross; flagging that is left to the caller.
pub fn compute_payslip(input: &PayrollInput, config: &RateConfig) -> Payslip {
    let raw = compute_payslip_raw(input, config);
    Payslip {
        ot_amount: round2(raw.ot_amount),
        unpaid_leave_deduction: round2(raw.unpaid_leave_deduction),
        gross_salary: round2(raw.gross_salary),
        kwsp_employee: round2(raw.kwsp_employee),
        kwsp_employer: round2(raw.kwsp_employer),
        socso_employee: round2(raw.socso_employee),
        socso_employer: round2(raw.socso_employer),
        eis_employee: round2(raw.eis_employee),
        eis_employer: round2(raw.eis_employer),
        tax_deduction: round2(raw.tax_deduction),
        total_deductions: round2(raw.total_deductions),
        net_salary: round2(raw.net_salary),
        claims_reimbursement: round2(raw.claims_reimbursement),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn input(basic: f64) -> PayrollInput {
        PayrollInput {
            basic_salary: basic,
            ..PayrollInput::default()
        }
    }

    #[test]
    fn zero_adjustments_pass_basic_through() {
        let config = RateConfig::default();
        let slip = compute_payslip_raw(&input(4200.0), &config);
        assert_eq!(slip.ot_amount, 0.0);
        assert_eq!(slip.unpaid_leave_deduction, 0.0);
        assert!((slip.gross_salary - 4200.0).abs() < EPS);
        let expected_net = slip.gross_salary
            - (slip.kwsp_employee + slip.socso_employee + slip.eis_employee + slip.tax_deduction);
        assert!((slip.net_salary - expected_net).abs() < EPS);
    }

    #[test]
    fn totals_sum_exactly_before_rounding() {
        let config = RateConfig::default();
        let slip = compute_payslip_raw(
            &PayrollInput {
                basic_salary: 6500.0,
                overtime_hours: 7.5,
                bonus: 1200.0,
                allowance: 300.0,
                unpaid_leave_days: 2.0,
                claims_reimbursement: 150.0,
            },
            &config,
        );
        let sum =
            slip.kwsp_employee + slip.socso_employee + slip.eis_employee + slip.tax_deduction;
        assert!((slip.total_deductions - sum).abs() < EPS);
        let net = slip.gross_salary + slip.claims_reimbursement - slip.total_deductions;
        assert!((slip.net_salary - net).abs() < EPS);
    }

    #[test]
    fn socso_and_eis_cap_at_wage_ceiling() {
        let config = RateConfig::default();
        for basic in [5001.0, 8000.0, 50_000.0] {
            let slip = compute_payslip(&input(basic), &config);
            assert_eq!(slip.socso_employee, 25.0);
            assert_eq!(slip.socso_employer, 87.5);
            assert_eq!(slip.eis_employee, 10.0);
            assert_eq!(slip.eis_employer, 10.0);
        }
    }

    #[test]
    fn overtime_strictly_increases_gross() {
        let config = RateConfig::default();
        let mut last_ot = -1.0;
        let mut last_gross = -1.0;
        for hours in [0.0, 1.0, 5.0, 20.0] {
            let slip = compute_payslip_raw(
                &PayrollInput {
                    basic_salary: 4000.0,
                    overtime_hours: hours,
                    ..PayrollInput::default()
                },
                &config,
            );
            assert!(slip.ot_amount > last_ot);
            assert!(slip.gross_salary > last_gross);
            last_ot = slip.ot_amount;
            last_gross = slip.gross_salary;
        }
    }

    #[test]
    fn unpaid_leave_clamps_basic_at_zero() {
        let config = RateConfig::default();
        // 30 unpaid days exceeds the 26-day divisor; basic clamps at 0
        // and only the allowance remains in gross.
        let slip = compute_payslip_raw(
            &PayrollInput {
                basic_salary: 2600.0,
                allowance: 500.0,
                unpaid_leave_days: 30.0,
                ..PayrollInput::default()
            },
            &config,
        );
        assert!((slip.unpaid_leave_deduction - 3000.0).abs() < EPS);
        assert!((slip.gross_salary - 500.0).abs() < EPS);
    }

    #[test]
    fn claims_skip_gross_but_reach_net() {
        let config = RateConfig::default();
        let without = compute_payslip_raw(&input(3000.0), &config);
        let with = compute_payslip_raw(
            &PayrollInput {
                basic_salary: 3000.0,
                claims_reimbursement: 250.0,
                ..PayrollInput::default()
            },
            &config,
        );
        assert!((with.gross_salary - without.gross_salary).abs() < EPS);
        assert!((with.total_deductions - without.total_deductions).abs() < EPS);
        assert!((with.net_salary - (without.net_salary + 250.0)).abs() < EPS);
    }

    #[test]
    fn low_income_pays_no_tax() {
        let config = RateConfig::default();
        // 2000/month annualises well below the lowest bracket after
        // reliefs.
        let slip = compute_payslip(&input(2000.0), &config);
        assert_eq!(slip.tax_deduction, 0.0);
    }

    // Fixed regression scenario: basic 6500, 10 OT hours, 500
    // allowance.  Daily rate 250, hourly 31.25, OT 468.75, gross
    // 7468.75; annualised taxable income 76625 lands in the 13%
    // bracket.
    #[test]
    fn senior_developer_october_payslip() {
        let config = RateConfig::default();
        let slip = compute_payslip(
            &PayrollInput {
                basic_salary: 6500.0,
                overtime_hours: 10.0,
                allowance: 500.0,
                ..PayrollInput::default()
            },
            &config,
        );
        assert_eq!(slip.ot_amount, 468.75);
        assert_eq!(slip.gross_salary, 7468.75);
        assert_eq!(slip.kwsp_employee, 821.56);
        assert_eq!(slip.kwsp_employer, 970.94);
        assert_eq!(slip.socso_employee, 25.0);
        assert_eq!(slip.eis_employee, 10.0);
        assert_eq!(slip.tax_deduction, 830.10);
        assert_eq!(slip.total_deductions, 1686.67);
        assert_eq!(slip.net_salary, 5782.08);
    }
}
