//! Batch pay run.
//!
//! The `engine` module turns a roster plus a [`PayRunInput`] into a
//! [`PayRunResult`].  It uses the [`rayon`] crate to parallelise
//! per-employee payslip computation across multiple CPU cores; each
//! payslip is an independent pure calculation, so no coordination is
//! needed beyond collecting the results.

use crate::config::RateConfig;
use crate::models::{
    Employee, EmployeePayslip, EmployeeStatus, PayRunInput, PayRunResult, PayrollAdjustments,
    PayrollInput,
};
use crate::payroll::compute_payslip;
use rayon::prelude::*;

/// Runs a monthly pay batch over the given roster.
///
/// Resigned employees are skipped.  Employees without an entry in the
/// run's adjustments map are paid on basic salary alone.  Results are
/// returned in employee-ID order regardless of which worker finished
/// first.
pub fn run_pay_batch(
    run: &PayRunInput,
    employees: &[Employee],
    config: &RateConfig,
) -> PayRunResult {
    let mut results: Vec<EmployeePayslip> = employees
        .par_iter()
        .filter(|employee| employee.status == EmployeeStatus::Active)
        .map(|employee| {
            let adjustments = run
                .adjustments
                .get(&employee.id)
                .cloned()
                .unwrap_or_else(PayrollAdjustments::default);
            let input = PayrollInput {
                basic_salary: employee.basic_salary,
                overtime_hours: adjustments.overtime_hours,
                bonus: adjustments.bonus,
                allowance: adjustments.allowance,
                unpaid_leave_days: adjustments.unpaid_leave_days,
                claims_reimbursement: adjustments.claims_reimbursement,
            };
            EmployeePayslip {
                employee_id: employee.id.clone(),
                full_name: employee.full_name.clone(),
                payslip: compute_payslip(&input, config),
            }
        })
        .collect();
    results.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
    PayRunResult {
        month: run.month.clone(),
        results,
    }
}
