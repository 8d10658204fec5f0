//! Data models for the HR Engine.
//!
//! The `models` module defines the serialisable structs and enums
//! representing employees, HR records and the payroll input/output
//! structures.  These data types derive `Serialize` and `Deserialize`
//! so that they can be easily persisted or transmitted over a
//! network.  They form the basis of the engine's input and output
//! structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an employee on the company roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// A unique identifier such as `"EMP001"`.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    /// Date the employee joined the company.  `None` for applicants
    /// who have not started yet; entitlement calculations treat a
    /// missing join date as zero tenure.
    pub join_date: Option<NaiveDate>,
    pub employment_type: EmploymentType,
    /// Monthly basic salary before any adjustments.
    pub basic_salary: f64,
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Resigned,
}

/// Monthly adjustments applied on top of an employee's basic salary.
///
/// Everything in here is caller-validated to be non-negative; the
/// engine itself does not reject out-of-range values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly basic salary.
    pub basic_salary: f64,
    /// Overtime hours worked this month.
    pub overtime_hours: f64,
    /// One-off bonus for the month.
    pub bonus: f64,
    /// Fixed monthly allowance.
    pub allowance: f64,
    /// Days of unpaid leave taken; should not exceed the configured
    /// working days per month (the deduction is clamped regardless).
    pub unpaid_leave_days: f64,
    /// Approved expense claims paid out with this cycle.  Tax-exempt:
    /// excluded from gross income and added back at the net-pay step.
    pub claims_reimbursement: f64,
}

/// A fully itemised payslip for one employee-month.
///
/// Every field is rounded to two decimal places for presentation;
/// the engine computes with full precision internally and rounds only
/// when building this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payslip {
    pub ot_amount: f64,
    pub unpaid_leave_deduction: f64,
    pub gross_salary: f64,
    pub kwsp_employee: f64,
    pub kwsp_employer: f64,
    pub socso_employee: f64,
    pub socso_employer: f64,
    pub eis_employee: f64,
    pub eis_employer: f64,
    pub tax_deduction: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
    pub claims_reimbursement: f64,
}

/// Tenure-derived leave and medical-claim entitlements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// Whole calendar years of service, anniversary-truncated.
    pub years_of_service: u32,
    /// Annual-leave days per year at the current tenure tier.
    pub annual_leave_total: u32,
    /// Tenure-and-salary-derived medical claim ceiling.  May fall
    /// below the configured default ceiling for low earners; the
    /// caller decides which of the two applies.
    pub medical_limit: f64,
}

/// A leave application awaiting or past approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: ApprovalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Medical,
    Unpaid,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// An expense or medical claim submitted for reimbursement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: String,
    pub employee_id: String,
    pub claim_type: ClaimType,
    pub amount: f64,
    pub description: String,
    pub status: ApprovalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Medical,
    Travel,
    Other,
}

/// A company asset assigned to an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub code: String,
    pub assigned_to: Option<String>,
    pub condition: String,
}

/// A work item tracked by the administration module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

/// Input to a batch pay run.
///
/// `adjustments` maps employee IDs to that employee's monthly
/// adjustments (overtime, bonus, allowance, unpaid leave, claims).
/// Employees without an entry receive a zero-adjustment payslip on
/// their basic salary alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRunInput {
    /// The month being processed, e.g. `"2024-10"`.
    pub month: String,
    #[serde(default)]
    pub adjustments: HashMap<String, PayrollAdjustments>,
}

/// Per-employee monthly adjustments for a batch run.  Basic salary is
/// taken from the employee record, so it is absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollAdjustments {
    pub overtime_hours: f64,
    pub bonus: f64,
    pub allowance: f64,
    pub unpaid_leave_days: f64,
    pub claims_reimbursement: f64,
}

/// The payslip produced for a single employee in a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayslip {
    pub employee_id: String,
    pub full_name: String,
    pub payslip: Payslip,
}

/// The aggregate result of a batch pay run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRunResult {
    /// The month that was processed.
    pub month: String,
    /// Individual payslips, ordered by employee ID.
    pub results: Vec<EmployeePayslip>,
}
