//! HR Engine library crate.
//!
//! This crate exposes the payroll computation core, the entitlement
//! calculator and the surrounding HR record plumbing as reusable
//! modules.  External applications may depend on the `hr_engine` crate
//! and call into `payroll::compute_payslip` or
//! `entitlement::compute_entitlements` directly, or embed the API via
//! `api::build_router`.

pub mod config;
pub mod models;
pub mod entitlement;
pub mod payroll;
pub mod engine;
pub mod store;
pub mod api;
