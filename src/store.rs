//! In-memory HR record repositories.
//!
//! The `store` module replaces what would otherwise be a module-level
//! pile of mutable mock arrays with an explicit repository
//! abstraction.  Callers receive a [`Repository`] handle with
//! get/list/add/update operations; the payroll and entitlement cores
//! never touch a repository, they stay pure.

use crate::models::{
    ApprovalStatus, Asset, ClaimRecord, Employee, EmployeeStatus, EmploymentType, JobTask,
    LeaveRequest, LeaveType, TaskStatus,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::RwLock;
use thiserror::Error;

/// Errors raised by repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {id}")]
    NotFound { id: String },
    #[error("record already exists: {id}")]
    Duplicate { id: String },
}

/// A record that can be stored by ID.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for ClaimRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Asset {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for JobTask {
    fn id(&self) -> &str {
        &self.id
    }
}

/// CRUD interface over a single record type.
///
/// Implementations must be thread-safe (`Send + Sync`); handlers call
/// into them concurrently.
pub trait Repository<T>: Send + Sync {
    fn get(&self, id: &str) -> Option<T>;
    fn list(&self) -> Vec<T>;
    fn add(&self, item: T) -> Result<(), StoreError>;
    fn update(&self, id: &str, item: T) -> Result<(), StoreError>;
}

/// In-memory repository backed by an ordered map, so `list` returns
/// records in stable ID order.
pub struct MemStore<T> {
    records: RwLock<BTreeMap<String, T>>,
}

impl<T: HasId + Clone> MemStore<T> {
    pub fn new() -> Self {
        MemStore {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Build a store pre-populated with the given records.  Intended
    /// for seed/demo data; duplicate IDs keep the last record.
    pub fn seeded(items: Vec<T>) -> Self {
        let store = Self::new();
        {
            let mut records = store.records.write().unwrap();
            for item in items {
                records.insert(item.id().to_string(), item);
            }
        }
        store
    }
}

impl<T: HasId + Clone> Default for MemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasId + Clone + Send + Sync> Repository<T> for MemStore<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.records.read().unwrap().get(id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.records.read().unwrap().values().cloned().collect()
    }

    fn add(&self, item: T) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        let id = item.id().to_string();
        if records.contains_key(&id) {
            return Err(StoreError::Duplicate { id });
        }
        records.insert(id, item);
        Ok(())
    }

    fn update(&self, id: &str, item: T) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        if !records.contains_key(id) {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        records.insert(id.to_string(), item);
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Demo roster matching the sample data the application ships with.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "EMP001".into(),
            full_name: "Ali bin Abu".into(),
            email: "ali@company.com".into(),
            job_title: "Senior Developer".into(),
            department: "IT Support".into(),
            join_date: Some(date(2022, 3, 1)),
            employment_type: EmploymentType::FullTime,
            basic_salary: 6500.0,
            status: EmployeeStatus::Active,
        },
        Employee {
            id: "EMP002".into(),
            full_name: "Siti Sarah".into(),
            email: "siti@company.com".into(),
            job_title: "HR Executive".into(),
            department: "Human Resources".into(),
            join_date: Some(date(2023, 1, 15)),
            employment_type: EmploymentType::FullTime,
            basic_salary: 4200.0,
            status: EmployeeStatus::Active,
        },
    ]
}

pub fn seed_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "A001".into(),
            name: "MacBook Pro 14\"".into(),
            code: "IT-MBP-001".into(),
            assigned_to: Some("EMP001".into()),
            condition: "Good".into(),
        },
        Asset {
            id: "A002".into(),
            name: "Dell Monitor 27\"".into(),
            code: "IT-MON-023".into(),
            assigned_to: Some("EMP001".into()),
            condition: "Good".into(),
        },
        Asset {
            id: "A003".into(),
            name: "Access Card".into(),
            code: "SEC-005".into(),
            assigned_to: Some("EMP002".into()),
            condition: "Fair".into(),
        },
    ]
}

pub fn seed_tasks() -> Vec<JobTask> {
    vec![
        JobTask {
            id: "T001".into(),
            title: "Monthly Payroll Processing".into(),
            description: "Process salary for Oct 2024".into(),
            status: TaskStatus::Pending,
            due_date: date(2024, 10, 25),
            assigned_to: Some("EMP002".into()),
        },
        JobTask {
            id: "T002".into(),
            title: "Server Maintenance".into(),
            description: "Update security patches".into(),
            status: TaskStatus::InProgress,
            due_date: date(2024, 10, 15),
            assigned_to: Some("EMP001".into()),
        },
    ]
}

pub fn seed_leave_requests() -> Vec<LeaveRequest> {
    vec![LeaveRequest {
        id: "L001".into(),
        employee_id: "EMP001".into(),
        leave_type: LeaveType::Annual,
        start_date: date(2024, 11, 1),
        end_date: date(2024, 11, 3),
        reason: "Family trip".into(),
        status: ApprovalStatus::Approved,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_get_round_trips() {
        let store: MemStore<Employee> = MemStore::new();
        let roster = seed_employees();
        store.add(roster[0].clone()).unwrap();
        let fetched = store.get("EMP001").unwrap();
        assert_eq!(fetched.full_name, "Ali bin Abu");
        assert!(store.get("EMP999").is_none());
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let store = MemStore::seeded(seed_employees());
        let err = store.add(seed_employees()[0].clone()).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }

    #[test]
    fn update_missing_record_fails() {
        let store: MemStore<Employee> = MemStore::new();
        let err = store
            .update("EMP001", seed_employees()[0].clone())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = MemStore::seeded(seed_employees());
        let mut extra = seed_employees()[0].clone();
        extra.id = "EMP000".into();
        store.add(extra).unwrap();
        let ids: Vec<String> = store.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["EMP000", "EMP001", "EMP002"]);
    }

    #[test]
    fn update_replaces_record() {
        let store = MemStore::seeded(seed_employees());
        let mut ali = store.get("EMP001").unwrap();
        ali.basic_salary = 7000.0;
        store.update("EMP001", ali).unwrap();
        assert_eq!(store.get("EMP001").unwrap().basic_salary, 7000.0);
    }
}
