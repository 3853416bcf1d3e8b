//! In-memory employee registry.
//!
//! # Rules
//!
//! - Emails are unique at insertion time (`add`). `update` does not re-check.
//! - The sole `ADMIN` cannot be deleted. Updating it to another position is
//!   allowed.
//! - Every failing call leaves the registry untouched.
//!
//! Records live in a `BTreeMap`, so "map order" is ascending identifier.
//! `list_all` re-sorts by hire date; `search` pages over map order.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::seed::SeedEmployee;
use crate::types::{Employee, EmployeeDetails, EmployeeId, SearchQuery};

/// Owns every employee record and the identifier counter.
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    employees: BTreeMap<EmployeeId, Employee>,
    next_id: u64,
}

impl Default for EmployeeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRegistry {
    pub fn new() -> Self {
        Self {
            employees: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Builds a registry by replaying seed entries through `add` and
    /// `assign_projects`. Stops at the first rule violation.
    pub fn from_seed(entries: Vec<SeedEmployee>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in entries {
            let (details, projects) = entry.into_parts();
            let employee = registry.add(details)?;
            if !projects.is_empty() {
                registry.assign_projects(employee.id, projects)?;
            }
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    // -----------------------------------------------------------------------
    // Create / read
    // -----------------------------------------------------------------------

    /// Registers a new employee with a fresh identifier and no projects.
    ///
    /// Returns `RegistryError::DuplicateEmail` if any record already holds
    /// `details.email` (exact, case-sensitive).
    pub fn add(&mut self, details: EmployeeDetails) -> Result<Employee, RegistryError> {
        if self.employees.values().any(|e| e.email == details.email) {
            warn!(email = %details.email, "rejected add: duplicate email");
            return Err(RegistryError::DuplicateEmail {
                email: details.email,
            });
        }

        let id = EmployeeId(self.next_id);
        self.next_id += 1;
        let employee = Employee::new(id, details);
        self.employees.insert(id, employee.clone());
        debug!(%id, email = %employee.email, "employee added");
        Ok(employee)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    // -----------------------------------------------------------------------
    // Delete / update
    // -----------------------------------------------------------------------

    /// Removes an employee and returns the removed record.
    pub fn delete(&mut self, id: EmployeeId) -> Result<Employee, RegistryError> {
        let target = self
            .employees
            .get(&id)
            .ok_or(RegistryError::NotFound { id })?;

        if target.is_admin() && self.admin_count() == 1 {
            warn!(%id, "rejected delete: sole admin");
            return Err(RegistryError::CannotDeleteLastAdmin { id });
        }

        let removed = self
            .employees
            .remove(&id)
            .ok_or(RegistryError::NotFound { id })?;
        debug!(%id, "employee deleted");
        Ok(removed)
    }

    /// Overwrites names, email, position and hire date in place.
    pub fn update(
        &mut self,
        id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, RegistryError> {
        let employee = self
            .employees
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { id })?;
        employee.apply(details);
        debug!(%id, "employee updated");
        Ok(employee.clone())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All employees, ascending by hire date. Ties keep identifier order.
    pub fn list_all(&self) -> Vec<Employee> {
        let mut all: Vec<Employee> = self.employees.values().cloned().collect();
        all.sort_by_key(|e| e.hire_date);
        all
    }

    /// Filters by the query's criteria, then pages over map order.
    pub fn search(&self, query: &SearchQuery) -> Vec<Employee> {
        self.employees
            .values()
            .filter(|e| query.matches(e))
            .skip(query.offset())
            .take(query.size as usize)
            .cloned()
            .collect()
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// Adds each project not already assigned; input duplicates are ignored.
    pub fn assign_projects<I, S>(
        &mut self,
        id: EmployeeId,
        projects: I,
    ) -> Result<Employee, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let employee = self
            .employees
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { id })?;
        employee.merge_projects(projects);
        debug!(%id, projects = employee.projects.len(), "projects assigned");
        Ok(employee.clone())
    }

    fn admin_count(&self) -> usize {
        self.employees.values().filter(|e| e.is_admin()).count()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn details(first: &str, email: &str, position: &str) -> EmployeeDetails {
        EmployeeDetails::new(first, "Doe", email, position, date(2023, 1, 1))
    }

    #[test]
    fn ids_start_at_one_and_are_never_reused() {
        let mut reg = EmployeeRegistry::new();
        let a = reg.add(details("A", "a@x.com", "Dev")).expect("add a");
        let b = reg.add(details("B", "b@x.com", "Dev")).expect("add b");
        assert_eq!(a.id, EmployeeId(1));
        assert_eq!(b.id, EmployeeId(2));

        reg.delete(b.id).expect("delete b");
        let c = reg.add(details("C", "c@x.com", "Dev")).expect("add c");
        assert_eq!(c.id, EmployeeId(3));
    }

    #[test]
    fn duplicate_email_does_not_consume_an_id() {
        let mut reg = EmployeeRegistry::new();
        reg.add(details("A", "a@x.com", "Dev")).expect("add");
        let err = reg.add(details("B", "a@x.com", "Dev")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateEmail { .. }));
        let next = reg.add(details("C", "c@x.com", "Dev")).expect("add");
        assert_eq!(next.id, EmployeeId(2));
    }

    #[test]
    fn email_uniqueness_is_case_sensitive() {
        let mut reg = EmployeeRegistry::new();
        reg.add(details("A", "a@x.com", "Dev")).expect("add");
        reg.add(details("B", "A@X.COM", "Dev"))
            .expect("different case is a different email");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn delete_missing_returns_not_found() {
        let mut reg = EmployeeRegistry::new();
        let err = reg.delete(EmployeeId(9)).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { id } if id == EmployeeId(9)));
    }

    #[test]
    fn sole_admin_can_be_updated_away_but_not_deleted() {
        let mut reg = EmployeeRegistry::new();
        let admin = reg.add(details("Root", "root@x.com", "ADMIN")).expect("add");
        assert!(matches!(
            reg.delete(admin.id),
            Err(RegistryError::CannotDeleteLastAdmin { .. })
        ));

        reg.update(admin.id, details("Root", "root@x.com", "Developer"))
            .expect("update away from admin is allowed");
        reg.delete(admin.id).expect("no longer an admin");
        assert!(reg.is_empty());
    }

    #[test]
    fn get_returns_stored_record() {
        let mut reg = EmployeeRegistry::new();
        let added = reg.add(details("A", "a@x.com", "Dev")).expect("add");
        assert_eq!(reg.get(added.id), Some(&added));
        assert_eq!(reg.get(EmployeeId(99)), None);
    }

    #[test]
    fn search_size_zero_returns_nothing() {
        let mut reg = EmployeeRegistry::new();
        reg.add(details("A", "a@x.com", "Dev")).expect("add");
        let q = SearchQuery { size: 0, ..SearchQuery::default() };
        assert!(reg.search(&q).is_empty());
    }
}
