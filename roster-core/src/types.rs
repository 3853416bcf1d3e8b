//! Domain types for the employee registry.
//!
//! Records and their inputs go through serde; hire dates are plain calendar
//! dates (`YYYY-MM-DD` on the wire).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Position label that marks an employee as an admin. Compared case-sensitively.
pub const ADMIN_POSITION: &str = "ADMIN";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Registry-assigned employee identifier. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single employee record owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub hire_date: NaiveDate,
    /// Insertion-ordered, no duplicates.
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Employee {
    /// Builds a fresh record with an empty project set.
    pub fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self {
            id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            position: details.position,
            hire_date: details.hire_date,
            projects: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.position == ADMIN_POSITION
    }

    /// Overwrites every caller-editable field. `id` and `projects` are kept.
    pub(crate) fn apply(&mut self, details: EmployeeDetails) {
        self.first_name = details.first_name;
        self.last_name = details.last_name;
        self.email = details.email;
        self.position = details.position;
        self.hire_date = details.hire_date;
    }

    /// Appends each project not already assigned, keeping first-insertion order.
    pub(crate) fn merge_projects<I, S>(&mut self, projects: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for project in projects {
            let project = project.into();
            if !self.projects.contains(&project) {
                self.projects.push(project);
            }
        }
    }
}

/// The caller-editable fields of an employee, used by `add` and `update`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub hire_date: NaiveDate,
}

impl EmployeeDetails {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            position: position.into(),
            hire_date,
        }
    }
}

/// Filter and pagination options for `EmployeeRegistry::search`.
///
/// `None` criteria match everything. `page` is 1-based; page 0 behaves like
/// page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            first_name: None,
            last_name: None,
            position: None,
            page: 1,
            size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// Number of matches skipped before the page starts.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.size as usize)
    }

    /// True when every provided criterion equals the employee's field, ignoring case.
    pub fn matches(&self, employee: &Employee) -> bool {
        criterion_matches(self.first_name.as_deref(), &employee.first_name)
            && criterion_matches(self.last_name.as_deref(), &employee.last_name)
            && criterion_matches(self.position.as_deref(), &employee.position)
    }
}

fn criterion_matches(criterion: Option<&str>, value: &str) -> bool {
    match criterion {
        Some(wanted) => eq_ignore_case(wanted, value),
        None => true,
    }
}

/// Char-by-char case-insensitive equality using simple (one-to-one) case
/// mappings, so `Σ`/`ς`/`σ` all compare equal and `İ` matches `i`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            if x == y {
                return true;
            }
            let (ux, uy) = (simple_upper(x), simple_upper(y));
            ux == uy || simple_lower(ux) == simple_lower(uy)
        })
}

/// Multi-char uppercase expansions (`ß` -> `SS`) have no simple mapping.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// The only multi-char lowercase expansion is `İ` -> `i̇`; its simple mapping is `i`.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
