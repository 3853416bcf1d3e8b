//! Table and JSON rendering shared by every command.

use anyhow::{Context, Result};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use roster_core::Employee;

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "id")]
    id: u64,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "email")]
    email: String,
    #[tabled(rename = "position")]
    position: String,
    #[tabled(rename = "hired")]
    hired: String,
    #[tabled(rename = "projects")]
    projects: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id.0,
            name: format!("{} {}", e.first_name, e.last_name),
            email: e.email.clone(),
            position: e.position.clone(),
            hired: e.hire_date.format("%Y-%m-%d").to_string(),
            projects: e.projects.join(", "),
        }
    }
}

pub fn employees_table(employees: &[Employee]) -> String {
    let rows: Vec<EmployeeRow> = employees.iter().map(EmployeeRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn print_employees(employees: &[Employee], json: bool) -> Result<()> {
    if json {
        return print_json(employees);
    }
    if employees.is_empty() {
        println!("No employees.");
        return Ok(());
    }
    println!("{}", employees_table(employees));
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize JSON output")?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_core::{EmployeeDetails, EmployeeRegistry};

    #[test]
    fn table_includes_projects_and_iso_date() {
        let mut reg = EmployeeRegistry::new();
        let hired = NaiveDate::from_ymd_opt(2023, 1, 1).expect("date");
        let e = reg
            .add(EmployeeDetails::new("John", "Doe", "j@x.com", "Developer", hired))
            .expect("add");
        let e = reg.assign_projects(e.id, ["Apollo", "Gemini"]).expect("assign");

        let rendered = employees_table(&[e]);
        assert!(rendered.contains("John Doe"));
        assert!(rendered.contains("2023-01-01"));
        assert!(rendered.contains("Apollo, Gemini"));
    }
}
