//! `roster run <seed> <script>` — replay registry operations in order.
//!
//! A script is a YAML list of steps tagged by `op`:
//!
//! ```yaml
//! - op: add
//!   first_name: Grace
//!   last_name: Hopper
//!   email: grace@example.com
//!   position: Engineer
//!   hire_date: 2022-09-01
//! - op: assign
//!   id: 3
//!   projects: [compiler]
//! - op: delete
//!   id: 1
//! - op: search
//!   position: engineer
//! ```
//!
//! A failing step is reported and the script keeps going; the command exits
//! non-zero if any step failed.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use roster_core::{
    Employee, EmployeeDetails, EmployeeId, EmployeeRegistry, RegistryError, RosterConfig,
    SearchQuery,
};

use crate::output::{employees_table, print_json};

/// Arguments for `roster run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML seed roster to load.
    pub seed: PathBuf,

    /// YAML script of operations to apply.
    pub script: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum Step {
    Add(EmployeeDetails),
    Update(UpdateStep),
    Delete { id: EmployeeId },
    Assign { id: EmployeeId, projects: Vec<String> },
    Show { id: EmployeeId },
    List,
    Search(SearchStep),
}

#[derive(Debug, Clone, Deserialize)]
struct UpdateStep {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    email: String,
    position: String,
    hire_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchStep {
    first_name: Option<String>,
    last_name: Option<String>,
    position: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Add(_) => "add",
            Step::Update(_) => "update",
            Step::Delete { .. } => "delete",
            Step::Assign { .. } => "assign",
            Step::Show { .. } => "show",
            Step::List => "list",
            Step::Search(_) => "search",
        }
    }

    /// Apply this step. Returns the employees the step produced or touched.
    fn apply(
        self,
        registry: &mut EmployeeRegistry,
        config: &RosterConfig,
    ) -> Result<Vec<Employee>, RegistryError> {
        match self {
            Step::Add(details) => registry.add(details).map(|e| vec![e]),
            Step::Update(step) => {
                let details = EmployeeDetails::new(
                    step.first_name,
                    step.last_name,
                    step.email,
                    step.position,
                    step.hire_date,
                );
                registry.update(step.id, details).map(|e| vec![e])
            }
            Step::Delete { id } => registry.delete(id).map(|e| vec![e]),
            Step::Assign { id, projects } => registry.assign_projects(id, projects).map(|e| vec![e]),
            Step::Show { id } => registry
                .get(id)
                .cloned()
                .map(|e| vec![e])
                .ok_or(RegistryError::NotFound { id }),
            Step::List => Ok(registry.list_all()),
            Step::Search(step) => {
                let query = SearchQuery {
                    first_name: step.first_name,
                    last_name: step.last_name,
                    position: step.position,
                    page: step.page.unwrap_or(1),
                    size: step.size.unwrap_or(config.default_page_size),
                };
                Ok(registry.search(&query))
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct StepOutcome {
    step: usize,
    op: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    employees: Vec<Employee>,
}

impl RunArgs {
    pub fn run(self, config: &RosterConfig) -> Result<()> {
        let mut registry = super::load_registry(&self.seed)?;
        let steps = load_script(&self.script)?;

        let outcomes = execute(&mut registry, steps, config);
        let failed = outcomes.iter().filter(|o| !o.ok).count();

        if self.json {
            print_json(&outcomes)?;
        } else {
            print_outcomes(&outcomes);
        }

        if failed > 0 {
            bail!("{failed} of {} steps failed", outcomes.len());
        }
        Ok(())
    }
}

fn load_script(path: &Path) -> Result<Vec<Step>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script '{}'", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse script '{}'", path.display()))
}

fn execute(
    registry: &mut EmployeeRegistry,
    steps: Vec<Step>,
    config: &RosterConfig,
) -> Vec<StepOutcome> {
    steps
        .into_iter()
        .enumerate()
        .map(|(idx, step)| {
            let op = step.name();
            match step.apply(registry, config) {
                Ok(employees) => StepOutcome {
                    step: idx + 1,
                    op,
                    ok: true,
                    error: None,
                    employees,
                },
                Err(err) => StepOutcome {
                    step: idx + 1,
                    op,
                    ok: false,
                    error: Some(err.to_string()),
                    employees: Vec::new(),
                },
            }
        })
        .collect()
}

fn print_outcomes(outcomes: &[StepOutcome]) {
    for outcome in outcomes {
        match &outcome.error {
            None => {
                println!(
                    "{} [{}] {} ({} employees)",
                    "✓".green().bold(),
                    outcome.step,
                    outcome.op,
                    outcome.employees.len()
                );
                if !outcome.employees.is_empty() {
                    println!("{}", employees_table(&outcome.employees));
                }
            }
            Some(err) => {
                println!(
                    "{} [{}] {}: {}",
                    "✗".red().bold(),
                    outcome.step,
                    outcome.op,
                    err
                );
            }
        }
    }
}
