//! Employee directory behind the name endpoint
//!
//! The endpoint resolves identifiers through this seam. Matching is an
//! opaque string comparison on the stored key; identifiers are never
//! validated or normalised on this side.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directory record for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub rut: String,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    pub fn new(rut: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            rut: rut.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Name as rendered by the lookup flow.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Resolution of identifiers to display names.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// `None` when no employee carries the identifier.
    async fn display_name(&self, identifier: &str) -> Option<String>;
}

/// In-memory directory keyed by RUT.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    employees: HashMap<String, Employee>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-loaded with the demo employees.
    pub fn fixture() -> Self {
        let mut directory = Self::new();
        for employee in [
            Employee::new("20.890.678-9", "John", "Doe"),
            Employee::new("12.345.678-1", "Mary", "Johnson"),
            Employee::new("16.245.678-5", "Laura", "Miller"),
            Employee::new("11.777.111-5", "Sofia", "Martinez"),
            Employee::new("17.876.543-8", "Hiroshi", "Tanaka"),
        ] {
            directory.insert(employee);
        }
        directory
    }

    pub fn insert(&mut self, employee: Employee) {
        self.employees.insert(employee.rut.clone(), employee);
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryDirectory {
    async fn display_name(&self, identifier: &str) -> Option<String> {
        self.employees
            .get(identifier)
            .map(Employee::display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_resolves_seeded_rut() {
        let directory = InMemoryDirectory::fixture();
        let name = tokio_test::block_on(directory.display_name("12.345.678-1"));
        assert_eq!(name, Some("Mary Johnson".to_string()));
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        let directory = InMemoryDirectory::fixture();
        let name = tokio_test::block_on(directory.display_name("99.999.999-9"));
        assert_eq!(name, None);
    }

    #[test]
    fn identifiers_match_as_opaque_strings() {
        let directory = InMemoryDirectory::fixture();
        // Same digits, different formatting: no normalisation happens.
        let name = tokio_test::block_on(directory.display_name("12345678-1"));
        assert_eq!(name, None);
    }

    #[test]
    fn inserted_employee_is_resolvable() {
        let mut directory = InMemoryDirectory::new();
        assert!(directory.is_empty());
        directory.insert(Employee::new("19.877.654-4", "Lucas", "Rodriguez"));
        let name = tokio_test::block_on(directory.display_name("19.877.654-4"));
        assert_eq!(name, Some("Lucas Rodriguez".to_string()));
    }
}
