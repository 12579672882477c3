//! DTOs for consoles_sea adapter.

/// DTO for creating a new console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleCreate {
    pub name: String,
}

impl ConsoleCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
