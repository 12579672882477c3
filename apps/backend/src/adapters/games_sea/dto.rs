//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCreate {
    pub title: String,
    pub console_id: i64,
}

impl GameCreate {
    pub fn new(title: impl Into<String>, console_id: i64) -> Self {
        Self {
            title: title.into(),
            console_id,
        }
    }
}
