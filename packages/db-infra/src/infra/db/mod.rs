pub mod core;

pub use core::{bootstrap_db, connect, orchestrate_migration, sanitize_db_url};
