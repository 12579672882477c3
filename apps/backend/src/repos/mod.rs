//! Repository functions for the domain layer.

pub mod consoles;
pub mod games;
