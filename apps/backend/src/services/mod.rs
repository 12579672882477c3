pub mod consoles;
pub mod games;
