pub mod consoles;
pub mod games;

pub use consoles::Entity as Consoles;
pub use consoles::Model as Console;
pub use games::Entity as Games;
pub use games::Model as Game;
