pub mod path_id;
pub mod validated_json;

pub use path_id::{ConsoleId, GameId};
pub use validated_json::ValidatedJson;
