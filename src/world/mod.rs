mod errors;
mod loader;
mod model;
mod validator;

pub use errors::MapError;
pub use loader::{load_map_from_file, load_map_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Map, Room};
pub use validator::{ValidationError, validate_map};
