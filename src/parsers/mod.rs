mod entities;
pub mod fields;
mod search;
mod tournament;
pub mod window;

pub use entities::decode_html_entities;
pub use search::parse_search_results;
pub use tournament::TournamentParser;
pub use window::{Direction, FieldWindow};
