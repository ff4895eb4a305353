mod builder;
mod key;

pub use builder::{ChessResultsLinks, DEFAULT_EXCEL_ROUND};
pub use key::tournament_key;
