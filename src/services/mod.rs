pub mod extraction;

pub use extraction::{to_json, ExtractionService, LinkKind};
