pub mod settings;

pub use settings::{AppConfig, SiteSettings, DEFAULT_BASE_URL};
