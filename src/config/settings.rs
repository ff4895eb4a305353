pub const DEFAULT_BASE_URL: &str = "https://chess-results.com";

/// Settings describing the results site the links point at
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SiteSettings {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub site: SiteSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            site: SiteSettings::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.site = SiteSettings::new(base_url);
        self
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}
