use crate::config::SiteSettings;

/// Round requested by the spreadsheet export when the caller names none
pub const DEFAULT_EXCEL_ROUND: u32 = 9;

const PAGE_SUFFIX: &str = ".aspx";

/// Builds and recognises tournament URLs on the results site
#[derive(Debug, Clone, PartialEq)]
pub struct ChessResultsLinks {
    base_url: String,
}

impl ChessResultsLinks {
    pub fn new(settings: &SiteSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Tournament homepage
    pub fn homepage(&self, key: &str) -> String {
        format!("{}?lan=1&turder=YES", self.page(key))
    }

    /// Pairings and results of a single round
    pub fn round_results(&self, key: &str, round: u32) -> String {
        format!("{}?lan=1&art=1&rd={}&turdet=YES", self.page(key), round)
    }

    /// Spreadsheet export of a round, round 9 when none is given
    pub fn excel_export(&self, key: &str, round: Option<u32>) -> String {
        format!(
            "{}?lan=1&art=1&zeilen=0&prt=4&excel=2010&rd={}",
            self.page(key),
            round.unwrap_or(DEFAULT_EXCEL_ROUND)
        )
    }

    /// True when `value` starts with this site's tournament prefix and names an `.aspx` page
    pub fn is_tournament_link(&self, value: &str) -> bool {
        value
            .strip_prefix(&self.tournament_prefix())
            .is_some_and(|rest| rest.contains(PAGE_SUFFIX))
    }

    // --- URL Building ---

    fn tournament_prefix(&self) -> String {
        format!("{}/tnr", self.base_url)
    }

    fn page(&self, key: &str) -> String {
        format!("{}{}{}", self.tournament_prefix(), key, PAGE_SUFFIX)
    }
}
