use anyhow::{Context, Result};
use clap::ValueEnum;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::domain::{SearchResultEntry, Tournament};
use crate::errors::{with_output_context, with_parse_context, with_read_context};
use crate::links::{self, ChessResultsLinks};
use crate::parsers::{self, TournamentParser};

/// Which outbound link to build for a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkKind {
    Homepage,
    Round,
    Excel,
}

/// Drives the parsers over saved pages for the command line
pub struct ExtractionService {
    links: ChessResultsLinks,
    parser: TournamentParser,
}

impl ExtractionService {
    pub fn new(config: AppConfig) -> Self {
        let links = ChessResultsLinks::new(&config.site);
        let parser = TournamentParser::new(links.clone());
        Self { links, parser }
    }

    pub fn search(&self, path: &Path) -> Result<Vec<SearchResultEntry>> {
        let html = Self::read_page(path)?;
        let entries = parsers::parse_search_results(&html);
        info!("  → Found {} tournaments in {}", entries.len(), path.display());
        Ok(entries)
    }

    pub fn tournament(&self, key: &str, path: &Path) -> Result<Tournament> {
        let html = Self::read_page(path)?;
        let tournament = with_parse_context(self.parser.parse(key, &html), "tournament page")?;
        Self::log_rounds(&tournament);
        Ok(tournament)
    }

    pub fn link(&self, key: &str, kind: LinkKind, round: Option<u32>) -> Result<String> {
        let url = match kind {
            LinkKind::Homepage => self.links.homepage(key),
            LinkKind::Round => {
                let round = round.context("A round number is required for round links")?;
                self.links.round_results(key, round)
            }
            LinkKind::Excel => self.links.excel_export(key, round),
        };
        Ok(url)
    }

    pub fn key<'u>(&self, url: &'u str) -> Result<&'u str> {
        links::tournament_key(url).with_context(|| format!("No tournament key in: {}", url))
    }

    pub fn check(&self, url: &str) -> bool {
        self.links.is_tournament_link(url)
    }

    // --- Helpers ---

    fn read_page(path: &Path) -> Result<String> {
        let path_str = path.display().to_string();
        info!("Reading {}", path_str);
        with_read_context(fs::read_to_string(path), &path_str)
    }

    fn log_rounds(tournament: &Tournament) {
        match tournament.rounds_played() {
            Some((current, max)) => info!(
                "  → {}: round {}/{}{}",
                tournament.name,
                current,
                max,
                if tournament.is_final { " (final)" } else { "" }
            ),
            None => info!("  → {}: round information incomplete", tournament.name),
        }
    }
}

/// Render a value as pretty JSON
pub fn to_json<T: Serialize>(value: &T, data_type: &str) -> Result<String> {
    with_output_context(serde_json::to_string_pretty(value), data_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ExtractionService {
        ExtractionService::new(AppConfig::new().with_base_url("https://results.example"))
    }

    #[test]
    fn test_round_link_requires_round() {
        assert!(service().link("1", LinkKind::Round, None).is_err());
        assert_eq!(
            service().link("1", LinkKind::Round, Some(2)).unwrap(),
            "https://results.example/tnr1.aspx?lan=1&art=1&rd=2&turdet=YES"
        );
    }

    #[test]
    fn test_excel_link_defaults() {
        let url = service().link("1", LinkKind::Excel, None).unwrap();
        assert!(url.ends_with("rd=9"));
    }

    #[test]
    fn test_key_and_check() {
        let service = service();
        assert_eq!(service.key("https://results.example/tnr77.aspx").unwrap(), "77");
        assert!(service.key("https://results.example/").is_err());
        assert!(service.check("https://results.example/tnr77.aspx"));
        assert!(!service.check("https://chess-results.com/tnr77.aspx"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = service().search(Path::new("does/not/exist.html")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.html"));
    }

    #[test]
    fn test_tournament_json_uses_camel_case() {
        let tournament = Tournament {
            key: "1".to_string(),
            url: "u".to_string(),
            name: "n".to_string(),
            group: String::new(),
            is_final: true,
            current_round: Some("9".to_string()),
            max_round: Some("9".to_string()),
            reserved: None,
        };
        let json = to_json(&tournament, "tournament").unwrap();
        assert!(json.contains("\"isFinal\": true"));
        assert!(json.contains("\"currentRound\": \"9\""));
        assert!(json.contains("\"maxRound\": \"9\""));
    }
}
