use log::{debug, warn};

use super::fields;
use crate::domain::Tournament;
use crate::errors::{AssemblyFailure, ExtractError};
use crate::links::ChessResultsLinks;

/// Assembles [`Tournament`] records from tournament homepages
pub struct TournamentParser {
    links: ChessResultsLinks,
}

impl TournamentParser {
    pub fn new(links: ChessResultsLinks) -> Self {
        Self { links }
    }

    /// Extract every field of the tournament page. All or nothing: any
    /// failure is reported as [`ExtractError::TournamentInfoUnavailable`].
    pub fn parse(&self, key: &str, html: &str) -> Result<Tournament, ExtractError> {
        self.assemble(key, html).map_err(|failure| {
            warn!("Tournament {} has no extractable info: {}", key, failure);
            ExtractError::from(failure)
        })
    }

    fn assemble(&self, key: &str, html: &str) -> Result<Tournament, AssemblyFailure> {
        let name = fields::tournament_name(html).ok_or(AssemblyFailure::MissingName)?;
        let group = fields::tournament_group(html);
        let max_round = fields::max_round(html);
        let current_round = fields::current_round(html);
        let is_final = is_final(max_round, current_round)?;

        debug!(
            "Tournament {}: {:?} round {:?}/{:?}",
            key, name, current_round, max_round
        );

        Ok(Tournament {
            key: key.to_string(),
            url: self.links.homepage(key),
            name,
            group,
            is_final,
            current_round: current_round.map(str::to_string),
            max_round: max_round.map(str::to_string),
            reserved: None,
        })
    }
}

// --- Round Comparison ---

fn is_final(max_round: Option<&str>, current_round: Option<&str>) -> Result<bool, AssemblyFailure> {
    match (max_round, current_round) {
        (Some(max), Some(current)) => {
            Ok(parse_round("max round", max)? == parse_round("current round", current)?)
        }
        _ => Ok(false),
    }
}

fn parse_round(field: &'static str, value: &str) -> Result<i64, AssemblyFailure> {
    value
        .trim()
        .parse()
        .map_err(|source| AssemblyFailure::InvalidRound {
            field,
            value: value.to_string(),
            source,
        })
}
