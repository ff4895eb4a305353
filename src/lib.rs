pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod links;
pub mod parsers;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use std::path::Path;

use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::services::{to_json, ExtractionService, LinkKind};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_service(base_url: &str) -> ExtractionService {
    let config = AppConfig::new().with_base_url(base_url);
    ExtractionService::new(config)
}

pub fn handle_search(service: &ExtractionService, file: &Path) -> Result<()> {
    let entries = service.search(file)?;
    println!("{}", to_json(&entries, "search results")?);
    Ok(())
}

pub fn handle_tournament(service: &ExtractionService, key: &str, file: &Path) -> Result<()> {
    let tournament = service.tournament(key, file)?;
    println!("{}", to_json(&tournament, "tournament")?);
    Ok(())
}

pub fn handle_link(
    service: &ExtractionService,
    key: &str,
    kind: LinkKind,
    round: Option<u32>,
) -> Result<()> {
    println!("{}", service.link(key, kind, round)?);
    Ok(())
}

pub fn handle_key(service: &ExtractionService, url: &str) -> Result<()> {
    println!("{}", service.key(url)?);
    Ok(())
}

pub fn handle_check(service: &ExtractionService, url: &str) -> Result<()> {
    if service.check(url) {
        println!("{} {}", "yes".green(), url);
    } else {
        println!("{} {}", "no".red(), url);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
