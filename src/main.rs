use anyhow::Result;

use chess_results_scraper::cli::{Cli, Command};
use chess_results_scraper::services::ExtractionService;
use chess_results_scraper::{
    build_service, handle_check, handle_completions, handle_key, handle_link, handle_search,
    handle_tournament, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let service = build_service(&cli.base_url);
    execute_command(&service, &cli)
}

fn execute_command(service: &ExtractionService, cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Search { file } => handle_search(service, file),
        Command::Tournament { key, file } => handle_tournament(service, key, file),
        Command::Link { key, kind, round } => handle_link(service, key, *kind, *round),
        Command::Key { url } => handle_key(service, url),
        Command::Check { url } => handle_check(service, url),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
