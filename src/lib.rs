pub mod adapter;
pub mod aggregate;
pub mod audit;
pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod services;
pub mod store;
pub mod workbook;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::adapter::ProfileKind;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::audit::{AnalysisService, AuditService};
use crate::services::championships::ChampionshipService;
use crate::services::extraction::ExtractionService;
use crate::services::players::PlayerFormatService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_extract(workbook: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_paths(workbook, output_dir);
    let service = ExtractionService::new(config)?;
    service.run()?;
    Ok(())
}

pub fn handle_fix_players(output_dir: Option<PathBuf>, profile: ProfileKind) -> Result<()> {
    let config = AppConfig::new().with_paths(None, output_dir);
    let service = PlayerFormatService::new(config, profile)?;
    service.run()?;
    Ok(())
}

pub fn handle_championships(output_dir: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_paths(None, output_dir);
    let service = ChampionshipService::new(config)?;
    service.run()?;
    Ok(())
}

pub fn handle_pipeline(workbook: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_paths(workbook, output_dir);
    ExtractionService::new(config.clone())?.run()?;
    PlayerFormatService::new(config, ProfileKind::App)?.run()?;
    Ok(())
}

pub fn handle_audit(workbook: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_paths(workbook, output_dir);
    AuditService::new(config).run()?;
    Ok(())
}

pub fn handle_analyze(workbook: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_paths(workbook, None);
    AnalysisService::new(config).run()?;
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
