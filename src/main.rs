use anyhow::Result;

use bod_archive::cli::Command;
use bod_archive::{
    handle_analyze, handle_audit, handle_championships, handle_completions, handle_extract,
    handle_fix_players, handle_pipeline, interpret,
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
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Extract { workbook, output_dir } => handle_extract(workbook, output_dir),
        Command::FixPlayers { output_dir, profile } => handle_fix_players(output_dir, profile),
        Command::Championships { output_dir } => handle_championships(output_dir),
        Command::Pipeline { workbook, output_dir } => handle_pipeline(workbook, output_dir),
        Command::Audit { workbook, output_dir } => handle_audit(workbook, output_dir),
        Command::Analyze { workbook } => handle_analyze(workbook),
        Command::Completions { shell } => handle_completions(shell),
    }
}
