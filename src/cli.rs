use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::adapter::ProfileKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "BOD Scores History archive tools")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Extract every sheet of the workbook into JSON files
    Extract {
        /// Workbook path (defaults to BOD_WORKBOOK or the bundled file name)
        workbook: Option<PathBuf>,
        /// Output directory (defaults to BOD_OUTPUT_DIR or `json`)
        output_dir: Option<PathBuf>,
    },
    /// Reshape All Players.json for a downstream consumer
    FixPlayers {
        /// Directory holding the extracted JSON files
        output_dir: Option<PathBuf>,
        /// Target format
        #[arg(long, value_enum, default_value_t = ProfileKind::App)]
        profile: ProfileKind,
    },
    /// Recompute player championships from All Scores.json
    Championships {
        /// Directory holding the extracted JSON files
        output_dir: Option<PathBuf>,
    },
    /// Extract, then fix players in the application format
    Pipeline {
        workbook: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    },
    /// Compare the workbook with the JSON files produced from it
    Audit {
        workbook: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    },
    /// Print the structure of every sheet in the workbook
    Analyze {
        workbook: Option<PathBuf>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_paths_are_optional() {
        let cli = Cli::try_parse_from(["bod_archive", "extract"]).unwrap();
        assert_eq!(cli.command, Command::Extract { workbook: None, output_dir: None });

        let cli = Cli::try_parse_from(["bod_archive", "fix-players", "out", "--profile", "import"]).unwrap();
        assert_eq!(
            cli.command,
            Command::FixPlayers {
                output_dir: Some(PathBuf::from("out")),
                profile: ProfileKind::Import,
            }
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
