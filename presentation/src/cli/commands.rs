//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the `extract` command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Status banner followed by the model's markdown
    Text,
    /// The outcome as JSON
    Json,
}

impl From<OutputFormat> for mom_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => mom_domain::OutputFormat::Text,
            OutputFormat::Json => mom_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for mom-generator
#[derive(Parser, Debug)]
#[command(name = "mom-generator")]
#[command(author, version, about = "Minutes of Meeting (MoM) Generator - handwritten notes to a task table")]
#[command(long_about = r#"
mom-generator turns a photo of handwritten meeting notes into a Minutes of
Meeting table (Particulars, Deadline, Status, % Completion) using a hosted
multimodal model.

The API key is read from the GOOGLE_API environment variable at startup.

Configuration files are loaded from (in priority order):
1. MOM_* environment variables
2. --config <path>     Explicit config file
3. ./mom.toml          Project-level config
4. ~/.config/mom-generator/config.toml   Global config

Example:
  mom-generator                       Serve the upload page on 127.0.0.1:8501
  mom-generator serve --bind 0.0.0.0:8080
  mom-generator extract notes.jpg
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the upload page (default)
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Extract the MoM table from a local image file
    Extract {
        /// Image file (jpg, jpeg or png)
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["mom-generator"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_serve_with_bind() {
        let cli = Cli::parse_from(["mom-generator", "serve", "--bind", "0.0.0.0:9000"]);
        match cli.command {
            Some(Command::Serve { bind }) => assert_eq!(bind.as_deref(), Some("0.0.0.0:9000")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_extract_with_json_and_global_flags() {
        let cli = Cli::parse_from(["mom-generator", "extract", "notes.png", "-o", "json", "-vv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Extract { path, output }) => {
                assert_eq!(path, PathBuf::from("notes.png"));
                assert!(matches!(output, OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            mom_domain::OutputFormat::from(OutputFormat::Json),
            mom_domain::OutputFormat::Json
        );
    }
}
