pub mod check;
pub mod convert;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use ouisql_common::config::{self, Config, Source, DEFAULT_OUTPUT, DEFAULT_REGISTRY_URL};

#[derive(Parser)]
#[command(name = "ouisql")]
#[command(version)]
#[command(about = "Turns the Wireshark vendor registry into SQL.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Registry to download
    #[arg(long, global = true, default_value = DEFAULT_REGISTRY_URL)]
    pub url: String,

    /// Read the registry from a local file instead of downloading it
    #[arg(short, long, global = true, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Client identifier sent as the User-Agent header
    #[arg(long, global = true, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Request timeout; requests never time out when omitted
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Less output (-q hides everything but warnings)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// More output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the registry and write the SQL script
    #[command(alias = "c")]
    Convert {
        /// Where to write the script; an existing file is overwritten
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Fetch and parse the registry, report problems, write nothing
    #[command(alias = "k")]
    Check,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let source = match &self.input {
            Some(path) => Source::File { path: path.clone() },
            None => Source::Remote { url: self.url.clone() },
        };

        let output = match &self.command {
            Commands::Convert { output } => output.clone(),
            Commands::Check => PathBuf::from(DEFAULT_OUTPUT),
        };

        Config {
            source,
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(config::default_user_agent),
            output,
            timeout: self.timeout.map(Duration::from_secs),
            quiet: self.quiet,
        }
    }
}
