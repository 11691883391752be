pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pesel-tools")]
#[command(about = "Validate PESEL numbers and scramble text files")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate PESEL numbers and show the birth date and gender they encode
    Pesel(PeselArgs),
    /// Scramble the interior letters of every word in a text file
    Scramble(ScrambleArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct PeselArgs {
    /// Numbers to validate; read one per line from stdin when omitted
    pub codes: Vec<String>,

    /// Print one JSON object per number
    #[arg(long)]
    pub json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct ScrambleArgs {
    /// Text file to scramble
    pub input: String,

    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long)]
    pub min_word_length: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the scrambled text instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[cfg(feature = "cli")]
impl ScrambleArgs {
    /// Applies the command-line overrides on top of the file configuration.
    pub fn apply_to(&self, config: &mut toml_config::TomlConfig) {
        if let Some(output_path) = &self.output_path {
            config.scramble.output_path = output_path.clone();
        }
        if let Some(min) = self.min_word_length {
            config.scramble.min_word_length = min;
        }
        if self.seed.is_some() {
            config.scramble.seed = self.seed;
        }
    }
}
