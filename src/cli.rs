//! CLI argument parsing module for depver

use crate::registry::DEFAULT_REPOSITORY_URL;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Gradle dependency latest-version checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depver",
    version,
    about = "Reports the latest published version of each dependency declared in a Gradle build script"
)]
pub struct CliArgs {
    /// Build script to inspect ("-" reads from stdin)
    #[arg(default_value = "build.gradle")]
    pub path: PathBuf,

    /// Repository base URL for metadata lookups
    #[arg(long, default_value = DEFAULT_REPOSITORY_URL)]
    pub repository: String,

    /// Extra configuration keywords to recognize (can be specified multiple times)
    #[arg(long = "configuration", action = ArgAction::Append)]
    pub configurations: Vec<String>,

    /// Timeout for each metadata request, in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Maximum number of metadata requests in flight
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub concurrency: usize,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable quiet mode - minimal output, no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Returns true if the build script should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}
