use clap::Parser;
use sbom_csv::sbom_document::policies::HashPolicy;
use sbom_csv::shared::Result;
use std::path::PathBuf;

use crate::config::ConfigFile;

/// Flatten the component list of a CycloneDX JSON SBOM into a CSV report
#[derive(Parser, Debug)]
#[command(name = "sbom-csv")]
#[command(version)]
#[command(about = "Flatten a CycloneDX JSON SBOM into a CSV component report", long_about = None)]
pub struct Args {
    /// Path to the CycloneDX JSON document
    #[arg(long = "in", value_name = "PATH")]
    pub input: Option<String>,

    /// Path of the CSV report to create (overwritten if it exists)
    #[arg(long = "out", value_name = "PATH")]
    pub output: Option<String>,

    /// Which hash fills the hash-md5 column: first (any algorithm) or md5
    #[arg(long, value_name = "POLICY")]
    pub hash_policy: Option<HashPolicy>,

    /// Path to a YAML config file (defaults to ./sbom-csv.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

/// Options after merging command-line flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub hash_policy: HashPolicy,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Flags win over config values; empty strings count as unset
    pub fn merge_with(self, config: ConfigFile) -> Result<RunOptions> {
        let hash_policy = match self.hash_policy {
            Some(policy) => policy,
            None => config.hash_policy()?.unwrap_or_default(),
        };

        Ok(RunOptions {
            input: non_empty(self.input)
                .or_else(|| non_empty(config.input))
                .map(PathBuf::from),
            output: non_empty(self.output)
                .or_else(|| non_empty(config.output))
                .map(PathBuf::from),
            hash_policy,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
