use anyhow::{Context as _, Result};
use clap::Parser;
use sleep_etl::config::EtlConfig;
use sleep_etl::driver::run_etl;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sleep-etl",
    about = "Clean a sleep health and lifestyle CSV export"
)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raw CSV to read. Defaults to Sleep_health_and_lifestyle_dataset.csv
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Cleaned CSV to write ({date} is expanded). Defaults to clean_sleep.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the summary as JSON to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Directory for rotated log files
    #[arg(long, env = "SLEEP_ETL_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<EtlConfig> {
        let mut config = match &self.config {
            Some(path) => EtlConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => EtlConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if self.summary_json.is_some() {
            config.summary_json.clone_from(&self.summary_json);
        }
        if self.log_dir.is_some() {
            config.log_dir.clone_from(&self.log_dir);
        }
        Ok(config)
    }
}

pub fn run(config: &EtlConfig) -> Result<()> {
    let outcome = run_etl(config).with_context(|| {
        format!(
            "ETL run failed ({} -> {})",
            config.input.display(),
            config.output.display()
        )
    })?;

    println!("{}", outcome.summary);
    println!("Saved: {}", outcome.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_gives_fixed_paths() {
        let cli = Cli::try_parse_from(["sleep-etl"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.input, PathBuf::from("Sleep_health_and_lifestyle_dataset.csv"));
        assert_eq!(config.output, PathBuf::from("clean_sleep.csv"));
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::try_parse_from(["sleep-etl", "-i", "raw.csv", "-o", "out/{date}.csv"])
            .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.input, PathBuf::from("raw.csv"));
        assert_eq!(config.output, PathBuf::from("out/{date}.csv"));
    }
}
