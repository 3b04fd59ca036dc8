pub mod toml_config;

use crate::config::toml_config::{TomlConfig, LOG_FORMATS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_one_of, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "model-override")]
#[command(about = "Resolve and apply model name overrides against build.prop snapshots")]
pub struct CliConfig {
    /// build.prop snapshots, loaded in order
    #[arg(long, value_delimiter = ',')]
    pub props: Vec<String>,

    /// Write the resulting properties here
    #[arg(long)]
    pub output: Option<String>,

    /// Write a JSON report here
    #[arg(long)]
    pub report: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Resolve and print without writing any files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先。
    pub fn into_settings(self) -> Result<HarnessSettings> {
        let mut settings = match &self.config {
            Some(path) => HarnessSettings::from_toml(TomlConfig::from_file(path)?),
            None => HarnessSettings::default(),
        };

        if !self.props.is_empty() {
            settings.props = self.props;
        }
        if self.output.is_some() {
            settings.output = self.output;
        }
        if self.report.is_some() {
            settings.report = self.report;
        }
        settings.dry_run |= self.dry_run;
        settings.verbose |= self.verbose;
        if self.json_logs {
            settings.log_format = "json".to_string();
        }

        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessSettings {
    pub props: Vec<String>,
    pub output: Option<String>,
    pub report: Option<String>,
    pub dry_run: bool,
    pub verbose: bool,
    pub log_format: String,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            props: Vec::new(),
            output: None,
            report: None,
            dry_run: false,
            verbose: false,
            log_format: "compact".to_string(),
        }
    }
}

impl HarnessSettings {
    pub fn from_toml(config: TomlConfig) -> Self {
        let verbose = config.verbose();
        let log_format = config.log_format().to_string();
        Self {
            props: config.store.props,
            output: config.store.output,
            report: config.report.map(|r| r.path),
            dry_run: false,
            verbose,
            log_format,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl Validate for HarnessSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("props", &self.props)?;
        for path in &self.props {
            validate_path("props", path)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        validate_one_of("log_format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}
