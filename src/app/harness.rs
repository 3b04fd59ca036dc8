use crate::adapters::build_prop::{load_snapshots, write_snapshot};
use crate::config::HarnessSettings;
use crate::core::engine::vendor_load_properties;
use crate::domain::model::OverrideReport;
use crate::utils::error::Result;
use crate::utils::files::write_file;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HarnessReport {
    pub generated_at: DateTime<Utc>,
    pub dry_run: bool,
    #[serde(flatten)]
    pub report: OverrideReport,
}

/// Runs the boot entry point once against build.prop snapshots.
pub fn run(settings: &HarnessSettings) -> Result<HarnessReport> {
    tracing::info!("📁 Loading {} property snapshot(s)", settings.props.len());
    let mut store = load_snapshots(&settings.props)?;
    tracing::debug!("Store holds {} properties", store.len());

    let report = HarnessReport {
        generated_at: Utc::now(),
        dry_run: settings.dry_run,
        report: vendor_load_properties(&mut store),
    };

    if settings.dry_run {
        tracing::info!("🔍 DRY RUN - no files written");
        return Ok(report);
    }

    // 先序列化報告，避免寫出一半的輸出
    let report_json = match &settings.report {
        Some(_) => Some(serde_json::to_string_pretty(&report)?),
        None => None,
    };

    if let Some(output) = &settings.output {
        write_snapshot(&store, output)?;
        tracing::info!("📁 Properties written to: {}", output);
    }

    if let (Some(path), Some(json)) = (&settings.report, report_json) {
        write_file(path, json.as_bytes())?;
        tracing::info!("📁 Report written to: {}", path);
    }

    Ok(report)
}
