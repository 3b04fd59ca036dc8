use crate::core::applier::apply_overrides;
use crate::core::identity::read_identity;
use crate::core::rules::{market_for, resolve};
use crate::domain::model::{Diagnostic, OverrideReport};
use crate::domain::ports::PropertyArea;

pub struct OverrideEngine<'a, A: PropertyArea> {
    store: &'a mut A,
}

impl<'a, A: PropertyArea> OverrideEngine<'a, A> {
    pub fn new(store: &'a mut A) -> Self {
        Self { store }
    }

    pub fn run(self) -> OverrideReport {
        tracing::info!("Resolving model overrides");

        let signals = read_identity(&*self.store);
        let resolution = resolve(&signals);
        for diagnostic in &resolution.diagnostics {
            log_diagnostic(diagnostic);
        }

        let writes = apply_overrides(self.store, &resolution);

        let report = OverrideReport {
            signals,
            resolution,
            writes,
        };
        if report.failed_writes() > 0 {
            tracing::error!("{} override writes failed", report.failed_writes());
        } else if let Some(line) = summary_line(&report) {
            tracing::info!("{}", line);
        }
        report
    }
}

/// Boot entry point. Never fails; problems end up in the log and the report.
pub fn vendor_load_properties<A: PropertyArea>(store: &mut A) -> OverrideReport {
    OverrideEngine::new(store).run()
}

/// Winning model, only when every write landed.
fn summary_line(report: &OverrideReport) -> Option<String> {
    if report.failed_writes() > 0 {
        return None;
    }
    let model = report.final_model()?;
    Some(format!(
        "Model overridden to {} ({})",
        model,
        market_for(model).unwrap_or("unknown market")
    ))
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic {
        Diagnostic::UnexpectedProject { project_code } => {
            tracing::error!("Unexpected project name: {}", project_code);
        }
        Diagnostic::UnexpectedSku { hardware_sku } => {
            tracing::error!("Unexpected SKU: {}", hardware_sku);
        }
        Diagnostic::UnrecognizedDevice {
            hardware_sku,
            device_codename,
        } => {
            tracing::warn!(
                "Unrecognized device {:?} for SKU {}",
                device_codename,
                hardware_sku
            );
        }
    }
}
