use crate::domain::model::{Diagnostic, IdentitySignals, Resolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatcher {
    Project(i32),
    Sku(i32),
    SkuAndDevice(i32, &'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideRule {
    pub matcher: RuleMatcher,
    pub model: &'static str,
    pub market: &'static str,
}

impl OverrideRule {
    const fn project(code: i32, model: &'static str, market: &'static str) -> Self {
        Self {
            matcher: RuleMatcher::Project(code),
            model,
            market,
        }
    }

    const fn sku(sku: i32, model: &'static str, market: &'static str) -> Self {
        Self {
            matcher: RuleMatcher::Sku(sku),
            model,
            market,
        }
    }

    const fn sku_device(
        sku: i32,
        device: &'static str,
        model: &'static str,
        market: &'static str,
    ) -> Self {
        Self {
            matcher: RuleMatcher::SkuAndDevice(sku, device),
            model,
            market,
        }
    }

    pub fn matches(&self, signals: &IdentitySignals) -> bool {
        match self.matcher {
            RuleMatcher::Project(code) => signals.project_code == code,
            RuleMatcher::Sku(sku) => signals.hardware_sku == sku,
            RuleMatcher::SkuAndDevice(sku, device) => {
                signals.hardware_sku == sku && signals.device_codename == device
            }
        }
    }

    fn sku_key(&self) -> Option<i32> {
        match self.matcher {
            RuleMatcher::Sku(sku) | RuleMatcher::SkuAndDevice(sku, _) => Some(sku),
            RuleMatcher::Project(_) => None,
        }
    }
}

// gunnar
pub const PROJECT_RULES: &[OverrideRule] = &[OverrideRule::project(20826, "GN2200", "T-Mobile")];

// larry (OP535DL1) / oscaro (OP5958L1)
pub const SKU_RULES: &[OverrideRule] = &[
    OverrideRule::sku_device(2, "OP535DL1", "CPH2381", "IN"),
    OverrideRule::sku_device(2, "OP5958L1", "CPH2467", "IN"),
    OverrideRule::sku_device(6, "OP535DL1", "CPH2409", "GL"),
    OverrideRule::sku_device(6, "OP5958L1", "CPH2465", "GL"),
    OverrideRule::sku(14, "CPH2513", "NA"),
];

pub fn resolve(signals: &IdentitySignals) -> Resolution {
    let mut diagnostics = Vec::new();

    let by_project = first_match(PROJECT_RULES, signals);
    if by_project.is_none() {
        diagnostics.push(Diagnostic::UnexpectedProject {
            project_code: signals.project_code,
        });
    }

    let by_sku = first_match(SKU_RULES, signals);
    if by_sku.is_none() {
        let known_sku = SKU_RULES
            .iter()
            .any(|rule| rule.sku_key() == Some(signals.hardware_sku));
        diagnostics.push(if known_sku {
            Diagnostic::UnrecognizedDevice {
                hardware_sku: signals.hardware_sku,
                device_codename: signals.device_codename.clone(),
            }
        } else {
            Diagnostic::UnexpectedSku {
                hardware_sku: signals.hardware_sku,
            }
        });
    }

    Resolution {
        by_project,
        by_sku,
        diagnostics,
    }
}

/// Commercial market a model string is sold in.
pub fn market_for(model: &str) -> Option<&'static str> {
    PROJECT_RULES
        .iter()
        .chain(SKU_RULES)
        .find(|rule| rule.model == model)
        .map(|rule| rule.market)
}

fn first_match(rules: &[OverrideRule], signals: &IdentitySignals) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| rule.matches(signals))
        .map(|rule| rule.model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(project_code: i32, hardware_sku: i32, device: &str) -> IdentitySignals {
        IdentitySignals {
            device_codename: device.to_string(),
            project_code,
            hardware_sku,
        }
    }

    #[test]
    fn test_project_axis() {
        let resolution = resolve(&signals(20826, 0, ""));
        assert_eq!(resolution.by_project, Some("GN2200"));
        assert_eq!(resolution.by_sku, None);
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::UnexpectedSku { hardware_sku: 0 }]
        );
    }

    #[test]
    fn test_sku_axis_disambiguates_by_device() {
        assert_eq!(resolve(&signals(0, 2, "OP535DL1")).by_sku, Some("CPH2381"));
        assert_eq!(resolve(&signals(0, 2, "OP5958L1")).by_sku, Some("CPH2467"));
        assert_eq!(resolve(&signals(0, 6, "OP535DL1")).by_sku, Some("CPH2409"));
        assert_eq!(resolve(&signals(0, 6, "OP5958L1")).by_sku, Some("CPH2465"));
    }

    #[test]
    fn test_sku_14_ignores_device() {
        for device in ["", "OP535DL1", "anything"] {
            assert_eq!(resolve(&signals(0, 14, device)).by_sku, Some("CPH2513"));
        }
    }

    #[test]
    fn test_unexpected_values_are_reported_once_per_axis() {
        let resolution = resolve(&signals(12345, 99, "OP535DL1"));
        assert!(resolution.is_empty());
        assert_eq!(
            resolution.diagnostics,
            vec![
                Diagnostic::UnexpectedProject {
                    project_code: 12345
                },
                Diagnostic::UnexpectedSku { hardware_sku: 99 },
            ]
        );
    }

    #[test]
    fn test_known_sku_unknown_device() {
        let resolution = resolve(&signals(20826, 2, "unknown-codename"));
        assert_eq!(resolution.by_project, Some("GN2200"));
        assert_eq!(resolution.by_sku, None);
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::UnrecognizedDevice {
                hardware_sku: 2,
                device_codename: "unknown-codename".to_string(),
            }]
        );
    }

    #[test]
    fn test_market_for_model() {
        assert_eq!(market_for("GN2200"), Some("T-Mobile"));
        assert_eq!(market_for("CPH2467"), Some("IN"));
        assert_eq!(market_for("CPH2465"), Some("GL"));
        assert_eq!(market_for("CPH2513"), Some("NA"));
        assert_eq!(market_for("OnePlus"), None);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let input = signals(20826, 14, "OP5958L1");
        assert_eq!(resolve(&input), resolve(&input));
    }
}
