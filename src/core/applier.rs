use crate::domain::model::{AppliedWrite, PropertyNamespace, Resolution, WriteKind};
use crate::domain::ports::PropertyArea;
use crate::utils::error::Result;

/// Find-or-create write that bypasses the read-only guard.
pub fn override_property<A: PropertyArea + ?Sized>(
    store: &mut A,
    name: &str,
    value: &str,
) -> Result<WriteKind> {
    let kind = store.force_set(name, value)?;
    tracing::debug!("{:?} {} = {}", kind, name, value);
    Ok(kind)
}

/// 每個 namespace 先寫 project 結果，再寫 SKU 結果（後寫者優先）。
pub fn apply_overrides<A: PropertyArea + ?Sized>(
    store: &mut A,
    resolution: &Resolution,
) -> Vec<AppliedWrite> {
    let mut writes = Vec::new();

    for namespace in PropertyNamespace::ALL {
        let key = namespace.model_key();
        for (axis, model) in resolution.writes() {
            let kind = match override_property(store, &key, model) {
                Ok(kind) => {
                    tracing::info!("✅ {:?} {} = {} ({:?})", kind, key, model, axis);
                    kind
                }
                Err(e) => {
                    tracing::error!("❌ Failed to override {}: {}", key, e);
                    WriteKind::Failed
                }
            };
            writes.push(AppliedWrite {
                key: key.clone(),
                value: model.to_string(),
                axis,
                kind,
            });
        }
    }

    writes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPropertyStore;
    use crate::domain::model::Axis;
    use crate::domain::ports::PropertyStore;

    #[test]
    fn test_override_updates_locked_property() {
        let mut store = MemoryPropertyStore::from_pairs([("ro.product.product.model", "OnePlus")]);
        assert!(store.set("ro.product.product.model", "CPH2381").is_err());

        let kind = override_property(&mut store, "ro.product.product.model", "CPH2381").unwrap();
        assert_eq!(kind, WriteKind::Updated);
        assert_eq!(store.get("ro.product.product.model").as_deref(), Some("CPH2381"));
    }

    #[test]
    fn test_override_creates_missing_property() {
        let mut store = MemoryPropertyStore::new();
        let kind = override_property(&mut store, "ro.product.odm.model", "CPH2513").unwrap();
        assert_eq!(kind, WriteKind::Created);
        assert_eq!(store.get("ro.product.odm.model").as_deref(), Some("CPH2513"));
    }

    #[test]
    fn test_apply_orders_namespace_then_axis() {
        let mut store = MemoryPropertyStore::new();
        let resolution = Resolution {
            by_project: Some("GN2200"),
            by_sku: Some("CPH2513"),
            diagnostics: vec![],
        };

        let writes = apply_overrides(&mut store, &resolution);
        assert_eq!(writes.len(), 16);
        assert_eq!(writes[0].key, "ro.product.bootimage.model");
        assert_eq!(writes[0].axis, Axis::Project);
        assert_eq!(writes[0].kind, WriteKind::Created);
        assert_eq!(writes[1].key, "ro.product.bootimage.model");
        assert_eq!(writes[1].axis, Axis::Sku);
        assert_eq!(writes[1].kind, WriteKind::Updated);

        for namespace in PropertyNamespace::ALL {
            assert_eq!(store.get(&namespace.model_key()).as_deref(), Some("CPH2513"));
        }
    }

    /// Area that refuses to create new entries.
    struct FrozenArea(MemoryPropertyStore);

    impl PropertyStore for FrozenArea {
        fn get(&self, name: &str) -> Option<String> {
            self.0.get(name)
        }

        fn set(&mut self, name: &str, value: &str) -> Result<()> {
            self.0.set(name, value)
        }
    }

    impl PropertyArea for FrozenArea {
        type Handle = <MemoryPropertyStore as PropertyArea>::Handle;

        fn find(&self, name: &str) -> Option<Self::Handle> {
            self.0.find(name)
        }

        fn update(&mut self, handle: Self::Handle, value: &str) -> Result<()> {
            self.0.update(handle, value)
        }

        fn add(&mut self, name: &str, _value: &str) -> Result<()> {
            Err(crate::utils::error::OverrideError::ReadOnlyProperty {
                name: name.to_string(),
            })
        }
    }

    #[test]
    fn test_failed_write_does_not_stop_other_namespaces() {
        let mut store = FrozenArea(MemoryPropertyStore::from_pairs([(
            "ro.product.vendor.model",
            "OnePlus",
        )]));
        let resolution = Resolution {
            by_project: None,
            by_sku: Some("CPH2467"),
            diagnostics: vec![],
        };

        let writes = apply_overrides(&mut store, &resolution);
        assert_eq!(writes.len(), 8);
        let updated: Vec<&str> = writes
            .iter()
            .filter(|w| w.kind == WriteKind::Updated)
            .map(|w| w.key.as_str())
            .collect();
        assert_eq!(updated, vec!["ro.product.vendor.model"]);
        assert_eq!(
            writes.iter().filter(|w| w.kind == WriteKind::Failed).count(),
            7
        );
        assert_eq!(store.get("ro.product.vendor.model").as_deref(), Some("CPH2467"));
    }

    #[test]
    fn test_apply_empty_resolution_writes_nothing() {
        let mut store = MemoryPropertyStore::new();
        let writes = apply_overrides(&mut store, &Resolution::default());
        assert!(writes.is_empty());
        assert!(store.is_empty());
    }
}
