use crate::adapters::memory::MemoryPropertyStore;
use crate::utils::error::{OverrideError, Result};
use crate::utils::files::write_file;
use crate::utils::validation::validate_property_name;
use std::fs;
use std::path::Path;

/// Loads build.prop snapshots in order; later files win.
pub fn load_snapshots<P: AsRef<Path>>(paths: &[P]) -> Result<MemoryPropertyStore> {
    let mut store = MemoryPropertyStore::new();
    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let count = load_str(&mut store, &content, &path.display().to_string())?;
        tracing::debug!("Loaded {} properties from {}", count, path.display());
    }
    Ok(store)
}

/// 解析 `key=value` 內容並寫入 store，回傳載入的筆數。
pub fn load_str(store: &mut MemoryPropertyStore, content: &str, origin: &str) -> Result<usize> {
    let mut count = 0;

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(target) = line.strip_prefix("import ") {
            tracing::debug!("Skipping import of {} in {}", target.trim(), origin);
            continue;
        }

        let parse_error = |message: String| OverrideError::ParseError {
            path: origin.to_string(),
            line: idx + 1,
            message,
        };

        let (name, value) = line
            .split_once('=')
            .ok_or_else(|| parse_error("expected 'key=value'".to_string()))?;
        let name = name.trim();
        validate_property_name(name).map_err(|e| parse_error(e.to_string()))?;

        store.load(name, value.trim());
        count += 1;
    }

    Ok(count)
}

pub fn render(store: &MemoryPropertyStore) -> String {
    store
        .iter()
        .map(|entry| format!("{}={}\n", entry.name, entry.value))
        .collect()
}

pub fn write_snapshot<P: AsRef<Path>>(store: &MemoryPropertyStore, path: P) -> Result<()> {
    write_file(path, render(store).as_bytes())
}
