use crate::domain::ports::{PropertyArea, PropertyStore};
use crate::utils::error::{OverrideError, Result};
use crate::utils::validation::validate_property_name;
use std::collections::HashMap;

/// Includes the trailing NUL, so mutable values hold at most 91 bytes.
pub const PROP_VALUE_MAX: usize = 92;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropHandle(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropEntry {
    pub name: String,
    pub value: String,
    pub serial: u32,
}

/// In-memory property area. Keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPropertyStore {
    entries: Vec<PropEntry>,
    index: HashMap<String, usize>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store the way the boot loader does, before any `ro.` lock applies.
    /// Later duplicates replace earlier values.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut store = Self::new();
        for (name, value) in pairs {
            store.load(name, value);
        }
        store
    }

    pub(crate) fn load(&mut self, name: &str, value: &str) {
        match self.index.get(name) {
            Some(&idx) => self.entries[idx].value = value.to_string(),
            None => self.push(name, value),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropEntry> {
        self.entries.iter()
    }

    pub fn serial(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&idx| self.entries[idx].serial)
    }

    fn push(&mut self, name: &str, value: &str) {
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(PropEntry {
            name: name.to_string(),
            value: value.to_string(),
            serial: 0,
        });
    }

    fn check_value(name: &str, value: &str) -> Result<()> {
        if !name.starts_with("ro.") && value.len() >= PROP_VALUE_MAX {
            return Err(OverrideError::ValueTooLong {
                name: name.to_string(),
                len: value.len(),
            });
        }
        Ok(())
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get(&self, name: &str) -> Option<String> {
        self.index
            .get(name)
            .map(|&idx| self.entries[idx].value.clone())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match self.find(name) {
            Some(_) if name.starts_with("ro.") => Err(OverrideError::ReadOnlyProperty {
                name: name.to_string(),
            }),
            Some(handle) => self.update(handle, value),
            None => self.add(name, value),
        }
    }
}

impl PropertyArea for MemoryPropertyStore {
    type Handle = PropHandle;

    fn find(&self, name: &str) -> Option<PropHandle> {
        self.index.get(name).copied().map(PropHandle)
    }

    fn update(&mut self, handle: PropHandle, value: &str) -> Result<()> {
        let entry = self
            .entries
            .get_mut(handle.0)
            .ok_or(OverrideError::StaleHandle { handle: handle.0 })?;
        Self::check_value(&entry.name, value)?;
        entry.value = value.to_string();
        entry.serial = entry.serial.wrapping_add(1);
        Ok(())
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        validate_property_name(name)?;
        Self::check_value(name, value)?;
        if self.index.contains_key(name) {
            return Err(OverrideError::DuplicateProperty {
                name: name.to_string(),
            });
        }
        self.push(name, value);
        Ok(())
    }
}
