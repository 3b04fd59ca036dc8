use crate::domain::model::WriteKind;
use crate::utils::error::Result;

/// Normal property access. `set` honours the read-only convention on `ro.` keys.
pub trait PropertyStore {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&mut self, name: &str, value: &str) -> Result<()>;

    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }
}

/// Low-level property area primitives that ignore the read-only guard.
pub trait PropertyArea: PropertyStore {
    type Handle: Copy;

    fn find(&self, name: &str) -> Option<Self::Handle>;

    fn update(&mut self, handle: Self::Handle, value: &str) -> Result<()>;

    fn add(&mut self, name: &str, value: &str) -> Result<()>;

    /// Writes `value` even if `name` is a locked `ro.` property.
    fn force_set(&mut self, name: &str, value: &str) -> Result<WriteKind> {
        match self.find(name) {
            Some(handle) => {
                self.update(handle, value)?;
                Ok(WriteKind::Updated)
            }
            None => {
                self.add(name, value)?;
                Ok(WriteKind::Created)
            }
        }
    }
}
