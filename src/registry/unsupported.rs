use crate::error::{AppError, AppResult};

use super::{RegistryKey, RegistryStore};

/// Stand-in for the system registry on hosts that do not have one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedRegistry;

impl UnsupportedRegistry {
    pub fn local_machine() -> Self {
        Self
    }
}

#[derive(Debug)]
pub enum NoKey {}

impl RegistryStore for UnsupportedRegistry {
    type Key = NoKey;

    fn open_subkey(&self, _path: &str) -> AppResult<Option<NoKey>> {
        Err(AppError::NotImplemented("registry access on this platform"))
    }
}

impl RegistryKey for NoKey {
    fn string_value(&self, _name: &str) -> AppResult<Option<String>> {
        match *self {}
    }

    fn subkey_names(&self) -> AppResult<Vec<String>> {
        match *self {}
    }
}
