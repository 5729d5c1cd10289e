use std::io;

use winreg::RegKey;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};

use crate::error::{AppError, AppResult};

use super::{RegistryKey, RegistryStore};

/// The local machine hive, opened read-only.
#[derive(Debug)]
pub struct WindowsRegistry {
    root: RegKey,
}

impl WindowsRegistry {
    pub fn local_machine() -> Self {
        Self {
            root: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }
}

impl RegistryStore for WindowsRegistry {
    type Key = WindowsKey;

    fn open_subkey(&self, path: &str) -> AppResult<Option<WindowsKey>> {
        match self.root.open_subkey_with_flags(path, KEY_READ) {
            Ok(key) => Ok(Some(WindowsKey { key })),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Registry(format!("unable to open {path}: {err}"))),
        }
    }
}

#[derive(Debug)]
pub struct WindowsKey {
    key: RegKey,
}

impl RegistryKey for WindowsKey {
    fn string_value(&self, name: &str) -> AppResult<Option<String>> {
        match self.key.get_value::<String, _>(name) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Registry(format!("unable to read {name}: {err}"))),
        }
    }

    fn subkey_names(&self) -> AppResult<Vec<String>> {
        let names = self.key.enum_keys().collect::<io::Result<Vec<_>>>()?;
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_opens_as_none() {
        let registry = WindowsRegistry::local_machine();
        let key = registry
            .open_subkey("SOFTWARE\\netprofile-test\\{00000000-0000-0000-0000-000000000000}")
            .expect("missing key is not an error");
        assert!(key.is_none());
    }
}
