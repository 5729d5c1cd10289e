//! Read-only access to a hierarchical key/value store shaped like the
//! Windows registry.

pub mod memory;
#[cfg(not(windows))]
pub mod unsupported;
#[cfg(windows)]
pub mod windows;

pub use memory::{MemoryRegistry, MemoryValue};

#[cfg(not(windows))]
pub use unsupported::UnsupportedRegistry as SystemRegistry;
#[cfg(windows)]
pub use windows::WindowsRegistry as SystemRegistry;

use crate::error::AppResult;

/// Registry key separator.
pub const SEPARATOR: char = '\\';

pub trait RegistryStore {
    type Key: RegistryKey;

    /// Opens the key at `path` relative to the store root. A missing key is
    /// `Ok(None)`; anything else that prevents opening it is an error.
    fn open_subkey(&self, path: &str) -> AppResult<Option<Self::Key>>;
}

/// An open key. The handle is released when the value is dropped.
pub trait RegistryKey {
    /// Reads a string value. `Ok(None)` when the value does not exist, an
    /// error when it exists with a non-string type.
    fn string_value(&self, name: &str) -> AppResult<Option<String>>;

    /// Names of the direct children, in store order.
    fn subkey_names(&self) -> AppResult<Vec<String>>;
}

impl<S: RegistryStore + ?Sized> RegistryStore for &S {
    type Key = S::Key;

    fn open_subkey(&self, path: &str) -> AppResult<Option<Self::Key>> {
        (**self).open_subkey(path)
    }
}

pub fn join_path(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches(SEPARATOR);
    let child = child.trim_start_matches(SEPARATOR);
    if parent.is_empty() {
        return child.to_string();
    }

    format!("{parent}{SEPARATOR}{child}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_separator() {
        assert_eq!(join_path("SOFTWARE\\Foo\\", "\\Bar"), "SOFTWARE\\Foo\\Bar");
        assert_eq!(join_path("SOFTWARE", "Bar"), "SOFTWARE\\Bar");
    }

    #[test]
    fn joins_onto_empty_root() {
        assert_eq!(join_path("", "Bar"), "Bar");
    }
}
