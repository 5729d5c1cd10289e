use crate::error::{AppError, AppResult};

use super::{RegistryKey, RegistryStore, SEPARATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryValue {
    String(String),
    Dword(u32),
}

#[derive(Debug, Clone)]
struct Entry {
    segments: Vec<String>,
    values: Vec<(String, MemoryValue)>,
    denied: bool,
}

/// In-memory registry. Key and value names compare case-insensitively and
/// children enumerate in insertion order, as they do on Windows.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    entries: Vec<Entry>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the key and any missing ancestors.
    pub fn create_key(&mut self, path: &str) -> &mut Self {
        self.ensure(path);
        self
    }

    pub fn set_value(&mut self, path: &str, name: &str, value: MemoryValue) -> &mut Self {
        let index = self.ensure(path);
        let values = &mut self.entries[index].values;
        match values
            .iter_mut()
            .find(|(existing, _)| same_name(existing, name))
        {
            Some((_, slot)) => *slot = value,
            None => values.push((name.to_string(), value)),
        }
        self
    }

    pub fn set_string(&mut self, path: &str, name: &str, value: impl Into<String>) -> &mut Self {
        self.set_value(path, name, MemoryValue::String(value.into()))
    }

    /// Makes opening the key fail as if its ACL refused read access.
    pub fn deny(&mut self, path: &str) -> &mut Self {
        let index = self.ensure(path);
        self.entries[index].denied = true;
        self
    }

    fn ensure(&mut self, path: &str) -> usize {
        let segments = split(path);
        let mut found = None;
        for depth in 1..=segments.len() {
            let prefix = &segments[..depth];
            found = match self.position(prefix) {
                Some(index) => Some(index),
                None => {
                    self.entries.push(Entry {
                        segments: prefix.to_vec(),
                        values: Vec::new(),
                        denied: false,
                    });
                    Some(self.entries.len() - 1)
                }
            };
        }

        found.unwrap_or_else(|| self.root_index())
    }

    fn root_index(&mut self) -> usize {
        if let Some(index) = self.position(&[]) {
            return index;
        }

        self.entries.push(Entry {
            segments: Vec::new(),
            values: Vec::new(),
            denied: false,
        });
        self.entries.len() - 1
    }

    fn position(&self, segments: &[String]) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| same_path(&entry.segments, segments))
    }

    fn children_of(&self, segments: &[String]) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| {
                entry.segments.len() == segments.len() + 1
                    && same_path(&entry.segments[..segments.len()], segments)
            })
            .filter_map(|entry| entry.segments.last().cloned())
            .collect()
    }
}

impl RegistryStore for MemoryRegistry {
    type Key = MemoryKey;

    fn open_subkey(&self, path: &str) -> AppResult<Option<MemoryKey>> {
        let segments = split(path);
        let entry = match self.position(&segments) {
            Some(index) => &self.entries[index],
            None if segments.is_empty() => {
                return Ok(Some(MemoryKey {
                    values: Vec::new(),
                    children: self.children_of(&segments),
                }));
            }
            None => return Ok(None),
        };

        if entry.denied {
            return Err(AppError::Registry(format!("access denied: {path}")));
        }

        Ok(Some(MemoryKey {
            values: entry.values.clone(),
            children: self.children_of(&segments),
        }))
    }
}

/// Snapshot of a key taken when it was opened.
#[derive(Debug, Clone)]
pub struct MemoryKey {
    values: Vec<(String, MemoryValue)>,
    children: Vec<String>,
}

impl RegistryKey for MemoryKey {
    fn string_value(&self, name: &str) -> AppResult<Option<String>> {
        let Some((_, value)) = self
            .values
            .iter()
            .find(|(existing, _)| same_name(existing, name))
        else {
            return Ok(None);
        };

        match value {
            MemoryValue::String(text) => Ok(Some(text.clone())),
            MemoryValue::Dword(_) => Err(AppError::Registry(format!(
                "value {name} is not a string"
            ))),
        }
    }

    fn subkey_names(&self) -> AppResult<Vec<String>> {
        Ok(self.children.clone())
    }
}

fn split(path: &str) -> Vec<String> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn same_name(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right) || left.to_lowercase() == right.to_lowercase()
}

fn same_path(left: &[String], right: &[String]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| same_name(left, right))
}
