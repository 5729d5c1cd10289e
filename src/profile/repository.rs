use log::{debug, trace};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::registry::{RegistryKey, RegistryStore, join_path};

use super::NetworkProfile;

/// Where the Network List service keeps one subkey per profile, under the
/// local machine hive.
pub const PROFILES_PATH: &str =
    r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\NetworkList\Profiles";

const PROFILE_NAME_VALUE: &str = "ProfileName";

/// Reads network profiles out of a registry store.
///
/// Lookups are best effort. Any failure to read a profile, whether the key is
/// missing, access is denied or the name value is absent, yields
/// [`NetworkProfile::empty`] and is only reported through the debug log.
#[derive(Debug, Clone)]
pub struct ProfileRepository<S> {
    store: S,
    base_path: String,
}

impl<S: RegistryStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            base_path: PROFILES_PATH.to_string(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn lookup(&self, id: Uuid) -> NetworkProfile {
        self.lookup_key(&id.braced().to_string())
    }

    /// Every profile under the base path, in registry order. Children that
    /// cannot be read show up as empty profiles.
    pub fn list_all(&self) -> Vec<NetworkProfile> {
        let names = match self.subkey_names() {
            Ok(names) => names,
            Err(err) => {
                debug!("unable to enumerate {}: {err}", self.base_path);
                return Vec::new();
            }
        };

        trace!("{} profile keys under {}", names.len(), self.base_path);
        names.iter().map(|name| self.lookup_key(name)).collect()
    }

    /// First profile whose name matches, ignoring case and surrounding
    /// whitespace in the query.
    pub fn find_by_name(&self, name: &str) -> Option<NetworkProfile> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        self.list_all().into_iter().find(|profile| {
            profile
                .name()
                .is_some_and(|candidate| candidate.to_lowercase() == wanted)
        })
    }

    fn lookup_key(&self, key_name: &str) -> NetworkProfile {
        let path = join_path(&self.base_path, key_name);
        match self.read_profile(&path, key_name) {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                debug!("no profile at {path}");
                NetworkProfile::empty()
            }
            Err(err) => {
                debug!("unable to read profile at {path}: {err}");
                NetworkProfile::empty()
            }
        }
    }

    fn read_profile(&self, path: &str, key_name: &str) -> AppResult<Option<NetworkProfile>> {
        let Some(key) = self.store.open_subkey(path)? else {
            return Ok(None);
        };

        let name = key.string_value(PROFILE_NAME_VALUE)?.ok_or_else(|| {
            AppError::Registry(format!("{path} has no {PROFILE_NAME_VALUE} value"))
        })?;
        let id = Uuid::parse_str(key_name)?;

        Ok(Some(NetworkProfile::new(id, name)))
    }

    fn subkey_names(&self) -> AppResult<Vec<String>> {
        match self.store.open_subkey(&self.base_path)? {
            Some(key) => key.subkey_names(),
            None => Ok(Vec::new()),
        }
    }
}
