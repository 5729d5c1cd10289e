pub mod repository;

pub use repository::{PROFILES_PATH, ProfileRepository};

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use uuid::Uuid;

/// A network profile as recorded by the Network List service.
///
/// Identity is the GUID alone: two profiles with the same id compare equal
/// whatever their names. A profile that could not be read has the nil id and
/// no name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkProfile {
    id: Uuid,
    name: Option<String>,
}

impl NetworkProfile {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_nil() && self.name.is_none()
    }
}

impl PartialEq for NetworkProfile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NetworkProfile {}

impl Hash for NetworkProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq<Uuid> for NetworkProfile {
    fn eq(&self, other: &Uuid) -> bool {
        self.id == *other
    }
}

impl PartialEq<NetworkProfile> for Uuid {
    fn eq(&self, other: &NetworkProfile) -> bool {
        *self == other.id
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}
