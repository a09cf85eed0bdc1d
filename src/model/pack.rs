use std::fmt;

use serde::{Deserialize, Serialize};

/// Uniqueness key of a selection: only one version per `(domain, pack_id)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackKey {
    pub domain: String,
    pub pack_id: String,
}

impl PackKey {
    pub fn new(domain: impl Into<String>, pack_id: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            pack_id: pack_id.into(),
        }
    }

    /// Parses `domain/pack_id`.
    pub fn parse(s: &str) -> Option<Self> {
        let (domain, pack_id) = s.trim().split_once('/')?;
        if domain.is_empty() || pack_id.is_empty() || pack_id.contains('/') {
            return None;
        }
        Some(Self::new(domain, pack_id))
    }
}

impl fmt::Display for PackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.pack_id)
    }
}

/// Cache key for pack detail: `domain/pack_id/version`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackVersionKey {
    pub domain: String,
    pub pack_id: String,
    pub version: String,
}

impl fmt::Display for PackVersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.domain, self.pack_id, self.version)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedPack {
    pub domain: String,
    pub pack_id: String,
    pub version: String,
}

impl SelectedPack {
    pub fn new(
        domain: impl Into<String>,
        pack_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            pack_id: pack_id.into(),
            version: version.into(),
        }
    }

    pub fn key(&self) -> PackKey {
        PackKey::new(&self.domain, &self.pack_id)
    }

    pub fn version_key(&self) -> PackVersionKey {
        PackVersionKey {
            domain: self.domain.clone(),
            pack_id: self.pack_id.clone(),
            version: self.version.clone(),
        }
    }

    /// Parses `domain/pack_id@version`.
    pub fn parse(s: &str) -> Option<Self> {
        let (key, version) = s.trim().rsplit_once('@')?;
        let key = PackKey::parse(key)?;
        if version.is_empty() {
            return None;
        }
        Some(Self::new(key.domain, key.pack_id, version))
    }
}

impl fmt::Display for SelectedPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.domain, self.pack_id, self.version)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackCatalogEntry {
    pub domain: String,
    pub pack_id: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

impl PackCatalogEntry {
    pub fn key(&self) -> PackKey {
        PackKey::new(&self.domain, &self.pack_id)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PackCatalog {
    #[serde(default)]
    pub packs: Vec<PackCatalogEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackMeta {
    pub id: String,
    pub name: String,
    pub version: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PackSource>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackDetail {
    pub pack: PackMeta,
}

impl PackDetail {
    pub fn version_key(&self) -> PackVersionKey {
        PackVersionKey {
            domain: self.pack.domain.clone(),
            pack_id: self.pack.id.clone(),
            version: self.pack.version.clone(),
        }
    }
}
