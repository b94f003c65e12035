//! Configuration system
//!
//! Material descriptions persist as TOML or RON documents. The format is
//! picked from the file extension.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::error::{MaterialError, MaterialResult};
use crate::pbr::Pbr;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> MaterialResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| MaterialError::Config(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| MaterialError::Config(e.to_string())),
            _ => Err(MaterialError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> MaterialResult<()> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| MaterialError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| MaterialError::Serialize(e.to_string()))?,
            _ => return Err(MaterialError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        log::debug!("Saved configuration to {:?}", path);
        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Named collection of material descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialLibrary {
    materials: BTreeMap<String, Pbr>,
}

impl MaterialLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a material, returning the previous description under that name
    pub fn insert(&mut self, name: impl Into<String>, pbr: Pbr) -> Option<Pbr> {
        self.materials.insert(name.into(), pbr)
    }

    /// Look up a material by name
    pub fn get(&self, name: &str) -> Option<&Pbr> {
        self.materials.get(name)
    }

    /// Remove a material by name
    pub fn remove(&mut self, name: &str) -> Option<Pbr> {
        self.materials.remove(name)
    }

    /// Number of materials in the library
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate materials in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pbr)> {
        self.materials.iter().map(|(name, pbr)| (name.as_str(), pbr))
    }

    /// Group material names whose descriptions are equal.
    ///
    /// Each group maps to one derived resource. Groups and the names within
    /// them are sorted.
    pub fn equivalence_groups(&self) -> Vec<Vec<&str>> {
        let mut groups: HashMap<&Pbr, Vec<&str>> = HashMap::new();
        for (name, pbr) in self.iter() {
            groups.entry(pbr).or_default().push(name);
        }

        let mut groups: Vec<Vec<&str>> = groups.into_values().collect();
        groups.sort();
        groups
    }
}

impl Config for MaterialLibrary {}

impl FromIterator<(String, Pbr)> for MaterialLibrary {
    fn from_iter<I: IntoIterator<Item = (String, Pbr)>>(iter: I) -> Self {
        Self {
            materials: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Pbr)> for MaterialLibrary {
    fn extend<I: IntoIterator<Item = (String, Pbr)>>(&mut self, iter: I) {
        self.materials.extend(iter);
    }
}
