//! Load item definitions from TOML
//!
//! A catalog file is a list of `[[item]]` tables whose keys match `Item`.
//! Definitions are validated on load: a weapon without a skill category or
//! armor without an armor slot would silently skew combat, so both abort.

use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::core::error::{CombatError, Result};
use crate::items::item::{Item, ItemKind, ItemTag};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    item: Vec<Item>,
}

/// Item definitions keyed by name
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: AHashMap<String, Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::new();
        for item in file.item {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded {} item definitions from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Add a definition after validating it
    pub fn insert(&mut self, item: Item) -> Result<()> {
        validate_item(&item)?;
        if self.items.contains_key(&item.name) {
            return Err(CombatError::InvalidConfig(format!(
                "duplicate item definition: {}",
                item.name
            )));
        }
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Fresh copy of a named item
    pub fn instantiate(&self, name: &str) -> Result<Item> {
        self.get(name)
            .cloned()
            .ok_or_else(|| CombatError::UnknownItem(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

fn validate_item(item: &Item) -> Result<()> {
    match item.kind {
        ItemKind::Weapon => {
            if item.skill.is_none() {
                return Err(CombatError::UnmappedWeaponSkill(item.name.clone()));
            }
            if !item.slot.is_hand() {
                return Err(CombatError::SlotMismatch {
                    item: item.name.clone(),
                    slot: item.slot,
                });
            }
            if item.has_tag(ItemTag::TwoHanded) && item.has_tag(ItemTag::HandAndAHalf) {
                return Err(CombatError::InvalidConfig(format!(
                    "{} cannot be both two-handed and hand-and-a-half",
                    item.name
                )));
            }
        }
        ItemKind::Armor => {
            if item.slot.is_hand() {
                return Err(CombatError::SlotMismatch {
                    item: item.name.clone(),
                    slot: item.slot,
                });
            }
        }
        ItemKind::Shield | ItemKind::Extra => {
            if !item.slot.is_hand() {
                return Err(CombatError::SlotMismatch {
                    item: item.name.clone(),
                    slot: item.slot,
                });
            }
        }
    }

    if item.power < 0.0 || item.speed <= 0.0 {
        return Err(CombatError::InvalidConfig(format!(
            "{} has negative power or non-positive speed",
            item.name
        )));
    }

    Ok(())
}
