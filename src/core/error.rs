use thiserror::Error;

use crate::items::EquipSlot;

#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Invalid loadout: {0}")]
    InvalidLoadout(String),

    #[error("Weapon has no skill category: {0}")]
    UnmappedWeaponSkill(String),

    #[error("Wield type NONE reached swing resolution")]
    NoWieldType,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Item {item} cannot be equipped in slot {slot:?}")]
    SlotMismatch { item: String, slot: EquipSlot },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CombatError>;
