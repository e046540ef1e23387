pub mod catalog;
pub mod equipment;
pub mod item;

pub use catalog::ItemCatalog;
pub use equipment::Equipment;
pub use item::{ArmorTier, DamageType, EquipSlot, Item, ItemKind, ItemTag};
