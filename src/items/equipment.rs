//! Equipped items, one per slot

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{CombatError, Result};
use crate::items::item::{EquipSlot, Item, ItemKind, ItemTag};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    slots: AHashMap<EquipSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Equip an item in its natural slot.
    ///
    /// Hand items tagged `PreferOffHand` go to the off hand when it is free.
    /// Returns whatever was previously in the chosen slot.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>> {
        let slot = if item.slot.is_hand()
            && item.has_tag(ItemTag::PreferOffHand)
            && self.is_empty(EquipSlot::OffHand)
        {
            EquipSlot::OffHand
        } else {
            item.slot
        };
        self.equip_to(slot, item)
    }

    /// Equip an item in a specific slot
    pub fn equip_to(&mut self, slot: EquipSlot, item: Item) -> Result<Option<Item>> {
        let fits = if slot.is_hand() {
            item.kind != ItemKind::Armor
                && !(slot == EquipSlot::MainHand && item.has_tag(ItemTag::OffHandOnly))
        } else {
            item.kind == ItemKind::Armor && item.slot == slot
        };

        if !fits {
            return Err(CombatError::SlotMismatch {
                item: item.name,
                slot,
            });
        }

        // A two-handed weapon needs the off hand free, both ways round
        if slot == EquipSlot::MainHand && item.has_tag(ItemTag::TwoHanded) {
            if let Some(other) = self.get(EquipSlot::OffHand) {
                return Err(CombatError::InvalidLoadout(format!(
                    "two-handed {} with {} in the off hand",
                    item.name, other.name
                )));
            }
        }
        if slot == EquipSlot::OffHand {
            if let Some(main) = self
                .get(EquipSlot::MainHand)
                .filter(|main| main.has_tag(ItemTag::TwoHanded))
            {
                return Err(CombatError::InvalidLoadout(format!(
                    "{} needs a free off hand for {}",
                    main.name, item.name
                )));
            }
        }

        Ok(self.slots.insert(slot, item))
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    /// The first shield held in either hand
    pub fn shield(&self) -> Option<&Item> {
        [EquipSlot::OffHand, EquipSlot::MainHand]
            .into_iter()
            .filter_map(|slot| self.get(slot))
            .find(|item| item.is_shield())
    }
}
