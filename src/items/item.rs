//! Equippable items
//!
//! An item is described by a handful of numbers (power, proc chances,
//! speed) plus categorical properties that select rows in lookup tables:
//! damage type against armor tier, skill category, and hand tags.

use serde::{Deserialize, Serialize};

use crate::entity::Skill;

/// Equipment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    MainHand,
    OffHand,
    /// Inner body layer (shirts, mail)
    Body,
    /// Outer body layer (coats, plate)
    Outer,
    Head,
    Hands,
    Legs,
    Feet,
}

impl EquipSlot {
    pub fn is_hand(&self) -> bool {
        matches!(self, EquipSlot::MainHand | EquipSlot::OffHand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Melee weapon
    Weapon,
    Shield,
    Armor,
    /// Held but not used to fight (torches, lanterns)
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemTag {
    /// Needs both hands
    TwoHanded,
    /// Two-handed when the off hand is free, one-handed otherwise
    HandAndAHalf,
    /// Goes to the off hand when it is free
    PreferOffHand,
    /// Never held in the main hand
    OffHandOnly,
    /// Narrated as a plural noun ("claws strike")
    Plural,
}

/// Damage categories, each with its own row against armor tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Edged,
    Crushing,
    Piercing,
    Ballistic,
    Energy,
    Plasma,
    Acid,
    Poison,
    Explosive,
    Kinetic,
    Rending,
}

impl DamageType {
    pub fn all() -> [DamageType; 11] {
        [
            DamageType::Edged,
            DamageType::Crushing,
            DamageType::Piercing,
            DamageType::Ballistic,
            DamageType::Energy,
            DamageType::Plasma,
            DamageType::Acid,
            DamageType::Poison,
            DamageType::Explosive,
            DamageType::Kinetic,
            DamageType::Rending,
        ]
    }
}

/// Armor weight class
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ArmorTier {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    /// Natural slot. Hand items may also be held in the other hand.
    pub slot: EquipSlot,
    /// Base damage for weapons, armor percentage for shields and armor
    pub power: f32,
    #[serde(default)]
    pub crit_chance: f32,
    #[serde(default)]
    pub bleed_chance: f32,
    #[serde(default)]
    pub poison_chance: f32,
    #[serde(default = "default_damage_type")]
    pub damage_type: DamageType,
    #[serde(default)]
    pub armor_tier: ArmorTier,
    /// Skill category trained by and boosting this weapon
    #[serde(default)]
    pub skill: Option<Skill>,
    /// Attack time multiplier (1.0 = normal)
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default)]
    pub tags: Vec<ItemTag>,
}

fn default_damage_type() -> DamageType {
    DamageType::Crushing
}

fn default_speed() -> f32 {
    1.0
}

impl Item {
    /// Check if item has a specific tag
    pub fn has_tag(&self, tag: ItemTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }

    pub fn is_shield(&self) -> bool {
        self.kind == ItemKind::Shield
    }

    /// Pseudo-weapon used when a hand swings without a weapon
    pub fn unarmed() -> Self {
        Self {
            name: "fists".into(),
            kind: ItemKind::Weapon,
            slot: EquipSlot::MainHand,
            power: 2.0,
            crit_chance: 5.0,
            bleed_chance: 0.0,
            poison_chance: 0.0,
            damage_type: DamageType::Crushing,
            armor_tier: ArmorTier::None,
            skill: Some(Skill::Unarmed),
            speed: 1.0,
            tags: vec![ItemTag::Plural],
        }
    }

    /// Generic one-handed weapon
    pub fn weapon(name: &str, power: f32, damage_type: DamageType, skill: Skill) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Weapon,
            slot: EquipSlot::MainHand,
            power,
            crit_chance: 0.0,
            bleed_chance: 0.0,
            poison_chance: 0.0,
            damage_type,
            armor_tier: ArmorTier::None,
            skill: Some(skill),
            speed: 1.0,
            tags: vec![],
        }
    }

    /// Shield with the given armor percentage
    pub fn shield(name: &str, armor: f32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Shield,
            slot: EquipSlot::OffHand,
            power: armor,
            crit_chance: 0.0,
            bleed_chance: 0.0,
            poison_chance: 0.0,
            damage_type: DamageType::Crushing,
            armor_tier: ArmorTier::Medium,
            skill: Some(Skill::Shields),
            speed: 1.0,
            tags: vec![ItemTag::PreferOffHand],
        }
    }

    /// Armor piece for a slot
    pub fn armor(name: &str, slot: EquipSlot, armor: f32, tier: ArmorTier) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Armor,
            slot,
            power: armor,
            crit_chance: 0.0,
            bleed_chance: 0.0,
            poison_chance: 0.0,
            damage_type: DamageType::Crushing,
            armor_tier: tier,
            skill: None,
            speed: 1.0,
            tags: vec![],
        }
    }

    /// Held non-weapon
    pub fn extra(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Extra,
            slot: EquipSlot::OffHand,
            power: 0.0,
            crit_chance: 0.0,
            bleed_chance: 0.0,
            poison_chance: 0.0,
            damage_type: DamageType::Crushing,
            armor_tier: ArmorTier::None,
            skill: None,
            speed: 1.0,
            tags: vec![],
        }
    }

    pub fn with_tag(mut self, tag: ItemTag) -> Self {
        if !self.has_tag(tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn with_procs(mut self, crit: f32, bleed: f32, poison: f32) -> Self {
        self.crit_chance = crit;
        self.bleed_chance = bleed;
        self.poison_chance = poison;
        self
    }
}
