//! Armor mitigation
//!
//! Picks where the swing landed, rounds the raw damage, and works out how
//! much of it the armor at that spot (plus a shield, on a block) absorbs.

use crate::combat::armor::{armor_fraction, armor_modifier, layered_fraction};
use crate::combat::body_zone::{pick_hit_location, HitLocation};
use crate::core::config::MeleeConfig;
use crate::core::dice::{round_with_variance, Dice};
use crate::entity::{Combatant, Tag};
use crate::items::{ArmorTier, DamageType, EquipSlot, Equipment};

/// Rounded damage split into what armor absorbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mitigation {
    pub location: HitLocation,
    /// Raw damage after rounding and variance
    pub raw: i32,
    /// Absorbed portion, never above `raw`
    pub absorbed: i32,
}

/// Absorption from the body layers.
///
/// With both layers worn the inner one works on what the outer lets
/// through, and the damage-type factor follows the outer layer's tier.
fn body_absorption(equipment: &Equipment, damage_type: DamageType, damage: f32) -> f32 {
    let inner = equipment.get(EquipSlot::Body);
    let outer = equipment.get(EquipSlot::Outer);
    let (fraction, tier) = match (inner, outer) {
        (Some(inner), Some(outer)) => (layered_fraction(inner, outer), outer.armor_tier),
        (Some(layer), None) | (None, Some(layer)) => (armor_fraction(layer), layer.armor_tier),
        (None, None) => (0.0, ArmorTier::None),
    };
    damage * fraction * armor_modifier(damage_type, tier)
}

/// Damage absorbed by armor at a hit location, before rounding.
///
/// Beasts have no limb armor, so every hit on them answers to the body.
pub fn armor_absorption(
    defender: &Combatant,
    location: HitLocation,
    damage_type: DamageType,
    damage: f32,
) -> f32 {
    if location.slot == EquipSlot::Body || defender.has_tag(Tag::Beast) {
        return body_absorption(&defender.equipment, damage_type, damage);
    }

    match defender.equipment.get(location.slot) {
        Some(piece) => {
            damage * armor_fraction(piece) * armor_modifier(damage_type, piece.armor_tier)
        }
        None => 0.0,
    }
}

/// Extra absorption from a shield on a block, against the full damage
pub fn shield_absorption(defender: &Combatant, damage: f32) -> f32 {
    defender
        .equipment
        .shield()
        .map_or(0.0, |shield| damage * armor_fraction(shield))
}

/// Pick a hit location and settle rounded damage and mitigation.
///
/// Rolls, in order: hit location, raw damage variance, mitigation variance.
pub fn resolve_mitigation(
    config: &MeleeConfig,
    dice: &mut dyn Dice,
    defender: &Combatant,
    damage_type: DamageType,
    damage: f32,
    blocked: bool,
) -> Mitigation {
    let location = pick_hit_location(dice);
    let raw = round_with_variance(dice, damage, config.damage_variance);

    let mut absorbed = armor_absorption(defender, location, damage_type, raw as f32);
    if blocked {
        absorbed += shield_absorption(defender, raw as f32);
    }

    let absorbed = round_with_variance(dice, absorbed, config.mitigation_variance).min(raw);
    tracing::trace!(
        "{} takes {} raw, {} absorbed at the {}",
        defender.name,
        raw,
        absorbed,
        location.part
    );

    Mitigation {
        location,
        raw,
        absorbed,
    }
}
