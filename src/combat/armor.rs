//! Damage type against armor tier
//!
//! Each damage type has one row of factors, one per armor tier. The factor
//! scales how much of a hit the armor absorbs: above 1.0 the armor works
//! better than its rating against that type, below 1.0 worse.

use crate::items::{ArmorTier, DamageType, Item};

/// Rows follow `DamageType::all()`, columns follow `ArmorTier`
/// (none, light, medium, heavy).
const ARMOR_MODIFIERS: [[f32; 4]; 11] = [
    // Edged: heavier armor turns blades
    [1.0, 1.0, 1.2, 1.5],
    // Crushing: padding soaks it, plate transmits it
    [1.0, 1.2, 0.9, 0.7],
    // Piercing: slips through light armor
    [1.0, 0.8, 1.0, 1.2],
    // Ballistic
    [1.0, 0.9, 1.1, 1.3],
    // Energy
    [1.0, 0.7, 0.8, 1.0],
    // Plasma
    [1.0, 0.5, 0.7, 0.9],
    // Acid
    [1.0, 0.6, 0.8, 1.0],
    // Poison: any sealed layer keeps it out
    [1.0, 1.5, 1.5, 1.5],
    // Explosive
    [1.0, 0.8, 1.0, 1.2],
    // Kinetic
    [1.0, 1.0, 1.0, 1.0],
    // Rending: tears armor apart
    [1.0, 0.9, 0.8, 0.6],
];

fn row(damage_type: DamageType) -> usize {
    match damage_type {
        DamageType::Edged => 0,
        DamageType::Crushing => 1,
        DamageType::Piercing => 2,
        DamageType::Ballistic => 3,
        DamageType::Energy => 4,
        DamageType::Plasma => 5,
        DamageType::Acid => 6,
        DamageType::Poison => 7,
        DamageType::Explosive => 8,
        DamageType::Kinetic => 9,
        DamageType::Rending => 10,
    }
}

fn column(tier: ArmorTier) -> usize {
    match tier {
        ArmorTier::None => 0,
        ArmorTier::Light => 1,
        ArmorTier::Medium => 2,
        ArmorTier::Heavy => 3,
    }
}

/// Factor applied to absorbed damage
pub fn armor_modifier(damage_type: DamageType, tier: ArmorTier) -> f32 {
    ARMOR_MODIFIERS[row(damage_type)][column(tier)]
}

/// Armor rating of an item as a fraction in `[0, 1]`
pub fn armor_fraction(item: &Item) -> f32 {
    (item.power / 100.0).clamp(0.0, 1.0)
}

/// Two layers stacked: the inner layer works on what the outer lets through
pub fn layered_fraction(inner: &Item, outer: &Item) -> f32 {
    1.0 - (1.0 - armor_fraction(outer)) * (1.0 - armor_fraction(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::EquipSlot;

    #[test]
    fn test_rows_follow_damage_type_order() {
        for (i, damage_type) in DamageType::all().into_iter().enumerate() {
            assert_eq!(row(damage_type), i);
        }
    }

    #[test]
    fn test_unarmored_column_is_neutral() {
        for damage_type in DamageType::all() {
            assert_eq!(armor_modifier(damage_type, ArmorTier::None), 1.0);
        }
    }

    #[test]
    fn test_edged_vs_heavy() {
        assert_eq!(armor_modifier(DamageType::Edged, ArmorTier::Heavy), 1.5);
        assert_eq!(armor_modifier(DamageType::Crushing, ArmorTier::Heavy), 0.7);
        assert_eq!(armor_modifier(DamageType::Plasma, ArmorTier::Light), 0.5);
    }

    #[test]
    fn test_all_factors_positive() {
        for r in ARMOR_MODIFIERS {
            for factor in r {
                assert!(factor > 0.0);
            }
        }
    }

    #[test]
    fn test_layered_fraction() {
        let shirt = Item::armor("padded shirt", EquipSlot::Body, 20.0, ArmorTier::Light);
        let coat = Item::armor("brigandine", EquipSlot::Outer, 50.0, ArmorTier::Medium);
        // 1 - 0.5 * 0.8
        assert!((layered_fraction(&shirt, &coat) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_armor_fraction_clamped() {
        let silly = Item::armor("adamant", EquipSlot::Head, 250.0, ArmorTier::Heavy);
        assert_eq!(armor_fraction(&silly), 1.0);
    }
}
