//! Hit locations
//!
//! A hit lands on a named body part, and the part decides which equipment
//! slot's armor answers it. The torso takes most hits.

use serde::Serialize;

use crate::core::dice::Dice;
use crate::items::EquipSlot;

/// Where a swing landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HitLocation {
    pub slot: EquipSlot,
    pub part: &'static str,
}

/// (part, slot, weight); weights sum to 100
const HIT_LOCATIONS: [(&str, EquipSlot, i32); 11] = [
    ("head", EquipSlot::Head, 10),
    ("chest", EquipSlot::Body, 35),
    ("stomach", EquipSlot::Body, 15),
    ("left arm", EquipSlot::Body, 6),
    ("right arm", EquipSlot::Body, 6),
    ("left hand", EquipSlot::Hands, 4),
    ("right hand", EquipSlot::Hands, 4),
    ("left leg", EquipSlot::Legs, 6),
    ("right leg", EquipSlot::Legs, 6),
    ("left foot", EquipSlot::Feet, 4),
    ("right foot", EquipSlot::Feet, 4),
];

fn total_weight() -> i32 {
    HIT_LOCATIONS.iter().map(|(_, _, w)| w).sum()
}

/// Weighted pick of a hit location. Consumes one roll.
pub fn pick_hit_location(dice: &mut dyn Dice) -> HitLocation {
    let mut roll = dice.range_i32(1, total_weight());
    for (part, slot, weight) in HIT_LOCATIONS {
        if roll <= weight {
            return HitLocation { slot, part };
        }
        roll -= weight;
    }

    // Unreachable while the roll stays within the total weight
    HitLocation {
        slot: EquipSlot::Body,
        part: "chest",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::{FixedDice, SeededDice};

    #[test]
    fn test_weights_sum_to_hundred() {
        assert_eq!(total_weight(), 100);
    }

    #[test]
    fn test_fixed_rolls_map_to_parts() {
        assert_eq!(pick_hit_location(&mut FixedDice::new(0.0)).part, "head");
        assert_eq!(pick_hit_location(&mut FixedDice::new(0.5)).part, "stomach");
        assert_eq!(pick_hit_location(&mut FixedDice::new(1.0)).part, "right foot");
    }

    #[test]
    fn test_torso_takes_most_hits() {
        let mut dice = SeededDice::new(3);
        let trials = 5000;
        let body = (0..trials)
            .filter(|_| pick_hit_location(&mut dice).slot == EquipSlot::Body)
            .count();
        // 62% expected
        assert!(body > trials * 55 / 100 && body < trials * 69 / 100);
    }
}
