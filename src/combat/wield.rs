//! Wield classification
//!
//! Looks at what a combatant holds in each hand and derives how it fights:
//! the wield type drives to-hit and damage multipliers, and the per-hand
//! flags decide which hands swing.

use serde::{Deserialize, Serialize};

use crate::core::error::{CombatError, Result};
use crate::items::{EquipSlot, Equipment, Item, ItemKind, ItemTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WieldType {
    /// Both hands busy with things that cannot fight
    None,
    Unarmed,
    OneHandPlusExtra,
    TwoHand,
    DualWield,
    /// Hand-and-a-half weapon gripped with both hands
    HandAndAHalf2H,
    SingleWield,
    OneHandPlusShield,
    /// Shield in the main hand, used to bash
    ShieldOnly,
    UnarmedPlusShield,
}

impl WieldType {
    /// To-hit multiplier for this configuration
    pub fn to_hit_factor(&self) -> Result<f32> {
        match self {
            WieldType::None => Err(CombatError::NoWieldType),
            WieldType::DualWield => Ok(0.9),
            WieldType::SingleWield => Ok(1.2),
            WieldType::OneHandPlusShield | WieldType::OneHandPlusExtra => Ok(1.1),
            WieldType::Unarmed
            | WieldType::TwoHand
            | WieldType::HandAndAHalf2H
            | WieldType::ShieldOnly
            | WieldType::UnarmedPlusShield => Ok(1.0),
        }
    }

    /// Holding a weapon that can turn a blow aside
    pub fn can_parry(&self) -> bool {
        matches!(
            self,
            WieldType::OneHandPlusExtra
                | WieldType::TwoHand
                | WieldType::DualWield
                | WieldType::HandAndAHalf2H
                | WieldType::SingleWield
                | WieldType::OneHandPlusShield
        )
    }

    /// Holding a shield
    pub fn can_block(&self) -> bool {
        matches!(
            self,
            WieldType::OneHandPlusShield | WieldType::ShieldOnly | WieldType::UnarmedPlusShield
        )
    }

    /// Fighting with fists only; never takes an off-hand swing
    pub fn is_unarmed_only(&self) -> bool {
        matches!(self, WieldType::Unarmed | WieldType::UnarmedPlusShield)
    }
}

/// Classification result for one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WieldInfo {
    pub wield: WieldType,
    pub main_can_attack: bool,
    pub off_can_attack: bool,
}

impl WieldInfo {
    fn new(wield: WieldType, main_can_attack: bool, off_can_attack: bool) -> Self {
        Self {
            wield,
            main_can_attack,
            off_can_attack,
        }
    }

    /// Classify the hands of an equipment set. First matching rule wins.
    ///
    /// Combinations that equipping should never produce (armor in a hand,
    /// two shields, a two-handed weapon with a busy off hand, an off-hand
    /// only item in the main hand) are errors.
    pub fn classify(equipment: &Equipment) -> Result<Self> {
        let main = equipment.get(EquipSlot::MainHand);
        let off = equipment.get(EquipSlot::OffHand);

        for item in [main, off].into_iter().flatten() {
            if item.kind == ItemKind::Armor {
                return Err(CombatError::InvalidLoadout(format!(
                    "armor {} held in a hand",
                    item.name
                )));
            }
        }
        if let Some(item) = main.filter(|i| i.has_tag(ItemTag::OffHandOnly)) {
            return Err(CombatError::InvalidLoadout(format!(
                "{} is off-hand only but held in the main hand",
                item.name
            )));
        }

        let main_weapon = main.filter(|i| i.is_weapon());
        let off_weapon = off.filter(|i| i.is_weapon());
        let shield_main = main.is_some_and(Item::is_shield);
        let shield_off = off.is_some_and(Item::is_shield);

        if shield_main && shield_off {
            return Err(CombatError::InvalidLoadout("a shield in each hand".into()));
        }

        // No weapon, no shield: fists, if a hand is free
        if main_weapon.is_none() && off_weapon.is_none() && !shield_main && !shield_off {
            if main.is_some() && off.is_some() {
                return Ok(Self::new(WieldType::None, false, false));
            }
            return Ok(Self::new(WieldType::Unarmed, true, false));
        }

        if let Some(weapon) = main_weapon {
            if weapon.has_tag(ItemTag::TwoHanded) {
                if let Some(other) = off {
                    return Err(CombatError::InvalidLoadout(format!(
                        "two-handed {} with {} in the off hand",
                        weapon.name, other.name
                    )));
                }
                return Ok(Self::new(WieldType::TwoHand, true, false));
            }
            if weapon.has_tag(ItemTag::HandAndAHalf) && off.is_none() {
                return Ok(Self::new(WieldType::HandAndAHalf2H, true, false));
            }
        }

        // A shield pairs with whatever the other hand holds; anything but a
        // weapon there means bare-handed strikes
        if shield_off {
            return Ok(if main_weapon.is_some() {
                Self::new(WieldType::OneHandPlusShield, true, false)
            } else {
                Self::new(WieldType::UnarmedPlusShield, true, false)
            });
        }
        if shield_main {
            return Ok(if off_weapon.is_some() {
                Self::new(WieldType::OneHandPlusShield, false, true)
            } else {
                Self::new(WieldType::ShieldOnly, true, false)
            });
        }

        // One weapon, and the other hand either holds an extra or is free
        let (main_can_attack, other) = match (main_weapon, off_weapon) {
            (Some(_), Some(_)) => return Ok(Self::new(WieldType::DualWield, true, true)),
            (Some(_), None) => (true, off),
            (None, Some(_)) => (false, main),
            // Ruled out by the unarmed branch above
            (None, None) => return Ok(Self::new(WieldType::Unarmed, true, false)),
        };
        let wield = if other.is_some() {
            WieldType::OneHandPlusExtra
        } else {
            WieldType::SingleWield
        };
        Ok(Self::new(wield, main_can_attack, !main_can_attack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Skill;
    use crate::items::DamageType;

    fn sword() -> Item {
        Item::weapon("sword", 8.0, DamageType::Edged, Skill::Blades)
    }

    fn loadout(main: Option<Item>, off: Option<Item>) -> Equipment {
        let mut eq = Equipment::new();
        if let Some(item) = main {
            eq.equip_to(EquipSlot::MainHand, item).unwrap();
        }
        if let Some(item) = off {
            eq.equip_to(EquipSlot::OffHand, item).unwrap();
        }
        eq
    }

    fn classify(main: Option<Item>, off: Option<Item>) -> WieldInfo {
        WieldInfo::classify(&loadout(main, off)).unwrap()
    }

    #[test]
    fn test_empty_hands_unarmed() {
        let info = classify(None, None);
        assert_eq!(info.wield, WieldType::Unarmed);
        assert!(info.main_can_attack);
        // Fists never take a second swing
        assert!(!info.off_can_attack);
    }

    #[test]
    fn test_extra_only_still_unarmed() {
        let info = classify(None, Some(Item::extra("torch")));
        assert_eq!(info.wield, WieldType::Unarmed);
        assert!(!info.off_can_attack);
    }

    #[test]
    fn test_both_hands_busy_is_none() {
        let info = classify(Some(Item::extra("lantern")), Some(Item::extra("torch")));
        assert_eq!(info.wield, WieldType::None);
        assert!(!info.main_can_attack && !info.off_can_attack);
    }

    #[test]
    fn test_two_handed() {
        let info = classify(Some(sword().with_tag(ItemTag::TwoHanded)), None);
        assert_eq!(info.wield, WieldType::TwoHand);
        assert!(!info.off_can_attack);
    }

    #[test]
    fn test_two_handed_with_busy_off_hand_errors() {
        // Equipping refuses this pairing, so build it from serialized state
        let eq: Equipment = serde_json::from_value(serde_json::json!({
            "slots": {
                "MainHand": sword().with_tag(ItemTag::TwoHanded),
                "OffHand": Item::extra("torch"),
            }
        }))
        .unwrap();
        assert!(matches!(
            WieldInfo::classify(&eq),
            Err(CombatError::InvalidLoadout(_))
        ));
    }

    #[test]
    fn test_hand_and_a_half() {
        let bastard = sword().with_tag(ItemTag::HandAndAHalf);
        assert_eq!(
            classify(Some(bastard.clone()), None).wield,
            WieldType::HandAndAHalf2H
        );
        assert_eq!(
            classify(Some(bastard.clone()), Some(Item::shield("kite", 30.0))).wield,
            WieldType::OneHandPlusShield
        );
        assert_eq!(
            classify(Some(bastard), Some(Item::extra("torch"))).wield,
            WieldType::OneHandPlusExtra
        );
    }

    #[test]
    fn test_shield_combinations() {
        let shield = || Item::shield("round shield", 25.0);

        let info = classify(Some(sword()), Some(shield()));
        assert_eq!(info.wield, WieldType::OneHandPlusShield);
        assert!(info.main_can_attack && !info.off_can_attack);

        assert_eq!(classify(None, Some(shield())).wield, WieldType::UnarmedPlusShield);
        assert_eq!(classify(Some(shield()), None).wield, WieldType::ShieldOnly);

        let info = classify(Some(shield()), Some(sword()));
        assert_eq!(info.wield, WieldType::OneHandPlusShield);
        assert!(!info.main_can_attack && info.off_can_attack);
    }

    #[test]
    fn test_extra_is_symmetric_across_hands() {
        let torch = || Item::extra("torch");

        let info = classify(Some(sword()), Some(torch()));
        assert_eq!(info.wield, WieldType::OneHandPlusExtra);
        assert!(info.main_can_attack && !info.off_can_attack);

        let info = classify(Some(torch()), Some(sword()));
        assert_eq!(info.wield, WieldType::OneHandPlusExtra);
        assert!(!info.main_can_attack && info.off_can_attack);
    }

    #[test]
    fn test_extra_with_shield_still_fights() {
        let torch = || Item::extra("torch");
        let shield = || Item::shield("round shield", 25.0);

        let info = classify(Some(torch()), Some(shield()));
        assert_eq!(info.wield, WieldType::UnarmedPlusShield);
        assert!(info.main_can_attack && !info.off_can_attack);

        let info = classify(Some(shield()), Some(torch()));
        assert_eq!(info.wield, WieldType::ShieldOnly);
        assert!(info.main_can_attack && !info.off_can_attack);
    }

    #[test]
    fn test_two_shields_error() {
        let eq = loadout(
            Some(Item::shield("a", 10.0)),
            Some(Item::shield("b", 10.0)),
        );
        assert!(WieldInfo::classify(&eq).is_err());
    }

    #[test]
    fn test_dual_and_single() {
        let info = classify(Some(sword()), Some(sword()));
        assert_eq!(info.wield, WieldType::DualWield);
        assert!(info.main_can_attack && info.off_can_attack);

        assert_eq!(classify(Some(sword()), None).wield, WieldType::SingleWield);
        assert_eq!(
            classify(Some(sword()), Some(Item::extra("torch"))).wield,
            WieldType::OneHandPlusExtra
        );

        let info = classify(None, Some(sword()));
        assert_eq!(info.wield, WieldType::SingleWield);
        assert!(!info.main_can_attack && info.off_can_attack);
    }

    #[test]
    fn test_factors_and_capabilities() {
        assert!(WieldType::None.to_hit_factor().is_err());
        assert_eq!(WieldType::DualWield.to_hit_factor().unwrap(), 0.9);
        assert_eq!(WieldType::SingleWield.to_hit_factor().unwrap(), 1.2);
        assert_eq!(WieldType::OneHandPlusShield.to_hit_factor().unwrap(), 1.1);
        assert_eq!(WieldType::TwoHand.to_hit_factor().unwrap(), 1.0);

        assert!(!WieldType::ShieldOnly.can_parry());
        assert!(!WieldType::Unarmed.can_parry());
        assert!(WieldType::OneHandPlusShield.can_parry());
        assert!(WieldType::UnarmedPlusShield.can_block());
        assert!(!WieldType::DualWield.can_block());
    }
}
