//! Raw damage for a swing that connected
//!
//! Multipliers apply in a fixed order: base, player skill, attacker
//! stance, defender stance, grip, critical, physique. Proc rolls happen in
//! the middle of that chain so the roll sequence never depends on tags.

use crate::combat::wield::WieldType;
use crate::core::config::MeleeConfig;
use crate::core::dice::Dice;
use crate::entity::{Combatant, Skill, Tag};
use crate::items::Item;

/// Attacker physique, first match wins
const PHYSIQUE: [(Tag, f32); 7] = [
    (Tag::Anemic, 0.5),
    (Tag::Feeble, 0.75),
    (Tag::Puny, 0.9),
    (Tag::Strong, 1.1),
    (Tag::Brawny, 1.25),
    (Tag::Vigorous, 1.5),
    (Tag::Mighty, 2.0),
];

/// Physique damage multiplier for an attacker
pub fn physique_multiplier(attacker: &Combatant) -> f32 {
    attacker.tags.first_match(&PHYSIQUE).unwrap_or(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    /// Unrounded damage before armor
    pub amount: f32,
    pub critical: bool,
    pub bleed: bool,
    pub poison: bool,
}

/// Compute raw damage and proc flags.
///
/// Rolls, in order: critical, bleed, poison. A critical always sets the
/// bleed flag on top of its own roll. Immunities clear the flags after
/// the rolls, so they never change what is drawn.
pub fn calculate_damage(
    config: &MeleeConfig,
    dice: &mut dyn Dice,
    attacker: &Combatant,
    defender: &Combatant,
    weapon: &Item,
    skill: Skill,
    wield: WieldType,
) -> DamageRoll {
    let mut amount = weapon.power * config.base_damage_multiplier;

    if attacker.is_player {
        let level = attacker.skills.level(skill) as f32;
        amount += amount * config.skill_damage_per_level * level;
    }

    amount *= attacker.stance.damage_dealt_multiplier();
    amount *= defender.stance.damage_taken_multiplier();

    if wield == WieldType::HandAndAHalf2H {
        amount *= config.hand_and_a_half_multiplier;
    }

    let mut crit_chance = weapon.crit_chance;
    if wield == WieldType::SingleWield {
        crit_chance *= config.single_wield_crit_multiplier;
    }

    let mut bleed = false;
    let critical = dice.percent_check(crit_chance);
    if critical {
        bleed = true;
        amount *= config.critical_multiplier;
    }

    if dice.percent_check(weapon.bleed_chance) {
        bleed = true;
    }
    let mut poison = dice.percent_check(weapon.poison_chance);

    amount *= physique_multiplier(attacker);

    if defender.has_tag(Tag::ImmunityBleed) {
        bleed = false;
    }
    if defender.has_tag(Tag::ImmunityPoison) {
        poison = false;
    }

    DamageRoll {
        amount,
        critical,
        bleed,
        poison,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Stance;
    use crate::core::dice::{FixedDice, SeededDice};
    use crate::items::DamageType;

    fn club(power: f32) -> Item {
        Item::weapon("club", power, DamageType::Crushing, Skill::Maces)
    }

    fn roll(
        attacker: &Combatant,
        defender: &Combatant,
        weapon: &Item,
        wield: WieldType,
    ) -> DamageRoll {
        calculate_damage(
            &MeleeConfig::default(),
            &mut FixedDice::new(1.0),
            attacker,
            defender,
            weapon,
            Skill::Maces,
            wield,
        )
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_base_multiplier() {
        let a = Combatant::new("a", 10);
        let d = Combatant::new("d", 10);
        let r = roll(&a, &d, &club(10.0), WieldType::SingleWield);
        assert!(close(r.amount, 12.0));
        assert!(!r.critical && !r.bleed && !r.poison);
    }

    #[test]
    fn test_stances_and_grip() {
        let a = Combatant::new("a", 10).with_stance(Stance::Aggressive);
        let d = Combatant::new("d", 10).with_stance(Stance::Defensive);
        let r = roll(&a, &d, &club(10.0), WieldType::HandAndAHalf2H);
        // 12 * 1.2 * 0.8 * 1.8
        assert!(close(r.amount, 20.736));
    }

    #[test]
    fn test_player_skill_bonus() {
        let mut player = Combatant::player("you", 10);
        player.skills.set_level(Skill::Maces, 4);
        let d = Combatant::new("d", 10);
        let r = roll(&player, &d, &club(10.0), WieldType::TwoHand);
        assert!(close(r.amount, 12.0 * 1.2));
    }

    #[test]
    fn test_physique_first_match() {
        let d = Combatant::new("d", 10);
        let mighty = Combatant::new("ogre", 10).with_tag(Tag::Mighty);
        assert!(close(roll(&mighty, &d, &club(10.0), WieldType::TwoHand).amount, 24.0));

        // Feeble comes before Mighty in the chain
        let odd = Combatant::new("odd", 10)
            .with_tag(Tag::Mighty)
            .with_tag(Tag::Feeble);
        assert_eq!(physique_multiplier(&odd), 0.75);
        assert_eq!(physique_multiplier(&d), 1.0);
    }

    #[test]
    fn test_certain_critical_triples_and_bleeds() {
        let a = Combatant::new("a", 10);
        let d = Combatant::new("d", 10);
        let weapon = club(10.0).with_procs(100.0, 0.0, 0.0);
        let r = roll(&a, &d, &weapon, WieldType::TwoHand);
        assert!(r.critical);
        assert!(r.bleed);
        assert!(close(r.amount, 36.0));
    }

    #[test]
    fn test_immunities_suppress_after_roll() {
        let a = Combatant::new("a", 10);
        let d = Combatant::new("golem", 10)
            .with_tag(Tag::ImmunityBleed)
            .with_tag(Tag::ImmunityPoison);
        let weapon = club(10.0).with_procs(100.0, 100.0, 100.0);
        let r = roll(&a, &d, &weapon, WieldType::TwoHand);
        assert!(r.critical);
        assert!(!r.bleed);
        assert!(!r.poison);
    }

    #[test]
    fn test_crit_implies_bleed_over_many_rolls() {
        let mut dice = SeededDice::new(11);
        let a = Combatant::new("a", 10);
        let d = Combatant::new("d", 10);
        let weapon = club(6.0).with_procs(40.0, 0.0, 0.0);
        for _ in 0..500 {
            let r = calculate_damage(
                &MeleeConfig::default(),
                &mut dice,
                &a,
                &d,
                &weapon,
                Skill::Maces,
                WieldType::SingleWield,
            );
            assert!(!r.critical || r.bleed);
        }
    }
}
