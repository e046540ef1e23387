//! Applying a connected swing to the combatants

use crate::combat::damage::DamageRoll;
use crate::combat::mitigation::Mitigation;
use crate::core::config::{DebuffConfig, MeleeConfig};
use crate::core::dice::Dice;
use crate::entity::{BuffKind, Combatant, Skill};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDamage {
    /// Damage subtracted from HP
    pub damage: i32,
    /// Damage met or exceeded the defender's HP
    pub fatal: bool,
}

fn apply_debuff(
    dice: &mut dyn Dice,
    defender: &mut Combatant,
    kind: BuffKind,
    config: &DebuffConfig,
) {
    let magnitude = config.magnitude_base + dice.range_i32(0, config.magnitude_spread);
    let duration = dice.range_i32(config.duration_min as i32, config.duration_max as i32);
    defender.buffs.set(kind, duration.max(1) as u32, magnitude);
}

/// Apply final damage, debuffs and experience.
///
/// Fatality is decided against HP before it is reduced. Rolls, in order:
/// bleed magnitude and duration, poison magnitude and duration.
pub fn apply_outcome(
    config: &MeleeConfig,
    dice: &mut dyn Dice,
    attacker: &mut Combatant,
    defender: &mut Combatant,
    skill: Skill,
    roll: &DamageRoll,
    mitigation: &Mitigation,
) -> AppliedDamage {
    let damage = (mitigation.raw - mitigation.absorbed).max(0);
    let fatal = damage >= defender.hp.current;

    if fatal && defender.is_player {
        defender.death_reason = Some(format!("killed by {}", attacker.name));
    }

    if roll.bleed {
        apply_debuff(dice, defender, BuffKind::Bleed, &config.bleed);
    }
    if roll.poison {
        apply_debuff(dice, defender, BuffKind::Poison, &config.poison);
    }

    defender.hp.reduce(damage);

    if attacker.is_player {
        let xp = if roll.critical {
            config.critical_xp
        } else {
            config.hit_xp
        };
        attacker.skills.gain_xp(skill, xp);
    }

    AppliedDamage { damage, fatal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::body_zone::HitLocation;
    use crate::core::dice::FixedDice;
    use crate::items::EquipSlot;

    fn mitigation(raw: i32, absorbed: i32) -> Mitigation {
        Mitigation {
            location: HitLocation {
                slot: EquipSlot::Body,
                part: "chest",
            },
            raw,
            absorbed,
        }
    }

    fn plain_roll() -> DamageRoll {
        DamageRoll {
            amount: 0.0,
            critical: false,
            bleed: false,
            poison: false,
        }
    }

    #[test]
    fn test_damage_reduces_hp() {
        let config = MeleeConfig::default();
        let mut a = Combatant::new("a", 10);
        let mut d = Combatant::new("d", 20);
        let applied = apply_outcome(
            &config,
            &mut FixedDice::new(0.5),
            &mut a,
            &mut d,
            Skill::Blades,
            &plain_roll(),
            &mitigation(9, 3),
        );
        assert_eq!(applied, AppliedDamage { damage: 6, fatal: false });
        assert_eq!(d.hp.current, 14);
    }

    #[test]
    fn test_fatal_at_exact_hp() {
        let config = MeleeConfig::default();
        let mut a = Combatant::new("troll", 10);
        let mut d = Combatant::player("you", 6);
        let applied = apply_outcome(
            &config,
            &mut FixedDice::new(0.5),
            &mut a,
            &mut d,
            Skill::Maces,
            &plain_roll(),
            &mitigation(6, 0),
        );
        assert!(applied.fatal);
        assert!(d.is_dead());
        assert_eq!(d.death_reason.as_deref(), Some("killed by troll"));
    }

    #[test]
    fn test_debuffs_from_config_ranges() {
        let config = MeleeConfig::default();
        let mut a = Combatant::new("a", 10);
        let mut d = Combatant::new("d", 50);
        let roll = DamageRoll {
            bleed: true,
            poison: true,
            ..plain_roll()
        };
        apply_outcome(
            &config,
            &mut FixedDice::new(0.0),
            &mut a,
            &mut d,
            Skill::Daggers,
            &roll,
            &mitigation(4, 0),
        );

        let bleed = d.buffs.get(BuffKind::Bleed).unwrap();
        assert_eq!(bleed.magnitude, config.bleed.magnitude_base);
        assert_eq!(bleed.duration, config.bleed.duration_min);
        let poison = d.buffs.get(BuffKind::Poison).unwrap();
        assert_eq!(poison.magnitude, config.poison.magnitude_base);
    }

    #[test]
    fn test_player_xp_critical_vs_hit() {
        let config = MeleeConfig::default();
        let mut player = Combatant::player("you", 10);
        let mut d = Combatant::new("d", 100);

        apply_outcome(
            &config,
            &mut FixedDice::new(0.5),
            &mut player,
            &mut d,
            Skill::Axes,
            &plain_roll(),
            &mitigation(1, 0),
        );
        assert_eq!(player.skills.progress(Skill::Axes).xp, config.hit_xp);

        let crit = DamageRoll {
            critical: true,
            ..plain_roll()
        };
        apply_outcome(
            &config,
            &mut FixedDice::new(0.5),
            &mut player,
            &mut d,
            Skill::Axes,
            &crit,
            &mitigation(1, 0),
        );
        assert_eq!(
            player.skills.progress(Skill::Axes).xp,
            config.hit_xp + config.critical_xp
        );
    }

    #[test]
    fn test_npc_gains_no_xp() {
        let config = MeleeConfig::default();
        let mut npc = Combatant::new("orc", 10);
        let mut d = Combatant::new("d", 100);
        apply_outcome(
            &config,
            &mut FixedDice::new(0.5),
            &mut npc,
            &mut d,
            Skill::Axes,
            &plain_roll(),
            &mitigation(3, 0),
        );
        assert_eq!(npc.skills.progress(Skill::Axes).xp, 0);
    }
}
