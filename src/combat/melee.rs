//! Melee attack orchestration
//!
//! One attack is up to two swings. The main hand resolves completely,
//! death checks included, before the off hand is considered.

use tracing::debug;

use crate::combat::damage::calculate_damage;
use crate::combat::hit::{resolve_swing, SwingOutcome};
use crate::combat::mitigation::resolve_mitigation;
use crate::combat::narration::describe_swing;
use crate::combat::outcome::apply_outcome;
use crate::combat::resolver::{AttackReport, CombatContext, CombatResolver, Hand, SwingReport};
use crate::combat::wield::{WieldInfo, WieldType};
use crate::core::config::MeleeConfig;
use crate::core::error::{CombatError, Result};
use crate::core::types::Tick;
use crate::entity::Combatant;
use crate::items::{EquipSlot, Item};

/// Hand-to-hand resolver
#[derive(Debug, Clone, Default)]
pub struct MeleeResolver {
    config: MeleeConfig,
}

impl MeleeResolver {
    pub fn new(config: MeleeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MeleeConfig {
        &self.config
    }

    /// Ticks one attack costs, from the leading weapon's speed
    pub fn attack_time(&self, attacker: &Combatant) -> Tick {
        let speed = [EquipSlot::MainHand, EquipSlot::OffHand]
            .into_iter()
            .filter_map(|slot| attacker.equipment.get(slot))
            .find(|item| item.is_weapon())
            .map_or(1.0, |weapon| weapon.speed);
        let ticks = (self.config.base_attack_time as f32 * speed).round();
        ticks.max(1.0) as Tick
    }

    fn swing(
        &self,
        ctx: &mut CombatContext<'_>,
        hand: Hand,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        attacker_wield: WieldType,
        defender_wield: WieldType,
    ) -> Result<SwingReport> {
        // Shields and empty hands strike with the unarmed pseudo-item
        let weapon = attacker
            .equipment
            .get(hand.slot())
            .filter(|item| item.is_weapon())
            .cloned()
            .unwrap_or_else(Item::unarmed);
        let skill = weapon
            .skill
            .ok_or_else(|| CombatError::UnmappedWeaponSkill(weapon.name.clone()))?;

        let outcome = resolve_swing(
            &self.config,
            ctx.dice,
            attacker,
            defender,
            attacker_wield,
            defender_wield,
            skill,
        )?;
        debug!(
            "{} swings {} ({:?} hand) at {}: {:?}",
            attacker.name, weapon.name, hand, defender.name, outcome
        );

        if defender.is_player {
            if defender.auto_target.is_none() {
                defender.auto_target = Some(attacker.id);
            }
        } else {
            defender.add_hostility(attacker.id);
        }

        let mut report = SwingReport::deflected(hand, outcome, &weapon.name);
        if outcome.connects() {
            let roll = calculate_damage(
                &self.config,
                ctx.dice,
                attacker,
                defender,
                &weapon,
                skill,
                attacker_wield,
            );
            let mitigation = resolve_mitigation(
                &self.config,
                ctx.dice,
                defender,
                weapon.damage_type,
                roll.amount,
                outcome == SwingOutcome::Blocked,
            );
            let applied = apply_outcome(
                &self.config,
                ctx.dice,
                attacker,
                defender,
                skill,
                &roll,
                &mitigation,
            );
            debug!(
                "{} deals {} to {} ({} raw, {} absorbed{})",
                attacker.name,
                applied.damage,
                defender.name,
                mitigation.raw,
                mitigation.absorbed,
                if roll.critical { ", critical" } else { "" }
            );

            report.raw = mitigation.raw;
            report.mitigation = mitigation.absorbed;
            report.damage = applied.damage;
            report.critical = roll.critical;
            report.bleed = roll.bleed;
            report.poison = roll.poison;
            report.fatal = applied.fatal;
            report.location = Some(mitigation.location);
        }

        ctx.sink.emit(describe_swing(attacker, defender, &weapon, &report));
        Ok(report)
    }
}

impl CombatResolver for MeleeResolver {
    fn resolve(
        &self,
        ctx: &mut CombatContext<'_>,
        attacker: &mut Combatant,
        defender: &mut Combatant,
    ) -> Result<AttackReport> {
        if attacker.is_dead() || defender.is_dead() {
            debug!("{} cannot attack {}: a combatant is dead", attacker.name, defender.name);
            return Ok(AttackReport::declined());
        }

        let attacker_info = WieldInfo::classify(&attacker.equipment).map_err(|e| {
            tracing::warn!("{} has an impossible loadout: {}", attacker.name, e);
            e
        })?;
        if attacker_info.wield == WieldType::None {
            debug!("{} has nothing to fight with", attacker.name);
            return Ok(AttackReport::declined());
        }
        let defender_info = WieldInfo::classify(&defender.equipment).map_err(|e| {
            tracing::warn!("{} has an impossible loadout: {}", defender.name, e);
            e
        })?;

        let mut report = AttackReport::default();

        if attacker_info.main_can_attack {
            report.swings.push(self.swing(
                ctx,
                Hand::Main,
                attacker,
                defender,
                attacker_info.wield,
                defender_info.wield,
            )?);
        }

        if attacker_info.off_can_attack
            && !attacker.is_dead()
            && !defender.is_dead()
            && !attacker_info.wield.is_unarmed_only()
        {
            report.swings.push(self.swing(
                ctx,
                Hand::Off,
                attacker,
                defender,
                attacker_info.wield,
                defender_info.wield,
            )?);
        }

        report.action_time = self.attack_time(attacker);
        attacker.consume_action_time(report.action_time);
        debug!(
            "{} attack on {} done: {} swing(s), {} damage, {} ticks",
            attacker.name,
            defender.name,
            report.swings.len(),
            report.total_damage(),
            report.action_time
        );

        Ok(report)
    }
}
