//! Hit resolution for one swing
//!
//! A swing first has to land (evasion), then the defender gets one chance
//! to parry and, failing that, one chance to block. Exactly one outcome
//! comes out.

use serde::{Deserialize, Serialize};

use crate::combat::stance::StanceMatchup;
use crate::combat::wield::WieldType;
use crate::core::config::MeleeConfig;
use crate::core::dice::Dice;
use crate::core::error::Result;
use crate::entity::{Combatant, Skill, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwingOutcome {
    /// Missed entirely; nothing else happens
    Evaded,
    /// Turned aside by the defender's weapon; nothing else happens
    Parried,
    /// Caught on a shield; damage still lands with shield mitigation
    Blocked,
    Hit,
}

impl SwingOutcome {
    /// Does damage get computed for this outcome?
    pub fn connects(&self) -> bool {
        matches!(self, SwingOutcome::Blocked | SwingOutcome::Hit)
    }
}

/// To-hit against a defender's agility, first match wins
const EVASION_TAGS: [(Tag, f32); 2] = [(Tag::Agile, 0.8), (Tag::Clumsy, 1.25)];

fn defender_agile_or_attacker_clumsy(attacker: &Combatant, defender: &Combatant) -> bool {
    defender.has_tag(Tag::Agile) || attacker.has_tag(Tag::Clumsy)
}

fn defender_clumsy_or_attacker_agile(attacker: &Combatant, defender: &Combatant) -> bool {
    defender.has_tag(Tag::Clumsy) || attacker.has_tag(Tag::Agile)
}

type Matchup = fn(&Combatant, &Combatant) -> bool;

/// Parry chance against agility on both sides, first match wins
const PARRY_AGILITY: [(Matchup, f32); 2] = [
    (defender_agile_or_attacker_clumsy, 1.5),
    (defender_clumsy_or_attacker_agile, 0.5),
];

/// Percentage chance that a swing lands before parry and block.
///
/// The player's skill bonus is added before the wield multiplier; agility
/// and stance apply after it. A defender that cannot dodge is always hit.
pub fn to_hit_chance(
    config: &MeleeConfig,
    attacker: &Combatant,
    defender: &Combatant,
    wield: WieldType,
    skill: Skill,
) -> Result<f32> {
    let mut chance = config.base_to_hit;
    if attacker.is_player {
        chance += config.skill_to_hit_per_level * attacker.skills.level(skill) as f32;
    }
    chance *= wield.to_hit_factor()?;

    if let Some(factor) = defender.tags.first_match(&EVASION_TAGS) {
        chance *= factor;
    }

    chance += StanceMatchup::compare(attacker.stance, defender.stance).to_hit_bonus(config);

    if defender.has_tag(Tag::CannotDodge) {
        return Ok(100.0);
    }

    Ok(chance * defender.defence.dodge)
}

/// Percentage chance that the defender parries, if it can parry at all
pub fn parry_chance(
    config: &MeleeConfig,
    attacker: &Combatant,
    defender: &Combatant,
    defender_wield: WieldType,
) -> Option<f32> {
    if !defender_wield.can_parry() || defender.has_tag(Tag::CannotParry) {
        return None;
    }

    let mut chance = config.base_parry_chance * defender.defence.parry;
    if let Some((_, factor)) = PARRY_AGILITY
        .iter()
        .find(|(applies, _)| applies(attacker, defender))
    {
        chance *= factor;
    }
    Some(chance)
}

/// Percentage chance that the defender blocks, if it can block at all
pub fn block_chance(
    config: &MeleeConfig,
    defender: &Combatant,
    defender_wield: WieldType,
) -> Option<f32> {
    if !defender_wield.can_block() || defender.has_tag(Tag::CannotBlock) {
        return None;
    }
    Some(config.base_block_chance * defender.defence.block)
}

/// Resolve whether a swing lands, and how.
///
/// Rolls, in order: the hit roll, the parry check (only when the defender
/// can parry), the block check (only when it can block).
pub fn resolve_swing(
    config: &MeleeConfig,
    dice: &mut dyn Dice,
    attacker: &Combatant,
    defender: &Combatant,
    attacker_wield: WieldType,
    defender_wield: WieldType,
    skill: Skill,
) -> Result<SwingOutcome> {
    let to_hit = to_hit_chance(config, attacker, defender, attacker_wield, skill)?;
    let roll = dice.roll_percent();
    tracing::trace!("to-hit {:.1} vs roll {:.1}", to_hit, roll);
    if roll > to_hit {
        return Ok(SwingOutcome::Evaded);
    }

    if let Some(chance) = parry_chance(config, attacker, defender, defender_wield) {
        if dice.percent_check(chance) {
            return Ok(SwingOutcome::Parried);
        }
    }

    if let Some(chance) = block_chance(config, defender, defender_wield) {
        if dice.percent_check(chance) {
            return Ok(SwingOutcome::Blocked);
        }
    }

    Ok(SwingOutcome::Hit)
}
