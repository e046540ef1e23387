//! Combat resolution seam
//!
//! A resolver executes one decided attack between two combatants. The
//! random source and the narration sink travel together in a
//! [`CombatContext`] so every roll is drawn from one place, in order.

use serde::Serialize;

use crate::combat::body_zone::HitLocation;
use crate::combat::hit::SwingOutcome;
use crate::combat::narration::MessageSink;
use crate::core::dice::Dice;
use crate::core::error::Result;
use crate::core::types::Tick;
use crate::entity::Combatant;
use crate::items::EquipSlot;

/// Collaborators a resolution draws on
pub struct CombatContext<'a> {
    pub dice: &'a mut dyn Dice,
    pub sink: &'a mut dyn MessageSink,
}

impl<'a> CombatContext<'a> {
    pub fn new(dice: &'a mut dyn Dice, sink: &'a mut dyn MessageSink) -> Self {
        Self { dice, sink }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hand {
    Main,
    Off,
}

impl Hand {
    pub fn slot(&self) -> EquipSlot {
        match self {
            Hand::Main => EquipSlot::MainHand,
            Hand::Off => EquipSlot::OffHand,
        }
    }
}

/// Everything one swing did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwingReport {
    pub hand: Hand,
    pub outcome: SwingOutcome,
    /// Name of the item swung (the unarmed pseudo-item for bare hands)
    pub weapon: String,
    /// Rounded raw damage; 0 unless the swing connected
    pub raw: i32,
    pub mitigation: i32,
    /// Damage actually taken off HP
    pub damage: i32,
    pub critical: bool,
    pub bleed: bool,
    pub poison: bool,
    pub fatal: bool,
    pub location: Option<HitLocation>,
}

impl SwingReport {
    /// A swing that never reached the damage step
    pub fn deflected(hand: Hand, outcome: SwingOutcome, weapon: &str) -> Self {
        Self {
            hand,
            outcome,
            weapon: weapon.to_string(),
            raw: 0,
            mitigation: 0,
            damage: 0,
            critical: false,
            bleed: false,
            poison: false,
            fatal: false,
            location: None,
        }
    }
}

/// Result of one attack action
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttackReport {
    pub swings: Vec<SwingReport>,
    /// Ticks charged to the attacker; 0 when the attack never happened
    pub action_time: Tick,
}

impl AttackReport {
    /// No attack took place and nothing changed
    pub fn declined() -> Self {
        Self::default()
    }

    pub fn attacked(&self) -> bool {
        !self.swings.is_empty()
    }

    pub fn total_damage(&self) -> i32 {
        self.swings.iter().map(|s| s.damage).sum()
    }

    pub fn killed(&self) -> bool {
        self.swings.iter().any(|s| s.fatal)
    }
}

/// Executes an attack that has already been decided on.
///
/// Implementations share hit, damage and mitigation helpers from
/// [`crate::combat`] rather than inheriting from each other.
pub trait CombatResolver {
    /// Resolve the attack and report every swing.
    ///
    /// Returns a declined report, with no side effects, when either side is
    /// already dead or the attacker cannot fight with what it holds.
    fn resolve(
        &self,
        ctx: &mut CombatContext<'_>,
        attacker: &mut Combatant,
        defender: &mut Combatant,
    ) -> Result<AttackReport>;

    /// Did an attack occur?
    fn attack(
        &self,
        ctx: &mut CombatContext<'_>,
        attacker: &mut Combatant,
        defender: &mut Combatant,
    ) -> Result<bool> {
        Ok(self.resolve(ctx, attacker, defender)?.attacked())
    }
}
