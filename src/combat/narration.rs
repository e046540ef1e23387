//! Combat narration
//!
//! Builds the sentence for each swing and hands it to a sink. Whether a
//! message is seen, and how it is colored, is the sink's business.

use serde::Serialize;

use crate::combat::hit::SwingOutcome;
use crate::combat::resolver::SwingReport;
use crate::core::types::LocationId;
use crate::entity::{Combatant, Tag};
use crate::items::{Item, ItemTag};

/// How far a message carries; loud messages may wake sleepers nearby
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Loudness {
    Quiet,
    Loud,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatMessage {
    pub text: String,
    pub loudness: Loudness,
    /// Where it happened, for visibility checks
    pub location: LocationId,
}

pub trait MessageSink {
    fn emit(&mut self, message: CombatMessage);
}

/// Keeps every message in order
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<CombatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[CombatMessage] {
        &self.messages
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl MessageSink for MessageLog {
    fn emit(&mut self, message: CombatMessage) {
        self.messages.push(message);
    }
}

/// Forwards narration to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn emit(&mut self, message: CombatMessage) {
        tracing::info!(
            location = message.location.0,
            loud = message.loudness == Loudness::Loud,
            "{}",
            message.text
        );
    }
}

/// Drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn emit(&mut self, _message: CombatMessage) {}
}

fn subject(who: &Combatant) -> String {
    if who.is_player {
        "You".to_string()
    } else {
        capitalize(&who.name)
    }
}

fn object(who: &Combatant) -> String {
    if who.is_player {
        "you".to_string()
    } else {
        who.name.clone()
    }
}

fn possessive(who: &Combatant) -> String {
    if who.is_player {
        "your".to_string()
    } else {
        format!("{}'s", who.name)
    }
}

/// Second person takes the bare verb, third person the -s form
fn verb<'a>(who: &Combatant, second: &'a str, third: &'a str) -> &'a str {
    if who.is_player {
        second
    } else {
        third
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_are(item: &Item) -> &'static str {
    if item.has_tag(ItemTag::Plural) {
        "are"
    } else {
        "is"
    }
}

/// Pronoun for the speaker's own gear
fn own(who: &Combatant) -> &'static str {
    if who.is_player {
        "your"
    } else {
        "its"
    }
}

fn fatal_clause(defender: &Combatant) -> String {
    let verb = if defender.has_tag(Tag::Unliving) {
        "destroying"
    } else {
        "killing"
    };
    let whom = if defender.is_player { "you" } else { "it" };
    format!(", {} {}", verb, whom)
}

fn damage_sentence(
    attacker: &Combatant,
    defender: &Combatant,
    weapon: &Item,
    swing: &SwingReport,
) -> String {
    let part = swing.location.map_or("body", |l| l.part);
    let mut text = if swing.critical {
        format!(
            "{} {} a critical blow to {} {} with {} {}",
            subject(attacker),
            verb(attacker, "land", "lands"),
            possessive(defender),
            part,
            own(attacker),
            weapon.name
        )
    } else {
        format!(
            "{} {} {} in the {} with {} {}",
            subject(attacker),
            verb(attacker, "hit", "hits"),
            object(defender),
            part,
            own(attacker),
            weapon.name
        )
    };

    if swing.damage > 0 {
        text.push_str(&format!(" for {} damage", swing.damage));
    } else {
        text.push_str(", doing no harm");
    }
    if swing.fatal {
        text.push_str(&fatal_clause(defender));
        text.push('.');
        return text;
    }
    text.push('.');

    let status = verb(defender, "are", "is");
    if swing.bleed {
        text.push_str(&format!(" {} {} bleeding.", subject(defender), status));
    }
    if swing.poison {
        text.push_str(&format!(" {} {} poisoned.", subject(defender), status));
    }
    text
}

/// Describe one swing as seen by the player or a bystander
pub fn describe_swing(
    attacker: &Combatant,
    defender: &Combatant,
    weapon: &Item,
    swing: &SwingReport,
) -> CombatMessage {
    let (text, loudness) = match swing.outcome {
        SwingOutcome::Evaded => (
            format!(
                "{} {} {} {}.",
                subject(defender),
                verb(defender, "dodge", "dodges"),
                possessive(attacker),
                weapon.name
            ),
            Loudness::Quiet,
        ),
        SwingOutcome::Parried => (
            format!(
                "{} {} {} turned aside by {}.",
                capitalize(&possessive(attacker)),
                weapon.name,
                is_are(weapon),
                object(defender)
            ),
            Loudness::Loud,
        ),
        SwingOutcome::Blocked => (
            format!(
                "{} {} {} {} on {} shield. {}",
                subject(defender),
                verb(defender, "catch", "catches"),
                possessive(attacker),
                weapon.name,
                own(defender),
                damage_sentence(attacker, defender, weapon, swing)
            ),
            Loudness::Loud,
        ),
        SwingOutcome::Hit => (
            damage_sentence(attacker, defender, weapon, swing),
            Loudness::Loud,
        ),
    };

    CombatMessage {
        text,
        loudness,
        location: attacker.location,
    }
}
