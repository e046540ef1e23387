//! Timed status effects
//!
//! One buff per kind. Re-applying a kind replaces the existing buff
//! (last application wins).

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::Tick;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    /// Loses `magnitude` HP per tick
    Bleed,
    /// Loses `magnitude` HP per tick
    Poison,
    /// Marker that blocks re-use of an ability until it expires
    Cooldown,
}

impl BuffKind {
    /// Does this buff deal damage each tick?
    pub fn damages_over_time(&self) -> bool {
        matches!(self, BuffKind::Bleed | BuffKind::Poison)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    pub kind: BuffKind,
    pub duration: Tick,
    pub magnitude: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffSet {
    buffs: AHashMap<BuffKind, Buff>,
}

impl BuffSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a buff, replacing any existing buff of the same kind
    pub fn set(&mut self, kind: BuffKind, duration: Tick, magnitude: i32) {
        self.buffs.insert(
            kind,
            Buff {
                kind,
                duration,
                magnitude,
            },
        );
    }

    pub fn has(&self, kind: BuffKind) -> bool {
        self.buffs.contains_key(&kind)
    }

    pub fn get(&self, kind: BuffKind) -> Option<&Buff> {
        self.buffs.get(&kind)
    }

    pub fn remove(&mut self, kind: BuffKind) -> Option<Buff> {
        self.buffs.remove(&kind)
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }

    /// Advance one tick.
    ///
    /// Returns the damage dealt this tick by damage-over-time buffs and
    /// drops every buff whose duration runs out.
    pub fn tick(&mut self) -> i32 {
        let mut damage = 0;
        for buff in self.buffs.values_mut() {
            if buff.kind.damages_over_time() {
                damage += buff.magnitude.max(0);
            }
            buff.duration = buff.duration.saturating_sub(1);
        }
        self.buffs.retain(|_, buff| buff.duration > 0);
        damage
    }
}
