//! Combatant state
//!
//! A combatant is owned by the world; melee resolution only reads it and
//! calls the mutators below.

use serde::{Deserialize, Serialize};

use crate::combat::Stance;
use crate::core::error::Result;
use crate::core::types::{CombatantId, LocationId, Tick};
use crate::entity::buffs::BuffSet;
use crate::entity::skills::SkillSet;
use crate::entity::tags::{Tag, TagSet};
use crate::items::{Equipment, Item};

/// Current/maximum meter (HP, MP, SP)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub current: i32,
    pub max: i32,
}

impl ResourcePool {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Reduce, clamped at zero
    pub fn reduce(&mut self, amount: i32) {
        self.current = (self.current - amount.max(0)).max(0);
    }

    /// Restore, clamped at max
    pub fn restore(&mut self, amount: i32) {
        self.current = (self.current + amount.max(0)).min(self.max);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }
}

/// Scalars derived elsewhere (evasion skill, gear) and consumed as-is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenceModifiers {
    pub dodge: f32,
    pub parry: f32,
    pub block: f32,
}

impl Default for DefenceModifiers {
    fn default() -> Self {
        Self {
            dodge: 1.0,
            parry: 1.0,
            block: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    /// The player is the only combatant whose weapon skills are tracked
    pub is_player: bool,
    pub location: LocationId,
    pub hp: ResourcePool,
    pub mp: ResourcePool,
    pub sp: ResourcePool,
    pub stance: Stance,
    pub tags: TagSet,
    pub skills: SkillSet,
    pub equipment: Equipment,
    pub buffs: BuffSet,
    pub defence: DefenceModifiers,
    /// Ticks until this combatant may act again
    pub action_timer: Tick,
    /// Non-player only: who this combatant intends to fight
    pub hostile_to: Vec<CombatantId>,
    /// Player only: current auto-attack target
    pub auto_target: Option<CombatantId>,
    /// Player only: what killed them
    pub death_reason: Option<String>,
}

impl Combatant {
    pub fn new(name: &str, max_hp: i32) -> Self {
        Self {
            id: CombatantId::new(),
            name: name.to_string(),
            is_player: false,
            location: LocationId::default(),
            hp: ResourcePool::new(max_hp),
            mp: ResourcePool::new(0),
            sp: ResourcePool::new(0),
            stance: Stance::default(),
            tags: TagSet::new(),
            skills: SkillSet::new(),
            equipment: Equipment::new(),
            buffs: BuffSet::new(),
            defence: DefenceModifiers::default(),
            action_timer: 0,
            hostile_to: Vec::new(),
            auto_target: None,
            death_reason: None,
        }
    }

    pub fn player(name: &str, max_hp: i32) -> Self {
        Self {
            is_player: true,
            ..Self::new(name, max_hp)
        }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    pub fn with_item(mut self, item: Item) -> Result<Self> {
        self.equipment.equip(item)?;
        Ok(self)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.has(tag)
    }

    pub fn is_dead(&self) -> bool {
        self.hp.is_empty()
    }

    pub fn consume_action_time(&mut self, ticks: Tick) {
        self.action_timer += ticks;
    }

    pub fn is_hostile_to(&self, other: CombatantId) -> bool {
        self.hostile_to.contains(&other)
    }

    pub fn add_hostility(&mut self, other: CombatantId) {
        if !self.is_hostile_to(other) {
            self.hostile_to.push(other);
        }
    }

    /// Advance status effects one tick, returning the damage they dealt
    pub fn tick_status_effects(&mut self) -> i32 {
        let damage = self.buffs.tick();
        if damage > 0 {
            let fatal = damage >= self.hp.current;
            self.hp.reduce(damage);
            if fatal && self.is_player && self.death_reason.is_none() {
                self.death_reason = Some("succumbed to their wounds".to_string());
            }
        }
        damage
    }
}
