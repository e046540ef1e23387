//! Skill levels and experience

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Skill categories. Every weapon maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Unarmed,
    Blades,
    Daggers,
    Axes,
    Maces,
    Spears,
    Shields,
}

/// Experience needed to go from `level` to `level + 1`
pub fn xp_to_next_level(level: u32) -> u32 {
    100 * (level + 1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProgress {
    pub level: u32,
    /// Experience accumulated towards the next level
    pub xp: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    skills: AHashMap<Skill, SkillProgress>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level, 0 for untrained skills
    pub fn level(&self, skill: Skill) -> u32 {
        self.skills.get(&skill).map_or(0, |p| p.level)
    }

    pub fn progress(&self, skill: Skill) -> SkillProgress {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    pub fn set_level(&mut self, skill: Skill, level: u32) {
        self.skills.entry(skill).or_default().level = level;
    }

    /// Grant experience, levelling up as thresholds are crossed.
    ///
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, skill: Skill, amount: u32) -> u32 {
        let progress = self.skills.entry(skill).or_default();
        progress.xp += amount;

        let mut gained = 0;
        while progress.xp >= xp_to_next_level(progress.level) {
            progress.xp -= xp_to_next_level(progress.level);
            progress.level += 1;
            gained += 1;
        }

        if gained > 0 {
            tracing::debug!("{:?} advanced to level {}", skill, progress.level);
        }
        gained
    }
}
