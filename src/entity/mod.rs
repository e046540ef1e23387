pub mod buffs;
pub mod combatant;
pub mod skills;
pub mod tags;

pub use buffs::{Buff, BuffKind, BuffSet};
pub use combatant::{Combatant, DefenceModifiers, ResourcePool};
pub use skills::{Skill, SkillProgress, SkillSet};
pub use tags::{Tag, TagSet};
