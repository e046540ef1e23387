//! Melee constants - default values for every tunable in one place
//!
//! `MeleeConfig::default()` is built from these.

// Hit resolution
pub const BASE_TO_HIT: f32 = 75.0;
pub const SKILL_TO_HIT_PER_LEVEL: f32 = 1.0;
pub const FAVOURABLE_STANCE_TO_HIT: f32 = 20.0;
pub const UNFAVOURABLE_STANCE_TO_HIT: f32 = -10.0;
pub const BASE_PARRY_CHANCE: f32 = 10.0;
pub const BASE_BLOCK_CHANCE: f32 = 20.0;

// Damage
pub const BASE_MELEE_MULTIPLIER: f32 = 1.2;
pub const SKILL_DAMAGE_PER_LEVEL: f32 = 0.05;
pub const HAND_AND_A_HALF_MULTIPLIER: f32 = 1.8;
pub const CRITICAL_MULTIPLIER: f32 = 3.0;
pub const SINGLE_WIELD_CRIT_MULTIPLIER: f32 = 1.1;

// Rounding (inverse variance: lower is wider)
pub const DAMAGE_VARIANCE: i32 = 3;
pub const MITIGATION_VARIANCE: i32 = 4;

// Skill experience
pub const CRITICAL_XP: u32 = 10;
pub const HIT_XP: u32 = 2;

// Bleed debuff
pub const BLEED_MAGNITUDE_BASE: i32 = 1;
pub const BLEED_MAGNITUDE_SPREAD: i32 = 2;
pub const BLEED_DURATION_MIN: u32 = 3;
pub const BLEED_DURATION_MAX: u32 = 6;

// Poison debuff
pub const POISON_MAGNITUDE_BASE: i32 = 2;
pub const POISON_MAGNITUDE_SPREAD: i32 = 3;
pub const POISON_DURATION_MIN: u32 = 5;
pub const POISON_DURATION_MAX: u32 = 10;

// Time
pub const BASE_ATTACK_TIME: u32 = 100;
