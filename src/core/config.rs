//! Melee tuning configuration
//!
//! Every scalar tunable of the melee resolver lives here. Precedence tables
//! (physique chain, armor matrix, hit locations) stay in code next to the
//! step that uses them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::constants::*;
use crate::core::error::{CombatError, Result};

/// Magnitude and duration ranges for a damage-over-time debuff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebuffConfig {
    /// Fixed part of the per-tick magnitude
    pub magnitude_base: i32,
    /// Random extra magnitude, rolled in `[0, magnitude_spread]`
    pub magnitude_spread: i32,
    pub duration_min: u32,
    pub duration_max: u32,
}

impl DebuffConfig {
    pub fn bleed() -> Self {
        Self {
            magnitude_base: BLEED_MAGNITUDE_BASE,
            magnitude_spread: BLEED_MAGNITUDE_SPREAD,
            duration_min: BLEED_DURATION_MIN,
            duration_max: BLEED_DURATION_MAX,
        }
    }

    pub fn poison() -> Self {
        Self {
            magnitude_base: POISON_MAGNITUDE_BASE,
            magnitude_spread: POISON_MAGNITUDE_SPREAD,
            duration_min: POISON_DURATION_MIN,
            duration_max: POISON_DURATION_MAX,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.magnitude_base < 0 || self.magnitude_spread < 0 {
            return Err(CombatError::InvalidConfig(format!(
                "{} magnitude must not be negative",
                name
            )));
        }
        if self.duration_min == 0 || self.duration_min > self.duration_max {
            return Err(CombatError::InvalidConfig(format!(
                "{} duration range [{}, {}] is empty or zero",
                name, self.duration_min, self.duration_max
            )));
        }
        Ok(())
    }
}

/// Configuration for melee resolution
///
/// Missing keys in a TOML file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeConfig {
    // === HIT ===
    /// Base to-hit percentage before any modifier
    pub base_to_hit: f32,
    /// Flat to-hit per weapon-skill level, player only, added pre-multiplier
    pub skill_to_hit_per_level: f32,
    /// Flat to-hit for a favourable stance matchup
    pub favourable_stance_to_hit: f32,
    /// Flat to-hit for an unfavourable stance matchup (negative)
    pub unfavourable_stance_to_hit: f32,
    pub base_parry_chance: f32,
    pub base_block_chance: f32,

    // === DAMAGE ===
    /// Weapon power is scaled by this before anything else
    pub base_damage_multiplier: f32,
    /// Fractional damage bonus per weapon-skill level, player only
    pub skill_damage_per_level: f32,
    pub hand_and_a_half_multiplier: f32,
    pub critical_multiplier: f32,
    /// Crit chance multiplier when single-wielding
    pub single_wield_crit_multiplier: f32,

    // === ROUNDING ===
    /// Inverse variance amplitude for raw damage (lower = wider)
    pub damage_variance: i32,
    /// Inverse variance amplitude for mitigation (lower = wider)
    pub mitigation_variance: i32,

    // === PROGRESSION ===
    pub critical_xp: u32,
    pub hit_xp: u32,

    // === DEBUFFS ===
    pub bleed: DebuffConfig,
    pub poison: DebuffConfig,

    // === TIME ===
    /// Ticks charged for one attack at weapon speed 1.0
    pub base_attack_time: u32,
}

impl Default for MeleeConfig {
    fn default() -> Self {
        Self {
            base_to_hit: BASE_TO_HIT,
            skill_to_hit_per_level: SKILL_TO_HIT_PER_LEVEL,
            favourable_stance_to_hit: FAVOURABLE_STANCE_TO_HIT,
            unfavourable_stance_to_hit: UNFAVOURABLE_STANCE_TO_HIT,
            base_parry_chance: BASE_PARRY_CHANCE,
            base_block_chance: BASE_BLOCK_CHANCE,

            base_damage_multiplier: BASE_MELEE_MULTIPLIER,
            skill_damage_per_level: SKILL_DAMAGE_PER_LEVEL,
            hand_and_a_half_multiplier: HAND_AND_A_HALF_MULTIPLIER,
            critical_multiplier: CRITICAL_MULTIPLIER,
            single_wield_crit_multiplier: SINGLE_WIELD_CRIT_MULTIPLIER,

            damage_variance: DAMAGE_VARIANCE,
            mitigation_variance: MITIGATION_VARIANCE,

            critical_xp: CRITICAL_XP,
            hit_xp: HIT_XP,

            bleed: DebuffConfig::bleed(),
            poison: DebuffConfig::poison(),

            base_attack_time: BASE_ATTACK_TIME,
        }
    }
}

impl MeleeConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MeleeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded melee config from {:?}", path);
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let multipliers = [
            ("base_damage_multiplier", self.base_damage_multiplier),
            ("hand_and_a_half_multiplier", self.hand_and_a_half_multiplier),
            ("critical_multiplier", self.critical_multiplier),
            (
                "single_wield_crit_multiplier",
                self.single_wield_crit_multiplier,
            ),
        ];
        for (name, value) in multipliers {
            if value <= 0.0 {
                return Err(CombatError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=100.0).contains(&self.base_to_hit) {
            return Err(CombatError::InvalidConfig(format!(
                "base_to_hit ({}) must be a percentage",
                self.base_to_hit
            )));
        }

        if self.base_parry_chance < 0.0 || self.base_block_chance < 0.0 {
            return Err(CombatError::InvalidConfig(
                "parry and block chances must not be negative".into(),
            ));
        }

        if self.damage_variance <= 0 || self.mitigation_variance <= 0 {
            return Err(CombatError::InvalidConfig(
                "variance amplitudes must be positive".into(),
            ));
        }

        if self.base_attack_time == 0 {
            return Err(CombatError::InvalidConfig(
                "base_attack_time must be positive".into(),
            ));
        }

        self.bleed.validate("bleed")?;
        self.poison.validate("poison")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MeleeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MeleeConfig::from_toml_str(
            r#"
            base_to_hit = 60.0
            critical_xp = 25

            [poison]
            magnitude_base = 4
            magnitude_spread = 0
            duration_min = 2
            duration_max = 2
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.base_to_hit, 60.0);
        assert_eq!(config.critical_xp, 25);
        assert_eq!(config.poison.magnitude_base, 4);
        assert_eq!(config.bleed, DebuffConfig::bleed());
        assert_eq!(config.base_parry_chance, BASE_PARRY_CHANCE);
    }

    #[test]
    fn test_rejects_zero_variance() {
        let config = MeleeConfig {
            damage_variance: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CombatError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_duration() {
        let mut config = MeleeConfig::default();
        config.bleed.duration_min = 9;
        config.bleed.duration_max = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            MeleeConfig::from_toml_str("base_to_hit = \"lots\""),
            Err(CombatError::Toml(_))
        ));
    }
}
