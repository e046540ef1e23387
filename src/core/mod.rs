pub mod config;
pub mod dice;
pub mod error;
pub mod types;

pub use config::{DebuffConfig, MeleeConfig};
pub use dice::{round_with_variance, Dice, FixedDice, SeededDice};
pub use error::{CombatError, Result};
pub use types::{CombatantId, LocationId, Tick};
