//! Melee combat resolution
//!
//! The pipeline for one swing runs wield classification, hit resolution,
//! damage, armor mitigation and outcome application, in that order.
//! [`MeleeResolver`] sequences it for up to two hands.

pub mod armor;
pub mod body_zone;
pub mod constants;
pub mod damage;
pub mod hit;
pub mod melee;
pub mod mitigation;
pub mod narration;
pub mod outcome;
pub mod resolver;
pub mod stance;
pub mod wield;

pub use armor::armor_modifier;
pub use body_zone::{pick_hit_location, HitLocation};
pub use damage::{calculate_damage, DamageRoll};
pub use hit::{resolve_swing, SwingOutcome};
pub use melee::MeleeResolver;
pub use mitigation::{resolve_mitigation, Mitigation};
pub use narration::{CombatMessage, Loudness, MessageLog, MessageSink, NullSink, TracingSink};
pub use outcome::{apply_outcome, AppliedDamage};
pub use resolver::{AttackReport, CombatContext, CombatResolver, Hand, SwingReport};
pub use stance::{Stance, StanceMatchup};
pub use wield::{WieldInfo, WieldType};
