//! Melee Combat - hand-to-hand combat resolution
//!
//! Given two combatants and a decided attack, works out who swings with
//! what, whether each swing lands, how hard it hits, what armor stops and
//! what the defender is left with.

pub mod combat;
pub mod core;
pub mod entity;
pub mod items;
