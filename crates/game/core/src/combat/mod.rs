//! Combat resolution primitives.
//!
//! - `Attackable`: capability for anything that can receive damage
//! - `effective_damage`: level-gap damage scaling
//! - `within_range`: whether an attack connects at a given distance
//! - `AttackOutcome`: what an attack attempt did

pub mod attackable;
pub mod damage;
pub mod hit;
pub mod result;

pub use attackable::Attackable;
pub use damage::{DamageScaling, effective_damage, scaling_for};
pub use hit::within_range;
pub use result::AttackOutcome;
