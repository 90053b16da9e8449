//! Skill model: converting a raw check result into a skill level.
//!
//! A skill level is a normalized competence score in `[floor, 1.0]` that
//! drives every probability in the garbler. The mapping is linear in
//! `roll / difficulty`: a roll of zero (or less) reads at the floor, a roll
//! equal to the difficulty reads perfectly, and anything beyond clamps.

use crate::config::DEFAULT_MIN_CHANCE;

/// Convert a raw check result and difficulty into a skill level with the
/// default floor of 0.25.
pub fn skill_level_from_roll(roll: f64, difficulty: f64) -> f64 {
    skill_level_with_floor(roll, difficulty, DEFAULT_MIN_CHANCE)
}

/// Convert a raw check result and difficulty into a skill level in
/// `[floor, 1.0]`.
///
/// Non-positive difficulties are clamped to 1.0 rather than rejected, so a
/// degenerate check still yields a usable level.
pub fn skill_level_with_floor(roll: f64, difficulty: f64, floor: f64) -> f64 {
    let difficulty = difficulty.max(1.0);
    (floor + (1.0 - floor) * roll / difficulty).clamp(floor, 1.0)
}
