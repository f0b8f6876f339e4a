// src/scenarios/mod.rs

// Runs that combine walks and projection for a concrete setting.
// Each scenario is feature-gated so downstream users enable only what they use.

pub mod sdk;
pub use sdk::*;

#[cfg(feature = "scenario-citadel")]
pub mod citadel;

#[cfg(feature = "scenario-citadel")]
pub use citadel::*;
