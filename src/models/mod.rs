//! Core data models for the scoring engine.

mod ids;
mod placement;
mod player;
mod region;
mod roster;
mod standing;

pub use ids::*;
pub use placement::*;
pub use player::*;
pub use region::*;
pub use roster::*;
pub use standing::*;
