//! Interactive working sessions.
//!
//! A session owns its rosters exclusively. Callers edit them only through the
//! session's methods; every edit is applied and fully rescored before the
//! method returns, so a session is always observed in the [`SessionState::Idle`]
//! state.
//!
//! - **circuit**: circuit points standings calculator (grouped team rosters)
//! - **mania**: roster mania team builder (free player pool + ad-hoc teams)

pub mod circuit;
pub mod mania;
pub mod moves;

pub use circuit::CircuitSession;
pub use mania::{Board, ManiaSession};
pub use moves::{move_item, pair_mut, transfer_item};

/// Lifecycle of a session around one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No edit in progress, derived totals are current.
    #[default]
    Idle,
    /// An edit is being applied and rescored.
    Mutating,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Mutating => write!(f, "mutating"),
        }
    }
}
