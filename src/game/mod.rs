// src/game/mod.rs
//! "Who said it?" rounds: state and transitions, hints, save files, and the
//! session loop that ties them to a prompt.

pub mod engine;
pub mod hint;
pub mod save;
pub mod state;

pub use engine::{RoundEnd, Session, SessionEnd};
pub use hint::HintTier;
pub use state::{Command, GameState, NameParts, Phase, Transition};
