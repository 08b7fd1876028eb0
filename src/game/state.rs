// src/game/state.rs
use crate::config::consts::{MAX_GUESSES, SAVE_SIGNAL};
use crate::store::QuoteRecord;

use super::hint::HintTier;

/// Whitespace tokens of the author's name used by the hints.
/// With fewer than three tokens `middle` is the same token as `last`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl NameParts {
    /// `None` when the name has no tokens at all.
    pub fn split(full: &str) -> Option<Self> {
        let tokens: Vec<&str> = full.split_whitespace().collect();
        let first = *tokens.first()?;
        let last = *tokens.last()?;
        let middle = if tokens.len() >= 3 { tokens[1] } else { last };
        Some(Self { first: s!(first), middle: s!(middle), last: s!(last) })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    Won,
    Exhausted,
    RoundEndPrompt,
    SavedExit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("author name is empty")]
    EmptyAuthor,
    #[error("{found} guesses remaining is more than the maximum of {max}")]
    TooManyGuesses { found: u8, max: u8 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    record: QuoteRecord,
    remaining: u8,
    names: NameParts,
}

impl GameState {
    pub fn new(record: QuoteRecord, remaining: u8) -> Result<Self, StateError> {
        if remaining > MAX_GUESSES {
            return Err(StateError::TooManyGuesses { found: remaining, max: MAX_GUESSES });
        }
        let names = NameParts::split(&record.author_name).ok_or(StateError::EmptyAuthor)?;
        Ok(Self { record, remaining, names })
    }

    /// A new round on `record` with every guess still available.
    pub fn fresh(record: QuoteRecord) -> Result<Self, StateError> {
        Self::new(record, MAX_GUESSES)
    }

    pub fn record(&self) -> &QuoteRecord {
        &self.record
    }

    pub fn author(&self) -> &str {
        &self.record.author_name
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn names(&self) -> &NameParts {
        &self.names
    }

    pub fn phase(&self) -> Phase {
        if self.remaining == 0 { Phase::Exhausted } else { Phase::AwaitingGuess }
    }

    /// Case-insensitive comparison against the full author name.
    pub fn is_correct(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.record.author_name.to_lowercase()
    }
}

/// What the player typed while a guess was expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Save,
    Guess(String),
}

impl Command {
    /// Surrounding whitespace is dropped here; guesses are stored trimmed.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case(SAVE_SIGNAL) {
            Command::Save
        } else {
            Command::Guess(s!(input))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Save(GameState),
    Won(GameState),
    /// `hint` is keyed to the count *after* the decrement.
    Wrong { state: GameState, hint: HintTier },
}

impl Transition {
    pub fn phase(&self) -> Phase {
        match self {
            Transition::Save(_) => Phase::SavedExit,
            Transition::Won(_) => Phase::Won,
            Transition::Wrong { state, .. } => state.phase(),
        }
    }

    pub fn state(&self) -> &GameState {
        match self {
            Transition::Save(state) | Transition::Won(state) | Transition::Wrong { state, .. } => state,
        }
    }
}

/// The round's transition function. Only meaningful in `AwaitingGuess`;
/// the count never drops below zero.
pub fn step(state: GameState, command: Command) -> Transition {
    match command {
        Command::Save => Transition::Save(state),
        Command::Guess(guess) if state.is_correct(&guess) => Transition::Won(state),
        Command::Guess(_) => {
            let mut state = state;
            state.remaining = state.remaining.saturating_sub(1);
            let hint = HintTier::for_remaining(state.remaining);
            Transition::Wrong { state, hint }
        }
    }
}
