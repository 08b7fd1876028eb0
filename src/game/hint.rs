// src/game/hint.rs
//! Hints are keyed by the guesses left *after* a wrong answer. The same
//! lookup regenerates the trail when a saved game is resumed.

use crate::config::consts::{
    BORN_DATE_CLASS, BORN_LOCATION_CLASS, DESCRIPTION_CLASS, MAX_GUESSES, REDACTION,
};
use crate::core::Fetch;
use crate::error::Result;

use super::state::{GameState, NameParts};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HintTier {
    /// Birth date and place from the bio page.
    BirthInfo,
    FirstInitial,
    LastInitial,
    /// Bio text with every form of the name blanked out.
    Biography,
    /// Out of guesses: the full name.
    Answer,
    /// Before any wrong guess.
    NoneYet,
}

const TIERS: [(u8, HintTier); 5] = [
    (4, HintTier::BirthInfo),
    (3, HintTier::FirstInitial),
    (2, HintTier::LastInitial),
    (1, HintTier::Biography),
    (0, HintTier::Answer),
];

impl HintTier {
    pub fn for_remaining(remaining: u8) -> Self {
        TIERS
            .iter()
            .find(|(n, _)| *n == remaining)
            .map(|(_, tier)| *tier)
            .unwrap_or(HintTier::NoneYet)
    }
}

/// Tiers a resumed game has already seen, oldest first: one per count from
/// `MAX_GUESSES - 1` down to `remaining`. A game saved before any wrong
/// guess gets the single "no hint yet" line.
pub fn replay_tiers(remaining: u8) -> Vec<HintTier> {
    let tiers: Vec<HintTier> = (remaining..MAX_GUESSES).rev().map(HintTier::for_remaining).collect();
    if tiers.is_empty() { vec![HintTier::NoneYet] } else { tiers }
}

/// Render `tier` for the quote in `state`. Bio-page tiers fetch the page;
/// fetch and missing-field errors are passed up unchanged.
pub fn hint_text<F: Fetch + ?Sized>(tier: HintTier, state: &GameState, fetcher: &mut F) -> Result<String> {
    let names = state.names();
    let text = match tier {
        HintTier::BirthInfo => {
            let bio = fetcher.fetch(&state.record().bio_url)?;
            let born = bio.text_by_class(BORN_DATE_CLASS)?;
            let place = bio.text_by_class(BORN_LOCATION_CLASS)?;
            format!("    Hint 1: The author was born on {born} {place}.")
        }
        HintTier::FirstInitial => {
            format!("    Hint 2: The author's first name starts with {}.", initial(&names.first))
        }
        HintTier::LastInitial => {
            format!("    Hint 3: The author's last name starts with {}.", initial(&names.last))
        }
        HintTier::Biography => {
            let bio = fetcher.fetch(&state.record().bio_url)?;
            let description = bio.text_by_class(DESCRIPTION_CLASS)?;
            let hidden = redact_bio(&description, state.author(), names);
            format!("    Hint 4 - here's a short biography of the author:\n {hidden}")
        }
        HintTier::Answer => {
            format!("Sorry, you've run out of guesses. The answer was: {}.", state.author())
        }
        HintTier::NoneYet => s!("You don't get a hint yet! Keep trying!"),
    };
    logd!("Hint: {tier:?} for {}", state.author());
    Ok(text)
}

fn initial(token: &str) -> String {
    token.chars().next().map(String::from).unwrap_or_default()
}

/// Blank out the full name and each name token, both as written and lowercased.
pub fn redact_bio(bio: &str, full_name: &str, names: &NameParts) -> String {
    let mut hidden = s!(bio);
    for name in [full_name, names.first.as_str(), names.middle.as_str(), names.last.as_str()] {
        if name.is_empty() {
            continue;
        }
        hidden = hidden.replace(name, REDACTION).replace(&name.to_lowercase(), REDACTION);
    }
    hidden
}
