// src/game/engine.rs
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::consts::{NEW_GAME_SIGNAL, SAVE_EXT};
use crate::core::Fetch;
use crate::error::{Error, Result};
use crate::prompt::{ask_file_name, ask_yes_no, enforce_file_extension, Prompt};
use crate::store::QuoteRecord;

use super::hint::{hint_text, replay_tiers};
use super::save::{load_game, save_game};
use super::state::{step, Command, GameState, Phase, Transition};

const PLAY_AGAIN: &str = "Would you like to play again (y/n)? ";

/// How a single round finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    Won,
    Exhausted,
    Saved(PathBuf),
}

/// How the whole session finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player answered `n` to "play again".
    Declined,
    /// The player saved mid-round; nothing more is asked.
    Saved(PathBuf),
}

/// One interactive run over a quote pool: rounds repeat until the player
/// declines or saves.
pub struct Session<'a, P: Prompt + ?Sized, F: Fetch + ?Sized, R: Rng> {
    pool: &'a [QuoteRecord],
    prompt: &'a mut P,
    fetcher: &'a mut F,
    rng: R,
    data_dir: &'a Path,
    rounds: u32,
    phase: Phase,
}

impl<'a, P: Prompt + ?Sized, F: Fetch + ?Sized, R: Rng> Session<'a, P, F, R> {
    pub fn new(pool: &'a [QuoteRecord], prompt: &'a mut P, fetcher: &'a mut F, rng: R, data_dir: &'a Path) -> Self {
        Self { pool, prompt, fetcher, rng, data_dir, rounds: 0, phase: Phase::AwaitingGuess }
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Where the session stands; `SavedExit` or `RoundEndPrompt` once `run` returns.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            let state = self.open_round()?;
            match self.play_round(state)? {
                RoundEnd::Saved(path) => return Ok(SessionEnd::Saved(path)),
                RoundEnd::Won | RoundEnd::Exhausted => {}
            }

            self.phase = Phase::RoundEndPrompt;
            if !ask_yes_no(&mut *self.prompt, PLAY_AGAIN, PLAY_AGAIN)? {
                self.prompt.say("Thanks for playing! Bye!")?;
                return Ok(SessionEnd::Declined);
            }
            self.prompt.say("Great! Here we go again...\n\n")?;
        }
    }

    /// Either resume a save or draw a fresh quote, then show the quote (and,
    /// when resuming, every hint already earned).
    fn open_round(&mut self) -> Result<GameState> {
        self.rounds += 1;
        self.phase = Phase::AwaitingGuess;
        let answer = self.prompt.ask(
            "If you would like to load a saved game from a JSON file, enter the name of the file now (n for new game): ",
        )?;

        if answer.trim().eq_ignore_ascii_case(NEW_GAME_SIGNAL) {
            let state = self.draw()?;
            self.show_quote(&state)?;
            return Ok(state);
        }

        let name = enforce_file_extension(&mut *self.prompt, SAVE_EXT, answer)?;
        let state = load_game(&self.data_dir.join(&name))?;
        self.show_quote(&state)?;
        self.prompt.say("\nHere are all of your previous hints:\n")?;
        for tier in replay_tiers(state.remaining()) {
            let text = hint_text(tier, &state, &mut *self.fetcher)?;
            self.prompt.say(&text)?;
        }
        self.prompt.say("")?;
        Ok(state)
    }

    fn draw(&mut self) -> Result<GameState> {
        let record = self
            .pool
            .choose(&mut self.rng)
            .ok_or_else(|| Error::EmptyPool { path: s!("quote pool") })?;
        logf!("Round {}: quote by {}", self.rounds, record.author_name);
        GameState::fresh(record.clone()).map_err(|e| Error::MalformedRecord {
            path: s!("quote pool"),
            row: 0,
            reason: e.to_string(),
        })
    }

    fn show_quote(&mut self, state: &GameState) -> Result<()> {
        self.prompt.say("\n\nHere's a quote:\n")?;
        self.prompt.say(&state.record().quote_text)?;
        Ok(())
    }

    /// Take guesses until a win, running out, or a save.
    pub fn play_round(&mut self, mut state: GameState) -> Result<RoundEnd> {
        while state.phase() == Phase::AwaitingGuess {
            let input = self.prompt.ask(&format!(
                "\nWho said it? Guesses remaining: {}. Enter the author (or s to save and quit): ",
                state.remaining()
            ))?;

            let transition = step(state, Command::parse(&input));
            self.phase = transition.phase();
            logd!("Round {}: {:?}, {} left", self.rounds, self.phase, transition.state().remaining());

            match transition {
                Transition::Save(saved) => {
                    let path = self.save_and_quit(&saved)?;
                    return Ok(RoundEnd::Saved(path));
                }
                Transition::Won(won) => {
                    logf!("Round {}: won with {} guesses left", self.rounds, won.remaining());
                    self.prompt.say("\nYou guessed correctly! Congratulations!")?;
                    return Ok(RoundEnd::Won);
                }
                Transition::Wrong { state: next, hint } => {
                    let text = hint_text(hint, &next, &mut *self.fetcher)?;
                    self.prompt.say(&join!("\n", &text))?;
                    state = next;
                }
            }
        }
        logf!("Round {}: exhausted on {}", self.rounds, state.author());
        Ok(RoundEnd::Exhausted)
    }

    fn save_and_quit(&mut self, state: &GameState) -> Result<PathBuf> {
        let name = ask_file_name(
            &mut *self.prompt,
            "Enter the name you want to give for your save file (must end in .json): ",
            SAVE_EXT,
        )?;
        let path = self.data_dir.join(name);
        save_game(&path, state)?;
        self.prompt.say("Saved Game. Come back and finish your game later!")?;
        Ok(path)
    }
}
