// src/prompt.rs
//! Line-oriented terminal boundary. The game and the CLI only talk to a
//! [`Prompt`]; the retry loops for y/n answers and file names live here.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::file::is_valid_file_name;

pub trait Prompt {
    /// Print one line.
    fn say(&mut self, msg: &str) -> io::Result<()>;

    /// Print `question` (no newline) and read the answer without its line ending.
    /// End of input is an `UnexpectedEof` error.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// stdin/stdout.
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self { input: io::stdin().lock(), output: io::stdout() }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
    fn say(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")?;
        self.output.flush()
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = s!();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Canned answers plus a transcript of everything shown. Used by tests and
/// for replaying a session non-interactively.
#[derive(Default)]
pub struct Scripted {
    answers: VecDeque<String>,
    transcript: String,
}

impl Scripted {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), transcript: s!() }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for Scripted {
    fn say(&mut self, msg: &str) -> io::Result<()> {
        self.transcript.push_str(msg);
        self.transcript.push('\n');
        Ok(())
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.transcript.push_str(question);
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))?;
        self.transcript.push_str(&answer);
        self.transcript.push('\n');
        Ok(answer)
    }
}

/// Ask until the first character of the answer is `y` or `n` (any case).
/// `retry` is shown for every attempt after the first.
pub fn ask_yes_no<P: Prompt + ?Sized>(prompt: &mut P, question: &str, retry: &str) -> io::Result<bool> {
    let mut answer = prompt.ask(question)?;
    loop {
        match answer.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => answer = prompt.ask(retry)?,
        }
    }
}

/// Keep asking until `candidate` is a bare `<word>.<ext>` file name.
pub fn enforce_file_extension<P: Prompt + ?Sized>(prompt: &mut P, ext: &str, candidate: String) -> io::Result<String> {
    let mut name = candidate;
    while !is_valid_file_name(ext, &name) {
        name = prompt.ask(&format!("Again, please enter a file name that ends in a SINGLE .{ext}: "))?;
    }
    Ok(name)
}

/// Ask `question`, then enforce the extension on the answer.
pub fn ask_file_name<P: Prompt + ?Sized>(prompt: &mut P, question: &str, ext: &str) -> io::Result<String> {
    let first = prompt.ask(question)?;
    enforce_file_extension(prompt, ext, first)
}
