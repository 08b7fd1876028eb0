// src/cli.rs
use std::{env, error::Error, path::PathBuf, time::Duration};

use rand::{rngs::StdRng, SeedableRng};

use crate::config::consts::STORE_EXT;
use crate::config::options::Options;
use crate::core::{Fetch, HttpFetcher};
use crate::game::{Session, SessionEnd};
use crate::progress::Progress;
use crate::prompt::{ask_file_name, ask_yes_no, Prompt, Terminal};
use crate::scrape::update_csv;
use crate::store::{load_quotes, QuoteRecord};

pub const HELP: &str = include_str!("cli_help.txt");

pub fn parse_args() -> Result<Options, Box<dyn Error>> {
    parse_from(env::args().skip(1))
}

pub fn parse_from<I: IntoIterator<Item = String>>(args: I) -> Result<Options, Box<dyn Error>> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--url" => options.base_url = args.next().ok_or("Missing value for --url")?,
            "--delay-ms" => {
                let ms: u64 = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
                options.delay = Duration::from_millis(ms); }
            "--dir" => options.data_dir = PathBuf::from(args.next().ok_or("Missing value for --dir")?),
            "--seed" => options.seed = Some(args.next().ok_or("Missing value for --seed")?.parse()?),
            "--log" => options.log_file = Some(PathBuf::from(args.next().ok_or("Missing log file")?)),
            "--no-log" => options.log_file = None,
            "-h" | "--help" => options.show_help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(options)
}

/// Prints one line per page, like the original console scraper.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn page(&mut self, _number: u32, url: &str) {
        println!("Scraping {url}, please wait...");
    }
}

/// Interactive session on stdin/stdout against the live site.
pub fn run(options: &Options) -> crate::Result<SessionEnd> {
    let mut prompt = Terminal::stdio();
    let mut fetcher = HttpFetcher::new()?;
    run_with(options, &mut prompt, &mut fetcher, &mut ConsoleProgress)
}

/// Optional scrape into a new store, then load a store and play.
pub fn run_with<P: Prompt, F: Fetch>(
    options: &Options,
    prompt: &mut P,
    fetcher: &mut F,
    progress: &mut dyn Progress,
) -> crate::Result<SessionEnd> {
    let wants_scrape = ask_yes_no(
        prompt,
        "Do you want a CSV file updated with new quotes (y/n)? ",
        "Again, enter y or n if you do or do not want a CSV file updated with new quotes (y/n): ",
    )?;
    prompt.say("")?;

    if wants_scrape {
        let name = ask_file_name(prompt, "Give a name for the new file (must end in .csv): ", STORE_EXT)?;
        prompt.say("")?;
        update_csv(fetcher, options, &options.resolve(&name), progress)?;
        prompt.say(&format!("\nCreated {name} in the current directory."))?;
    }

    let name = ask_file_name(
        prompt,
        "Enter the name of a CSV file, with headings [Name], [Quote], [Link to Bio]: ",
        STORE_EXT,
    )?;
    let pool: Vec<QuoteRecord> = load_quotes(&options.resolve(&name))?;

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let end = Session::new(&pool, prompt, fetcher, rng, &options.data_dir).run()?;
    logf!("Session: ended {end:?}");
    Ok(end)
}
