// src/bin/cli.rs
use who_said_it::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let options = match cli::parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", cli::HELP);
            std::process::exit(2);
        }
    };
    if options.show_help {
        eprintln!("{}", cli::HELP);
        return Ok(());
    }
    if let Some(path) = &options.log_file {
        log::init(path);
    }

    match cli::run(&options) {
        Ok(_) => Ok(()),
        Err(e) if e.is_fatal_file_error() => {
            println!("{e} Ending game.");
            std::process::exit(1);
        }
        // network and parse failures get the full report
        Err(e) => Err(e.into()),
    }
}
