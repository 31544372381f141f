mod args;
mod commands;
mod core;
mod error;
mod utils;

pub use crate::error::Result;

use crate::core::{CcacheSource, FileKeyStore, KeyStore, SessionKeyring};
use args::{args, Arguments, ArgumentsParser};
use log::{error, LevelFilter};

fn init_log(verbosity: usize) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}",
                record.level(),
                message
            ))
        })
        .level(verbosity_to_level(verbosity))
        .chain(std::io::stderr())
        .apply()
        .map_err(|err| format!("Unable to initialize the logger: {}", err))?;

    return Ok(());
}

fn verbosity_to_level(verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = ArgumentsParser::parse(&args().get_matches());

    if let Err(err) = init_log(args.verbosity()) {
        eprintln!("{}", err);
        std::process::exit(1);
    }

    if let Err(error) = main_inner(args) {
        error!("{}", error);
        std::process::exit(1);
    }
}

fn main_inner(args: Arguments) -> Result<()> {
    match args {
        Arguments::Token(args) => token(args),
        Arguments::Derive(args) => commands::derive(args.key),
    }
}

fn token(args: args::token::Arguments) -> Result<()> {
    let cred_file = utils::get_ticket_file(args.cred_file)?;
    let source = CcacheSource::new(cred_file);

    let keystore: Box<dyn KeyStore> = match args.out_file {
        Some(out_file) => Box::new(FileKeyStore::new(out_file)),
        None => Box::new(SessionKeyring::new()),
    };

    return commands::token(args.cell, &source, keystore.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(LevelFilter::Warn, verbosity_to_level(0));
        assert_eq!(LevelFilter::Info, verbosity_to_level(1));
        assert_eq!(LevelFilter::Debug, verbosity_to_level(2));
        assert_eq!(LevelFilter::Trace, verbosity_to_level(5));
    }
}
