pub mod derive;
pub mod token;
mod validators;

use clap::{App, AppSettings, ArgMatches};

pub fn args() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::SubcommandRequired)
        .subcommand(derive::command())
        .subcommand(token::command())
}

pub enum Arguments {
    Derive(derive::Arguments),
    Token(token::Arguments),
}

impl Arguments {
    pub fn verbosity(&self) -> usize {
        match self {
            Arguments::Derive(args) => args.verbosity,
            Arguments::Token(args) => args.verbosity,
        }
    }
}

pub struct ArgumentsParser {}

impl ArgumentsParser {
    pub fn parse<'a>(matches: &'a ArgMatches) -> Arguments {
        match matches.subcommand_name().unwrap() {
            name @ derive::COMMAND_NAME => {
                return Arguments::Derive(derive::ArgumentsParser::parse(
                    matches.subcommand_matches(name).unwrap(),
                ));
            }
            name @ token::COMMAND_NAME => {
                return Arguments::Token(token::ArgumentsParser::parse(
                    matches.subcommand_matches(name).unwrap(),
                ));
            }
            _ => unreachable!("Unknown command"),
        }
    }
}
