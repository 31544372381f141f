use super::validators;
use crate::core::rxkad::KeyMaterial;
use clap::{App, Arg, ArgMatches, SubCommand};

pub const COMMAND_NAME: &str = "derive";

pub fn command() -> App<'static, 'static> {
    SubCommand::with_name(COMMAND_NAME)
        .about("Calculate the rxkad session key of a Kerberos session key")
        .arg(
            Arg::with_name("etype")
                .long("etype")
                .short("e")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help(
                    "Encryption type number of the Kerberos key \
                     (e.g. 18 for aes256-cts-hmac-sha1-96)",
                )
                .required(true)
                .validator(validators::is_i32),
        )
        .arg(
            Arg::with_name("key")
                .long("key")
                .short("k")
                .takes_value(true)
                .help("Kerberos session key in hexadecimal")
                .required(true)
                .validator(validators::is_hex),
        )
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase message verbosity"),
        )
}

#[derive(Debug)]
pub struct Arguments {
    pub key: KeyMaterial,
    pub verbosity: usize,
}

pub struct ArgumentsParser<'a> {
    matches: &'a ArgMatches<'a>,
}

impl<'a> ArgumentsParser<'a> {
    pub fn parse(matches: &'a ArgMatches) -> Arguments {
        let parser = Self { matches: matches };
        return parser._parse();
    }

    fn _parse(&self) -> Arguments {
        return Arguments {
            key: self.parse_key(),
            verbosity: self.matches.occurrences_of("verbosity") as usize,
        };
    }

    fn parse_key(&self) -> KeyMaterial {
        let etype = self.matches.value_of("etype").unwrap().parse().unwrap();
        let key = validators::decode_hex(self.matches.value_of("key").unwrap())
            .unwrap();
        return KeyMaterial::new(etype, key);
    }
}
