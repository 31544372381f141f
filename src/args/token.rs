use super::validators;
use crate::core::AfsCell;
use clap::{App, Arg, ArgMatches, SubCommand};

pub const COMMAND_NAME: &str = "token";

pub fn command() -> App<'static, 'static> {
    SubCommand::with_name(COMMAND_NAME)
        .about("Load an rxkad token for an AFS cell into the session keyring")
        .arg(
            Arg::with_name("cell")
                .takes_value(true)
                .help("AFS cell, as example.com")
                .required(true)
                .validator(validators::is_cell),
        )
        .arg(
            Arg::with_name("realm")
                .takes_value(true)
                .help(
                    "Kerberos realm of the cell. \
                     Cell name in uppercase if not provided",
                )
                .validator(validators::is_realm),
        )
        .arg(
            Arg::with_name("cred-file")
                .long("cred-file")
                .alias("ccache")
                .short("c")
                .value_name("file")
                .takes_value(true)
                .help(
                    "Credentials cache with the AFS ticket. \
                     Detected from KRB5CCNAME if not provided",
                ),
        )
        .arg(
            Arg::with_name("out-file")
                .long("output")
                .short("o")
                .value_name("file")
                .takes_value(true)
                .help(
                    "Write the key payload in a file \
                     instead of the session keyring",
                ),
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
    pub cell: AfsCell,
    pub cred_file: Option<String>,
    pub out_file: Option<String>,
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
            cell: self.parse_cell(),
            cred_file: self.matches.value_of("cred-file").map(|s| s.into()),
            out_file: self.matches.value_of("out-file").map(|s| s.into()),
            verbosity: self.matches.occurrences_of("verbosity") as usize,
        };
    }

    fn parse_cell(&self) -> AfsCell {
        let cell = self.matches.value_of("cell").unwrap();
        let realm = self.matches.value_of("realm");
        return AfsCell::new(cell, realm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Arguments {
        let matches = command().get_matches_from(argv);
        return ArgumentsParser::parse(&matches);
    }

    #[test]
    fn test_parse_cell_only() {
        let args = parse(&["token", "Example.Com"]);
        assert_eq!(AfsCell::new("example.com", None), args.cell);
        assert_eq!("EXAMPLE.COM", args.cell.realm);
        assert_eq!(None, args.cred_file);
        assert_eq!(None, args.out_file);
        assert_eq!(0, args.verbosity);
    }

    #[test]
    fn test_parse_all_arguments() {
        let args = parse(&[
            "token",
            "example.com",
            "AD.EXAMPLE.COM",
            "-c",
            "FILE:/tmp/cc",
            "-o",
            "payload.bin",
            "-vv",
        ]);
        assert_eq!("example.com", args.cell.name);
        assert_eq!("AD.EXAMPLE.COM", args.cell.realm);
        assert_eq!(Some("FILE:/tmp/cc".to_string()), args.cred_file);
        assert_eq!(Some("payload.bin".to_string()), args.out_file);
        assert_eq!(2, args.verbosity);
    }

    #[test]
    fn test_invalid_cell_is_rejected() {
        let result =
            command().get_matches_from_safe(&["token", "afs/example.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_realm_is_rejected() {
        let result =
            command().get_matches_from_safe(&["token", "example.com", ""]);
        assert!(result.is_err());
    }
}
