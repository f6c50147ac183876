use thiserror::Error;

use passforge::CharacterClass;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--hide" => flags.hide = true,
            "--no-enforce" => flags.no_enforce = true,
            "--no-lower" => flags.classes.push((CharacterClass::Lowercase, false)),
            "--no-upper" => flags.classes.push((CharacterClass::Uppercase, false)),
            "--no-digits" => flags.classes.push((CharacterClass::Digit, false)),
            "-S" | "--symbols" => flags.classes.push((CharacterClass::Symbol, true)),
            "--no-symbols" => flags.classes.push((CharacterClass::Symbol, false)),
            "-l" | "--length" => {
                let value = value_of(args, &mut i)?;
                flags.length = Some(number(value)?);
            }
            "-n" | "--number" => {
                let value = value_of(args, &mut i)?;
                flags.number = Some(number(value)?);
            }
            "--seed" => {
                let value = value_of(args, &mut i)?;
                flags.seed = Some(number(value)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_values_and_switches() {
        let flags = parse(&args(&[
            "-l", "20", "-n", "3", "--seed", "9", "-S", "--no-lower", "--no-enforce", "--hide",
            "-b", "-q",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.seed, Some(9));
        assert_eq!(
            flags.classes,
            vec![
                (CharacterClass::Symbol, true),
                (CharacterClass::Lowercase, false)
            ]
        );
        assert!(flags.no_enforce && flags.hide && flags.clipboard && flags.quiet);
    }

    #[test]
    fn parses_info_and_settings_flags() {
        let flags = parse(&args(&["--help", "--version", "-s", "--save"])).unwrap();
        assert!(flags.help && flags.version && flags.saved && flags.save);
        assert!(flags.length.is_none() && flags.classes.is_empty());
    }

    #[test]
    fn rejects_unknown_and_bad_numbers() {
        assert_eq!(
            parse(&args(&["--hex"])).unwrap_err(),
            ParseError::UnknownArg("--hex".into())
        );
        assert_eq!(
            parse(&args(&["-l", "twelve"])).unwrap_err(),
            ParseError::InvalidNumber("twelve".into())
        );
        assert_eq!(
            parse(&args(&["-n"])).unwrap_err(),
            ParseError::MissingValue("-n".into())
        );
    }

    #[test]
    fn negative_length_is_invalid_number() {
        assert!(matches!(
            parse(&args(&["-l", "-5"])),
            Err(ParseError::InvalidNumber(_))
        ));
    }
}
