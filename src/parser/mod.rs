//! Text to [`Command`] conversion.
//!
//! Grammar, one command per line:
//!
//! ```text
//! line    = ws* keyword [ ws+ args ] ws*
//! keyword = PLACE | MOVE | LEFT | RIGHT | REPORT      (ASCII case-insensitive)
//! args    = ws* int ws* "," ws* int ws* "," ws* facing ws*
//! facing  = NORTH | EAST | SOUTH | WEST               (ASCII case-insensitive)
//! ```
//!
//! Only `PLACE` takes arguments. Coordinates are decimal `i32` values with an
//! optional sign; a negative coordinate parses fine and is later rejected by
//! the engine as off the grid.

mod error;

pub use error::ParseError;

use crate::core::{Command, Facing, Position};
use std::str::FromStr;

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse(line)
    }
}

/// Parse a single line into a [`Command`].
///
/// Pure and total: every input yields either a command or a [`ParseError`].
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Command, Facing};
/// use toy_robot::parser::{parse, ParseError};
///
/// assert_eq!(parse("PLACE 1,2,EAST"), Ok(Command::place(1, 2, Facing::East)));
/// assert_eq!(parse("  move "), Ok(Command::Move));
/// assert_eq!(parse("FOO"), Err(ParseError::UnknownCommand("FOO".to_string())));
/// ```
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (keyword, arguments) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_uppercase().as_str() {
        "PLACE" => return parse_place(arguments),
        "MOVE" => Command::Move,
        "LEFT" => Command::Left,
        "RIGHT" => Command::Right,
        "REPORT" => Command::Report,
        _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
    };

    if !arguments.is_empty() {
        return Err(ParseError::UnexpectedArguments {
            command: command.keyword(),
            arguments: arguments.to_string(),
        });
    }
    Ok(command)
}

fn parse_place(arguments: &str) -> Result<Command, ParseError> {
    if arguments.is_empty() {
        return Err(ParseError::MissingArguments);
    }

    let fields: Vec<&str> = arguments.split(',').map(str::trim).collect();
    let [x, y, facing] = fields.as_slice() else {
        return Err(ParseError::ArgumentCount {
            found: fields.len(),
        });
    };

    Ok(Command::Place {
        position: Position::new(parse_coordinate(x)?, parse_coordinate(y)?),
        facing: facing.parse::<Facing>()?,
    })
}

fn parse_coordinate(value: &str) -> Result<i32, ParseError> {
    value
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidCoordinate {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse("MOVE"), Ok(Command::Move));
        assert_eq!(parse("LEFT"), Ok(Command::Left));
        assert_eq!(parse("RIGHT"), Ok(Command::Right));
        assert_eq!(parse("REPORT"), Ok(Command::Report));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse("move"), Ok(Command::Move));
        assert_eq!(parse("Left"), Ok(Command::Left));
        assert_eq!(parse("rIgHt"), Ok(Command::Right));
        assert_eq!(
            parse("place 0,0,north"),
            Ok(Command::place(0, 0, Facing::North))
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse("   REPORT\t"), Ok(Command::Report));
        assert_eq!(parse("\n MOVE \r\n"), Ok(Command::Move));
        assert_eq!(
            parse("  PLACE 4,4,WEST  "),
            Ok(Command::place(4, 4, Facing::West))
        );
    }

    #[test]
    fn place_tolerates_whitespace_around_fields() {
        assert_eq!(
            parse("PLACE 1 , 2 , EAST"),
            Ok(Command::place(1, 2, Facing::East))
        );
        assert_eq!(
            parse("PLACE\t3,\t1,south"),
            Ok(Command::place(3, 1, Facing::South))
        );
    }

    #[test]
    fn place_keeps_out_of_bounds_coordinates() {
        assert_eq!(
            parse("PLACE -1,7,NORTH"),
            Ok(Command::place(-1, 7, Facing::North))
        );
        assert_eq!(
            parse("PLACE +2,3,EAST"),
            Ok(Command::place(2, 3, Facing::East))
        );
    }

    #[test]
    fn empty_lines_are_rejected() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   \t "), Err(ParseError::Empty));
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        assert_eq!(parse("FOO"), Err(ParseError::UnknownCommand("FOO".into())));
        assert_eq!(
            parse("JUMP 1,2"),
            Err(ParseError::UnknownCommand("JUMP".into()))
        );
        assert_eq!(
            parse("PLACE1,2,NORTH"),
            Err(ParseError::UnknownCommand("PLACE1,2,NORTH".into()))
        );
    }

    #[test]
    fn bare_commands_reject_arguments() {
        assert_eq!(
            parse("MOVE 2"),
            Err(ParseError::UnexpectedArguments {
                command: "MOVE",
                arguments: "2".into()
            })
        );
        assert!(parse("REPORT now").is_err());
    }

    #[test]
    fn place_requires_arguments() {
        assert_eq!(parse("PLACE"), Err(ParseError::MissingArguments));
        assert_eq!(parse("PLACE   "), Err(ParseError::MissingArguments));
    }

    #[test]
    fn place_requires_exactly_three_fields() {
        assert_eq!(
            parse("PLACE 1,2"),
            Err(ParseError::ArgumentCount { found: 2 })
        );
        assert_eq!(
            parse("PLACE 1,2,NORTH,EXTRA"),
            Err(ParseError::ArgumentCount { found: 4 })
        );
    }

    #[test]
    fn place_rejects_non_integer_coordinates() {
        assert_eq!(
            parse("PLACE a,2,NORTH"),
            Err(ParseError::InvalidCoordinate { value: "a".into() })
        );
        assert_eq!(
            parse("PLACE 1,2.5,NORTH"),
            Err(ParseError::InvalidCoordinate {
                value: "2.5".into()
            })
        );
        assert_eq!(
            parse("PLACE ,2,NORTH"),
            Err(ParseError::InvalidCoordinate { value: "".into() })
        );
        assert_eq!(
            parse("PLACE 99999999999,0,NORTH"),
            Err(ParseError::InvalidCoordinate {
                value: "99999999999".into()
            })
        );
    }

    #[test]
    fn place_rejects_unknown_facing() {
        assert_eq!(
            parse("PLACE 1,2,UP"),
            Err(ParseError::UnknownFacing { value: "UP".into() })
        );
        assert_eq!(
            parse("PLACE 1,2,N"),
            Err(ParseError::UnknownFacing { value: "N".into() })
        );
        assert_eq!(
            parse("PLACE 1,2,NORTH EAST"),
            Err(ParseError::UnknownFacing {
                value: "NORTH EAST".into()
            })
        );
    }

    #[test]
    fn command_from_str_delegates_to_parse() {
        assert_eq!("left".parse::<Command>(), Ok(Command::Left));
        assert!("dance".parse::<Command>().is_err());
    }
}
