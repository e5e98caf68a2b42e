// pathfinder/uturtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parser for the line-oriented turtle command language.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lalrpop_util;
#[macro_use]
extern crate log;

pub mod ast;
pub mod lower;

pub use crate::lower::{parse_int, ParseFlags};

use crate::ast::Command;
use thiserror::Error;

lalrpop_mod!(pub turtle); // synthesized by LALRPOP

pub type LineParser = turtle::LineParser;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("syntax error: {0}")]
    Syntax(String),
}

/// Parses a single line. Blank lines yield `None`.
///
/// Lenient readings are added to `flags`; see `lower` for the list.
pub fn parse_line(line: &str, flags: &mut ParseFlags) -> Result<Option<Command>, ParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let raw = LineParser::new()
        .parse(line)
        .map_err(|err| ParseError::Syntax(err.to_string()))?;
    lower::lower(line, raw, flags).map(Some)
}

#[cfg(test)]
fn parse_one(line: &str) -> (Command, ParseFlags) {
    let mut flags = ParseFlags::empty();
    let command = parse_line(line, &mut flags).unwrap().unwrap();
    (command, flags)
}

#[test]
fn turtle_line_parser() {
    assert!(turtle::LineParser::new().parse("FD 2").is_ok());
    assert!(turtle::LineParser::new().parse("fd").is_ok());
    assert!(turtle::LineParser::new().parse("RT 90 extra words").is_ok());
    assert!(turtle::LineParser::new().parse("REPEAT 3 [ RT 90 FD 2 ]").is_ok());
    assert!(turtle::LineParser::new().parse("REPEAT 3 [RT 90 FD 2]").is_ok());
    assert!(turtle::LineParser::new().parse("REPEAT 3 RT 90").is_ok());
    assert!(turtle::LineParser::new().parse("REPEAT [ FD 1 ]").is_ok());
    assert!(turtle::LineParser::new().parse("FD 2]").is_ok());
    assert!(turtle::LineParser::new().parse("RT [90").is_ok());
    assert!(turtle::LineParser::new()
        .parse("REPEAT 2 [ FD 1 [ RT 90 ] ]")
        .is_ok());

    assert!(turtle::LineParser::new().parse("").is_err());
    assert!(turtle::LineParser::new().parse("REPEAT").is_err());
    assert!(turtle::LineParser::new().parse("FD REPEAT").is_err());
    assert!(turtle::LineParser::new()
        .parse("REPEAT 3 FD 1 [ RT 90")
        .is_err());
}

#[test]
fn simple_commands_resolve_case_insensitively() {
    assert_eq!(parse_one("FD 2").0, Command::Move(2));
    assert_eq!(parse_one("move 2").0, Command::Move(2));
    assert_eq!(parse_one("Bk 3").0, Command::Back(3));
    assert_eq!(parse_one("rt 45").0, Command::Right(45));
    assert_eq!(parse_one("RIGHT 90").0, Command::Right(90));
    assert_eq!(parse_one("lt 45").0, Command::Left(45));
    assert_eq!(parse_one("Left -90").0, Command::Left(-90));
}

#[test]
fn unknown_command_is_an_error() {
    let mut flags = ParseFlags::empty();
    assert_eq!(
        parse_line("JUMP 5", &mut flags),
        Err(ParseError::UnknownCommand("JUMP".to_owned()))
    );
    assert_eq!(
        parse_line("REPEAT 2 [ FD 1 JUMP 5 ]", &mut flags),
        Err(ParseError::UnknownCommand("JUMP".to_owned()))
    );
    // Lower-case `repeat` is not the keyword.
    assert_eq!(
        parse_line("repeat 2", &mut flags),
        Err(ParseError::UnknownCommand("repeat".to_owned()))
    );
}

#[test]
fn lenient_arguments() {
    let (command, flags) = parse_one("FD abc");
    assert_eq!(command, Command::Move(0));
    assert_eq!(flags, ParseFlags::NON_NUMERIC_ARGUMENT);

    let (command, flags) = parse_one("FD 12abc");
    assert_eq!(command, Command::Move(12));
    assert_eq!(flags, ParseFlags::NON_NUMERIC_ARGUMENT);

    let (command, flags) = parse_one("FD");
    assert_eq!(command, Command::Move(0));
    assert_eq!(flags, ParseFlags::MISSING_ARGUMENT);

    let (command, flags) = parse_one("RT 90 FD 2");
    assert_eq!(command, Command::Right(90));
    assert_eq!(flags, ParseFlags::EXTRA_TOKENS);
}

#[test]
fn brackets_in_simple_commands_are_part_of_the_word() {
    let (command, flags) = parse_one("FD 2]");
    assert_eq!(command, Command::Move(2));
    assert_eq!(flags, ParseFlags::NON_NUMERIC_ARGUMENT);

    let (command, flags) = parse_one("RT [90");
    assert_eq!(command, Command::Right(0));
    assert_eq!(flags, ParseFlags::NON_NUMERIC_ARGUMENT);

    // Separated by a space, the bracket is a word of its own.
    let (command, flags) = parse_one("FD 2 ]");
    assert_eq!(command, Command::Move(2));
    assert_eq!(flags, ParseFlags::EXTRA_TOKENS);

    let mut flags = ParseFlags::empty();
    assert_eq!(
        parse_line("[FD 2", &mut flags),
        Err(ParseError::UnknownCommand("[FD".to_owned()))
    );
}

#[test]
fn repeat_blocks() {
    let (command, flags) = parse_one("REPEAT 3 [ RT 90 FD 2 ]");
    assert_eq!(
        command,
        Command::Repeat {
            count: 3,
            body: vec![Command::Right(90), Command::Move(2)],
        }
    );
    assert!(flags.is_empty());
    assert_eq!(command.expanded_len(), 6);

    let (command, flags) = parse_one("REPEAT 2 [ FD 1 RT ]");
    assert_eq!(
        command,
        Command::Repeat {
            count: 2,
            body: vec![Command::Move(1)],
        }
    );
    assert_eq!(flags, ParseFlags::UNPAIRED_TOKEN);

    let (command, flags) = parse_one("REPEAT 4 FD 1 ]");
    assert_eq!(
        command,
        Command::Repeat {
            count: 4,
            body: vec![Command::Move(1)],
        }
    );
    assert_eq!(flags, ParseFlags::MISSING_BRACKET);

    let (command, flags) = parse_one("REPEAT [ FD 1 ]");
    assert_eq!(command.expanded_len(), 0);
    assert_eq!(flags, ParseFlags::MISSING_ARGUMENT);

    let (command, flags) = parse_one("REPEAT 2 [ FD 1 [ RT 90 ] ]");
    assert_eq!(
        command,
        Command::Repeat {
            count: 2,
            body: vec![Command::Move(1)],
        }
    );
    assert_eq!(flags, ParseFlags::NESTED_BRACKET);
}

#[test]
fn parse_int_reads_leading_integer() {
    assert_eq!(parse_int("42"), (42, true));
    assert_eq!(parse_int("-7"), (-7, true));
    assert_eq!(parse_int("+7"), (7, true));
    assert_eq!(parse_int("1_000"), (1000, true));
    assert_eq!(parse_int("1__0"), (1, false));
    assert_eq!(parse_int("9x"), (9, false));
    assert_eq!(parse_int("x9"), (0, false));
    assert_eq!(parse_int("-"), (0, false));
    assert_eq!(parse_int("99999999999999999999"), (i64::MAX, true));
}

#[test]
fn blank_lines_parse_to_nothing() {
    let mut flags = ParseFlags::empty();
    assert_eq!(parse_line("", &mut flags), Ok(None));
    assert_eq!(parse_line("   \t", &mut flags), Ok(None));
    assert!(flags.is_empty());
}

#[test]
fn flags_display_in_declaration_order() {
    let flags = ParseFlags::NESTED_BRACKET | ParseFlags::NON_NUMERIC_ARGUMENT;
    assert_eq!(
        flags.to_string(),
        "non-numeric argument read as integer prefix, \
         text after a second opening bracket ignored"
    );
    assert_eq!(ParseFlags::empty().to_string(), "");
}
