// pathfinder/uturtle/src/lower.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turns raw lines into resolved `Command`s.
//!
//! The language is forgiving about arguments: a word that is not a number
//! reads as its leading integer (or 0), a missing argument reads as 0, and a
//! REPEAT block with an odd number of words drops the last one. Each of
//! these is recorded in `ParseFlags` rather than rejected.

use crate::ast::{Command, Keyword, Line, Span};
use crate::ParseError;
use std::fmt::{Display, Formatter, Result as FormatResult};

bitflags! {
    // NB: If you change this, make sure to update the `Display`
    // implementation as well.
    pub struct ParseFlags: u16 {
        const NON_NUMERIC_ARGUMENT   = 0x0001;
        const MISSING_ARGUMENT       = 0x0002;
        const EXTRA_TOKENS           = 0x0004;
        const UNPAIRED_TOKEN         = 0x0008;
        const MISSING_BRACKET        = 0x0010;
        const NESTED_BRACKET         = 0x0020;
    }
}

impl Display for ParseFlags {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        if self.is_empty() {
            return Ok(());
        }

        let mut first = true;
        for (bit, name) in NAMES.iter().enumerate() {
            if (self.bits() >> bit) & 1 == 0 {
                continue;
            }
            if !first {
                formatter.write_str(", ")?;
            } else {
                first = false;
            }
            formatter.write_str(name)?;
        }

        return Ok(());

        // Must match the order in `ParseFlags`.
        static NAMES: &'static [&'static str] = &[
            "non-numeric argument read as integer prefix",
            "missing argument read as 0",
            "extra tokens ignored",
            "unpaired token in repeat block dropped",
            "repeat block without brackets",
            "text after a second opening bracket ignored",
        ];
    }
}

/// Reads the leading integer of `word`: an optional sign followed by decimal
/// digits, with single underscores allowed between digits. Anything after
/// that is ignored and no digits at all reads as 0. Saturates at the `i64`
/// range.
///
/// The second value is `true` when the whole word was consumed.
pub fn parse_int(word: &str) -> (i64, bool) {
    let bytes = word.as_bytes();
    let mut index = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            index += 1;
            true
        }
        Some(b'+') => {
            index += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut digits = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        if byte.is_ascii_digit() {
            let digit = i64::from(byte - b'0');
            value = if negative {
                value.saturating_mul(10).saturating_sub(digit)
            } else {
                value.saturating_mul(10).saturating_add(digit)
            };
            digits += 1;
            index += 1;
        } else if byte == b'_'
            && digits > 0
            && bytes.get(index + 1).map_or(false, u8::is_ascii_digit)
        {
            index += 1;
        } else {
            break;
        }
    }

    if digits == 0 {
        return (0, false);
    }
    (value, index == bytes.len())
}

fn argument(word: Option<&str>, flags: &mut ParseFlags) -> i64 {
    match word {
        None => {
            flags.insert(ParseFlags::MISSING_ARGUMENT);
            0
        }
        Some(word) => {
            let (value, clean) = parse_int(word);
            if !clean {
                debug!("argument `{}` is not a number, using {}", word, value);
                flags.insert(ParseFlags::NON_NUMERIC_ARGUMENT);
            }
            value
        }
    }
}

fn resolve(name: &str, arg: Option<&str>, flags: &mut ParseFlags) -> Result<Command, ParseError> {
    let keyword =
        Keyword::from_name(name).ok_or_else(|| ParseError::UnknownCommand(name.to_owned()))?;
    Ok(keyword.with_arg(argument(arg, flags)))
}

/// Joins touching spans into whitespace-separated words of `text`.
fn glue<'a>(text: &'a str, pieces: &[Span]) -> Vec<&'a str> {
    let mut words: Vec<Span> = Vec::new();
    for &(start, end) in pieces {
        match words.last_mut() {
            Some(last) if last.1 == start => last.1 = end,
            _ => words.push((start, end)),
        }
    }
    words.iter().map(|&(start, end)| &text[start..end]).collect()
}

/// Resolves one raw line parsed from `text`. Every name in it is checked
/// before anything is returned, so an unknown name never yields a partial
/// command.
pub fn lower(text: &str, line: Line, flags: &mut ParseFlags) -> Result<Command, ParseError> {
    match line {
        Line::Simple { pieces } => {
            let words = glue(text, &pieces);
            let (name, args) = match words.split_first() {
                Some((name, args)) => (*name, args),
                None => return Err(ParseError::Syntax("empty command".to_owned())),
            };
            if args.len() > 1 {
                debug!("ignoring {} trailing token(s) after `{}`", args.len() - 1, name);
                flags.insert(ParseFlags::EXTRA_TOKENS);
            }
            resolve(name, args.first().copied(), flags)
        }
        Line::Repeat {
            count,
            body,
            bracketed,
            nested,
        } => {
            if nested {
                debug!("ignoring everything after the second `[`");
                flags.insert(ParseFlags::NESTED_BRACKET);
            }
            if !bracketed {
                debug!("repeat block has no opening bracket");
                flags.insert(ParseFlags::MISSING_BRACKET);
            }
            if body.len() % 2 != 0 {
                debug!(
                    "dropping unpaired token `{}` in repeat block",
                    body[body.len() - 1]
                );
                flags.insert(ParseFlags::UNPAIRED_TOKEN);
            }

            let count = argument(count, flags);
            let body = body
                .chunks_exact(2)
                .map(|pair| resolve(pair[0], Some(pair[1]), flags))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Repeat { count, body })
        }
    }
}
