// pathfinder/uturtle/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// The vocabulary is the classic Logo one: FD/MOVE, BK, RT/RIGHT, LT/LEFT and
// REPEAT n [ ... ].

/// A resolved command, ready for the interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(i64),
    Back(i64),
    Right(i64),
    Left(i64),
    /// Run the body `count` times, in order. A count below one runs nothing.
    Repeat { count: i64, body: Vec<Command> },
}

impl Command {
    /// Number of single operations this command expands to.
    pub fn expanded_len(&self) -> usize {
        match self {
            Command::Repeat { count, body } => {
                let per_pass: usize = body.iter().map(Command::expanded_len).sum();
                per_pass.saturating_mul((*count).max(0) as usize)
            }
            _ => 1,
        }
    }
}

/// Byte range of a token within its line.
pub type Span = (usize, usize);

/// One line exactly as the grammar saw it. Nothing is resolved yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line<'input> {
    /// Token spans; whitespace-separated words are rebuilt from these.
    Simple { pieces: Vec<Span> },
    Repeat {
        count: Option<&'input str>,
        body: Vec<&'input str>,
        bracketed: bool,
        /// A second `[` cut the block short.
        nested: bool,
    },
}

/// The names a simple command may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Move,
    Back,
    Right,
    Left,
}

impl Keyword {
    /// Case-insensitive lookup, aliases included.
    pub fn from_name(name: &str) -> Option<Keyword> {
        match name.to_ascii_lowercase().as_str() {
            "move" | "fd" => Some(Keyword::Move),
            "bk" => Some(Keyword::Back),
            "right" | "rt" => Some(Keyword::Right),
            "left" | "lt" => Some(Keyword::Left),
            _ => None,
        }
    }

    pub fn with_arg(self, arg: i64) -> Command {
        match self {
            Keyword::Move => Command::Move(arg),
            Keyword::Back => Command::Back(arg),
            Keyword::Right => Command::Right(arg),
            Keyword::Left => Command::Left(arg),
        }
    }
}
