// pathfinder/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs turtle commands on an ASCII grid.
//!
//! Command text is parsed and executed one line at a time, so the cells
//! marked by earlier lines stay marked when a later line fails.

#[macro_use]
extern crate log;

pub mod canvas;
pub mod turtle;

pub use crate::canvas::{Canvas, Point, RenderStyle};
pub use crate::turtle::Turtle;
pub use uturtle::{parse_int, ParseFlags};

use thiserror::Error;
use uturtle::ast::Command;
use uturtle::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TurtleError {
    #[error("orientation {0} is not a multiple of 45 degrees")]
    InvalidOrientation(i64),
    #[error("the canvas has no current position")]
    EmptyCanvas,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("line {line}: {source}")]
    Execute {
        line: usize,
        #[source]
        source: TurtleError,
    },
}

#[derive(Debug)]
pub struct Interpreter {
    turtle: Turtle,
    pub result_flags: ParseFlags,
}

impl Interpreter {
    pub fn new(size: usize) -> Interpreter {
        Interpreter {
            turtle: Turtle::new(size),
            result_flags: ParseFlags::empty(),
        }
    }

    #[inline]
    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        self.turtle.canvas()
    }

    pub fn render(&self) -> String {
        self.canvas().render()
    }

    /// Runs every line of `text` in order. Lines are numbered from 1.
    pub fn process(&mut self, text: &str) -> Result<(), Error> {
        for (index, line) in text.lines().enumerate() {
            self.process_line(index + 1, line)?;
        }
        Ok(())
    }

    /// Parses and runs one line. `number` is only used to label errors.
    pub fn process_line(&mut self, number: usize, line: &str) -> Result<(), Error> {
        let mut flags = ParseFlags::empty();
        let parsed = uturtle::parse_line(line, &mut flags);
        if !flags.is_empty() {
            warn!("line {}: {}", number, flags);
            self.result_flags |= flags;
        }

        let command = match parsed {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(source) => {
                return Err(Error::Parse {
                    line: number,
                    source,
                })
            }
        };

        self.execute(&command).map_err(|source| Error::Execute {
            line: number,
            source,
        })
    }

    pub fn execute(&mut self, command: &Command) -> Result<(), TurtleError> {
        debug!("{:?}", command);
        match *command {
            Command::Move(units) => self.turtle.move_forward(units),
            Command::Back(units) => self.turtle.move_backward(units),
            Command::Right(degrees) => {
                self.turtle.right(degrees);
                Ok(())
            }
            Command::Left(degrees) => {
                self.turtle.left(degrees);
                Ok(())
            }
            Command::Repeat { count, ref body } => {
                debug!("expanding to {} operations", command.expanded_len());
                for _ in 0..count.max(0) {
                    for command in body {
                        self.execute(command)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
use test_log::test;

#[test]
fn rotate_then_move_east() {
    let mut interpreter = Interpreter::new(5);
    interpreter.process("RT 90\nFD 2").unwrap();

    assert_eq!(interpreter.turtle().orientation(), 90);
    assert_eq!(interpreter.turtle().position(), Some(Point::new(4, 2)));
    assert_eq!(
        interpreter.render(),
        ". . . . .\n. . . . .\n. . X X X\n. . . . .\n. . . . ."
    );
}

#[test]
fn repeat_runs_body_in_order() {
    let mut interpreter = Interpreter::new(11);
    interpreter.process("REPEAT 3 [ RT 90 FD 2 ]").unwrap();

    let canvas = interpreter.canvas();
    assert_eq!(interpreter.turtle().orientation(), 270);
    // East, south, then west: three two-cell segments.
    for &(x, y) in &[(6, 5), (7, 5), (7, 6), (7, 7), (6, 7), (5, 7)] {
        assert!(canvas.contains(Point::new(x, y)), "({}, {})", x, y);
    }
    assert_eq!(canvas.visited_count(), 7);
    assert_eq!(interpreter.turtle().position(), Some(Point::new(5, 7)));
}

#[test]
fn repeat_with_nonpositive_count_does_nothing() {
    let mut interpreter = Interpreter::new(5);
    interpreter.process("REPEAT 0 [ FD 1 ]\nREPEAT -2 [ FD 1 ]").unwrap();
    assert_eq!(interpreter.canvas().visited_count(), 1);
}

#[test]
fn square_via_repeat() {
    let mut interpreter = Interpreter::new(5);
    interpreter.process("REPEAT 4 [ FD 2 RT 90 ]").unwrap();
    assert_eq!(
        interpreter.render(),
        ". . X X X\n. . X . X\n. . X X X\n. . . . .\n. . . . ."
    );
}

#[test]
fn unknown_command_fails_and_keeps_earlier_marks() {
    let mut interpreter = Interpreter::new(5);
    let err = interpreter.process("FD 1\nJUMP 5\nFD 1").unwrap_err();
    assert_eq!(
        err,
        Error::Parse {
            line: 2,
            source: ParseError::UnknownCommand("JUMP".to_owned()),
        }
    );
    assert_eq!(err.to_string(), "line 2: unknown command `JUMP`");
    assert_eq!(interpreter.canvas().visited_count(), 2);
    assert_eq!(interpreter.turtle().position(), Some(Point::new(2, 1)));
}

#[test]
fn invalid_heading_is_reported_on_move() {
    let mut interpreter = Interpreter::new(5);
    let err = interpreter.process("RT 30\nFD 1").unwrap_err();
    assert_eq!(
        err,
        Error::Execute {
            line: 2,
            source: TurtleError::InvalidOrientation(30),
        }
    );
}

#[test]
fn lenient_readings_accumulate_flags() {
    let mut interpreter = Interpreter::new(5);
    interpreter
        .process("FD x\n\nREPEAT 2 [ RT 90 FD ]\nBK")
        .unwrap();
    assert_eq!(
        interpreter.result_flags,
        ParseFlags::NON_NUMERIC_ARGUMENT
            | ParseFlags::UNPAIRED_TOKEN
            | ParseFlags::MISSING_ARGUMENT
    );
    assert_eq!(interpreter.turtle().orientation(), 180);
    assert_eq!(interpreter.canvas().visited_count(), 1);
}

#[test]
fn stray_brackets_are_read_leniently() {
    let mut interpreter = Interpreter::new(5);
    interpreter
        .process("FD 2]\nREPEAT 2 [ RT 90 [ FD 9 ] ]")
        .unwrap();
    assert_eq!(
        interpreter.result_flags,
        ParseFlags::NON_NUMERIC_ARGUMENT | ParseFlags::NESTED_BRACKET
    );
    assert!(interpreter.canvas().contains(Point::new(2, 1)));
    assert_eq!(interpreter.turtle().position(), Some(Point::new(2, 0)));
    assert_eq!(interpreter.turtle().orientation(), 180);
}

#[test]
fn empty_canvas_rejects_moves() {
    let mut interpreter = Interpreter::new(0);
    interpreter.process("RT 90").unwrap();
    assert_eq!(
        interpreter.process("FD 1"),
        Err(Error::Execute {
            line: 1,
            source: TurtleError::EmptyCanvas,
        })
    );
    assert_eq!(interpreter.render(), "");
}
