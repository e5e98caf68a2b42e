// pathfinder/demo/native-turtle/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reads a grid size and turtle commands, prints the drawing.
//!
//! Input format: the first line is the grid size, the second line is
//! skipped, and every line after that is a command line.
//!
//!     cat drawing.logo | turtle-demo

use anyhow::{Context, Result};
use ascii_turtle::{Interpreter, RenderStyle};
use clap::Parser;
use log::{error, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Draws turtle commands on an ASCII grid")]
struct Args {
    /// Input file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Glyph for visited cells.
    #[arg(long, default_value_t = 'X')]
    marked: char,

    /// Glyph for untouched cells.
    #[arg(long, default_value_t = '.')]
    unmarked: char,

    /// Log failing lines and carry on instead of stopping.
    #[arg(long)]
    keep_going: bool,
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let style = RenderStyle {
        marked: args.marked,
        unmarked: args.unmarked,
    };

    let input = open_input(args.input.as_ref())?;
    print!("{}", run(input, args.keep_going, &style)?);
    Ok(())
}

/// Runs a whole input and returns what goes to stdout: the rendered grid
/// followed by a newline.
fn run(input: impl BufRead, keep_going: bool, style: &RenderStyle) -> Result<String> {
    let mut lines = input.lines();

    let size = match lines.next() {
        Some(line) => {
            let line = line.context("failed to read grid size")?;
            grid_size(&line)
        }
        None => 0,
    };
    if size == 0 {
        info!("grid size is 0, nothing to draw");
        return Ok("\n".to_owned());
    }

    let mut interpreter = Interpreter::new(size);
    let canvas_size = interpreter.canvas().size();
    info!("drawing on a {}x{} grid", canvas_size, canvas_size);

    // Line 2 is a separator.
    for (index, line) in lines.enumerate().skip(1) {
        let number = index + 2;
        let line = line.with_context(|| format!("failed to read line {}", number))?;
        if let Err(err) = interpreter.process_line(number, &line) {
            if !keep_going {
                return Err(err).context("turtle program failed");
            }
            error!("{}", err);
        }
    }

    if !interpreter.result_flags.is_empty() {
        warn!("input was read leniently: {}", interpreter.result_flags);
    }

    Ok(format!("{}\n", interpreter.canvas().render_with(style)))
}

/// Grid size from the first line, read with the same integer rules as
/// command arguments. Negative sizes count as 0.
fn grid_size(line: &str) -> usize {
    let (size, _) = ascii_turtle::parse_int(line.trim());
    size.max(0) as usize
}

#[cfg(test)]
fn run_default(input: &str, keep_going: bool) -> Result<String> {
    run(input.as_bytes(), keep_going, &RenderStyle::default())
}

#[test]
fn grid_size_reads_first_line() {
    assert_eq!(grid_size("5"), 5);
    assert_eq!(grid_size(" 11\r"), 11);
    assert_eq!(grid_size("-3"), 0);
    assert_eq!(grid_size("size"), 0);
}

#[test]
fn draws_commands_after_the_separator_line() {
    let output = run_default("5\n\nRT 90\nFD 2\n", false).unwrap();
    assert_eq!(
        output,
        ". . . . .\n. . . . .\n. . X X X\n. . . . .\n. . . . .\n"
    );
}

#[test]
fn second_line_is_skipped_even_with_a_command() {
    let output = run_default("3\nFD 1\n", false).unwrap();
    assert_eq!(output, ". . .\n. X .\n. . .\n");
}

#[test]
fn zero_size_prints_an_empty_line() {
    assert_eq!(run_default("0\n\nFD 1\n", false).unwrap(), "\n");
    assert_eq!(run_default("", false).unwrap(), "\n");
}

#[test]
fn errors_carry_input_line_numbers() {
    let err = run_default("5\n\nFD 1\nJUMP 5\nFD 1\n", false).unwrap_err();
    match err.downcast_ref::<ascii_turtle::Error>() {
        Some(ascii_turtle::Error::Parse { line, .. }) => assert_eq!(*line, 4),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(format!("{:#}", err).contains("line 4: unknown command `JUMP`"));
}

#[test]
fn keep_going_skips_failing_lines() {
    let output = run_default("5\n\nJUMP 5\nFD 1\n", true).unwrap();
    assert_eq!(
        output,
        ". . . . .\n. . X . .\n. . X . .\n. . . . .\n. . . . .\n"
    );
}

#[test]
fn custom_glyphs() {
    let style = RenderStyle {
        marked: '#',
        unmarked: '-',
    };
    let output = run("3\n\nBK 1\n".as_bytes(), false, &style).unwrap();
    assert_eq!(output, "- - -\n- # -\n- # -\n");
}
