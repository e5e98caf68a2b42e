// pathfinder/turtle/src/canvas.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The square grid the turtle draws on.

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }
}

/// Glyphs used when rendering a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub marked: char,
    pub unmarked: char,
}

impl Default for RenderStyle {
    fn default() -> RenderStyle {
        RenderStyle {
            marked: 'X',
            unmarked: '.',
        }
    }
}

/// Tracks which cells have been visited and where the turtle is.
///
/// Cells outside `0..size` may be recorded; they are never rendered.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: usize,
    visited: HashSet<Point>,
    current: Option<Point>,
}

impl Canvas {
    /// A `size` x `size` canvas. Unless `size` is zero the center cell is
    /// marked and becomes the current position.
    pub fn new(size: usize) -> Canvas {
        let mut canvas = Canvas {
            size,
            visited: HashSet::new(),
            current: None,
        };
        if size > 0 {
            let center = (size / 2) as i64;
            canvas.add(Point::new(center, center));
        }
        canvas
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// `None` only on a zero-sized canvas.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Marks `point` and moves the current position there.
    pub fn add(&mut self, point: Point) {
        trace!("mark ({}, {})", point.x, point.y);
        self.visited.insert(point);
        self.current = Some(point);
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.visited.contains(&point)
    }

    /// Number of distinct marked cells, including any outside the grid.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn render(&self) -> String {
        self.render_with(&RenderStyle::default())
    }

    /// One line per row, glyphs separated by single spaces. The last line
    /// has no trailing newline.
    pub fn render_with(&self, style: &RenderStyle) -> String {
        let mut lines = Vec::with_capacity(self.size);
        for y in 0..self.size as i64 {
            let glyphs: Vec<String> = (0..self.size as i64)
                .map(|x| {
                    if self.contains(Point::new(x, y)) {
                        style.marked.to_string()
                    } else {
                        style.unmarked.to_string()
                    }
                })
                .collect();
            lines.push(glyphs.join(" "));
        }
        lines.join("\n")
    }
}

impl Display for Canvas {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        formatter.write_str(&self.render())
    }
}

#[test]
fn new_canvas_marks_center() {
    for size in 1..12 {
        let canvas = Canvas::new(size);
        let center = Point::new((size / 2) as i64, (size / 2) as i64);
        assert_eq!(canvas.visited_count(), 1);
        assert!(canvas.contains(center));
        assert_eq!(canvas.current(), Some(center));
    }
}

#[test]
fn empty_canvas_has_no_position() {
    let canvas = Canvas::new(0);
    assert_eq!(canvas.visited_count(), 0);
    assert_eq!(canvas.current(), None);
    assert_eq!(canvas.render(), "");
}

#[test]
fn add_is_idempotent() {
    let mut canvas = Canvas::new(3);
    canvas.add(Point::new(0, 0));
    canvas.add(Point::new(0, 0));
    assert_eq!(canvas.visited_count(), 2);
    assert_eq!(canvas.current(), Some(Point::new(0, 0)));
}

#[test]
fn render_rows_top_to_bottom() {
    let mut canvas = Canvas::new(3);
    canvas.add(Point::new(2, 0));
    assert_eq!(canvas.render(), ". . X\n. X .\n. . .");
    assert_eq!(canvas.to_string(), canvas.render());

    let style = RenderStyle {
        marked: '#',
        unmarked: '_',
    };
    assert_eq!(canvas.render_with(&style), "_ _ #\n_ # _\n_ _ _");
}

#[test]
fn out_of_range_cells_are_kept_but_not_rendered() {
    let mut canvas = Canvas::new(1);
    canvas.add(Point::new(-1, 5));
    assert!(canvas.contains(Point::new(-1, 5)));
    assert_eq!(canvas.render(), "X");
}
