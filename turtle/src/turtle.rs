// pathfinder/turtle/src/turtle.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::canvas::{Canvas, Point};
use crate::TurtleError;

/// Unit steps for each 45° heading, clockwise from north. Y grows downward.
const DIRECTIONS: [(i64, i64); 8] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
];

/// Unit displacement for `orientation`, which must be a multiple of 45.
pub fn direction(orientation: i64) -> Result<(i64, i64), TurtleError> {
    if orientation % 45 != 0 {
        return Err(TurtleError::InvalidOrientation(orientation));
    }
    DIRECTIONS
        .get((orientation / 45) as usize)
        .copied()
        .ok_or(TurtleError::InvalidOrientation(orientation))
}

#[inline]
fn step_axis(current: i64, target: i64) -> i64 {
    current + (target - current).signum()
}

#[derive(Debug)]
pub struct Turtle {
    orientation: i64,
    canvas: Canvas,
}

impl Turtle {
    pub fn new(size: usize) -> Turtle {
        Turtle {
            orientation: 0,
            canvas: Canvas::new(size),
        }
    }

    /// Heading in degrees, always within `0..360`.
    #[inline]
    pub fn orientation(&self) -> i64 {
        self.orientation
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn position(&self) -> Option<Point> {
        self.canvas.current()
    }

    pub fn rotate(&mut self, degrees: i64) {
        self.orientation = (((self.orientation + degrees % 360) % 360) + 360) % 360;
    }

    pub fn right(&mut self, degrees: i64) {
        self.rotate(degrees)
    }

    pub fn left(&mut self, degrees: i64) {
        self.rotate(degrees.saturating_neg())
    }

    /// Where a straight move of `units` along the current heading ends.
    pub fn endpoint(&self, units: i64) -> Result<Point, TurtleError> {
        let (dx, dy) = direction(self.orientation)?;
        let from = self.canvas.current().ok_or(TurtleError::EmptyCanvas)?;
        Ok(Point::new(
            from.x.saturating_add(dx.saturating_mul(units)),
            from.y.saturating_add(dy.saturating_mul(units)),
        ))
    }

    /// Walks to `endpoint(units)` one cell at a time, marking every cell on
    /// the way. Both axes may advance in the same step.
    pub fn move_forward(&mut self, units: i64) -> Result<(), TurtleError> {
        let target = self.endpoint(units)?;
        while let Some(current) = self.canvas.current() {
            if current == target {
                break;
            }
            let next = Point::new(
                step_axis(current.x, target.x),
                step_axis(current.y, target.y),
            );
            self.canvas.add(next);
        }
        Ok(())
    }

    pub fn move_backward(&mut self, units: i64) -> Result<(), TurtleError> {
        self.move_forward(units.saturating_neg())
    }
}

#[test]
fn direction_table_covers_every_heading() {
    assert_eq!(direction(0), Ok((0, -1)));
    assert_eq!(direction(45), Ok((1, -1)));
    assert_eq!(direction(90), Ok((1, 0)));
    assert_eq!(direction(135), Ok((1, 1)));
    assert_eq!(direction(180), Ok((0, 1)));
    assert_eq!(direction(225), Ok((-1, 1)));
    assert_eq!(direction(270), Ok((-1, 0)));
    assert_eq!(direction(315), Ok((-1, -1)));
    assert_eq!(direction(30), Err(TurtleError::InvalidOrientation(30)));
    assert_eq!(direction(360), Err(TurtleError::InvalidOrientation(360)));
}

#[test]
fn rotation_normalizes_into_range() {
    let mut turtle = Turtle::new(5);
    turtle.left(90);
    assert_eq!(turtle.orientation(), 270);
    turtle.right(450);
    assert_eq!(turtle.orientation(), 0);
    turtle.rotate(-765);
    assert_eq!(turtle.orientation(), 315);
}

#[test]
fn rotation_is_order_independent() {
    let angles = [-720, -405, -90, -45, 0, 45, 90, 135, 360, 1125];
    for &a in &angles {
        for &b in &angles {
            let mut ab = Turtle::new(1);
            ab.rotate(a);
            ab.rotate(b);
            let mut ba = Turtle::new(1);
            ba.rotate(b);
            ba.rotate(a);
            let mut sum = Turtle::new(1);
            sum.rotate(a + b);
            assert_eq!(ab.orientation(), ba.orientation());
            assert_eq!(ab.orientation(), sum.orientation());
            assert!((0..360).contains(&ab.orientation()));
        }
    }
}

#[test]
fn left_then_right_restores_heading() {
    for &start in &[0, 45, 180, 315] {
        for &d in &[0, 45, 90, 370, -135] {
            let mut turtle = Turtle::new(1);
            turtle.rotate(start);
            turtle.left(d);
            turtle.right(d);
            assert_eq!(turtle.orientation(), start);
        }
    }
}

#[test]
fn move_north_marks_each_cell() {
    let mut turtle = Turtle::new(9);
    turtle.move_forward(3).unwrap();
    for y in 1..4 {
        assert!(turtle.canvas().contains(Point::new(4, 4 - y)));
    }
    assert_eq!(turtle.canvas().visited_count(), 4);
    assert_eq!(turtle.position(), Some(Point::new(4, 1)));
}

#[test]
fn move_diagonal_takes_one_step_per_unit() {
    let mut turtle = Turtle::new(9);
    turtle.right(45);
    turtle.move_forward(3).unwrap();
    assert_eq!(turtle.canvas().visited_count(), 4);
    for d in 1..4 {
        assert!(turtle.canvas().contains(Point::new(4 + d, 4 - d)));
    }
    assert_eq!(turtle.position(), Some(Point::new(7, 1)));
}

#[test]
fn move_backward_mirrors_forward() {
    let mut turtle = Turtle::new(9);
    turtle.right(90);
    turtle.move_backward(2).unwrap();
    assert!(turtle.canvas().contains(Point::new(3, 4)));
    assert!(turtle.canvas().contains(Point::new(2, 4)));
    assert_eq!(turtle.position(), Some(Point::new(2, 4)));
    assert_eq!(turtle.orientation(), 90);
}

#[test]
fn zero_move_marks_nothing() {
    let mut turtle = Turtle::new(5);
    turtle.move_forward(0).unwrap();
    assert_eq!(turtle.canvas().visited_count(), 1);
    assert_eq!(turtle.position(), Some(Point::new(2, 2)));
}

#[test]
fn move_needs_a_position_and_a_compass_heading() {
    let mut turtle = Turtle::new(0);
    assert_eq!(turtle.move_forward(1), Err(TurtleError::EmptyCanvas));

    let mut turtle = Turtle::new(5);
    turtle.right(30);
    assert_eq!(
        turtle.move_forward(1),
        Err(TurtleError::InvalidOrientation(30))
    );
    assert_eq!(turtle.canvas().visited_count(), 1);
}
