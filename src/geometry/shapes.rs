//! Concrete shape variants

use super::Measure;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Measure for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Rectangle { length, width }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Measure for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.width
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

/// Triangle described by its base, its altitude, and its three side lengths.
///
/// The altitude and the sides are independent inputs: area uses the first
/// pair, perimeter the second, and they are never checked against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    base: f64,
    height: f64,
    sides: [f64; 3],
}

impl Triangle {
    pub fn new(base: f64, height: f64, side_a: f64, side_b: f64, side_c: f64) -> Self {
        Triangle {
            base,
            height,
            sides: [side_a, side_b, side_c],
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }
}

impl Measure for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn perimeter(&self) -> f64 {
        let [a, b, c] = self.sides;
        a + b + c
    }
}
