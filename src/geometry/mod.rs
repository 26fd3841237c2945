//! Shape model: the closed set of shape variants and their measurements
//!
//! Every variant implements [`Measure`], and so does the [`Shape`] enum that
//! wraps them, so callers obtain area and perimeter without branching on the
//! kind once the shape is built.
//!
//! # Variants
//!
//! - [`Circle`]: `radius`
//! - [`Rectangle`]: `length`, `width`
//! - Square: built with [`Shape::square`], stored as a [`Rectangle`]
//! - [`Triangle`]: `base`, `height` (altitude) and three side lengths
//!
//! Nothing is validated. Negative, zero and NaN dimensions are accepted and
//! flow through the formulas unchanged, so a missing input shows up as a NaN
//! result instead of an error.

pub mod dimensions;
pub mod shapes;

pub use dimensions::{parse_dimension, Dimensions, Field, ShapeKind, UnknownField};
pub use shapes::{Circle, Rectangle, Triangle};

/// Uniform two-operation interface shared by all shapes
pub trait Measure {
    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;

    /// Read both values at once
    fn measure(&self) -> Measurements {
        Measurements {
            area: self.area(),
            perimeter: self.perimeter(),
        }
    }
}

/// Area and perimeter read from one shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub area: f64,
    pub perimeter: f64,
}

/// A constructed shape value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle(Circle::new(radius))
    }

    pub fn rectangle(length: f64, width: f64) -> Self {
        Shape::Rectangle(Rectangle::new(length, width))
    }

    /// A square is a rectangle whose length and width are both `side`
    pub fn square(side: f64) -> Self {
        Shape::Rectangle(Rectangle::new(side, side))
    }

    pub fn triangle(base: f64, height: f64, side_a: f64, side_b: f64, side_c: f64) -> Self {
        Shape::Triangle(Triangle::new(base, height, side_a, side_b, side_c))
    }

    /// Build the variant for `kind`, reading each of its fields from `dims`.
    ///
    /// Fields missing from `dims` read as NaN.
    pub fn from_dimensions(kind: ShapeKind, dims: &Dimensions) -> Self {
        match kind {
            ShapeKind::Circle => Shape::circle(dims.get(Field::Radius)),
            ShapeKind::Rectangle => {
                Shape::rectangle(dims.get(Field::Length), dims.get(Field::Width))
            }
            ShapeKind::Square => Shape::square(dims.get(Field::Side)),
            ShapeKind::Triangle => Shape::triangle(
                dims.get(Field::Base),
                dims.get(Field::Height),
                dims.get(Field::SideA),
                dims.get(Field::SideB),
                dims.get(Field::SideC),
            ),
        }
    }
}

impl Measure for Shape {
    fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Rectangle(r) => r.area(),
            Shape::Triangle(t) => t.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.perimeter(),
            Shape::Rectangle(r) => r.perimeter(),
            Shape::Triangle(t) => t.perimeter(),
        }
    }
}
