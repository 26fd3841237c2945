//! Shape animation driven by damped springs
//!
//! The animation only ever sees the raw dimension values the user typed, never
//! the computed area or perimeter. Each kind turns its dimensions into a
//! clamped display size, and two springs (scale and rotation) ease the drawing
//! toward the "calculated" or "idle" pose.
//!
//! Geometry is expressed in a 600×600 canvas centred on the origin with y
//! pointing up, see [`CANVAS_EXTENT`].

use crate::geometry::{Dimensions, Field, ShapeKind};
use std::time::Duration;

/// Half-width of the square drawing area
pub const CANVAS_EXTENT: f64 = 300.0;

/// Largest integration step; longer ticks are split into sub-steps
const MAX_STEP: f64 = 1.0 / 240.0;

/// Ticks longer than this are treated as this long
const MAX_TICK: f64 = 1.0;

const SETTLE_EPSILON: f64 = 1e-3;

const IDLE_SCALE: f64 = 0.5;
const CALCULATED_SCALE: f64 = 1.0;

/// Unit-mass damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
}

impl Spring {
    pub fn new(value: f64, stiffness: f64, damping: f64) -> Self {
        Spring {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance the spring by `dt` using semi-implicit Euler
    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f64().min(MAX_TICK);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force =
                -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }
}

/// Spring parameters and end rotation for one kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub stiffness: f64,
    pub damping: f64,
    /// Rotation in degrees once calculated
    pub turn: f64,
}

pub fn motion(kind: ShapeKind) -> Motion {
    match kind {
        ShapeKind::Circle => Motion {
            stiffness: 260.0,
            damping: 20.0,
            turn: 0.0,
        },
        ShapeKind::Rectangle => Motion {
            stiffness: 100.0,
            damping: 10.0,
            turn: 360.0,
        },
        ShapeKind::Square => Motion {
            stiffness: 200.0,
            damping: 15.0,
            turn: 180.0,
        },
        ShapeKind::Triangle => Motion {
            stiffness: 100.0,
            damping: 10.0,
            turn: 360.0,
        },
    }
}

/// Display size of a shape in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplaySize {
    Circle { radius: f64 },
    Rectangle { length: f64, width: f64 },
    Square { side: f64 },
    Triangle { base: f64, height: f64 },
}

/// Fall back to `default` when unset, zero or NaN, then clamp
fn sized(value: Option<f64>, default: f64, min: f64, max: f64) -> f64 {
    let value = match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => default,
    };
    value.clamp(min, max)
}

pub fn display_size(kind: ShapeKind, dims: &Dimensions) -> DisplaySize {
    match kind {
        ShapeKind::Circle => DisplaySize::Circle {
            radius: sized(dims.raw(Field::Radius), 50.0, 40.0, 240.0),
        },
        ShapeKind::Rectangle => DisplaySize::Rectangle {
            length: sized(dims.raw(Field::Length), 100.0, 80.0, 480.0),
            width: sized(dims.raw(Field::Width), 60.0, 80.0, 320.0),
        },
        ShapeKind::Square => DisplaySize::Square {
            side: sized(dims.raw(Field::Side), 80.0, 80.0, 400.0),
        },
        ShapeKind::Triangle => DisplaySize::Triangle {
            base: sized(dims.raw(Field::Base), 100.0, 120.0, 480.0),
            height: sized(dims.raw(Field::Height), 80.0, 120.0, 400.0),
        },
    }
}

/// What to draw for the current frame
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle { radius: f64 },
    /// Closed polygon, vertices in order
    Polygon(Vec<(f64, f64)>),
}

#[derive(Debug, Clone)]
pub struct ShapeAnimation {
    kind: ShapeKind,
    size: DisplaySize,
    calculated: bool,
    scale: Spring,
    rotation: Spring,
}

impl ShapeAnimation {
    /// Fresh animation for `kind`: scale starts at 0 and grows to the idle pose
    pub fn new(kind: ShapeKind) -> Self {
        let m = motion(kind);
        let mut scale = Spring::new(0.0, m.stiffness, m.damping);
        scale.set_target(IDLE_SCALE);
        ShapeAnimation {
            kind,
            size: display_size(kind, &Dimensions::new()),
            calculated: false,
            scale,
            rotation: Spring::new(0.0, m.stiffness, m.damping),
        }
    }

    /// Point the animation at new dimensions and a new calculated state.
    ///
    /// A different kind restarts the animation from scale 0.
    pub fn retarget(&mut self, kind: ShapeKind, dims: &Dimensions, calculated: bool) {
        if kind != self.kind {
            *self = Self::new(kind);
        }
        let m = motion(kind);
        self.size = display_size(kind, dims);
        self.calculated = calculated;
        self.scale.set_target(if calculated {
            CALCULATED_SCALE
        } else {
            IDLE_SCALE
        });
        self.rotation
            .set_target(if calculated { m.turn } else { 0.0 });
    }

    pub fn tick(&mut self, dt: Duration) {
        self.scale.step(dt);
        self.rotation.step(dt);
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn size(&self) -> DisplaySize {
        self.size
    }

    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Current rotation in degrees, clockwise
    pub fn rotation(&self) -> f64 {
        self.rotation.value()
    }

    pub fn is_settled(&self) -> bool {
        self.scale.is_settled() && self.rotation.is_settled()
    }

    /// Current outline in canvas coordinates, scaled and rotated
    pub fn outline(&self) -> Outline {
        let scale = self.scale();
        let points = match self.size {
            DisplaySize::Circle { radius } => {
                return Outline::Circle {
                    radius: (radius * scale).max(0.0),
                }
            }
            DisplaySize::Rectangle { length, width } => box_corners(length, width),
            DisplaySize::Square { side } => box_corners(side, side),
            DisplaySize::Triangle { base, height } => vec![
                (0.0, height / 2.0),
                (base / 2.0, -height / 2.0),
                (-base / 2.0, -height / 2.0),
            ],
        };

        let (sin, cos) = self.rotation().to_radians().sin_cos();
        Outline::Polygon(
            points
                .into_iter()
                .map(|(x, y)| {
                    // Clockwise with y pointing up
                    let rx = x * cos + y * sin;
                    let ry = -x * sin + y * cos;
                    (rx * scale, ry * scale)
                })
                .collect(),
        )
    }
}

fn box_corners(width: f64, height: f64) -> Vec<(f64, f64)> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    vec![(-hw, hh), (hw, hh), (hw, -hh), (-hw, -hh)]
}
