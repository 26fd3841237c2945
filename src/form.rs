//! Interactive form session
//!
//! [`ShapeForm`] owns everything one session has entered: the selected
//! [`ShapeKind`], the raw text of each dimension input, the parsed
//! [`Dimensions`], and the last computed [`Measurements`]. Changing the kind
//! replaces all of it; nothing carries over from one kind to the next.

use crate::geometry::{Dimensions, Field, Measure, Measurements, Shape, ShapeKind};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Characters accepted into a dimension input
pub fn is_numeric_input(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Enough fractional digits to print any finite f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Format a measurement to two decimal places.
///
/// Ties round away from zero on the exact binary value, so 0.125 shows as
/// `0.13` while 1.005 (stored as 1.00499...) shows as `1.00`. Only values
/// below zero get a sign, so negative zero shows as `0.00`. NaN is shown as
/// `NaN` and infinities as `Infinity` / `-Infinity`.
pub fn format_measure(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    } else if value == f64::INFINITY {
        return "Infinity".to_string();
    } else if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain((0..2).map(|i| frac.get(i).copied().unwrap_or(b'0')))
        .collect();

    if frac.get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| d as char));
    out.push('.');
    out.extend(digits[split..].iter().map(|&d| d as char));
    out
}

#[derive(Debug, Clone, Default)]
pub struct ShapeForm {
    kind: ShapeKind,
    inputs: FxHashMap<Field, String>,
    dimensions: Dimensions,
    result: Option<Measurements>,
}

impl ShapeForm {
    pub fn new(kind: ShapeKind) -> Self {
        ShapeForm {
            kind,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Switch to `kind`, discarding every input and any result
    pub fn select_kind(&mut self, kind: ShapeKind) {
        debug!(from = %self.kind, to = %kind, "shape kind selected");
        self.kind = kind;
        self.inputs.clear();
        self.dimensions.clear();
        self.result = None;
    }

    /// Raw text of `field`, empty if nothing was typed
    pub fn input(&self, field: Field) -> &str {
        self.inputs.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace the text of `field` and re-parse it.
    ///
    /// Fields that don't belong to the current kind are ignored.
    pub fn set_input(&mut self, field: Field, text: &str) {
        if !self.kind.has_field(field) {
            return;
        }
        self.dimensions.set_text(field, text);
        self.inputs.insert(field, text.to_string());
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        let mut text = self.input(field).to_string();
        text.push(c);
        self.set_input(field, &text);
    }

    pub fn pop_char(&mut self, field: Field) {
        let mut text = self.input(field).to_string();
        if text.pop().is_some() {
            self.set_input(field, &text);
        }
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Build the shape for the current kind and read both measurements
    pub fn calculate(&mut self) -> Measurements {
        let shape = Shape::from_dimensions(self.kind, &self.dimensions);
        let measurements = shape.measure();
        debug!(
            kind = %self.kind,
            area = measurements.area,
            perimeter = measurements.perimeter,
            "calculated"
        );
        self.result = Some(measurements);
        measurements
    }

    /// Last computed result, `None` while uncomputed
    pub fn result(&self) -> Option<Measurements> {
        self.result
    }

    pub fn is_calculated(&self) -> bool {
        self.result.is_some()
    }
}
