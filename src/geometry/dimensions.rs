//! Shape kinds, their dimension fields, and lenient numeric parsing of
//! user-entered dimension text.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The selectable shape kinds, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
    ];

    /// Next kind in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Circle => ShapeKind::Rectangle,
            ShapeKind::Rectangle => ShapeKind::Square,
            ShapeKind::Square => ShapeKind::Triangle,
            ShapeKind::Triangle => ShapeKind::Circle,
        }
    }

    /// Previous kind in display order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            ShapeKind::Circle => ShapeKind::Triangle,
            ShapeKind::Rectangle => ShapeKind::Circle,
            ShapeKind::Square => ShapeKind::Rectangle,
            ShapeKind::Triangle => ShapeKind::Square,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Dimension fields of this kind, in form order
    pub fn fields(self) -> &'static [Field] {
        match self {
            ShapeKind::Circle => &[Field::Radius],
            ShapeKind::Rectangle => &[Field::Length, Field::Width],
            ShapeKind::Square => &[Field::Side],
            ShapeKind::Triangle => &[
                Field::Base,
                Field::Height,
                Field::SideA,
                Field::SideB,
                Field::SideC,
            ],
        }
    }

    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named dimension input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Radius,
    Length,
    Width,
    Side,
    Base,
    Height,
    SideA,
    SideB,
    SideC,
}

impl Field {
    /// Name used at the input boundary (`--dim sideA=6`)
    pub fn key(self) -> &'static str {
        match self {
            Field::Radius => "radius",
            Field::Length => "length",
            Field::Width => "width",
            Field::Side => "side",
            Field::Base => "base",
            Field::Height => "height",
            Field::SideA => "sideA",
            Field::SideB => "sideB",
            Field::SideC => "sideC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Radius => "Radius",
            Field::Length => "Length",
            Field::Width => "Width",
            Field::Side => "Side",
            Field::Base => "Base",
            Field::Height => "Height",
            Field::SideA => "Side A",
            Field::SideB => "Side B",
            Field::SideC => "Side C",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Radius => "Enter radius",
            Field::Length => "Enter length",
            Field::Width => "Enter width",
            Field::Side => "Enter side length",
            Field::Base => "Enter base",
            Field::Height => "Enter height",
            Field::SideA => "Enter side A",
            Field::SideB => "Enter side B",
            Field::SideC => "Enter side C",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A field name that matches no known dimension
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dimension field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [Field; 9] = [
            Field::Radius,
            Field::Length,
            Field::Width,
            Field::Side,
            Field::Base,
            Field::Height,
            Field::SideA,
            Field::SideB,
            Field::SideC,
        ];
        ALL.into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Parse user text into a dimension value.
///
/// Takes the longest leading decimal literal after any leading whitespace and
/// ignores the rest, so `"12abc"` is 12. Text with no numeric prefix,
/// including the empty string, is NaN. `Infinity` with an optional sign is
/// accepted; `inf` and `nan` are not.
pub fn parse_dimension(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts if it has at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parsed dimension values keyed by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimensions {
    values: FxHashMap<Field, f64>,
}

impl Dimensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `field`, NaN when it was never entered
    pub fn get(&self, field: Field) -> f64 {
        self.raw(field).unwrap_or(f64::NAN)
    }

    /// Value of `field`, `None` when it was never entered
    pub fn raw(&self, field: Field) -> Option<f64> {
        self.values.get(&field).copied()
    }

    pub fn set(&mut self, field: Field, value: f64) {
        self.values.insert(field, value);
    }

    /// Store the parsed value of `text` for `field`
    pub fn set_text(&mut self, field: Field, text: &str) {
        self.set(field, parse_dimension(text));
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Field, f64)> for Dimensions {
    fn from_iter<I: IntoIterator<Item = (Field, f64)>>(iter: I) -> Self {
        Dimensions {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_dimension("10"), 10.0);
        assert_eq!(parse_dimension("3.5"), 3.5);
        assert_eq!(parse_dimension(".5"), 0.5);
        assert_eq!(parse_dimension("7."), 7.0);
        assert_eq!(parse_dimension("-2"), -2.0);
        assert_eq!(parse_dimension("+4"), 4.0);
        assert_eq!(parse_dimension("1e3"), 1000.0);
        assert_eq!(parse_dimension("2.5E-1"), 0.25);
    }

    #[test]
    fn test_parse_takes_numeric_prefix() {
        assert_eq!(parse_dimension("12abc"), 12.0);
        assert_eq!(parse_dimension("  6 cm"), 6.0);
        assert_eq!(parse_dimension("1.2.3"), 1.2);
        // Dangling exponent is left out of the literal
        assert_eq!(parse_dimension("5e"), 5.0);
        assert_eq!(parse_dimension("5e+"), 5.0);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_dimension("").is_nan());
        assert!(parse_dimension("   ").is_nan());
        assert!(parse_dimension("abc").is_nan());
        assert!(parse_dimension("-").is_nan());
        assert!(parse_dimension(".").is_nan());
        assert!(parse_dimension("inf").is_nan());
        assert!(parse_dimension("nan").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_dimension("Infinity"), f64::INFINITY);
        assert_eq!(parse_dimension("+Infinity"), f64::INFINITY);
        assert_eq!(parse_dimension("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_field_keys_round_trip() {
        for kind in ShapeKind::ALL {
            for field in kind.fields() {
                assert_eq!(field.key().parse::<Field>(), Ok(*field));
            }
        }
        assert_eq!(
            "diameter".parse::<Field>(),
            Err(UnknownField("diameter".to_string()))
        );
    }

    #[test]
    fn test_kind_cycle() {
        let mut kind = ShapeKind::Circle;
        for _ in 0..ShapeKind::ALL.len() {
            assert_eq!(kind.next().prev(), kind);
            kind = kind.next();
        }
        assert_eq!(kind, ShapeKind::Circle);
    }
}
