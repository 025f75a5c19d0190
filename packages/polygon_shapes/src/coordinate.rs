use std::fmt;
use std::str::FromStr;

use crate::parse::parse_scalar;
use crate::{Error, Scalar};

/// An immutable point in the plane.
///
/// Equality is exact and component-wise; no tolerance is applied to floating point values.
///
/// The canonical text form is `(x, y)`, produced by [`Display`][fmt::Display] and accepted by
/// [`FromStr`]. Note that shapes use a different, bare `x y` text form for their vertices.
///
/// # Example
///
/// ```
/// use polygon_shapes::Coordinate;
///
/// let point: Coordinate<f64> = "(1.5, -2)".parse().unwrap();
///
/// assert_eq!(point, Coordinate::new(1.5, -2.0));
/// assert_eq!(point.to_string(), "(1.5, -2)");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Coordinate<T> {
    x: T,
    y: T,
}

impl<T: Scalar> Coordinate<T> {
    /// Creates a coordinate from its components.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The horizontal component.
    #[must_use]
    pub fn x(&self) -> T {
        self.x
    }

    /// The vertical component.
    #[must_use]
    pub fn y(&self) -> T {
        self.y
    }
}

impl<T: Scalar> From<(T, T)> for Coordinate<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> fmt::Display for Coordinate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> FromStr for Coordinate<T> {
    type Err = Error;

    /// Parses the `(x, y)` form. Whitespace around the individual tokens is ignored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let inner = text
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| {
                Error::invalid_syntax(text, "coordinate must be enclosed in '(' and ')'")
            })?;

        let (x, y) = inner.split_once(',').ok_or_else(|| {
            Error::invalid_syntax(text, "coordinate components must be separated by ','")
        })?;

        Ok(Self::new(parse_scalar(x.trim())?, parse_scalar(y.trim())?))
    }
}
