use std::any::{Any, TypeId};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

use num_traits::NumCast;
use tracing::debug;

use crate::parse::token_count;
use crate::scalar::widen;
use crate::{Coordinate, Error, Result, Scalar};

/// The common contract of all shapes, usable through `dyn Shape<T>`.
///
/// A shape is a closed polygon with a fixed, variant-specific number of vertices. Everything a
/// caller needs (center, area, deep copy, equality and text I/O) is available without knowing the
/// concrete variant, which makes `dyn Shape<T>` suitable for heterogeneous collections such as
/// `SharedArray<dyn Shape<f64>>`.
///
/// # Text form
///
/// [`Display`] writes the vertices as bare numeric tokens separated by single spaces, in
/// construction order, without any variant tag: `x0 y0 x1 y1 ...`. The reading methods accept the
/// same tokens separated by any whitespace.
///
/// # Equality
///
/// Two shapes are equal only if they are the same variant and their vertex lists are equal
/// element-wise, in order. The same polygon listed from a different starting vertex is a different
/// value. `dyn Shape<T>` implements [`PartialEq`] in terms of [`shape_eq()`][Self::shape_eq].
///
/// # Example
///
/// ```
/// use polygon_shapes::{Coordinate, Pentagon, Rhombus, Shape};
///
/// let rhombus = Rhombus::new(
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(2.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(-1.0, 1.0),
/// );
///
/// let shape: &dyn Shape<f64> = &rhombus;
///
/// assert_eq!(shape.kind().name(), "Rhombus");
/// assert_eq!(shape.center(), Coordinate::new(0.5, 0.5));
/// assert!((shape.area() - 2.0).abs() < 1e-9);
/// assert_eq!(shape.to_string(), "0 0 2 0 1 1 -1 1");
///
/// let copy = shape.clone_shape();
/// assert!(shape.shape_eq(&*copy));
/// assert!(!shape.shape_eq(&Pentagon::<f64>::default()));
/// ```
pub trait Shape<T: Scalar>: Any + Debug + Display {
    /// The discriminator of the concrete variant.
    fn kind(&self) -> ShapeKind;

    /// The vertices in construction order.
    fn vertices(&self) -> &[Coordinate<T>];

    /// The arithmetic mean of the vertices.
    ///
    /// The sum is accumulated in `f64`, so it never overflows `T`. The result is converted back
    /// to `T`, which means integer scalars round toward zero. Integer magnitudes above 2^53 lose
    /// precision in the conversion.
    fn center(&self) -> Coordinate<T> {
        centroid(self.vertices())
    }

    /// The area enclosed by the vertex ring, computed with the shoelace formula in `f64`.
    ///
    /// The result is only meaningful for simple (non-self-intersecting) polygons.
    fn area(&self) -> f64 {
        shoelace_area(self.vertices())
    }

    /// Creates an independent deep copy of the shape, preserving its variant.
    fn clone_shape(&self) -> Box<dyn Shape<T>>;

    /// Whether `other` is the same variant with the same vertices in the same order.
    fn shape_eq(&self, other: &dyn Shape<T>) -> bool;

    /// Overwrites the vertices with the next `2 * vertex_count` numeric tokens.
    ///
    /// Tokens after the last vertex are left in the iterator, so several shapes can be read from
    /// one token stream. If a token fails to parse or the stream ends early, an error is returned
    /// and the shape keeps its previous vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] naming the offending token if a token is not a valid `T`,
    /// or [`Error::TokenCount`] if the iterator runs out of tokens.
    fn read_tokens<'a>(&mut self, tokens: &mut dyn Iterator<Item = &'a str>) -> Result<()>;

    /// Overwrites the vertices with the whitespace-separated numeric tokens in `text`.
    ///
    /// Unlike [`read_tokens()`][Self::read_tokens], the text must contain exactly
    /// `2 * vertex_count` tokens. On error, the shape keeps its previous vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenCount`] if the text does not contain exactly the expected number of
    /// tokens, or [`Error::InvalidSyntax`] naming the first token that is not a valid `T`.
    fn read_str(&mut self, text: &str) -> Result<()> {
        let expected = token_count(self.vertices().len());
        let actual = text.split_whitespace().count();

        if actual != expected {
            debug!(
                kind = self.kind().name(),
                expected, actual, "rejecting shape text with wrong token count"
            );

            return Err(Error::TokenCount { expected, actual });
        }

        self.read_tokens(&mut text.split_whitespace())
    }
}

impl<T: Scalar> PartialEq for dyn Shape<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape_eq(other)
    }
}

impl<T: Scalar> Clone for Box<dyn Shape<T>> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

/// Identifies the concrete variant of a [`Shape`].
///
/// Two kinds are equal if and only if they belong to the same variant type. The name is for
/// display purposes only.
///
/// # Example
///
/// ```
/// use polygon_shapes::{PentagonVariant, Rhombus, Shape, ShapeKind};
///
/// let rhombus = Rhombus::<i32>::default();
///
/// assert_eq!(rhombus.kind(), ShapeKind::of::<polygon_shapes::RhombusVariant>());
/// assert_ne!(rhombus.kind(), ShapeKind::of::<PentagonVariant>());
/// assert_eq!(rhombus.kind().to_string(), "Rhombus");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ShapeKind {
    type_id: TypeId,
    name: &'static str,
}

impl ShapeKind {
    /// The kind of shapes whose variant is `V`.
    #[must_use]
    pub fn of<V: crate::Variant>() -> Self {
        Self {
            type_id: TypeId::of::<V>(),
            name: V::NAME,
        }
    }

    /// The human-readable name of the variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ShapeKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ShapeKind {}

impl Hash for ShapeKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn centroid<T: Scalar>(vertices: &[Coordinate<T>]) -> Coordinate<T> {
    Coordinate::new(
        mean(vertices.iter().map(Coordinate::x)),
        mean(vertices.iter().map(Coordinate::y)),
    )
}

/// The mean of `values`, accumulated in `f64` so that the sum cannot overflow `T`.
///
/// Converting back to `T` truncates toward zero, as integer division would.
fn mean<T: Scalar>(values: impl Iterator<Item = T> + Clone) -> T {
    let (count, sum) = values
        .clone()
        .fold((0.0_f64, 0.0_f64), |(count, sum), value| {
            (count + 1.0, sum + widen(value))
        });

    let average = sum / count;

    <T as NumCast>::from(average).unwrap_or_else(|| {
        // Rounding to f64 can carry the mean of values at the bounds of `T` just past them.
        let toward_greater = average > 0.0;

        values
            .reduce(|kept, value| {
                if (value > kept) == toward_greater {
                    value
                } else {
                    kept
                }
            })
            .expect("polygons have at least three vertices")
    })
}

fn shoelace_area<T: Scalar>(vertices: &[Coordinate<T>]) -> f64 {
    let next_vertices = vertices.iter().cycle().skip(1);

    let twice_signed_area: f64 = vertices
        .iter()
        .zip(next_vertices)
        .map(|(current, next)| {
            widen(current.x()) * widen(next.y()) - widen(next.x()) * widen(current.y())
        })
        .sum();

    twice_signed_area.abs() / 2.0
}
