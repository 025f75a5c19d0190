use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::parse::parse_vertices;
use crate::{Coordinate, Error, Result, Scalar, Shape, ShapeKind};

/// Marker for a concrete shape variant.
///
/// A variant contributes nothing but its identity and name; the vertex count is part of the
/// [`Polygon`] type and all algorithms are shared. Declaring a new variant takes a marker type,
/// an implementation of this trait and a type alias:
///
/// ```
/// use polygon_shapes::{Coordinate, Polygon, Shape, Variant};
///
/// pub enum TriangleVariant {}
///
/// impl Variant for TriangleVariant {
///     const NAME: &'static str = "Triangle";
/// }
///
/// pub type Triangle<T> = Polygon<T, TriangleVariant, 3>;
///
/// let triangle = Triangle::from_vertices([
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(4.0, 0.0),
///     Coordinate::new(0.0, 3.0),
/// ]);
///
/// assert_eq!(triangle.kind().name(), "Triangle");
/// assert!((triangle.area() - 6.0).abs() < 1e-9);
/// ```
pub trait Variant: 'static {
    /// Human-readable name of the variant, reported via [`ShapeKind::name()`].
    const NAME: &'static str;
}

/// A polygon with exactly `N` vertices, tagged with the variant `V`.
///
/// This type implements the entire [`Shape`] contract once for every variant. Concrete shapes
/// such as [`Rhombus`][crate::Rhombus] are type aliases of it. The vertex count is fixed by the
/// type and can never change; [reading][Shape::read_tokens] only replaces vertex contents.
///
/// Same-type comparison via [`PartialEq`] is equivalent to [`Shape::shape_eq()`].
pub struct Polygon<T, V, const N: usize> {
    vertices: [Coordinate<T>; N],

    _variant: PhantomData<V>,
}

impl<T: Scalar, V: Variant, const N: usize> Polygon<T, V, N> {
    /// Creates a polygon from its vertices, in order.
    ///
    /// Fails to compile if `N` is less than three.
    #[must_use]
    pub fn from_vertices(vertices: [Coordinate<T>; N]) -> Self {
        const {
            assert!(N >= 3, "a polygon needs at least three vertices");
        }

        Self {
            vertices,
            _variant: PhantomData,
        }
    }

    /// The number of vertices of this variant.
    pub const VERTEX_COUNT: usize = N;
}

impl<T: Scalar, V: Variant, const N: usize> Shape<T> for Polygon<T, V, N> {
    fn kind(&self) -> ShapeKind {
        ShapeKind::of::<V>()
    }

    fn vertices(&self) -> &[Coordinate<T>] {
        &self.vertices
    }

    fn clone_shape(&self) -> Box<dyn Shape<T>> {
        Box::new(self.clone())
    }

    fn shape_eq(&self, other: &dyn Shape<T>) -> bool {
        let other: &dyn Any = other;

        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.vertices == other.vertices)
    }

    fn read_tokens<'a>(&mut self, tokens: &mut dyn Iterator<Item = &'a str>) -> Result<()> {
        match parse_vertices::<T, N>(tokens) {
            Ok(vertices) => {
                self.vertices = vertices;

                trace!(kind = V::NAME, vertex_count = N, "read shape vertices");
                Ok(())
            }
            Err(error) => {
                debug!(kind = V::NAME, %error, "rejecting shape text");
                Err(error)
            }
        }
    }
}

impl<T: Scalar, V: Variant, const N: usize> Default for Polygon<T, V, N> {
    /// A polygon with every vertex at the origin, useful as a target for reading.
    fn default() -> Self {
        Self::from_vertices([Coordinate::new(T::zero(), T::zero()); N])
    }
}

impl<T: Scalar, V: Variant, const N: usize> Clone for Polygon<T, V, N> {
    fn clone(&self) -> Self {
        Self::from_vertices(self.vertices)
    }
}

impl<T: Scalar, V: Variant, const N: usize> PartialEq for Polygon<T, V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<T: Scalar + Eq, V: Variant, const N: usize> Eq for Polygon<T, V, N> {}

impl<T: Scalar, V: Variant, const N: usize> fmt::Debug for Polygon<T, V, N> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(V::NAME)
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl<T: Scalar, V: Variant, const N: usize> fmt::Display for Polygon<T, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{} {}", vertex.x(), vertex.y())?;
        }

        Ok(())
    }
}

impl<T: Scalar, V: Variant, const N: usize> FromStr for Polygon<T, V, N> {
    type Err = Error;

    /// Parses exactly `2 * N` whitespace-separated numeric tokens.
    fn from_str(text: &str) -> Result<Self> {
        let mut polygon = Self::default();
        polygon.read_str(text)?;
        Ok(polygon)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    enum SquareVariant {}

    impl Variant for SquareVariant {
        const NAME: &'static str = "Square";
    }

    enum OtherSquareVariant {}

    impl Variant for OtherSquareVariant {
        const NAME: &'static str = "Square";
    }

    type Square<T> = Polygon<T, SquareVariant, 4>;
    type OtherSquare<T> = Polygon<T, OtherSquareVariant, 4>;

    assert_impl_all!(Square<f64>: Send, Sync, Clone, fmt::Debug, fmt::Display, Default);
    assert_impl_all!(Square<i32>: Eq);
    assert_not_impl_any!(Square<f64>: Copy, Eq);

    fn unit_square() -> Square<i32> {
        "0 0 1 0 1 1 0 1".parse().unwrap()
    }

    #[test]
    fn vertex_count_is_fixed_by_type() {
        assert_eq!(Square::<f64>::VERTEX_COUNT, 4);
        assert_eq!(unit_square().vertices().len(), 4);
    }

    #[test]
    fn display_is_bare_tokens() {
        assert_eq!(unit_square().to_string(), "0 0 1 0 1 1 0 1");
    }

    #[test]
    fn debug_names_variant() {
        let text = format!("{:?}", unit_square());

        assert!(text.starts_with("Square {"));
    }

    #[test]
    fn same_name_different_variant_is_not_equal() {
        let square = unit_square();
        let other = OtherSquare::from_vertices(
            square
                .vertices()
                .try_into()
                .expect("both variants have four vertices"),
        );

        assert_eq!(square.kind().name(), other.kind().name());
        assert_ne!(square.kind(), other.kind());
        assert!(!square.shape_eq(&other));
        assert!(!other.shape_eq(&square));
    }

    #[test]
    fn read_tokens_consumes_one_shape_at_a_time() {
        let mut tokens = "0 0 2 0 2 2 0 2  5 5 6 5 6 6 5 6".split_whitespace();

        let mut first = Square::<i32>::default();
        let mut second = Square::<i32>::default();

        first.read_tokens(&mut tokens).unwrap();
        second.read_tokens(&mut tokens).unwrap();

        assert_eq!(first.to_string(), "0 0 2 0 2 2 0 2");
        assert_eq!(second.to_string(), "5 5 6 5 6 6 5 6");
        assert!(tokens.next().is_none());
    }

    #[test]
    fn failed_read_keeps_previous_vertices() {
        let mut square = unit_square();

        square.read_tokens(&mut "9 9 9 9 9 oops 9 9".split_whitespace()).unwrap_err();
        square.read_str("9 9 9 9").unwrap_err();
        square.read_str("9 9 9 9 9 9 9 9 9 9").unwrap_err();

        assert_eq!(square, unit_square());
    }

    #[test]
    fn from_str_rejects_wrong_token_count() {
        let error = "0 0 1 0 1 1".parse::<Square<i32>>().unwrap_err();

        assert!(matches!(
            error,
            Error::TokenCount {
                expected: 8,
                actual: 6
            }
        ));
    }

    #[test]
    fn clone_shape_is_independent() {
        let original = unit_square();

        let mut copy = original.clone_shape();
        copy.read_str("3 3 4 3 4 4 3 4").unwrap();

        assert_eq!(original, unit_square());
        assert!(!copy.shape_eq(&original));
        assert_eq!(copy.kind(), original.kind());
    }
}
