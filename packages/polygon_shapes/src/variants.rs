use crate::{Coordinate, Polygon, Scalar, Variant};

/// Variant marker for [`Rhombus`].
#[derive(Debug)]
pub enum RhombusVariant {}

impl Variant for RhombusVariant {
    const NAME: &'static str = "Rhombus";
}

/// Variant marker for [`Trapezoid`].
#[derive(Debug)]
pub enum TrapezoidVariant {}

impl Variant for TrapezoidVariant {
    const NAME: &'static str = "Trapezoid";
}

/// Variant marker for [`Pentagon`].
#[derive(Debug)]
pub enum PentagonVariant {}

impl Variant for PentagonVariant {
    const NAME: &'static str = "Pentagon";
}

/// A four-vertex shape intended for rhombi. The vertices are not validated.
pub type Rhombus<T> = Polygon<T, RhombusVariant, 4>;

/// A four-vertex shape intended for trapezoids. The vertices are not validated.
pub type Trapezoid<T> = Polygon<T, TrapezoidVariant, 4>;

/// A five-vertex shape intended for (usually regular) pentagons. The vertices are not validated.
pub type Pentagon<T> = Polygon<T, PentagonVariant, 5>;

impl<T: Scalar> Rhombus<T> {
    /// Creates a rhombus from its four vertices, in ring order.
    #[must_use]
    pub fn new(a: Coordinate<T>, b: Coordinate<T>, c: Coordinate<T>, d: Coordinate<T>) -> Self {
        Self::from_vertices([a, b, c, d])
    }
}

impl<T: Scalar> Trapezoid<T> {
    /// Creates a trapezoid from its four vertices, in ring order.
    #[must_use]
    pub fn new(a: Coordinate<T>, b: Coordinate<T>, c: Coordinate<T>, d: Coordinate<T>) -> Self {
        Self::from_vertices([a, b, c, d])
    }
}

impl<T: Scalar> Pentagon<T> {
    /// Creates a pentagon from its five vertices, in ring order.
    #[must_use]
    pub fn new(
        a: Coordinate<T>,
        b: Coordinate<T>,
        c: Coordinate<T>,
        d: Coordinate<T>,
        e: Coordinate<T>,
    ) -> Self {
        Self::from_vertices([a, b, c, d, e])
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::f64::consts::PI;

    use testing::{assert_near, assert_near_within, unit_circle_points};

    use super::*;
    use crate::Shape;

    fn point<T: Scalar>(x: T, y: T) -> Coordinate<T> {
        Coordinate::new(x, y)
    }

    #[test]
    fn rhombus_center_and_area() {
        let rhombus = Rhombus::new(
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(1.0, 1.0),
            point(-1.0, 1.0),
        );

        let center = rhombus.center();
        assert_near(center.x(), 0.5);
        assert_near(center.y(), 0.5);

        assert_near(rhombus.area(), 2.0);
    }

    #[test]
    fn rhombus_clone_and_equality() {
        let rhombus = Rhombus::new(point(0, 0), point(1, 0), point(1, 1), point(0, 1));

        let copy = rhombus.clone_shape();

        assert!(rhombus.shape_eq(&*copy));
        assert!(copy.shape_eq(&rhombus));
    }

    #[test]
    fn rhombus_text_round_trip() {
        let rhombus = Rhombus::new(
            point(1.0, 2.0),
            point(3.0, 4.0),
            point(5.0, 6.0),
            point(7.0, 8.0),
        );

        let text = rhombus.to_string();
        assert_eq!(text, "1 2 3 4 5 6 7 8");

        let mut target = Rhombus::new(
            point(0.0, 0.0),
            point(0.0, 0.0),
            point(0.0, 0.0),
            point(0.0, 0.0),
        );
        target.read_str(&text).unwrap();

        assert_eq!(target, rhombus);
    }

    #[test]
    fn trapezoid_area() {
        let trapezoid = Trapezoid::new(point(0, 0), point(4, 0), point(3, 2), point(1, 2));

        assert_near(trapezoid.area(), 6.0);
    }

    #[test]
    fn trapezoid_integer_center_truncates() {
        let trapezoid = Trapezoid::new(point(0, 0), point(4, 0), point(3, 2), point(1, 2));

        // Exact mean is (2, 1).
        assert_eq!(trapezoid.center(), point(2, 1));

        let skewed = Trapezoid::new(point(0, 0), point(5, 0), point(3, 3), point(1, 3));

        // Exact mean is (2.25, 1.5).
        assert_eq!(skewed.center(), point(2, 1));
    }

    #[test]
    fn center_of_narrow_integer_rhombus() {
        let rhombus = Rhombus::<u8>::new(
            point(100, 100),
            point(200, 100),
            point(200, 200),
            point(100, 200),
        );

        assert_eq!(rhombus.center(), point(150, 150));
        assert_near(rhombus.area(), 10_000.0);
    }

    #[test]
    fn center_of_large_integer_pentagon() {
        let pentagon = Pentagon::<i32>::new(
            point(1_000_000_000, -1_000_000_000),
            point(1_000_000_000, -1_000_000_000),
            point(1_000_000_000, -1_000_000_000),
            point(1_000_000_000, -1_000_000_000),
            point(1_000_000_000, -1_000_000_000),
        );

        assert_eq!(pentagon.center(), point(1_000_000_000, -1_000_000_000));
    }

    #[test]
    fn regular_pentagon_center_is_origin() {
        let [a, b, c, d, e] = unit_circle_points::<5>().map(Coordinate::from);

        let pentagon = Pentagon::new(a, b, c, d, e);

        let center = pentagon.center();
        assert_near_within(center.x(), 0.0, 1e-10);
        assert_near_within(center.y(), 0.0, 1e-10);
    }

    #[test]
    fn regular_pentagon_area() {
        let pentagon = Pentagon::from_vertices(unit_circle_points::<5>().map(Coordinate::from));

        // Area of a regular n-gon with circumradius 1 is n/2 * sin(2π/n).
        assert_near(pentagon.area(), 2.5 * (2.0 * PI / 5.0).sin());
    }

    #[test]
    fn quadrilateral_variants_never_compare_equal() {
        let rhombus = Rhombus::new(point(0, 0), point(1, 0), point(1, 1), point(0, 1));
        let trapezoid = Trapezoid::new(point(0, 0), point(1, 0), point(1, 1), point(0, 1));

        assert_eq!(rhombus.vertices(), trapezoid.vertices());
        assert!(!rhombus.shape_eq(&trapezoid));
        assert!(!trapezoid.shape_eq(&rhombus));
    }

    #[test]
    fn rotated_vertex_order_is_a_different_value() {
        let pentagon = Pentagon::new(
            point(0, 0),
            point(2, 0),
            point(3, 2),
            point(1, 3),
            point(-1, 2),
        );
        let rotated = Pentagon::new(
            point(2, 0),
            point(3, 2),
            point(1, 3),
            point(-1, 2),
            point(0, 0),
        );

        assert_near(pentagon.area(), rotated.area());
        assert_ne!(pentagon, rotated);
    }

    #[test]
    fn kinds_are_named() {
        assert_eq!(Rhombus::<f32>::default().kind().name(), "Rhombus");
        assert_eq!(Trapezoid::<f32>::default().kind().name(), "Trapezoid");
        assert_eq!(Pentagon::<f32>::default().kind().name(), "Pentagon");
    }
}
