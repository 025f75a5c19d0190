use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{AsPrimitive, Num, NumCast};

/// A numeric type that can serve as a coordinate component.
///
/// This is implemented automatically for every type that satisfies the bounds, which includes all
/// primitive integer and floating point types.
///
/// Arithmetic on coordinates (such as the mean used for the center of a shape) happens in the
/// scalar type itself, so integer scalars use integer division. Areas are always computed in
/// `f64` via [`AsPrimitive`].
pub trait Scalar:
    Num + NumCast + AsPrimitive<f64> + Copy + PartialOrd + FromStr + Display + Debug + 'static
{
}

impl<T> Scalar for T where
    T: Num + NumCast + AsPrimitive<f64> + Copy + PartialOrd + FromStr + Display + Debug + 'static
{
}

/// Widens a scalar to `f64` for area arithmetic.
pub(crate) fn widen<T: Scalar>(value: T) -> f64 {
    value.as_()
}
