use std::any::type_name;

use crate::{Coordinate, Error, Result, Scalar};

/// Parses a single numeric token as a scalar of type `T`.
#[allow(
    clippy::map_err_ignore,
    reason = "FromStr::Err carries no bounds we could use to describe it"
)]
pub(crate) fn parse_scalar<T: Scalar>(token: &str) -> Result<T> {
    token.parse::<T>().map_err(|_| {
        Error::invalid_syntax(token, format!("not a valid {} value", type_name::<T>()))
    })
}

/// Parses exactly `N` vertices from the next `2 * N` tokens, in `x y x y ...` order.
///
/// Nothing is returned until every token has parsed, so callers can use the result to replace
/// existing vertices without risking a partial update.
pub(crate) fn parse_vertices<'a, T: Scalar, const N: usize>(
    tokens: &mut dyn Iterator<Item = &'a str>,
) -> Result<[Coordinate<T>; N]> {
    let expected = token_count(N);

    let mut vertices = [Coordinate::new(T::zero(), T::zero()); N];
    let mut consumed: usize = 0;

    for vertex in &mut vertices {
        let mut next = || -> Result<T> {
            let token = tokens.next().ok_or_else(|| Error::TokenCount {
                expected,
                actual: consumed,
            })?;

            consumed = consumed
                .checked_add(1)
                .expect("we never consume more tokens than a vertex array can describe");

            parse_scalar(token)
        };

        let x = next()?;
        let y = next()?;

        *vertex = Coordinate::new(x, y);
    }

    Ok(vertices)
}

/// The number of numeric tokens that describe `vertex_count` vertices.
pub(crate) fn token_count(vertex_count: usize) -> usize {
    vertex_count
        .checked_mul(2)
        .expect("vertex counts are tiny compile-time constants")
}
