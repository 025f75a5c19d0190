use thiserror::Error;

/// Errors that can occur when operating on a [`SharedArray`][crate::SharedArray].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller referenced an index outside the live range `0..len` of the array.
    #[error("index {index} is out of range for shared array of length {len}")]
    IndexOutOfRange {
        /// The index the caller provided.
        index: usize,

        /// The length of the array at the time of the call.
        len: usize,
    },
}

/// A specialized `Result` type for shared array operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn index_out_of_range_names_index_and_len() {
        let error = Error::IndexOutOfRange { index: 7, len: 3 };

        assert_eq!(
            error.to_string(),
            "index 7 is out of range for shared array of length 3"
        );

        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }
}
