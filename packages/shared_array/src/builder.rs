use std::marker::PhantomData;

use crate::{OutOfRangePolicy, SharedArray};

/// Builder for creating an instance of [`SharedArray`].
///
/// You only need to use this builder if you want to customize the array configuration.
/// The default configuration used by [`SharedArray::new()`][1] is sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use shared_array::{OutOfRangePolicy, SharedArray};
///
/// let array = SharedArray::<u32>::builder()
///     .initial_capacity(16)
///     .out_of_range(OutOfRangePolicy::Reject)
///     .build();
///
/// assert_eq!(array.capacity(), 16);
/// assert!(array.is_empty());
/// ```
///
/// [1]: SharedArray::new
#[must_use]
pub struct SharedArrayBuilder<E: ?Sized> {
    initial_capacity: usize,
    out_of_range: OutOfRangePolicy,

    _item: PhantomData<E>,
}

impl<E: ?Sized> std::fmt::Debug for SharedArrayBuilder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedArrayBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<E>()),
            )
            .field("initial_capacity", &self.initial_capacity)
            .field("out_of_range", &self.out_of_range)
            .finish()
    }
}

impl<E: ?Sized> SharedArrayBuilder<E> {
    pub(crate) fn new() -> Self {
        Self {
            initial_capacity: 0,
            out_of_range: OutOfRangePolicy::default(),
            _item: PhantomData,
        }
    }

    /// Sets the number of slots allocated up front. Defaults to zero, in which case the first
    /// append performs the first allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_array::SharedArray;
    ///
    /// let array = SharedArray::<String>::builder().initial_capacity(3).build();
    ///
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the [out-of-range policy][OutOfRangePolicy] for the array. This governs how
    /// [`SharedArray::remove_at()`] treats indexes outside the live range.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_array::{OutOfRangePolicy, SharedArray};
    ///
    /// let array = SharedArray::<u32>::builder()
    ///     .out_of_range(OutOfRangePolicy::Ignore)
    ///     .build();
    ///
    /// assert_eq!(array.out_of_range_policy(), OutOfRangePolicy::Ignore);
    /// ```
    pub fn out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    /// Builds the shared array with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_array::SharedArray;
    ///
    /// let array = SharedArray::<u32>::builder().build();
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[must_use]
    pub fn build(self) -> SharedArray<E> {
        SharedArray::new_inner(self.initial_capacity, self.out_of_range)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_new() {
        let built = SharedArray::<u8>::builder().build();
        let plain = SharedArray::<u8>::new();

        assert_eq!(built.capacity(), plain.capacity());
        assert_eq!(built.out_of_range_policy(), plain.out_of_range_policy());
        assert_eq!(built.out_of_range_policy(), OutOfRangePolicy::Reject);
    }

    #[test]
    fn debug_names_item_type() {
        let builder = SharedArray::<str>::builder().initial_capacity(2);

        let text = format!("{builder:?}");

        assert!(text.contains("item_type: str"));
        assert!(text.contains("initial_capacity: 2"));
    }
}
