/// Determines what [`SharedArray::remove_at()`][crate::SharedArray::remove_at] does when asked to
/// remove an index outside the live range of the array.
///
/// In both cases the array itself is left unchanged. By default, the removal is rejected.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
///
/// use shared_array::{OutOfRangePolicy, SharedArray};
///
/// let mut array = SharedArray::<u32>::builder()
///     .out_of_range(OutOfRangePolicy::Ignore)
///     .build();
/// array.push(Rc::new(1));
///
/// assert!(array.remove_at(5).unwrap().is_none());
/// assert_eq!(array.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum OutOfRangePolicy {
    /// The removal fails with [`Error::IndexOutOfRange`][crate::Error::IndexOutOfRange].
    /// This is the default.
    #[default]
    Reject,

    /// The removal is silently skipped and reports that nothing was removed.
    ///
    /// This matches the behavior of classic manually-managed arrays but can hide caller bugs,
    /// so prefer it only when out-of-range indexes are an expected part of the calling pattern.
    Ignore,
}
