use std::iter::FusedIterator;
use std::ops::Index;
use std::rc::Rc;
use std::{fmt, iter, mem, slice};

use tracing::{debug, trace};

use crate::{Error, OutOfRangePolicy, Result, SharedArrayBuilder};

/// A growable, index-addressable array of shared [`Rc`] handles.
///
/// The array exclusively owns its slot storage while each slot holds one share of ownership of
/// an item. Removing an item, evicting it via [`resize()`][1] or dropping the array only releases
/// the array's own share; an item whose handle is still held elsewhere stays alive.
///
/// Items may be unsized, which makes the array suitable for heterogeneous collections of trait
/// objects (e.g. `SharedArray<dyn Shape>`) where every access dispatches dynamically.
///
/// # Length and capacity
///
/// The array tracks a logical length (the number of live items) and a physical capacity (the
/// number of allocated slots). `len() <= capacity()` always holds. When [`push()`][2] finds no
/// vacant slot, the capacity grows to `max(1, capacity * 2)`. Removal never reduces capacity;
/// use [`resize()`][1] or [`shrink_to_fit()`][3] for that.
///
/// # Thread safety
///
/// The array is single-threaded: it holds [`Rc`] handles and is neither [`Send`] nor [`Sync`].
///
/// [1]: Self::resize
/// [2]: Self::push
/// [3]: Self::shrink_to_fit
pub struct SharedArray<E: ?Sized> {
    /// Slots `0..len` are always occupied, slots `len..` are always vacant.
    /// The boxed slice length is the capacity of the array.
    slots: Box<[Option<Rc<E>>]>,

    len: usize,

    out_of_range: OutOfRangePolicy,
}

impl<E: ?Sized> SharedArray<E> {
    #[must_use]
    pub(crate) fn new_inner(initial_capacity: usize, out_of_range: OutOfRangePolicy) -> Self {
        Self {
            slots: vacant_slots(initial_capacity),
            len: 0,
            out_of_range,
        }
    }

    /// Creates a new empty [`SharedArray`] with zero capacity and the default configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shared_array::SharedArray;
    ///
    /// let array = SharedArray::<u64>::new();
    ///
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new empty [`SharedArray`] with `capacity` vacant slots allocated up front.
    ///
    /// A capacity of zero is valid and allocates nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shared_array::SharedArray;
    ///
    /// let array = SharedArray::<u64>::with_capacity(8);
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 8);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::builder().initial_capacity(capacity).build()
    }

    /// Starts building a new [`SharedArray`].
    ///
    /// Use this when you want to customize the array configuration beyond the defaults.
    pub fn builder() -> SharedArrayBuilder<E> {
        SharedArrayBuilder::new()
    }

    /// The number of live items in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of allocated slots, including those occupied by live items.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the array holds no live items.
    ///
    /// An empty array may still be holding allocated capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The policy applied by [`remove_at()`][Self::remove_at] to out-of-range indexes.
    #[must_use]
    pub fn out_of_range_policy(&self) -> OutOfRangePolicy {
        self.out_of_range
    }

    /// Appends a handle to the end of the array, growing the capacity first if every slot is
    /// occupied.
    ///
    /// The array stores the handle itself, not a copy of the item, so any other clone of the
    /// same handle keeps referring to the same item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use shared_array::SharedArray;
    ///
    /// let mut array = SharedArray::new();
    ///
    /// array.push(Rc::new(10));
    /// assert_eq!(array.capacity(), 1);
    ///
    /// array.push(Rc::new(20));
    /// assert_eq!(array.capacity(), 2);
    ///
    /// array.push(Rc::new(30));
    /// assert_eq!(array.capacity(), 4);
    ///
    /// assert_eq!(array[2], 30);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if doubling the capacity would overflow `usize`.
    pub fn push(&mut self, handle: Rc<E>) {
        if self.len == self.capacity() {
            let new_capacity = grown_capacity(self.capacity());

            trace!(
                old_capacity = self.capacity(),
                new_capacity, "growing shared array"
            );

            self.reallocate(new_capacity);
        }

        let slot = self
            .slots
            .get_mut(self.len)
            .expect("growth guarantees a vacant slot at index len");
        *slot = Some(handle);

        self.len = self
            .len
            .checked_add(1)
            .expect("length cannot exceed capacity, which fits in usize");
    }

    /// Removes the item at `index`, shifting every later item one slot towards the front.
    ///
    /// The relative order of all remaining items is preserved. The capacity is unchanged.
    /// On success, returns the array's handle to the removed item; dropping it releases the
    /// array's share of ownership.
    ///
    /// If `index` is outside `0..len()`, the array is left unchanged and the outcome depends on
    /// the [`OutOfRangePolicy`] the array was built with: [`OutOfRangePolicy::Reject`] returns an
    /// error, [`OutOfRangePolicy::Ignore`] returns `Ok(None)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use shared_array::SharedArray;
    ///
    /// let mut array: SharedArray<char> = ['a', 'b', 'c', 'd'].into_iter().map(Rc::new).collect();
    ///
    /// let removed = array.remove_at(1).unwrap();
    ///
    /// assert_eq!(removed.as_deref(), Some(&'b'));
    /// assert_eq!(array.iter().copied().collect::<String>(), "acd");
    ///
    /// assert!(array.remove_at(3).is_err());
    /// assert_eq!(array.len(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is outside `0..len()` and the array uses
    /// [`OutOfRangePolicy::Reject`].
    pub fn remove_at(&mut self, index: usize) -> Result<Option<Rc<E>>> {
        if index >= self.len {
            return match self.out_of_range {
                OutOfRangePolicy::Reject => Err(Error::IndexOutOfRange {
                    index,
                    len: self.len,
                }),
                OutOfRangePolicy::Ignore => {
                    debug!(index, len = self.len, "ignoring out of range removal");
                    Ok(None)
                }
            };
        }

        let tail = self
            .slots
            .get_mut(index..self.len)
            .expect("index < len <= capacity, so the range is within the slots");

        let removed = tail
            .first_mut()
            .and_then(Option::take)
            .expect("slots below len are always occupied");

        // The vacated slot travels to the end of the live range, everything after it moves
        // one step towards the front.
        tail.rotate_left(1);

        self.len = self
            .len
            .checked_sub(1)
            .expect("we just removed an item, so len was at least 1");

        Ok(Some(removed))
    }

    /// Sets the capacity to exactly `new_capacity`, moving the existing handles into new storage.
    ///
    /// This is a destructive operation when shrinking: if `new_capacity` is less than `len()`, the
    /// items at the tail are released and the length is truncated to `new_capacity`.
    /// Resizing to the current capacity does nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use shared_array::SharedArray;
    ///
    /// let mut array: SharedArray<u8> = (1..=5).map(Rc::new).collect();
    ///
    /// array.resize(10);
    /// assert_eq!(array.capacity(), 10);
    /// assert_eq!(array.len(), 5);
    ///
    /// array.resize(2);
    /// assert_eq!(array.capacity(), 2);
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        self.reallocate(new_capacity);
    }

    /// Reduces the capacity to the current length, releasing all vacant slots.
    pub fn shrink_to_fit(&mut self) {
        self.reallocate(self.len);
    }

    /// Releases every handle held by the array. The capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut().take(self.len) {
            *slot = None;
        }

        self.len = 0;
    }

    /// Returns a shared reference to the item at `index`, or `None` if `index` is outside
    /// `0..len()`.
    ///
    /// The reference points at the shared item itself, which may be aliased by handles held
    /// outside the array.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.handle(index).map(|handle| &**handle)
    }

    /// Returns an exclusive reference to the item at `index`, or `None` if `index` is outside
    /// `0..len()` or the item is aliased by another handle.
    ///
    /// For `Clone` items, [`make_unique()`][Self::make_unique] copies an aliased item instead of
    /// giving up. Unsized items such as trait objects cannot be copied that way; to change one
    /// that is aliased, copy it through whatever cloning method its trait offers, modify the copy
    /// and [`push()`][Self::push] it as a new handle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use shared_array::SharedArray;
    ///
    /// let mut array = SharedArray::new();
    /// array.push(Rc::new(1));
    ///
    /// *array.get_mut(0).unwrap() += 1;
    /// assert_eq!(array[0], 2);
    ///
    /// // Once the item is shared, the array can no longer hand out exclusive access.
    /// let alias = Rc::clone(array.handle(0).unwrap());
    /// assert!(array.get_mut(0).is_none());
    /// # drop(alias);
    /// ```
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        if index >= self.len {
            return None;
        }

        self.slots
            .get_mut(index)
            .and_then(Option::as_mut)
            .and_then(Rc::get_mut)
    }

    /// Returns the array's handle to the item at `index`, or `None` if `index` is outside
    /// `0..len()`.
    ///
    /// Clone the handle to obtain a share of ownership that outlives the item's slot.
    #[must_use]
    pub fn handle(&self, index: usize) -> Option<&Rc<E>> {
        if index >= self.len {
            return None;
        }

        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Iterates over the live items in index order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.live_slots().iter(),
        }
    }

    /// Iterates over the array's handles to the live items in index order.
    pub fn handles(&self) -> impl Iterator<Item = &Rc<E>> {
        self.live_slots().iter().flatten()
    }

    fn live_slots(&self) -> &[Option<Rc<E>>] {
        self.slots
            .get(..self.len)
            .expect("len never exceeds capacity")
    }

    #[cfg_attr(test, mutants::skip)] // The early return is an optimization with identical outcome.
    fn reallocate(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity() {
            return;
        }

        let kept = self.len.min(new_capacity);

        if kept < self.len {
            debug!(
                len = self.len,
                new_capacity,
                released = self.len.saturating_sub(kept),
                "truncating shared array, releasing tail handles"
            );
        }

        let mut slots = mem::take(&mut self.slots).into_vec();
        slots.truncate(kept);
        slots.resize_with(new_capacity, || None);

        self.slots = slots.into_boxed_slice();
        self.len = kept;
    }
}

impl<E: Clone> SharedArray<E> {
    /// Returns an exclusive reference to the item at `index`, first replacing the array's handle
    /// with a handle to a private copy of the item if the item is aliased by another handle.
    ///
    /// Returns `None` if `index` is outside `0..len()`.
    ///
    /// Only available for sized `Clone` items. See [`get_mut()`][Self::get_mut] for arrays of
    /// trait objects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use shared_array::SharedArray;
    ///
    /// let original = Rc::new(String::from("shared"));
    ///
    /// let mut array = SharedArray::new();
    /// array.push(Rc::clone(&original));
    ///
    /// array.make_unique(0).unwrap().push_str(" and changed");
    ///
    /// assert_eq!(array[0], "shared and changed");
    /// assert_eq!(*original, "shared");
    /// ```
    #[must_use]
    pub fn make_unique(&mut self, index: usize) -> Option<&mut E> {
        if index >= self.len {
            return None;
        }

        self.slots
            .get_mut(index)
            .and_then(Option::as_mut)
            .map(Rc::make_mut)
    }
}

fn vacant_slots<E: ?Sized>(capacity: usize) -> Box<[Option<Rc<E>>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

fn grown_capacity(capacity: usize) -> usize {
    capacity
        .checked_mul(2)
        .expect("capacity overflow: the array cannot grow beyond usize::MAX slots")
        .max(1)
}

impl<E: ?Sized> Default for SharedArray<E> {
    /// Creates a new empty [`SharedArray`] with the default configuration.
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized + fmt::Debug> fmt::Debug for SharedArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("out_of_range", &self.out_of_range)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<E: ?Sized> Index<usize> for SharedArray<E> {
    type Output = E;

    /// # Panics
    ///
    /// Panics if `index` is outside `0..len()`.
    fn index(&self, index: usize) -> &E {
        self.get(index).unwrap_or_else(|| {
            panic!(
                "index {index} is out of range for shared array of length {}",
                self.len
            )
        })
    }
}

impl<E: ?Sized> FromIterator<Rc<E>> for SharedArray<E> {
    fn from_iter<I: IntoIterator<Item = Rc<E>>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<E: ?Sized> Extend<Rc<E>> for SharedArray<E> {
    fn extend<I: IntoIterator<Item = Rc<E>>>(&mut self, iter: I) {
        for handle in iter {
            self.push(handle);
        }
    }
}

impl<'a, E: ?Sized> IntoIterator for &'a SharedArray<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live items of a [`SharedArray`], created by [`SharedArray::iter()`].
pub struct Iter<'a, E: ?Sized> {
    inner: slice::Iter<'a, Option<Rc<E>>>,
}

impl<'a, E: ?Sized> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| {
            slot.as_deref()
                .expect("slots below len are always occupied")
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: ?Sized> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| {
            slot.as_deref()
                .expect("slots below len are always occupied")
        })
    }
}

impl<E: ?Sized> ExactSizeIterator for Iter<'_, E> {}

impl<E: ?Sized> FusedIterator for Iter<'_, E> {}

impl<E: ?Sized> fmt::Debug for Iter<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
