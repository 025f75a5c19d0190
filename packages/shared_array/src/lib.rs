#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A growable array of shared [`Rc`][std::rc::Rc] handles with explicit capacity control.
//!
//! This crate provides [`SharedArray`], a sequence container that stores shared-ownership handles
//! instead of values. The array owns its slot storage but only holds one share of ownership of
//! each item, so an item stays alive for as long as any other holder keeps a clone of its handle,
//! even after the array has removed it, evicted it through [`resize()`][SharedArray::resize] or
//! been dropped itself.
//!
//! # Key Features
//!
//! - **Unsized items**: store trait objects such as `SharedArray<dyn Display>` directly
//! - **Predictable growth**: capacity doubles (`0 → 1 → 2 → 4 → …`) when an append finds no
//!   room
//! - **Explicit capacity control**: [`resize()`][SharedArray::resize] sets the exact slot count,
//!   truncating the tail when shrinking below the current length
//! - **Order-preserving removal**: [`remove_at()`][SharedArray::remove_at] compacts the array
//!   instead of swapping in the last item
//! - **Checked access**: indexing outside `0..len()` panics instead of reading vacant slots
//! - **Configurable out-of-range removal**: reject with an error or ignore, see
//!   [`OutOfRangePolicy`]
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//!
//! use shared_array::SharedArray;
//!
//! let mut names = SharedArray::<str>::new();
//! names.push(Rc::from("alpha"));
//! names.push(Rc::from("beta"));
//! names.push(Rc::from("gamma"));
//!
//! assert_eq!(names.len(), 3);
//! assert_eq!(names.capacity(), 4);
//! assert_eq!(&names[1], "beta");
//!
//! // Removal keeps the relative order of the remaining items.
//! let removed = names.remove_at(1).unwrap();
//! assert_eq!(removed.as_deref(), Some("beta"));
//! assert_eq!(names.iter().collect::<Vec<_>>(), vec!["alpha", "gamma"]);
//! ```
//!
//! Handles that are held elsewhere keep their items alive after removal:
//!
//! ```
//! use std::rc::Rc;
//!
//! use shared_array::SharedArray;
//!
//! let mut array = SharedArray::new();
//! let kept = Rc::new(String::from("still here"));
//! array.push(Rc::clone(&kept));
//!
//! array.clear();
//!
//! assert!(array.is_empty());
//! assert_eq!(*kept, "still here");
//! assert_eq!(Rc::strong_count(&kept), 1);
//! ```

mod array;
mod builder;
mod error;
mod out_of_range_policy;

pub use array::*;
pub use builder::*;
pub use error::*;
pub use out_of_range_policy::*;
