#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Fixed-arity polygon shapes behind a common, object-safe [`Shape`] contract.
//!
//! Every shape offers the same operations regardless of its concrete variant:
//!
//! * [`center()`][Shape::center] - the arithmetic mean of the vertices
//! * [`area()`][Shape::area] - the enclosed area via the shoelace formula
//! * [`clone_shape()`][Shape::clone_shape] - a deep copy that keeps the variant
//! * [`shape_eq()`][Shape::shape_eq] - exact, order-sensitive, same-variant equality
//! * [`Display`][std::fmt::Display] and [`read_str()`][Shape::read_str] - a bare `x y x y ...`
//!   text form
//!
//! Because these are available through `dyn Shape<T>`, unrelated variants can share one
//! collection, for example a [`shared_array::SharedArray<dyn Shape<f64>>`][1].
//!
//! The variants shipped here are [`Rhombus`], [`Trapezoid`] and [`Pentagon`]. They are all
//! aliases of the generic [`Polygon`], which implements the contract once for any vertex count.
//! See [`Variant`] for how to declare more.
//!
//! Shapes are generic over the coordinate [`Scalar`] type, which may be any primitive integer or
//! floating point type. Points in the plane are represented by [`Coordinate`], which has its own
//! parenthesized `(x, y)` text form.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use polygon_shapes::{Coordinate, Pentagon, Rhombus, Shape, Trapezoid};
//! use shared_array::SharedArray;
//!
//! let p = Coordinate::new;
//!
//! let mut shapes = SharedArray::<dyn Shape<f64>>::new();
//! shapes.push(Rc::new(Rhombus::new(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1.0), p(-1.0, 1.0))));
//! shapes.push(Rc::new(Trapezoid::new(p(0.0, 0.0), p(4.0, 0.0), p(3.0, 2.0), p(1.0, 2.0))));
//! shapes.push(Rc::new(Pentagon::new(
//!     p(0.0, 0.0),
//!     p(2.0, 0.0),
//!     p(3.0, 2.0),
//!     p(1.0, 3.0),
//!     p(-1.0, 2.0),
//! )));
//!
//! let total_area: f64 = shapes.iter().map(|shape| shape.area()).sum();
//! assert!((total_area - 16.0).abs() < 1e-9);
//!
//! _ = shapes.remove_at(1).unwrap();
//!
//! let kinds = shapes.iter().map(|shape| shape.kind().name()).collect::<Vec<_>>();
//! assert_eq!(kinds, vec!["Rhombus", "Pentagon"]);
//! ```
//!
//! Reading replaces the vertices of an existing shape:
//!
//! ```
//! use polygon_shapes::{Shape, Trapezoid};
//!
//! let mut trapezoid = Trapezoid::<i32>::default();
//! trapezoid.read_str("0 0 4 0 3 2 1 2").unwrap();
//!
//! assert_eq!(trapezoid.area(), 6.0);
//!
//! // Malformed input leaves the shape untouched.
//! trapezoid.read_str("0 0 4 0 3 two 1 2").unwrap_err();
//! assert_eq!(trapezoid.to_string(), "0 0 4 0 3 2 1 2");
//! ```
//!
//! [1]: https://docs.rs/shared_array

mod coordinate;
mod error;
mod parse;
mod polygon;
mod scalar;
mod shape;
mod variants;

pub use coordinate::*;
pub use error::*;
pub use polygon::*;
pub use scalar::Scalar;
pub use shape::*;
pub use variants::*;
