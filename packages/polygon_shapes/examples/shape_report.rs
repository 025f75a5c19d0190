//! Reports on a mixed collection of shapes held in a `SharedArray<dyn Shape<f64>>`.
//!
//! This example demonstrates:
//! * Storing unrelated shape variants behind one trait object type
//! * Computing center and area without knowing the concrete variant
//! * Order-preserving removal from the middle of the array
//! * Reading a shape from text into a fresh value

use std::rc::Rc;

use polygon_shapes::{Coordinate, Pentagon, Rhombus, Shape, Trapezoid};
use shared_array::SharedArray;

fn p(x: f64, y: f64) -> Coordinate<f64> {
    Coordinate::new(x, y)
}

fn print_details(shapes: &SharedArray<dyn Shape<f64>>) -> f64 {
    let mut total_area = 0.0;

    for (index, shape) in shapes.iter().enumerate() {
        let area = shape.area();
        total_area += area;

        println!("   [{index}] Type: {}", shape.kind());
        println!("       Center: {}", shape.center());
        println!("       Area: {area:.3}");
        println!("       Vertices: {shape}");
        println!();
    }

    total_area
}

fn main() {
    let mut shapes = SharedArray::<dyn Shape<f64>>::new();

    println!("1. Adding shapes to the array...");
    shapes.push(Rc::new(Rhombus::new(
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(1.0, 1.732),
        p(-1.0, 1.732),
    )));
    shapes.push(Rc::new(Trapezoid::new(
        p(0.0, 0.0),
        p(4.0, 0.0),
        p(3.0, 2.0),
        p(1.0, 2.0),
    )));
    shapes.push(Rc::new(Pentagon::new(
        p(1.0, 0.0),
        p(0.309, 0.951),
        p(-0.809, 0.588),
        p(-0.809, -0.588),
        p(0.309, -0.951),
    )));
    println!(
        "   Added {} shapes. Capacity: {}",
        shapes.len(),
        shapes.capacity()
    );
    println!();

    println!("2. Shape details:");
    let total_area = print_details(&shapes);

    println!("3. Total area of all shapes: {total_area:.3}");
    println!();

    println!("4. Removing the trapezoid (index 1)...");
    let removed = shapes
        .remove_at(1)
        .expect("index 1 is within the array")
        .expect("the default policy never ignores removals");
    println!("   Removed a {}. Remaining shapes: {}", removed.kind(), shapes.len());
    println!();

    println!("5. Updated shape list:");
    for (index, shape) in shapes.iter().enumerate() {
        println!(
            "   [{index}] {} Center: {}, Area: {:.3}",
            shape.kind(),
            shape.center(),
            shape.area()
        );
    }
    println!();

    println!("6. Reading the removed trapezoid back from its text form...");
    let text = removed.to_string();
    let restored = text
        .parse::<Trapezoid<f64>>()
        .expect("text written by a trapezoid is a valid trapezoid");
    println!("   Text: {text}");
    println!("   Equal to the removed shape: {}", restored.shape_eq(&*removed));
    println!();

    println!("Example completed successfully!");
}
