//! Basic usage of `SharedArray`: growth, shared handles and order-preserving removal.

use std::rc::Rc;

use shared_array::SharedArray;

fn main() {
    println!("=== SharedArray Basic Example ===");

    let mut array = SharedArray::<str>::new();

    for word in ["red", "green", "blue", "cyan", "magenta"] {
        array.push(Rc::from(word));
        println!(
            "Pushed {word:<8} len = {}, capacity = {}",
            array.len(),
            array.capacity()
        );
    }

    // Keep our own share of one item before removing it from the array.
    let blue = Rc::clone(array.handle(2).expect("we just pushed five items"));

    let removed = array
        .remove_at(2)
        .expect("index 2 is within the array")
        .expect("the default policy never ignores removals");
    drop(removed);

    println!("After removing index 2: {:?}", array.iter().collect::<Vec<_>>());
    println!("Our own handle still reads: {blue}");

    array.resize(2);
    println!(
        "After resize(2): {:?}, capacity = {}",
        array.iter().collect::<Vec<_>>(),
        array.capacity()
    );

    println!("Example completed successfully!");
}
