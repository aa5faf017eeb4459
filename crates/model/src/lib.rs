pub use serde_with;

pub mod bus;
pub mod location;
pub mod participant;
pub mod schedule;
pub mod tour;
pub mod user;

/// Canned example values, mostly useful in tests and demos.
pub trait ExampleData {
    fn example_data() -> Self;
}
