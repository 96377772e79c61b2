//! Distance model.
//!
//! Named planar locations and the Euclidean metric between them.

mod book;

pub use book::LocationBook;
