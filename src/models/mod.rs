pub mod range;
pub mod summary;
pub mod tags;

pub use range::{NewEntry, Range};
