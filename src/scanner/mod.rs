pub mod sweep;

pub use sweep::{Matches, Scanner, Step};
