//! Value objects - immutable types that represent domain concepts

mod page;

pub use page::{PageRequest, DEFAULT_PAGE, DEFAULT_SIZE, MAX_SIZE};
