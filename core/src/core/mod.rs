pub mod sequence;
pub mod stage;
pub mod work_item;

// Re-export key types for easier access from other modules (and lib.rs)
pub use sequence::Sequence;
pub use stage::{Mapper, Predicate, Stage};
pub use work_item::WorkItem;
