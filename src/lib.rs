//! In-place rotation of a sequence using only forward-moving cursors, plus
//! the harness that benchmarks it against the standard library.

pub mod config;
pub mod cursor;
pub mod error;
pub mod harness;
pub mod list;
pub mod reference;
pub mod rotate;

pub use cursor::ForwardCursor;
pub use list::ForwardList;
pub use rotate::{
    rotate_forward, rotate_forward_nontrivial, rotate_forward_step,
    rotate_slice,
};
