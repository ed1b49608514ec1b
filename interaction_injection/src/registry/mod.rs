//! Registry module - what to inject into which kind of object.
//!
//! The registry is:
//! - **Ordered**: kinds keep their first-registration order, and interactions
//!   within a kind keep theirs (pie menu order)
//! - **Unique per behavior**: a kind never lists two interactions of the same
//!   behavior type
//! - **Process-wide**: it outlives world loads and quits

mod entry;
mod table;

pub use entry::*;
pub use table::*;
