//! Repository implementations
//!
//! One repository per schema slice. Lifecycle operations that touch several
//! tables (check-in, check-out, group batches, deletes, reset) own their
//! transactions; the unit claim/release helpers in [`lodging`] take a
//! transaction handle so those operations can compose them.

pub mod guests;
pub mod lodging;
pub mod maintenance;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod staff;
