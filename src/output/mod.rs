//! Report delivery with separate planning and execution.
//!
//! Planning is a pure value (`OutputPlan`); execution (`deliver`) is the
//! only place that touches stdout or the filesystem.

mod types;
mod writer;

pub use types::{DeliveryTarget, FailedDelivery, OutputPlan, OutputReport};
pub use writer::deliver;
