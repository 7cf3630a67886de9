//! Problem file input.
//!
//! Turns the keyed text format into a [`ProblemInstance`](crate::models::ProblemInstance).
//! Malformed content is reported, never fatal.

mod instance_file;

pub use instance_file::{
    parse_instance, read_instance, ParseWarning, ParsedInstance, DEFAULT_VEHICLE_COUNT,
};
