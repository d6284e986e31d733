//! Individual value generators for event fields.
//!
//! Every generated field is text: `Timestamp` gets the wall-clock time as
//! RFC 3339, every other field gets a random alphanumeric payload.

pub mod text;
pub mod timestamp;

pub use text::{generate_alphanumeric, ALPHANUMERIC};
pub use timestamp::{format_timestamp, generate_timestamp_now};
