//! Shared domain types and pure logic for the video analysis service.
//!
//! Nothing in here performs I/O: the object-key contract, media-type
//! rules, transcript shapes, and the text analysis engine are all usable
//! from any crate (and from tests) without a database or network.

pub mod analysis;
pub mod error;
pub mod media;
pub mod object_key;
pub mod transcript;
pub mod types;
