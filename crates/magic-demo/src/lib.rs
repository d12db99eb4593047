//! Magic Demo - runnable walkthroughs for the magic tour
//!
//! This crate replays three short scripts on top of `magic-core`: a tour of
//! parameter shapes, a tour of the `Computer` type's operator behaviour, and
//! a save/drop/reload round trip through the persistence codec.

pub mod demos;

// Re-export commonly used types for convenience
pub use demos::{Demo, DemoRunner};
