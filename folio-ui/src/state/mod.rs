//! Client State
//!
//! The only client state is the current location; everything else is
//! compiled-in data.

pub mod navigation;
