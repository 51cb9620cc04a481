//! Event Handling Module
//!
//! Turns terminal events into messages and runs the side effects that
//! state transitions request.
//!
//! - **`keys`**: keyboard input per page and overlay
//! - **`mouse`**: clicks and wheel
//! - **`effects`**: clipboard, downloads and the redirect timer

pub mod effects;
pub mod keys;
pub mod mouse;
