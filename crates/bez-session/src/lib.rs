//! Bezier studio interactive session.
//!
//! A [`Session`] owns the live control points and the cached curve. The UI
//! layer forwards pointer and button events to it and draws whatever
//! [`Session::frame`] returns.

pub mod config;
pub mod frame;
pub mod session;
pub mod zoom;

pub use config::SessionConfig;
pub use frame::Frame;
pub use session::Session;
pub use zoom::Zoom;
