//! FFI crate for the platform widget shells.

pub mod api;
