//! Shared numeric helpers.

pub mod remap;
