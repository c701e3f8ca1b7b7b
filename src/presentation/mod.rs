//! Server-rendered HTML surfaces.

pub mod views;
