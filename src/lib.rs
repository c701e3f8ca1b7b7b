//! Paginated post listing service: a seeded Postgres store behind a JSON
//! listing endpoint and a small browser viewer.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
