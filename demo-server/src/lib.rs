//! Demo web application for the identity verification SDK

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod media_storage;
pub mod routes;
pub mod server;
pub mod types;
