//! Shared types and client-side logic for the ZenFlora site.
//!
//! Everything in this crate is target independent so it can be used by the
//! wasm frontend, the actix backend and native unit tests alike.

pub mod auth;
pub mod catalog;
pub mod collection;
pub mod model;
pub mod requests;
pub mod session;
pub mod storage;
