//! Interests - a terminal screen for browsing and filtering personal interests.
//!
//! The crate is split into a pure state core ([`store`]) and the layers that
//! drive it: the screen controller ([`app`]), terminal events ([`events`]),
//! rendering ([`ui`]) and the ambient configuration, logging and error
//! handling.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod store;
pub mod tasks;
pub mod ui;
