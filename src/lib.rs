//! Monster Survivors game portal.
//!
//! A single-page catalog of browser games: tag listings, search, and an
//! immersive detail view with a draggable content window. Navigation logic
//! lives in [`core`] and runs natively under test; [`app`] binds it to the
//! host document.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
