//! Pals - a terminal client for the Pals friends and messaging app
//!
//! This library exposes modules for use in integration tests.

pub mod api;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod host;
pub mod navigation;
pub mod startup;
pub mod terminal;
pub mod ui;
pub mod views;
