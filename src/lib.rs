//! Blur Library
//!
//! Core modules for the Blur text cleanup utility.

pub mod capture;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod hotkeys;
pub mod notify;
pub mod pipeline;
