//! `careops` library crate.
//!
//! The binary (`careops`) is a thin wrapper around this library so that:
//!
//! - the analytics core is testable without spawning processes
//! - modules are reusable (e.g., future dashboard backend, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod labs;
pub mod parse;
pub mod report;
pub mod risk;
pub mod roi;
