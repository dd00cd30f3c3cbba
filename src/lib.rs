// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod specs;

pub mod analysis;
pub mod cli;
pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;
