// src/gui/mod.rs
pub mod app;
pub mod progress;
pub mod table_model;

mod actions;
mod components;

pub use app::run;
