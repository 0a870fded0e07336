// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod event;
pub mod file;
pub mod progress;
pub mod runner;
pub mod sink;
pub mod source;
