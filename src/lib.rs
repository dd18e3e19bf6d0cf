pub mod config;
pub mod domain;
mod listener;

pub use listener::*;
