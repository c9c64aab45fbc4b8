#![doc = include_str!("../README.md")]
pub mod cli;
pub mod loader;
pub mod rating;
pub mod report;
