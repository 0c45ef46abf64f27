//! Main module for anyswap library functionality

pub mod buffer;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod navigation;
pub mod parsing;
pub mod swap;
pub mod testing;
