//! Output formats for parse trees and token streams
//!
//! - treeviz: one line per node, nesting drawn with box connectors

pub mod treeviz;

pub use treeviz::render;
