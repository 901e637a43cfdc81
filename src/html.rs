//! HTML fragments module.
//!
//! This module provides the pre-encoded fragments written to a render
//! context's output.

pub use tessera_html::*;
