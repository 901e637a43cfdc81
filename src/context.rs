//! Render context module.
//!
//! This module provides the per-render [`RenderContext`] and the per-form
//! [`FormState`] it carries.
//!
//! # Examples
//!
//! ```rust
//! use tessera::context::{ModelTypeInfo, RenderContext};
//!
//! struct Invoice;
//!
//! let mut ctx = RenderContext::new();
//! ctx.set_model_type_info(ModelTypeInfo::of::<Invoice>());
//! assert!(ctx.model_type_info().unwrap().is::<Invoice>());
//! ```

pub use tessera_context::*;
