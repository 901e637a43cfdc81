//! Form helpers module.
//!
//! This module provides helpers that open, track and close `<form>` elements
//! on a render context.
//!
//! # Examples
//!
//! ```rust
//! use tessera::context::RenderContext;
//! use tessera::forms::{FormTag, begin_form, end_form};
//!
//! let mut ctx = RenderContext::new();
//! begin_form(&mut ctx, &FormTag::new()).unwrap();
//! end_form(&mut ctx).unwrap();
//! assert_eq!(ctx.output(), Some("<form></form>"));
//! ```

pub use tessera_forms::*;
