//! # Tessera Forms
//!
//! Form rendering helpers for templates rendered with a
//! [`RenderContext`](tessera_context::RenderContext).
//!
//! A [`FormTag`] decides at open time whether the form reads the shared
//! default state ([`FormMode::Plain`]) or owns a fresh one
//! ([`FormMode::Extended`]). Only extended forms track rendered fields,
//! receive an antiforgery token, and flush deferred content before `</form>`.
//!
//! ## Example
//!
//! ```
//! use tessera_context::RenderContext;
//! use tessera_forms::{FormMode, FormTag, antiforgery_token, begin_form, end_form};
//! use tessera_html::HtmlString;
//!
//! let mut ctx = RenderContext::new();
//! let tag = FormTag::post("/login").with_mode(FormMode::Extended);
//!
//! begin_form(&mut ctx, &tag).unwrap();
//! ctx.defer_content(HtmlString::new("<input type=\"hidden\" name=\"next\" value=\"/\" />"))
//!     .unwrap();
//! antiforgery_token(&mut ctx, &HtmlString::new("<input type=\"hidden\" name=\"csrf\" />"))
//!     .unwrap();
//! end_form(&mut ctx).unwrap();
//!
//! assert_eq!(
//!     ctx.output(),
//!     Some(concat!(
//!         "<form action=\"/login\" method=\"post\">",
//!         "<input type=\"hidden\" name=\"csrf\" />",
//!         "<input type=\"hidden\" name=\"next\" value=\"/\" />",
//!         "</form>",
//!     ))
//! );
//! ```

pub mod helpers;
pub mod tag;

pub use helpers::{antiforgery_token, begin_form, end_form, render_field_once};
pub use tag::{FormMode, FormTag};
