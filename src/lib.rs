//! # Tessera
//!
//! Per-render execution context for server-side HTML templating.
//!
//! A template engine creates one [`RenderContext`] per page render. Helpers
//! running inside the template write to its output sink, share page data
//! through its [`ViewBag`], and track the `<form>` being rendered through a
//! [`FormState`].
//!
//! ## Feature Flags
//!
//! - `context` - [`RenderContext`], [`FormState`] and their supporting types
//! - `forms` - form helpers that open, track and close forms on a context
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut ctx = RenderContext::new();
//! ctx.set_page_key("/Views/Account/Login.html");
//! ctx.view_bag().set("title", "Sign in").unwrap();
//!
//! let tag = FormTag::post("/login").with_mode(FormMode::Extended);
//! begin_form(&mut ctx, &tag).unwrap();
//! render_field_once(&mut ctx, "Email", &HtmlString::new("<input name=\"Email\" />")).unwrap();
//! render_field_once(&mut ctx, "Email", &HtmlString::new("<input name=\"Email\" />")).unwrap();
//! end_form(&mut ctx).unwrap();
//!
//! assert_eq!(
//!     ctx.output(),
//!     Some("<form action=\"/login\" method=\"post\"><input name=\"Email\" /></form>")
//! );
//! ```

#[cfg(feature = "context")]
pub mod context;
#[cfg(feature = "forms")]
pub mod forms;
pub mod html;

// Re-export render context types
#[cfg(feature = "context")]
pub use tessera_context::{
	ContextError, ContextResult, ContextSettings, DateInputKind, DateRenderingMode, FormScope,
	FormState, ModelTypeInfo, RenderContext, TextWriter, ViewBag,
};

// Re-export HTML fragment types
pub use tessera_html::{HtmlContent, HtmlContentBuilder, HtmlString, render_to_string};

// Re-export form helpers
#[cfg(feature = "forms")]
pub use tessera_forms::{
	FormMode, FormTag, antiforgery_token, begin_form, end_form, render_field_once,
};

/// Commonly used types
pub mod prelude {
	pub use crate::{HtmlContent, HtmlContentBuilder, HtmlString};

	#[cfg(feature = "context")]
	pub use crate::{
		ContextError, ContextResult, FormScope, FormState, ModelTypeInfo, RenderContext, ViewBag,
	};

	#[cfg(feature = "forms")]
	pub use crate::{
		FormMode, FormTag, antiforgery_token, begin_form, end_form, render_field_once,
	};
}
