//! # Tessera Context
//!
//! The per-render execution context of the tessera templating engine.
//!
//! - [`RenderContext`]: one per template execution. Owns the output sink, the
//!   shared [`ViewBag`], model type metadata, the active form scope and the
//!   date rendering mode.
//! - [`FormState`]: one per `<form>` that needs field tracking, an antiforgery
//!   token, or content written before `</form>`. Forms without those features
//!   read the process-wide [`FormState::shared_default`] through
//!   [`FormScope::Shared`], which cannot be mutated.
//!
//! ## Form protocol
//!
//! ```
//! use tessera_context::{FormScope, FormState, RenderContext};
//! use tessera_html::HtmlString;
//!
//! let mut ctx = RenderContext::new();
//! ctx.begin_form(FormScope::owned(FormState::with_deferred_content()));
//!
//! // A helper rendering "Name" twice only emits its validation span once.
//! for _ in 0..2 {
//!     let state = ctx.form_state_mut().unwrap();
//!     if !state.was_field_rendered("Name").unwrap() {
//!         state.set_field_rendered("Name", true).unwrap();
//!         ctx.write_str("<span data-valmsg-for=\"Name\"></span>").unwrap();
//!     }
//! }
//!
//! ctx.defer_content(HtmlString::new("<input type=\"hidden\" name=\"__end\" />")).unwrap();
//! ctx.end_form().unwrap();
//!
//! assert_eq!(
//!     ctx.output(),
//!     Some("<span data-valmsg-for=\"Name\"></span><input type=\"hidden\" name=\"__end\" />")
//! );
//! ```

pub mod date;
pub mod error;
pub mod form_state;
pub mod model;
pub mod render_context;
pub mod scope;
pub mod settings;
pub mod view_bag;
pub mod writer;

pub use date::{DateInputKind, DateRenderingMode};
pub use error::{ContextError, ContextResult};
pub use form_state::FormState;
pub use model::ModelTypeInfo;
pub use render_context::RenderContext;
pub use scope::FormScope;
pub use settings::ContextSettings;
pub use view_bag::ViewBag;
pub use writer::TextWriter;
