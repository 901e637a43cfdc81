//! # Tessera HTML
//!
//! Renderable HTML fragments shared by the tessera render context and its
//! form helpers.
//!
//! Every fragment is already-encoded markup. Escaping user text is the job of
//! the template engine that produces the fragment; this crate only moves the
//! encoded bytes into an output sink.
//!
//! ## Example
//!
//! ```
//! use tessera_html::{HtmlContentBuilder, HtmlString, render_to_string};
//!
//! let mut builder = HtmlContentBuilder::new();
//! builder.append_html("<input type=\"hidden\" name=\"step\" value=\"2\" />");
//! builder.append(HtmlString::new("<span>done</span>"));
//!
//! assert_eq!(
//!     render_to_string(&builder),
//!     "<input type=\"hidden\" name=\"step\" value=\"2\" /><span>done</span>"
//! );
//! ```

pub mod builder;
pub mod content;
pub mod string;

pub use builder::HtmlContentBuilder;
pub use content::{HtmlContent, render_to_string};
pub use string::HtmlString;
