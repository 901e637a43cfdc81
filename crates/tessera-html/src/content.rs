//! The [`HtmlContent`] trait

use std::fmt;

/// A fragment of encoded HTML that can be written to an output sink.
///
/// Implementors must write markup that is already safe to emit verbatim.
/// Fragments are `Send + Sync` so that a form's deferred content can be held
/// by a render context that moves between worker threads.
pub trait HtmlContent: fmt::Debug + Send + Sync {
	/// Writes the fragment to `out`.
	fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl<T: HtmlContent + ?Sized> HtmlContent for Box<T> {
	fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
		(**self).write_to(out)
	}
}

impl<T: HtmlContent + ?Sized> HtmlContent for &T {
	fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
		(**self).write_to(out)
	}
}

/// Renders a fragment into a new `String`.
///
/// A fragment that reports [`fmt::Error`] stops rendering early, and the text
/// written up to that point is returned. Use [`HtmlContent::write_to`] directly
/// when the error matters.
///
/// # Examples
///
/// ```
/// use tessera_html::{HtmlString, render_to_string};
///
/// let html = HtmlString::new("<b>bold</b>");
/// assert_eq!(render_to_string(&html), "<b>bold</b>");
/// ```
pub fn render_to_string(content: &dyn HtmlContent) -> String {
	let mut out = String::new();
	let _ = content.write_to(&mut out);
	out
}
