//! Pre-encoded HTML strings

use crate::content::HtmlContent;
use std::fmt;

/// Markup that has already been encoded and is written verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HtmlString(String);

impl HtmlString {
	/// Create a new HTML string
	///
	/// # Examples
	///
	/// ```
	/// use tessera_html::HtmlString;
	///
	/// let html = HtmlString::new("<input name=\"__token\" />");
	/// assert_eq!(html.as_str(), "<input name=\"__token\" />");
	/// ```
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Get the inner markup
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert to String
	pub fn into_string(self) -> String {
		self.0
	}

	/// Check if there is no markup
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl HtmlContent for HtmlString {
	fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
		out.write_str(&self.0)
	}
}

impl From<String> for HtmlString {
	fn from(s: String) -> Self {
		HtmlString(s)
	}
}

impl From<&str> for HtmlString {
	fn from(s: &str) -> Self {
		HtmlString(s.to_string())
	}
}

impl AsRef<str> for HtmlString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for HtmlString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
