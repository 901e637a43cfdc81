//! Ordered collections of fragments

use crate::content::HtmlContent;
use crate::string::HtmlString;
use std::fmt;

/// An ordered list of fragments that renders its children in append order.
#[derive(Debug, Default)]
pub struct HtmlContentBuilder {
	entries: Vec<Box<dyn HtmlContent>>,
}

impl HtmlContentBuilder {
	/// Create an empty builder
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a fragment
	///
	/// # Examples
	///
	/// ```
	/// use tessera_html::{HtmlContentBuilder, HtmlString};
	///
	/// let mut builder = HtmlContentBuilder::new();
	/// builder.append(HtmlString::new("<p>"));
	/// builder.append(HtmlString::new("</p>"));
	/// assert_eq!(builder.len(), 2);
	/// ```
	pub fn append(&mut self, content: impl HtmlContent + 'static) -> &mut Self {
		self.entries.push(Box::new(content));
		self
	}

	/// Append pre-encoded markup
	pub fn append_html(&mut self, html: impl Into<String>) -> &mut Self {
		self.append(HtmlString::new(html))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Remove every fragment
	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

impl HtmlContent for HtmlContentBuilder {
	fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
		for entry in &self.entries {
			entry.write_to(out)?;
		}
		Ok(())
	}
}
