//! Opening `<form>` tags

use std::fmt;
use tessera_context::{FormScope, FormState};
use tessera_html::{HtmlContent, HtmlString};

/// Which form state a `<form>` gets when it opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
	/// A literal form: reads the shared default state, tracks nothing.
	#[default]
	Plain,
	/// A helper-driven form: owns its state and accepts deferred content.
	Extended,
}

impl FormMode {
	pub(crate) fn scope(self) -> FormScope {
		match self {
			FormMode::Plain => FormScope::shared(),
			FormMode::Extended => FormScope::owned(FormState::with_deferred_content()),
		}
	}
}

/// The opening tag of a form.
///
/// Attribute values are pre-encoded [`HtmlString`]s and are written verbatim.
#[derive(Debug, Clone, Default)]
pub struct FormTag {
	attributes: Vec<(String, HtmlString)>,
	mode: FormMode,
}

impl FormTag {
	/// Create a plain form tag with no attributes
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a form tag posting to `action`
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::{FormMode, FormTag};
	/// use tessera_html::render_to_string;
	///
	/// let tag = FormTag::post("/account/register").with_mode(FormMode::Extended);
	/// assert_eq!(tag.mode(), FormMode::Extended);
	/// assert_eq!(
	///     render_to_string(&tag),
	///     "<form action=\"/account/register\" method=\"post\">"
	/// );
	/// ```
	pub fn post(action: impl Into<String>) -> Self {
		Self::new()
			.with_attribute("action", HtmlString::new(action))
			.with_attribute("method", HtmlString::new("post"))
	}

	/// Add an attribute, replacing an earlier one with the same name
	pub fn with_attribute(mut self, name: impl Into<String>, value: HtmlString) -> Self {
		let name = name.into();
		match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, slot)) => *slot = value,
			None => self.attributes.push((name, value)),
		}
		self
	}

	pub fn with_mode(mut self, mode: FormMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn mode(&self) -> FormMode {
		self.mode
	}

	/// Get an attribute value by name
	pub fn attribute(&self, name: &str) -> Option<&HtmlString> {
		self.attributes
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value)
	}
}

impl HtmlContent for FormTag {
	fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
		out.write_str("<form")?;
		for (name, value) in &self.attributes {
			write!(out, " {name}=\"{value}\"")?;
		}
		out.write_str(">")
	}
}
