//! State of the `<form>` currently being rendered.
//!
//! A [`FormState`] records which fields already produced their per-field
//! markup, whether an antiforgery token was emitted, and any content that must
//! be written just before `</form>`.
//!
//! All three collections are created on first use. Most forms use none of
//! them, so an untouched `FormState` owns no heap storage. The `has_*` queries
//! and [`FormState::was_field_rendered`] never create storage.

use crate::error::{ContextError, ContextResult};
use serde_json::Value;
use std::collections::HashMap;
use tessera_html::HtmlContent;

/// The process-wide state used by forms rendered without extended features.
static SHARED_DEFAULT: FormState = FormState::new();

/// Per-form rendering state.
#[derive(Debug)]
pub struct FormState {
	field_data: Option<HashMap<String, Value>>,
	rendered_fields: Option<HashMap<String, bool>>,
	deferred_content: Option<Vec<Box<dyn HtmlContent>>>,
	has_antiforgery_token: bool,
	can_defer_content: bool,
}

impl FormState {
	/// Creates a state that does not accept deferred content.
	pub const fn new() -> Self {
		Self {
			field_data: None,
			rendered_fields: None,
			deferred_content: None,
			has_antiforgery_token: false,
			can_defer_content: false,
		}
	}

	/// Creates a state whose deferred content will be written before `</form>`.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::FormState;
	///
	/// let state = FormState::with_deferred_content();
	/// assert!(state.can_defer_content());
	/// assert!(!state.has_deferred_content());
	/// ```
	pub const fn with_deferred_content() -> Self {
		Self {
			field_data: None,
			rendered_fields: None,
			deferred_content: None,
			has_antiforgery_token: false,
			can_defer_content: true,
		}
	}

	/// Returns the state shared by every form without extended features.
	///
	/// Only a shared reference is ever handed out, so the shared default
	/// cannot accumulate field or deferred-content state across forms.
	pub fn shared_default() -> &'static FormState {
		&SHARED_DEFAULT
	}

	/// Returns the field data bag, creating it on first use.
	///
	/// Helpers use this to associate arbitrary values with a full field name.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::FormState;
	///
	/// let mut state = FormState::new();
	/// assert!(!state.has_field_data());
	///
	/// state
	///     .field_data_mut()
	///     .insert("Address.City".to_string(), serde_json::json!({"maxlength": 40}));
	/// assert!(state.has_field_data());
	/// ```
	pub fn field_data_mut(&mut self) -> &mut HashMap<String, Value> {
		self.field_data.get_or_insert_with(HashMap::new)
	}

	/// Returns the field data bag if it has been created.
	pub fn field_data(&self) -> Option<&HashMap<String, Value>> {
		self.field_data.as_ref()
	}

	/// Check if the field data bag has been created, even if it is empty
	pub fn has_field_data(&self) -> bool {
		self.field_data.is_some()
	}

	/// Returns the content to write before `</form>`, creating the list on first use.
	pub fn deferred_content_mut(&mut self) -> &mut Vec<Box<dyn HtmlContent>> {
		self.deferred_content.get_or_insert_with(Vec::new)
	}

	/// Returns the deferred content without creating the list.
	pub fn deferred_content(&self) -> &[Box<dyn HtmlContent>] {
		self.deferred_content.as_deref().unwrap_or(&[])
	}

	/// Check if the deferred content list has been created, even if it is empty
	pub fn has_deferred_content(&self) -> bool {
		self.deferred_content.is_some()
	}

	/// Appends a fragment to the deferred content.
	pub fn append_deferred_content(&mut self, content: impl HtmlContent + 'static) {
		self.deferred_content_mut().push(Box::new(content));
	}

	/// Removes the deferred content, leaving the list uncreated.
	pub fn take_deferred_content(&mut self) -> Vec<Box<dyn HtmlContent>> {
		self.deferred_content.take().unwrap_or_default()
	}

	/// Returns whether `field_name` has been rendered in this form.
	///
	/// Field names are compared byte for byte. An empty name is rejected as a
	/// missing name, so `""` is never a key here even though it would be a
	/// valid map key.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::FormState;
	///
	/// let mut state = FormState::new();
	/// assert!(!state.was_field_rendered("Email").unwrap());
	///
	/// state.set_field_rendered("Email", true).unwrap();
	/// assert!(state.was_field_rendered("Email").unwrap());
	/// assert!(!state.was_field_rendered("email").unwrap());
	///
	/// assert!(state.was_field_rendered("").is_err());
	/// ```
	pub fn was_field_rendered(&self, field_name: &str) -> ContextResult<bool> {
		validate_field_name(field_name)?;
		Ok(self
			.rendered_fields
			.as_ref()
			.and_then(|fields| fields.get(field_name))
			.copied()
			.unwrap_or(false))
	}

	/// Records whether `field_name` has been rendered, replacing any earlier record.
	pub fn set_field_rendered(&mut self, field_name: &str, value: bool) -> ContextResult<()> {
		validate_field_name(field_name)?;
		self.rendered_fields
			.get_or_insert_with(HashMap::new)
			.insert(field_name.to_string(), value);
		Ok(())
	}

	/// Check if any field has been recorded
	pub fn has_rendered_fields(&self) -> bool {
		self.rendered_fields.is_some()
	}

	pub fn has_antiforgery_token(&self) -> bool {
		self.has_antiforgery_token
	}

	pub fn set_has_antiforgery_token(&mut self, value: bool) {
		self.has_antiforgery_token = value;
	}

	/// Check if the form opted into content written before `</form>`
	pub fn can_defer_content(&self) -> bool {
		self.can_defer_content
	}

	pub fn set_can_defer_content(&mut self, value: bool) {
		self.can_defer_content = value;
	}
}

impl Default for FormState {
	fn default() -> Self {
		Self::new()
	}
}

fn validate_field_name(field_name: &str) -> ContextResult<()> {
	if field_name.is_empty() {
		return Err(ContextError::invalid_argument("field_name"));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;
	use tessera_html::{HtmlString, render_to_string};

	#[fixture]
	fn state() -> FormState {
		FormState::with_deferred_content()
	}

	#[rstest]
	fn test_new_state_has_nothing(state: FormState) {
		assert!(!state.has_field_data());
		assert!(!state.has_deferred_content());
		assert!(!state.has_rendered_fields());
		assert!(!state.has_antiforgery_token());
		assert!(state.field_data().is_none());
		assert!(state.deferred_content().is_empty());
	}

	#[rstest]
	fn test_field_data_created_empty(mut state: FormState) {
		assert!(state.field_data_mut().is_empty());
		assert!(state.has_field_data());
		assert_eq!(state.field_data().map(HashMap::len), Some(0));
	}

	#[rstest]
	fn test_field_data_same_instance_across_calls(mut state: FormState) {
		state
			.field_data_mut()
			.insert("Name".to_string(), json!("first"));
		state
			.field_data_mut()
			.insert("Age".to_string(), json!(3));

		let data = state.field_data().unwrap();
		assert_eq!(data.len(), 2);
		assert_eq!(data.get("Name"), Some(&json!("first")));
	}

	#[rstest]
	fn test_deferred_content_created_empty(mut state: FormState) {
		assert!(state.deferred_content_mut().is_empty());
		assert!(state.has_deferred_content());
	}

	#[rstest]
	fn test_deferred_content_keeps_append_order(mut state: FormState) {
		state.append_deferred_content(HtmlString::new("<a>"));
		state.append_deferred_content(HtmlString::new("<b>"));
		state
			.deferred_content_mut()
			.push(Box::new(HtmlString::new("<c>")));

		let rendered: Vec<String> = state
			.deferred_content()
			.iter()
			.map(|c| render_to_string(c))
			.collect();
		assert_eq!(rendered, vec!["<a>", "<b>", "<c>"]);
	}

	#[rstest]
	fn test_take_deferred_content_resets(mut state: FormState) {
		state.append_deferred_content(HtmlString::new("<input type=\"hidden\">"));

		let taken = state.take_deferred_content();
		assert_eq!(taken.len(), 1);
		assert!(!state.has_deferred_content());
		assert!(state.take_deferred_content().is_empty());
	}

	#[rstest]
	fn test_was_field_rendered_does_not_create_storage(state: FormState) {
		assert!(!state.was_field_rendered("Name").unwrap());
		assert!(!state.has_rendered_fields());
		assert!(!state.has_field_data());
		assert!(!state.has_deferred_content());
	}

	#[rstest]
	fn test_set_field_rendered_last_write_wins(mut state: FormState) {
		state.set_field_rendered("Name", true).unwrap();
		assert!(state.was_field_rendered("Name").unwrap());

		state.set_field_rendered("Name", false).unwrap();
		assert!(!state.was_field_rendered("Name").unwrap());
		assert!(state.has_rendered_fields());
		assert!(!state.has_field_data());
	}

	#[rstest]
	#[case("Name", "name")]
	#[case("Items[0].Sku", "Items[0].SKU")]
	#[case("stra\u{df}e", "strasse")]
	fn test_field_names_compare_ordinally(
		mut state: FormState,
		#[case] recorded: &str,
		#[case] other: &str,
	) {
		state.set_field_rendered(recorded, true).unwrap();
		assert!(state.was_field_rendered(recorded).unwrap());
		assert!(!state.was_field_rendered(other).unwrap());
	}

	#[rstest]
	fn test_empty_field_name_rejected(mut state: FormState) {
		assert!(matches!(
			state.was_field_rendered(""),
			Err(ContextError::InvalidArgument { name: "field_name" })
		));
		assert!(matches!(
			state.set_field_rendered("", true),
			Err(ContextError::InvalidArgument { name: "field_name" })
		));
		assert!(!state.has_rendered_fields());
	}

	#[rstest]
	fn test_empty_field_name_leaves_records_intact(mut state: FormState) {
		state.set_field_rendered("Name", true).unwrap();

		assert!(state.set_field_rendered("", false).is_err());
		assert!(state.was_field_rendered("").is_err());
		assert!(state.was_field_rendered("Name").unwrap());
	}

	#[rstest]
	fn test_flags_last_value_wins() {
		let mut state = FormState::new();
		assert!(!state.can_defer_content());

		state.set_can_defer_content(true);
		state.set_has_antiforgery_token(true);
		assert!(state.can_defer_content());
		assert!(state.has_antiforgery_token());

		state.set_has_antiforgery_token(false);
		assert!(!state.has_antiforgery_token());
	}

	#[rstest]
	fn test_shared_default_is_pristine() {
		let shared = FormState::shared_default();
		assert!(std::ptr::eq(shared, FormState::shared_default()));
		assert!(!shared.can_defer_content());
		assert!(!shared.has_field_data());
		assert!(!shared.has_deferred_content());
		assert!(!shared.was_field_rendered("Name").unwrap());
	}
}
