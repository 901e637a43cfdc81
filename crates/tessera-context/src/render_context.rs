//! The per-render execution context.
//!
//! One [`RenderContext`] lives for a single page render. The rendering
//! pipeline sets the page key and model metadata before running the template
//! body; helpers read and write the view bag, write to the output sink, and
//! open and close forms through it.

use crate::date::DateRenderingMode;
use crate::error::{ContextError, ContextResult};
use crate::form_state::FormState;
use crate::model::ModelTypeInfo;
use crate::scope::FormScope;
use crate::settings::ContextSettings;
use crate::view_bag::ViewBag;
use crate::writer::TextWriter;
use std::fmt;
use tessera_html::HtmlContent;

/// Mutable state carried through one template render.
#[derive(Debug)]
pub struct RenderContext {
	writer: Box<dyn TextWriter>,
	view_bag: ViewBag,
	page_key: Option<String>,
	model_type_info: Option<ModelTypeInfo>,
	form_scope: Option<FormScope>,
	date_rendering_mode: DateRenderingMode,
}

impl RenderContext {
	/// Creates a context with an in-memory output buffer and an empty view bag.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::RenderContext;
	///
	/// let ctx = RenderContext::new();
	/// assert!(ctx.view_bag().is_empty());
	/// assert_eq!(ctx.output(), Some(""));
	/// assert!(ctx.form_state().is_none());
	/// ```
	pub fn new() -> Self {
		Self::with_view_bag(None)
	}

	/// Creates a context around a caller-supplied view bag.
	///
	/// The context shares the given bag; `None` gives an empty one.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::{RenderContext, ViewBag};
	///
	/// let bag = ViewBag::new();
	/// bag.set("title", "Checkout").unwrap();
	///
	/// let ctx = RenderContext::with_view_bag(Some(bag.clone()));
	/// assert!(ViewBag::ptr_eq(ctx.view_bag(), &bag));
	/// ```
	pub fn with_view_bag(view_bag: Option<ViewBag>) -> Self {
		Self {
			writer: Box::new(String::new()),
			view_bag: view_bag.unwrap_or_default(),
			page_key: None,
			model_type_info: None,
			form_scope: None,
			date_rendering_mode: DateRenderingMode::default(),
		}
	}

	/// Creates a context using configured defaults.
	pub fn from_settings(settings: &ContextSettings) -> Self {
		let mut ctx = Self::new();
		ctx.writer = Box::new(String::with_capacity(settings.output_capacity));
		ctx.date_rendering_mode = settings.date_rendering_mode;
		ctx
	}

	/// Returns the output sink.
	pub fn writer_mut(&mut self) -> &mut dyn TextWriter {
		&mut *self.writer
	}

	/// Replaces the output sink, returning the previous one.
	pub fn replace_writer(&mut self, writer: Box<dyn TextWriter>) -> Box<dyn TextWriter> {
		std::mem::replace(&mut self.writer, writer)
	}

	/// Returns the rendered text if the current sink buffers it.
	pub fn output(&self) -> Option<&str> {
		self.writer.buffered()
	}

	pub fn write_str(&mut self, s: &str) -> ContextResult<()> {
		self.writer.write_str(s)?;
		Ok(())
	}

	/// Writes an encoded fragment to the output sink.
	pub fn write_content(&mut self, content: &dyn HtmlContent) -> ContextResult<()> {
		content.write_to(&mut SinkAdapter(&mut *self.writer))?;
		Ok(())
	}

	/// Runs `render` with output redirected into a fresh buffer and returns
	/// what it wrote.
	///
	/// The previous sink is restored whether or not `render` succeeds.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::RenderContext;
	///
	/// let mut ctx = RenderContext::new();
	/// ctx.write_str("<main>").unwrap();
	///
	/// let partial = ctx.capture(|ctx| ctx.write_str("<nav></nav>")).unwrap();
	///
	/// assert_eq!(partial, "<nav></nav>");
	/// assert_eq!(ctx.output(), Some("<main>"));
	/// ```
	pub fn capture<F>(&mut self, render: F) -> ContextResult<String>
	where
		F: FnOnce(&mut Self) -> ContextResult<()>,
	{
		let previous = self.replace_writer(Box::new(String::new()));
		let result = render(self);
		let captured = self.replace_writer(previous);
		result?;

		let text = captured.buffered().unwrap_or_default().to_string();
		tracing::debug!(
			page_key = self.page_key.as_deref().unwrap_or_default(),
			bytes = text.len(),
			"captured nested render output"
		);
		Ok(text)
	}

	/// Returns the ambient page data.
	pub fn view_bag(&self) -> &ViewBag {
		&self.view_bag
	}

	/// Identifier of the template currently executing.
	pub fn page_key(&self) -> Option<&str> {
		self.page_key.as_deref()
	}

	pub fn set_page_key(&mut self, key: impl Into<String>) {
		self.page_key = Some(key.into());
	}

	pub fn model_type_info(&self) -> Option<&ModelTypeInfo> {
		self.model_type_info.as_ref()
	}

	pub fn set_model_type_info(&mut self, info: ModelTypeInfo) {
		self.model_type_info = Some(info);
	}

	pub fn date_rendering_mode(&self) -> DateRenderingMode {
		self.date_rendering_mode
	}

	pub fn set_date_rendering_mode(&mut self, mode: DateRenderingMode) {
		self.date_rendering_mode = mode;
	}

	/// Check if a form is currently open
	pub fn is_in_form(&self) -> bool {
		self.form_scope.is_some()
	}

	pub fn form_scope(&self) -> Option<&FormScope> {
		self.form_scope.as_ref()
	}

	/// Returns the active form's state for reading.
	pub fn form_state(&self) -> Option<&FormState> {
		self.form_scope.as_ref().map(FormScope::state)
	}

	/// Returns the active form's state for writing.
	///
	/// # Errors
	///
	/// [`ContextError::NoActiveForm`] outside a form, and
	/// [`ContextError::SharedFormState`] inside a form that uses the shared default.
	pub fn form_state_mut(&mut self) -> ContextResult<&mut FormState> {
		self.form_scope
			.as_mut()
			.ok_or(ContextError::NoActiveForm)?
			.state_mut()
	}

	/// Installs the state of a newly opened form.
	///
	/// Forms do not nest; a scope that was still active is replaced and returned.
	pub fn begin_form(&mut self, scope: FormScope) -> Option<FormScope> {
		tracing::debug!(
			page_key = self.page_key.as_deref().unwrap_or_default(),
			shared = scope.is_shared(),
			"form opened"
		);
		let replaced = self.form_scope.replace(scope);
		if replaced.is_some() {
			tracing::warn!(
				page_key = self.page_key.as_deref().unwrap_or_default(),
				"form opened while another form was active; the previous form state was discarded"
			);
		}
		replaced
	}

	/// Closes the active form.
	///
	/// Deferred content is written to the output sink in insertion order, then
	/// discarded. The closing tag itself is left to the caller.
	///
	/// If the sink fails, the form stays active and keeps the fragments that
	/// were not written, so a later call resumes from the failed fragment.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::{FormScope, FormState, RenderContext};
	/// use tessera_html::HtmlString;
	///
	/// let mut ctx = RenderContext::new();
	/// ctx.begin_form(FormScope::owned(FormState::with_deferred_content()));
	/// ctx.defer_content(HtmlString::new("<input type=\"hidden\" name=\"a\" />")).unwrap();
	/// ctx.defer_content(HtmlString::new("<input type=\"hidden\" name=\"b\" />")).unwrap();
	///
	/// let scope = ctx.end_form().unwrap();
	/// assert!(!scope.state().has_deferred_content());
	/// assert_eq!(
	///     ctx.output(),
	///     Some("<input type=\"hidden\" name=\"a\" /><input type=\"hidden\" name=\"b\" />")
	/// );
	/// assert!(!ctx.is_in_form());
	/// ```
	pub fn end_form(&mut self) -> ContextResult<FormScope> {
		let active = self.form_scope.as_mut().ok_or(ContextError::NoActiveForm)?;

		if let FormScope::Owned(state) = active
			&& state.has_deferred_content()
		{
			let deferred = state.deferred_content_mut();
			let mut sink = SinkAdapter(&mut *self.writer);
			let failed = deferred
				.iter()
				.position(|fragment| fragment.write_to(&mut sink).is_err());
			if let Some(failed) = failed {
				// The form stays open with only the unwritten fragments.
				deferred.drain(..failed);
				return Err(ContextError::Write(fmt::Error));
			}
			tracing::debug!(
				page_key = self.page_key.as_deref().unwrap_or_default(),
				fragments = deferred.len(),
				"flushed deferred form content"
			);
		}

		let mut scope = self.form_scope.take().ok_or(ContextError::NoActiveForm)?;
		if let FormScope::Owned(state) = &mut scope {
			state.take_deferred_content();
		}
		tracing::debug!(
			page_key = self.page_key.as_deref().unwrap_or_default(),
			"form closed"
		);
		Ok(scope)
	}

	/// Appends content to be written just before the active form closes.
	///
	/// # Errors
	///
	/// Besides the errors of [`RenderContext::form_state_mut`], returns
	/// [`ContextError::DeferralNotSupported`] when the form did not opt in.
	pub fn defer_content(&mut self, content: impl HtmlContent + 'static) -> ContextResult<()> {
		let state = self.form_state_mut()?;
		if !state.can_defer_content() {
			return Err(ContextError::DeferralNotSupported);
		}
		state.append_deferred_content(content);
		Ok(())
	}
}

impl Default for RenderContext {
	fn default() -> Self {
		Self::new()
	}
}

/// Presents a [`TextWriter`] as a plain [`fmt::Write`] for fragment rendering.
struct SinkAdapter<'a>(&'a mut dyn TextWriter);

impl fmt::Write for SinkAdapter<'_> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.0.write_str(s)
	}
}
