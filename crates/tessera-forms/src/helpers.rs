//! Form helpers
//!
//! These functions are the helper-side half of the form protocol:
//!
//! 1. [`begin_form`] writes the opening tag and installs the form state.
//! 2. [`render_field_once`] and [`antiforgery_token`] consult and update the
//!    state so per-field markup and the token are emitted at most once.
//! 3. [`end_form`] writes any deferred content, then `</form>`.

use tessera_context::{ContextError, ContextResult, FormScope, RenderContext};
use tessera_html::HtmlContent;

use crate::tag::FormTag;

const FORM_END_TAG: &str = "</form>";

/// Writes the opening tag and installs the form's state.
///
/// # Examples
///
/// ```
/// use tessera_context::RenderContext;
/// use tessera_forms::{FormTag, begin_form, end_form};
///
/// let mut ctx = RenderContext::new();
/// begin_form(&mut ctx, &FormTag::post("/search")).unwrap();
/// end_form(&mut ctx).unwrap();
///
/// assert_eq!(ctx.output(), Some("<form action=\"/search\" method=\"post\"></form>"));
/// ```
pub fn begin_form(ctx: &mut RenderContext, tag: &FormTag) -> ContextResult<()> {
	ctx.write_content(tag)?;
	if let Some(replaced) = ctx.begin_form(tag.mode().scope()) {
		// Nothing would ever flush the replaced form's deferred content.
		if replaced.state().has_deferred_content() {
			tracing::warn!(
				fragments = replaced.state().deferred_content().len(),
				"dropping deferred content of an unclosed form"
			);
		}
	}
	Ok(())
}

/// Writes the active form's deferred content followed by `</form>`.
///
/// A failed write leaves the form open so the call can be repeated.
pub fn end_form(ctx: &mut RenderContext) -> ContextResult<()> {
	let scope = ctx.end_form()?;
	if let Err(e) = ctx.write_str(FORM_END_TAG) {
		ctx.begin_form(scope);
		return Err(e);
	}
	Ok(())
}

/// Writes `token` unless the active form already contains one.
///
/// Returns whether the token was written. Forms using the shared default
/// state never receive a token from this helper. The form records the token
/// only after it was written, so a failed write can be retried.
///
/// # Errors
///
/// [`ContextError::NoActiveForm`] outside a form.
pub fn antiforgery_token(ctx: &mut RenderContext, token: &dyn HtmlContent) -> ContextResult<bool> {
	match ctx.form_state_mut() {
		Ok(state) if state.has_antiforgery_token() => return Ok(false),
		Ok(_) => {}
		Err(ContextError::SharedFormState) => return Ok(false),
		Err(e) => return Err(e),
	}
	ctx.write_content(token)?;
	ctx.form_state_mut()?.set_has_antiforgery_token(true);
	Ok(true)
}

/// Writes per-field markup the first time `field_name` is rendered in the
/// active form.
///
/// Returns whether the markup was written. Outside an owned form there is no
/// record to consult, so the markup is always written.
///
/// # Errors
///
/// [`ContextError::InvalidArgument`] for an empty `field_name`.
///
/// # Examples
///
/// ```
/// use tessera_context::RenderContext;
/// use tessera_forms::{FormMode, FormTag, begin_form, end_form, render_field_once};
/// use tessera_html::HtmlString;
///
/// let mut ctx = RenderContext::new();
/// begin_form(&mut ctx, &FormTag::new().with_mode(FormMode::Extended)).unwrap();
///
/// let span = HtmlString::new("<span data-valmsg-for=\"Name\"></span>");
/// assert!(render_field_once(&mut ctx, "Name", &span).unwrap());
/// assert!(!render_field_once(&mut ctx, "Name", &span).unwrap());
/// end_form(&mut ctx).unwrap();
///
/// assert_eq!(ctx.output(), Some("<form><span data-valmsg-for=\"Name\"></span></form>"));
/// ```
pub fn render_field_once(
	ctx: &mut RenderContext,
	field_name: &str,
	markup: &dyn HtmlContent,
) -> ContextResult<bool> {
	let tracked = match ctx.form_scope() {
		Some(FormScope::Owned(state)) => {
			if state.was_field_rendered(field_name)? {
				return Ok(false);
			}
			true
		}
		_ if field_name.is_empty() => {
			return Err(ContextError::InvalidArgument { name: "field_name" });
		}
		_ => false,
	};
	ctx.write_content(markup)?;
	if tracked {
		ctx.form_state_mut()?.set_field_rendered(field_name, true)?;
	}
	Ok(true)
}
