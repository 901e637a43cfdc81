//! Render context integration tests
//!
//! Exercises the open form / render fields / defer content / close form
//! sequence through the public API only.

use rstest::*;
use std::fmt;
use tessera_context::{
	ContextError, DateInputKind, DateRenderingMode, FormScope, FormState, ModelTypeInfo,
	RenderContext, TextWriter, ViewBag,
};
use tessera_html::{HtmlContentBuilder, HtmlString};

/// Buffered sink that rejects the first write containing `fail_on`.
struct FlakyWriter {
	buf: String,
	fail_on: &'static str,
	tripped: bool,
}

impl FlakyWriter {
	fn new(fail_on: &'static str) -> Self {
		Self {
			buf: String::new(),
			fail_on,
			tripped: false,
		}
	}
}

impl fmt::Write for FlakyWriter {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		if !self.tripped && s.contains(self.fail_on) {
			self.tripped = true;
			return Err(fmt::Error);
		}
		self.buf.push_str(s);
		Ok(())
	}
}

impl TextWriter for FlakyWriter {
	fn buffered(&self) -> Option<&str> {
		Some(&self.buf)
	}
}

/// Renders a validation span for `field` unless the active form already did.
fn validation_message(ctx: &mut RenderContext, field: &str) -> Result<(), ContextError> {
	let state = ctx.form_state_mut()?;
	if state.was_field_rendered(field)? {
		return Ok(());
	}
	state.set_field_rendered(field, true)?;
	ctx.write_str(&format!("<span data-valmsg-for=\"{field}\"></span>"))
}

#[fixture]
fn ctx() -> RenderContext {
	let mut ctx = RenderContext::new();
	ctx.set_page_key("/Views/Account/Register.html");
	ctx
}

#[rstest]
fn test_duplicate_field_markup_suppressed_and_not_leaked(mut ctx: RenderContext) {
	// Form A
	ctx.begin_form(FormScope::owned(FormState::new()));
	validation_message(&mut ctx, "Name").unwrap();
	assert!(ctx.form_state().unwrap().was_field_rendered("Name").unwrap());
	validation_message(&mut ctx, "Name").unwrap();
	ctx.end_form().unwrap();

	assert_eq!(
		ctx.output(),
		Some("<span data-valmsg-for=\"Name\"></span>")
	);

	// Form B
	ctx.begin_form(FormScope::owned(FormState::new()));
	assert!(!ctx.form_state().unwrap().was_field_rendered("Name").unwrap());
	ctx.end_form().unwrap();
}

#[rstest]
fn test_deferred_content_flushed_in_append_order(mut ctx: RenderContext) {
	ctx.write_str("<form>").unwrap();
	ctx.begin_form(FormScope::owned(FormState::with_deferred_content()));

	ctx.write_str("<input name=\"Email\" />").unwrap();
	for step in 1..=3 {
		ctx.defer_content(HtmlString::new(format!("<i>{step}</i>")))
			.unwrap();
	}

	let mut trailer = HtmlContentBuilder::new();
	trailer.append_html("<b>").append_html("</b>");
	ctx.defer_content(trailer).unwrap();

	ctx.end_form().unwrap();
	ctx.write_str("</form>").unwrap();

	assert_eq!(
		ctx.output(),
		Some("<form><input name=\"Email\" /><i>1</i><i>2</i><i>3</i><b></b></form>")
	);
}

#[rstest]
fn test_shared_default_untouched_by_plain_forms(mut ctx: RenderContext) {
	ctx.begin_form(FormScope::shared());
	let result = validation_message(&mut ctx, "Name");
	assert!(matches!(result, Err(ContextError::SharedFormState)));
	ctx.end_form().unwrap();

	assert!(!FormState::shared_default().has_rendered_fields());
	assert_eq!(ctx.output(), Some(""));
}

#[rstest]
fn test_antiforgery_flag_survives_form_lifetime(mut ctx: RenderContext) {
	ctx.begin_form(FormScope::owned(FormState::with_deferred_content()));
	ctx.form_state_mut().unwrap().set_has_antiforgery_token(true);
	assert!(ctx.form_state().unwrap().has_antiforgery_token());

	let closed = ctx.end_form().unwrap().into_owned().unwrap();
	assert!(closed.has_antiforgery_token());
	assert!(ctx.form_state().is_none());
}

#[rstest]
fn test_capture_nested_render_shares_view_bag(mut ctx: RenderContext) {
	ctx.view_bag().set("title", "Register").unwrap();

	let partial = ctx
		.capture(|ctx| {
			let title = ctx.view_bag().get_as::<String>("title")?.unwrap_or_default();
			ctx.write_str(&format!("<h1>{title}</h1>"))
		})
		.unwrap();

	assert_eq!(partial, "<h1>Register</h1>");
	assert_eq!(ctx.output(), Some(""));
}

#[rstest]
fn test_pipeline_properties(mut ctx: RenderContext) {
	let bag = ViewBag::new();
	let mut other = RenderContext::with_view_bag(Some(bag.clone()));
	other.set_model_type_info(ModelTypeInfo::dynamic());
	assert!(ViewBag::ptr_eq(other.view_bag(), &bag));
	assert!(!other.model_type_info().unwrap().is_strongly_typed());

	ctx.set_date_rendering_mode(DateRenderingMode::Rfc3339);
	let value = chrono::NaiveDate::from_ymd_opt(2022, 12, 31)
		.unwrap()
		.and_hms_opt(23, 59, 0)
		.unwrap();
	assert_eq!(
		ctx.date_rendering_mode()
			.format(&value, DateInputKind::Date),
		"2022-12-31"
	);
	assert_eq!(ctx.page_key(), Some("/Views/Account/Register.html"));
}

#[rstest]
#[case::first_fragment("name=\"a\"")]
#[case::second_fragment("name=\"b\"")]
fn test_end_form_resumes_after_sink_failure(mut ctx: RenderContext, #[case] fail_on: &'static str) {
	ctx.replace_writer(Box::new(FlakyWriter::new(fail_on)));
	ctx.begin_form(FormScope::owned(FormState::with_deferred_content()));
	ctx.defer_content(HtmlString::new("<i name=\"a\"/>")).unwrap();
	ctx.defer_content(HtmlString::new("<i name=\"b\"/>")).unwrap();

	assert!(matches!(ctx.end_form(), Err(ContextError::Write(_))));
	assert!(ctx.is_in_form());
	assert!(ctx.form_state().unwrap().has_deferred_content());

	let scope = ctx.end_form().unwrap();
	assert!(!scope.state().has_deferred_content());
	assert!(!ctx.is_in_form());
	assert_eq!(ctx.output(), Some("<i name=\"a\"/><i name=\"b\"/>"));
}
