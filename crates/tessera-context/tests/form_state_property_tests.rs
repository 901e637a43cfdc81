//! FormState property-based tests

use proptest::prelude::*;
use tessera_context::{FormState, RenderContext, ViewBag};
use tessera_html::{HtmlString, render_to_string};

fn field_name() -> impl Strategy<Value = String> {
	"[A-Za-z_][A-Za-z0-9_.\\[\\]]{0,24}"
}

// ============================================================================
// Property-Based Tests: field tracking
// ============================================================================

proptest! {
	/// A fresh state reports every field as not rendered and creates nothing.
	#[test]
	fn prop_fresh_state_is_empty(name in field_name()) {
		let state = FormState::with_deferred_content();

		prop_assert!(!state.was_field_rendered(&name).unwrap());
		prop_assert!(!state.has_field_data());
		prop_assert!(!state.has_deferred_content());
		prop_assert!(!state.has_rendered_fields());
	}

	/// The last value written for a field is the one read back.
	#[test]
	fn prop_set_field_rendered_last_write_wins(
		name in field_name(),
		first in any::<bool>(),
		second in any::<bool>(),
	) {
		let mut state = FormState::new();

		state.set_field_rendered(&name, first).unwrap();
		prop_assert_eq!(state.was_field_rendered(&name).unwrap(), first);

		state.set_field_rendered(&name, second).unwrap();
		prop_assert_eq!(state.was_field_rendered(&name).unwrap(), second);
		prop_assert!(!state.has_field_data());
		prop_assert!(!state.has_deferred_content());
	}

	/// Recording one field never marks a different field.
	#[test]
	fn prop_fields_are_independent(a in field_name(), b in field_name()) {
		prop_assume!(a != b);
		let mut state = FormState::new();

		state.set_field_rendered(&a, true).unwrap();
		prop_assert!(!state.was_field_rendered(&b).unwrap());
	}

	/// Deferred fragments come back in append order.
	#[test]
	fn prop_deferred_content_append_order(
		fragments in prop::collection::vec("<[a-z]{1,8}>", 0..16)
	) {
		let mut state = FormState::with_deferred_content();
		for fragment in &fragments {
			state.append_deferred_content(HtmlString::new(fragment.clone()));
		}

		let rendered: Vec<String> = state
			.deferred_content()
			.iter()
			.map(|c| render_to_string(c))
			.collect();
		prop_assert_eq!(rendered, fragments);
	}

	/// A supplied view bag is shared, not copied.
	#[test]
	fn prop_view_bag_is_shared(key in "[a-z]{1,10}", value in any::<i64>()) {
		let bag = ViewBag::new();
		let ctx = RenderContext::with_view_bag(Some(bag.clone()));

		bag.set(key.clone(), value).unwrap();
		prop_assert_eq!(ctx.view_bag().get_as::<i64>(&key).unwrap(), Some(value));
	}
}
