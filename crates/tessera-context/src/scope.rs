//! The form-open decision: shared default state or a state owned by one form.

use crate::error::{ContextError, ContextResult};
use crate::form_state::FormState;

/// The form state installed when a `<form>` is opened.
///
/// Literal forms with no tag-helper behavior use [`FormScope::Shared`], which
/// reads from [`FormState::shared_default`] and refuses every mutation. Forms
/// that need field tracking, an antiforgery token, or deferred content get a
/// fresh [`FormScope::Owned`] state.
#[derive(Debug)]
pub enum FormScope {
	Shared,
	Owned(Box<FormState>),
}

impl FormScope {
	pub fn shared() -> Self {
		FormScope::Shared
	}

	/// Wraps a state owned by exactly one form.
	pub fn owned(state: FormState) -> Self {
		FormScope::Owned(Box::new(state))
	}

	/// Returns the state for reading.
	pub fn state(&self) -> &FormState {
		match self {
			FormScope::Shared => FormState::shared_default(),
			FormScope::Owned(state) => &**state,
		}
	}

	/// Returns the state for writing.
	///
	/// # Errors
	///
	/// Returns [`ContextError::SharedFormState`] for the shared default.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::{ContextError, FormScope, FormState};
	///
	/// let mut shared = FormScope::shared();
	/// assert!(matches!(shared.state_mut(), Err(ContextError::SharedFormState)));
	///
	/// let mut owned = FormScope::owned(FormState::new());
	/// owned.state_mut().unwrap().set_field_rendered("Name", true).unwrap();
	/// assert!(owned.state().was_field_rendered("Name").unwrap());
	/// ```
	pub fn state_mut(&mut self) -> ContextResult<&mut FormState> {
		match self {
			FormScope::Shared => Err(ContextError::SharedFormState),
			FormScope::Owned(state) => Ok(&mut **state),
		}
	}

	pub fn is_shared(&self) -> bool {
		matches!(self, FormScope::Shared)
	}

	/// Returns the owned state, or `None` for the shared default.
	pub fn into_owned(self) -> Option<FormState> {
		match self {
			FormScope::Shared => None,
			FormScope::Owned(state) => Some(*state),
		}
	}
}

impl From<FormState> for FormScope {
	fn from(state: FormState) -> Self {
		FormScope::owned(state)
	}
}
