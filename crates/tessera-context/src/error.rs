//! Errors raised by the render context

use std::fmt;

/// Result type for render context operations
pub type ContextResult<T> = Result<T, ContextError>;

/// Render context errors
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
	/// A required argument was missing
	#[error("Invalid argument: `{name}` must not be empty")]
	InvalidArgument { name: &'static str },

	/// A form operation was attempted outside of any `<form>`
	#[error("No form is active in this render context")]
	NoActiveForm,

	/// A mutating operation targeted the process-wide default form state
	#[error("The shared default form state is read-only")]
	SharedFormState,

	/// Content was deferred into a form that did not opt into deferral
	#[error("The active form does not accept deferred content")]
	DeferralNotSupported,

	#[error("Failed to write render output: {0}")]
	Write(#[from] fmt::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Invalid context settings: {0}")]
	Settings(String),
}

impl ContextError {
	pub(crate) fn invalid_argument(name: &'static str) -> Self {
		Self::InvalidArgument { name }
	}
}
