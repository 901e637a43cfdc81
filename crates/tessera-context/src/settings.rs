//! Render context settings
//!
//! Settings are plain serde data so they can live in the same TOML or JSON
//! file as the rest of an application's configuration.
//!
//! ```toml
//! date_rendering_mode = "rfc3339"
//! output_capacity = 4096
//! ```

use crate::date::DateRenderingMode;
use crate::error::{ContextError, ContextResult};
use serde::{Deserialize, Serialize};

const DEFAULT_OUTPUT_CAPACITY: usize = 1024;

/// Defaults applied to every [`RenderContext`](crate::RenderContext) built from settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSettings {
	/// Initial date rendering mode of new contexts.
	pub date_rendering_mode: DateRenderingMode,
	/// Bytes reserved up front in the output buffer.
	pub output_capacity: usize,
}

impl Default for ContextSettings {
	fn default() -> Self {
		Self {
			date_rendering_mode: DateRenderingMode::default(),
			output_capacity: DEFAULT_OUTPUT_CAPACITY,
		}
	}
}

impl ContextSettings {
	/// Parse settings from TOML
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::{ContextSettings, DateRenderingMode};
	///
	/// let settings = ContextSettings::from_toml_str("date_rendering_mode = \"rfc3339\"").unwrap();
	/// assert_eq!(settings.date_rendering_mode, DateRenderingMode::Rfc3339);
	/// assert_eq!(settings.output_capacity, 1024);
	/// ```
	pub fn from_toml_str(source: &str) -> ContextResult<Self> {
		toml::from_str(source).map_err(|e| ContextError::Settings(e.to_string()))
	}

	/// Parse settings from JSON
	pub fn from_json_str(source: &str) -> ContextResult<Self> {
		serde_json::from_str(source).map_err(|e| ContextError::Settings(e.to_string()))
	}

	pub fn with_date_rendering_mode(mut self, mode: DateRenderingMode) -> Self {
		self.date_rendering_mode = mode;
		self
	}

	pub fn with_output_capacity(mut self, capacity: usize) -> Self {
		self.output_capacity = capacity;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_settings_default() {
		let settings = ContextSettings::default();
		assert_eq!(settings.date_rendering_mode, DateRenderingMode::CurrentCulture);
		assert_eq!(settings.output_capacity, DEFAULT_OUTPUT_CAPACITY);
	}

	#[rstest]
	fn test_settings_from_toml() {
		let settings = ContextSettings::from_toml_str(
			r#"
			date_rendering_mode = "rfc3339"
			output_capacity = 64
			"#,
		)
		.unwrap();

		assert_eq!(settings.date_rendering_mode, DateRenderingMode::Rfc3339);
		assert_eq!(settings.output_capacity, 64);
	}

	#[rstest]
	fn test_settings_from_json_partial() {
		let settings = ContextSettings::from_json_str(r#"{"output_capacity": 8}"#).unwrap();
		assert_eq!(settings.date_rendering_mode, DateRenderingMode::CurrentCulture);
		assert_eq!(settings.output_capacity, 8);
	}

	#[rstest]
	#[case("date_rendering_mode = \"ISO\"")]
	#[case("output_capacity = \"big\"")]
	fn test_settings_invalid_toml(#[case] source: &str) {
		let result = ContextSettings::from_toml_str(source);
		assert!(matches!(result, Err(ContextError::Settings(_))));
	}

	#[rstest]
	fn test_settings_builders() {
		let settings = ContextSettings::default()
			.with_date_rendering_mode(DateRenderingMode::Rfc3339)
			.with_output_capacity(0);
		assert_eq!(settings.date_rendering_mode, DateRenderingMode::Rfc3339);
		assert_eq!(settings.output_capacity, 0);
	}
}
