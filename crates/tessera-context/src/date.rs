//! Date rendering mode consulted by date input helpers

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How date and time values are rendered into input elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRenderingMode {
	/// Render with the value's default display form.
	#[default]
	CurrentCulture,
	/// Render in the RFC 3339 shape HTML5 date inputs expect.
	Rfc3339,
}

/// The HTML5 input type a date value is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateInputKind {
	Date,
	DateTimeLocal,
	Time,
	Month,
	Week,
}

impl DateInputKind {
	fn rfc3339_format(self) -> &'static str {
		match self {
			DateInputKind::Date => "%Y-%m-%d",
			DateInputKind::DateTimeLocal => "%Y-%m-%dT%H:%M:%S%.3f",
			DateInputKind::Time => "%H:%M:%S%.3f",
			DateInputKind::Month => "%Y-%m",
			DateInputKind::Week => "%G-W%V",
		}
	}
}

impl DateRenderingMode {
	/// Formats `value` for an input of the given kind.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use tessera_context::{DateInputKind, DateRenderingMode};
	///
	/// let value = NaiveDate::from_ymd_opt(2024, 3, 9)
	///     .unwrap()
	///     .and_hms_milli_opt(14, 5, 0, 250)
	///     .unwrap();
	///
	/// assert_eq!(
	///     DateRenderingMode::Rfc3339.format(&value, DateInputKind::DateTimeLocal),
	///     "2024-03-09T14:05:00.250"
	/// );
	/// assert_eq!(
	///     DateRenderingMode::CurrentCulture.format(&value, DateInputKind::Date),
	///     "2024-03-09 14:05:00.250"
	/// );
	/// ```
	pub fn format(&self, value: &NaiveDateTime, kind: DateInputKind) -> String {
		match self {
			DateRenderingMode::CurrentCulture => value.to_string(),
			DateRenderingMode::Rfc3339 => value.format(kind.rfc3339_format()).to_string(),
		}
	}
}
