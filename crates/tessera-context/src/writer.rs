//! Output sinks for rendered text

use std::fmt;

/// A text sink a page renders into.
///
/// Any [`fmt::Write`] that is `Send` can act as a sink. Sinks that keep the
/// text in memory expose it through [`TextWriter::buffered`], which lets a
/// caller read back a nested render after redirecting output.
pub trait TextWriter: fmt::Write + Send {
	/// Returns the buffered text, if this sink keeps it in memory.
	fn buffered(&self) -> Option<&str> {
		None
	}
}

impl TextWriter for String {
	fn buffered(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl fmt::Debug for dyn TextWriter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.buffered() {
			Some(text) => f.debug_tuple("TextWriter").field(&text.len()).finish(),
			None => f.write_str("TextWriter(<unbuffered>)"),
		}
	}
}
