//! Ambient page data shared by everything that holds a render context.
//!
//! A [`ViewBag`] is a handle: cloning it shares the same storage, so a value
//! written by a layout is visible to the page and every partial rendered from
//! the same context.

use crate::error::ContextResult;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Dynamically keyed page data.
#[derive(Clone, Default)]
pub struct ViewBag {
	entries: Arc<RwLock<Map<String, Value>>>,
}

impl ViewBag {
	/// Creates an empty view bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` if both handles point at the same storage.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::ViewBag;
	///
	/// let bag = ViewBag::new();
	/// let shared = bag.clone();
	/// assert!(ViewBag::ptr_eq(&bag, &shared));
	/// assert!(!ViewBag::ptr_eq(&bag, &ViewBag::new()));
	/// ```
	pub fn ptr_eq(a: &ViewBag, b: &ViewBag) -> bool {
		Arc::ptr_eq(&a.entries, &b.entries)
	}

	/// Inserts a raw JSON value, returning the previous one.
	pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.entries.write().insert(key.into(), value)
	}

	/// Serializes `value` and stores it under `key`.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::ViewBag;
	///
	/// let bag = ViewBag::new();
	/// bag.set("title", "Orders").unwrap();
	/// bag.set("page_size", 25).unwrap();
	///
	/// assert_eq!(bag.get("title"), Some(serde_json::json!("Orders")));
	/// assert_eq!(bag.get_as::<u32>("page_size").unwrap(), Some(25));
	/// ```
	pub fn set(&self, key: impl Into<String>, value: impl Serialize) -> ContextResult<()> {
		let value = serde_json::to_value(value)?;
		self.entries.write().insert(key.into(), value);
		Ok(())
	}

	/// Returns a copy of the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<Value> {
		self.entries.read().get(key).cloned()
	}

	/// Deserializes the value stored under `key`.
	///
	/// Returns `Ok(None)` when the key is absent and an error when the stored
	/// value does not have the requested shape.
	pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> ContextResult<Option<T>> {
		match self.get(key) {
			Some(value) => Ok(Some(serde_json::from_value(value)?)),
			None => Ok(None),
		}
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.read().contains_key(key)
	}

	pub fn remove(&self, key: &str) -> Option<Value> {
		self.entries.write().remove(key)
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Returns the keys currently present, in sorted order.
	pub fn keys(&self) -> Vec<String> {
		let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
		keys.sort();
		keys
	}

	/// Returns a snapshot of the whole bag as a JSON object.
	pub fn to_json(&self) -> Value {
		Value::Object(self.entries.read().clone())
	}
}

impl From<Map<String, Value>> for ViewBag {
	fn from(entries: Map<String, Value>) -> Self {
		Self {
			entries: Arc::new(RwLock::new(entries)),
		}
	}
}

impl fmt::Debug for ViewBag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.entries.read().iter()).finish()
	}
}
