//! Type metadata for the model bound to a template

use std::any::{TypeId, type_name};

const DYNAMIC_TEMPLATE_TYPE: &str = "dynamic";

/// Describes the type of the model a template is rendered with.
///
/// The render context only stores this value; template compilers and model
/// binders read it to decide how the model is exposed to the template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTypeInfo {
	type_name: &'static str,
	type_id: Option<TypeId>,
	template_type_name: String,
}

impl ModelTypeInfo {
	/// Metadata for a strongly typed model of type `T`.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_context::ModelTypeInfo;
	///
	/// struct Order;
	///
	/// let info = ModelTypeInfo::of::<Order>();
	/// assert!(info.is_strongly_typed());
	/// assert!(info.is::<Order>());
	/// assert!(info.type_name().ends_with("Order"));
	/// ```
	pub fn of<T: 'static>() -> Self {
		let name = type_name::<T>();
		Self {
			type_name: name,
			type_id: Some(TypeId::of::<T>()),
			template_type_name: name.to_string(),
		}
	}

	/// Metadata for a template rendered without a static model type.
	pub fn dynamic() -> Self {
		Self {
			type_name: DYNAMIC_TEMPLATE_TYPE,
			type_id: None,
			template_type_name: DYNAMIC_TEMPLATE_TYPE.to_string(),
		}
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn type_id(&self) -> Option<TypeId> {
		self.type_id
	}

	/// Name under which the model type is exposed to the template body.
	pub fn template_type_name(&self) -> &str {
		&self.template_type_name
	}

	pub fn is_strongly_typed(&self) -> bool {
		self.type_id.is_some()
	}

	/// Check if the recorded model type is `T`
	pub fn is<T: 'static>(&self) -> bool {
		self.type_id == Some(TypeId::of::<T>())
	}
}

impl Default for ModelTypeInfo {
	fn default() -> Self {
		Self::dynamic()
	}
}
