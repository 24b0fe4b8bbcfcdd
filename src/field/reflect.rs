//! Runtime introspection for values whose concrete type the caller does not
//! name at compile time.
//!
//! [`Reflect`] exposes the structural kind of a value as a [`ReflectRef`];
//! pointer levels surface as [`ReflectRef::Pointer`] so the resolver can walk
//! them without knowing the pointee type.

use std::any::Any;
use std::error::Error;

use crate::field::Result;
use crate::field::complex::{Complex64, Complex128};

mod impls;

/// A value that can describe its own structure at runtime.
///
/// Implementations only need [`Reflect::reflect_ref`]. The hooks let a type
/// stand in for its own display or JSON method the way `Display`-like and
/// `Serialize`-like methods take over under generic encoding.
pub trait Reflect: Any + Send + Sync {
	/// Structural view of this value.
	fn reflect_ref(&self) -> ReflectRef<'_>;

	/// Full type path, used for diagnostics.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// The value's own display method, when it has one.
	fn reflect_display(&self) -> Option<String> {
		None
	}

	/// The value's own JSON method, when it has one.
	fn reflect_json(&self) -> Option<Result<String>> {
		None
	}

	/// Error view used by the static dispatch.
	fn as_error(&self) -> Option<&(dyn Error + 'static)> {
		None
	}
}

/// Structural kind of a reflected value, borrowing from it.
pub enum ReflectRef<'a> {
	/// Untyped nil.
	Nil,
	/// One level of indirection; `None` is a nil pointer.
	Pointer(Option<&'a dyn Reflect>),
	/// Boolean.
	Bool(bool),
	/// Signed integer of any width.
	Int(i64),
	/// Unsigned integer of any width.
	Uint(u64),
	/// `f32` value.
	Float32(f32),
	/// `f64` value.
	Float64(f64),
	/// Complex number with `f32` parts.
	Complex64(Complex64),
	/// Complex number with `f64` parts.
	Complex128(Complex128),
	/// Text.
	String(&'a str),
	/// Slice whose elements are 8-bit unsigned integers.
	Bytes(&'a [u8]),
	/// Growable sequence.
	List(Vec<&'a dyn Reflect>),
	/// Fixed-length sequence.
	Array(Vec<&'a dyn Reflect>),
	/// Key/value entries in the container's own order.
	Map(Vec<(&'a dyn Reflect, &'a dyn Reflect)>),
	/// Named public fields in declaration order.
	Struct(Vec<(&'static str, &'a dyn Reflect)>),
}

impl ReflectRef<'_> {
	/// Kind label used in error messages.
	pub fn kind_name(&self) -> &'static str {
		match self {
			ReflectRef::Nil => "nil",
			ReflectRef::Pointer(_) => "ptr",
			ReflectRef::Bool(_) => "bool",
			ReflectRef::Int(_) => "int",
			ReflectRef::Uint(_) => "uint",
			ReflectRef::Float32(_) => "float32",
			ReflectRef::Float64(_) => "float64",
			ReflectRef::Complex64(_) => "complex64",
			ReflectRef::Complex128(_) => "complex128",
			ReflectRef::String(_) => "string",
			ReflectRef::Bytes(_) | ReflectRef::List(_) => "slice",
			ReflectRef::Array(_) => "array",
			ReflectRef::Map(_) => "map",
			ReflectRef::Struct(_) => "struct",
		}
	}
}

/// Implement [`Reflect`] for a struct with named fields.
///
/// Every listed field must itself implement [`Reflect`]; fields render in the
/// order given.
///
/// ```
/// use logfield::field::Field;
///
/// struct Point {
/// 	x: i32,
/// 	y: i32,
/// }
/// logfield::reflect_struct!(Point { x, y });
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(Field::reflect(&point).to_json().unwrap(), r#"{"x":1,"y":2}"#);
/// ```
#[macro_export]
macro_rules! reflect_struct {
	($ty:ty { $($field:ident),* $(,)? }) => {
		impl $crate::field::Reflect for $ty {
			fn reflect_ref(&self) -> $crate::field::ReflectRef<'_> {
				$crate::field::ReflectRef::Struct(vec![
					$((stringify!($field), &self.$field as &dyn $crate::field::Reflect)),*
				])
			}
		}
	};
}
