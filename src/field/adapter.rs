use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::field::complex::{Complex64, Complex128};
use crate::field::dispatch::dispatch;
use crate::field::raw::embed;
use crate::field::resolve::{Resolved, resolve};
use crate::field::value::{Timestamp, Value, std_duration_nanos, time_delta_nanos};
use crate::field::{Reflect, Result, reflective};

/// One structured-log field value with display, text and JSON renderings.
///
/// A field is built per log call and never changes afterwards, so rendering
/// it any number of times yields identical output.
pub struct Field<'a> {
	repr: Repr<'a>,
}

pub(crate) enum Repr<'a> {
	Value(Value),
	Raw(Option<Cow<'a, [u8]>>),
	Reflective(Resolved<'a>),
}

macro_rules! copy_constructors {
	($($name:ident, $ptr:ident: $ty:ty => |$v:ident| $conv:expr;)+) => {
		$(
			#[doc = concat!("Wrap a `", stringify!($ty), "`.")]
			pub fn $name($v: $ty) -> Self {
				Self::value($conv)
			}

			#[doc = concat!("Wrap an optional `", stringify!($ty), "`; `None` renders as null.")]
			pub fn $ptr(value: Option<&$ty>) -> Self {
				match value {
					Some(item) => Self::$name(*item),
					None => Self::null(),
				}
			}
		)+
	};
}

impl<'a> Field<'a> {
	/// Explicit null.
	pub fn null() -> Self {
		Self::value(Value::Null)
	}

	/// Wrap an already resolved value.
	pub fn value(value: Value) -> Self {
		Self { repr: Repr::Value(value) }
	}

	/// Wrap a value of any reflectable type, rendering it with the formatting
	/// of its static kind when it has one.
	///
	/// Pointer levels are followed first; a nil at any level renders as null.
	/// Types outside the static kind set render like [`Field::reflect`].
	pub fn any(value: &'a dyn Reflect) -> Self {
		Self { repr: dispatch(value) }
	}

	/// Wrap a value of any reflectable type, rendering it with generic
	/// structural encoding regardless of its kind.
	pub fn reflect(value: &'a dyn Reflect) -> Self {
		Self {
			repr: Repr::Reflective(resolve(value)),
		}
	}

	/// Wrap pre-serialized JSON; `None` renders as null.
	///
	/// The bytes are only validated when the JSON rendering is requested.
	pub fn raw(bytes: Option<&'a [u8]>) -> Self {
		Self {
			repr: Repr::Raw(bytes.map(Cow::Borrowed)),
		}
	}

	/// Owned form of [`Field::raw`].
	pub fn raw_owned(bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			repr: Repr::Raw(Some(Cow::Owned(bytes.into()))),
		}
	}

	copy_constructors! {
		bool, bool_ptr: bool => |v| Value::Bool(v);
		i8, i8_ptr: i8 => |v| Value::I64(i64::from(v));
		i16, i16_ptr: i16 => |v| Value::I64(i64::from(v));
		i32, i32_ptr: i32 => |v| Value::I64(i64::from(v));
		i64, i64_ptr: i64 => |v| Value::I64(v);
		isize, isize_ptr: isize => |v| Value::I64(v as i64);
		u8, u8_ptr: u8 => |v| Value::U64(u64::from(v));
		u16, u16_ptr: u16 => |v| Value::U64(u64::from(v));
		u32, u32_ptr: u32 => |v| Value::U64(u64::from(v));
		u64, u64_ptr: u64 => |v| Value::U64(v);
		usize, usize_ptr: usize => |v| Value::U64(v as u64);
		f32, f32_ptr: f32 => |v| Value::F32(v);
		f64, f64_ptr: f64 => |v| Value::F64(v);
		complex64, complex64_ptr: Complex64 => |v| Value::Complex64(v);
		complex128, complex128_ptr: Complex128 => |v| Value::Complex128(v);
		duration, duration_ptr: std::time::Duration => |v| Value::Duration(std_duration_nanos(v));
		time_delta, time_delta_ptr: chrono::TimeDelta => |v| Value::Duration(time_delta_nanos(v));
	}

	/// Wrap a string.
	pub fn string(value: &str) -> Self {
		Self::value(Value::String(value.into()))
	}

	/// Wrap an optional string; `None` renders as null.
	pub fn string_ptr(value: Option<&str>) -> Self {
		value.map_or_else(Self::null, Self::string)
	}

	/// Wrap bytes rendered as UTF-8 text.
	pub fn bytes(value: &[u8]) -> Self {
		Self::value(Value::Bytes(value.to_vec()))
	}

	/// Wrap optional bytes; `None` renders as null.
	pub fn bytes_ptr(value: Option<&[u8]>) -> Self {
		value.map_or_else(Self::null, Self::bytes)
	}

	/// Wrap runes rendered as UTF-8 text.
	pub fn runes(value: &[char]) -> Self {
		Self::value(Value::Runes(value.to_vec()))
	}

	/// Wrap optional runes; `None` renders as null.
	pub fn runes_ptr(value: Option<&[char]>) -> Self {
		value.map_or_else(Self::null, Self::runes)
	}

	/// Wrap an error by its message.
	pub fn error(value: &dyn Error) -> Self {
		Self::value(Value::Error(value.to_string().into()))
	}

	/// Wrap an optional error; `None` renders as null.
	pub fn error_ptr(value: Option<&dyn Error>) -> Self {
		value.map_or_else(Self::null, Self::error)
	}

	/// Wrap a point in time.
	pub fn time(value: impl Into<Timestamp>) -> Self {
		Self::value(Value::Time(value.into()))
	}

	/// Wrap an optional point in time; `None` renders as null.
	pub fn time_ptr<T: Clone + Into<Timestamp>>(value: Option<&T>) -> Self {
		value.map_or_else(Self::null, |item| Self::time(item.clone()))
	}

	/// Human-readable display string.
	pub fn to_display(&self) -> String {
		match &self.repr {
			Repr::Value(value) => value.to_display(),
			Repr::Raw(Some(bytes)) => String::from_utf8_lossy(bytes).into_owned(),
			Repr::Raw(None) | Repr::Reflective(Resolved::Absent) => "null".to_owned(),
			Repr::Reflective(Resolved::Present(value)) => reflective::display(*value),
		}
	}

	/// Text encoding.
	pub fn to_text(&self) -> String {
		match &self.repr {
			Repr::Value(value) => value.to_text(),
			Repr::Reflective(Resolved::Present(value)) => reflective::text(*value),
			Repr::Raw(_) | Repr::Reflective(Resolved::Absent) => self.to_display(),
		}
	}

	/// JSON encoding; the only rendering that can fail.
	pub fn to_json(&self) -> Result<String> {
		match &self.repr {
			Repr::Value(value) => value.to_json(),
			Repr::Raw(Some(bytes)) => embed(bytes),
			Repr::Raw(None) | Repr::Reflective(Resolved::Absent) => Ok("null".to_owned()),
			Repr::Reflective(Resolved::Present(value)) => reflective::json(*value),
		}
	}

	/// Whether every rendering is null.
	pub fn is_null(&self) -> bool {
		matches!(
			self.repr,
			Repr::Value(Value::Null) | Repr::Raw(None) | Repr::Reflective(Resolved::Absent)
		)
	}
}

impl From<Value> for Field<'_> {
	fn from(value: Value) -> Self {
		Self::value(value)
	}
}

impl fmt::Display for Field<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_display())
	}
}

impl fmt::Debug for Field<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Field").field(&self.to_display()).finish()
	}
}

#[cfg(test)]
mod tests;
