use std::any::Any;
use std::borrow::Cow;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use tracing::trace;

use crate::field::complex::{Complex64, Complex128};
use crate::field::adapter::Repr;
use crate::field::raw::RawJson;
use crate::field::resolve::{Resolved, resolve};
use crate::field::value::{Timestamp, Value, std_duration_nanos, time_delta_nanos};
use crate::field::Reflect;

/// Resolve the pointer chain, then match the value against the closed set of
/// statically supported kinds. Anything else renders reflectively.
pub(crate) fn dispatch(value: &dyn Reflect) -> Repr<'_> {
	let Resolved::Present(value) = resolve(value) else {
		return Repr::Value(Value::Null);
	};

	let any: &dyn Any = value;
	if let Some(raw) = any.downcast_ref::<RawJson>() {
		return Repr::Raw(Some(Cow::Borrowed(raw.as_bytes())));
	}
	if let Some(resolved) = static_value(value) {
		return Repr::Value(resolved);
	}

	trace!(type_name = value.type_name(), "no static kind, rendering reflectively");
	Repr::Reflective(Resolved::Present(value))
}

macro_rules! switch_kinds {
	($any:expr; $($ty:ty => |$v:ident| $conv:expr),+ $(,)?) => {
		$(if let Some($v) = $any.downcast_ref::<$ty>() {
			return Some($conv);
		})+
	};
}

fn static_value(value: &dyn Reflect) -> Option<Value> {
	let any: &dyn Any = value;
	switch_kinds!(any;
		bool => |v| Value::Bool(*v),
		i8 => |v| Value::I64(i64::from(*v)),
		i16 => |v| Value::I64(i64::from(*v)),
		i32 => |v| Value::I64(i64::from(*v)),
		i64 => |v| Value::I64(*v),
		isize => |v| Value::I64(*v as i64),
		u8 => |v| Value::U64(u64::from(*v)),
		u16 => |v| Value::U64(u64::from(*v)),
		u32 => |v| Value::U64(u64::from(*v)),
		u64 => |v| Value::U64(*v),
		usize => |v| Value::U64(*v as u64),
		f32 => |v| Value::F32(*v),
		f64 => |v| Value::F64(*v),
		Complex64 => |v| Value::Complex64(*v),
		Complex128 => |v| Value::Complex128(*v),
		char => |v| Value::String(v.to_string().into()),
		String => |v| Value::String(v.as_str().into()),
		&'static str => |v| Value::String((*v).into()),
		Box<str> => |v| Value::String(v.clone()),
		Vec<u8> => |v| Value::Bytes(v.clone()),
		Vec<char> => |v| Value::Runes(v.clone()),
		std::time::Duration => |v| Value::Duration(std_duration_nanos(*v)),
		TimeDelta => |v| Value::Duration(time_delta_nanos(*v)),
		Timestamp => |v| Value::Time(v.clone()),
		DateTime<Utc> => |v| Value::Time((*v).into()),
		DateTime<FixedOffset> => |v| Value::Time((*v).into()),
		SystemTime => |v| Value::Time((*v).into()),
	);

	value.as_error().map(|err| Value::Error(err.to_string().into()))
}

#[cfg(test)]
mod tests;
