use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

use crate::field::complex::{Complex64, Complex128};
use crate::field::render::{check_year, format_duration, format_rfc3339, format_verbose, quote_json};
use crate::field::value::{Timestamp, std_duration_nanos, time_delta_nanos};
use crate::field::{Reflect, ReflectRef, Result};

impl Reflect for () {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Nil
	}
}

impl Reflect for bool {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Bool(*self)
	}
}

macro_rules! impl_reflect_number {
	($variant:ident as $repr:ty: $($ty:ty),+) => {
		$(impl Reflect for $ty {
			fn reflect_ref(&self) -> ReflectRef<'_> {
				ReflectRef::$variant(*self as $repr)
			}
		})+
	};
}

impl_reflect_number!(Int as i64: i8, i16, i32, i64, isize);
impl_reflect_number!(Uint as u64: u8, u16, u32, u64, usize);

impl Reflect for char {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Int(i64::from(u32::from(*self)))
	}
}

impl Reflect for f32 {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Float32(*self)
	}
}

impl Reflect for f64 {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Float64(*self)
	}
}

impl Reflect for Complex64 {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Complex64(*self)
	}
}

impl Reflect for Complex128 {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Complex128(*self)
	}
}

impl Reflect for String {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::String(self)
	}
}

impl Reflect for &'static str {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::String(self)
	}
}

impl Reflect for Box<str> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::String(self)
	}
}

impl<T: Reflect> Reflect for Vec<T> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		if let Some(bytes) = (self as &dyn Any).downcast_ref::<Vec<u8>>() {
			return ReflectRef::Bytes(bytes);
		}
		ReflectRef::List(self.iter().map(|item| item as &dyn Reflect).collect())
	}
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Array(self.iter().map(|item| item as &dyn Reflect).collect())
	}
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Map(self.iter().map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)).collect())
	}
}

impl<K: Reflect, V: Reflect, S: Send + Sync + 'static> Reflect for HashMap<K, V, S> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Map(self.iter().map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)).collect())
	}
}

impl<T: Reflect> Reflect for Option<T> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Pointer(self.as_ref().map(|item| item as &dyn Reflect))
	}
}

impl<T: Reflect> Reflect for Box<T> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Pointer(Some(&**self))
	}
}

impl Reflect for Box<dyn Reflect> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Pointer(Some(&**self))
	}
}

impl<T: Reflect> Reflect for Arc<T> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Pointer(Some(&**self))
	}
}

// Durations are integers underneath; only their display method knows units.
impl Reflect for std::time::Duration {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Int(std_duration_nanos(*self))
	}

	fn reflect_display(&self) -> Option<String> {
		Some(format_duration(std_duration_nanos(*self)))
	}
}

impl Reflect for TimeDelta {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Int(time_delta_nanos(*self))
	}

	fn reflect_display(&self) -> Option<String> {
		Some(format_duration(time_delta_nanos(*self)))
	}
}

// Time values have no public fields; both hooks take over.
macro_rules! impl_reflect_time {
	($($ty:ty),+) => {
		$(impl Reflect for $ty {
			fn reflect_ref(&self) -> ReflectRef<'_> {
				ReflectRef::Struct(Vec::new())
			}

			fn reflect_display(&self) -> Option<String> {
				Some(format_verbose(&Timestamp::from(self.clone())))
			}

			fn reflect_json(&self) -> Option<Result<String>> {
				Some(time_json(&Timestamp::from(self.clone())))
			}
		})+
	};
}

impl_reflect_time!(Timestamp, DateTime<Utc>, DateTime<FixedOffset>, SystemTime);

fn time_json(value: &Timestamp) -> Result<String> {
	quote_json(&format_rfc3339(check_year(value)?))
}

impl Reflect for std::io::Error {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Struct(Vec::new())
	}

	fn reflect_display(&self) -> Option<String> {
		Some(self.to_string())
	}

	fn as_error(&self) -> Option<&(dyn Error + 'static)> {
		Some(self)
	}
}

impl Reflect for Box<dyn Error + Send + Sync> {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Struct(Vec::new())
	}

	fn reflect_display(&self) -> Option<String> {
		Some(self.to_string())
	}

	fn as_error(&self) -> Option<&(dyn Error + 'static)> {
		Some(&**self)
	}
}

impl Reflect for serde_json::Value {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		match self {
			serde_json::Value::Null => ReflectRef::Nil,
			serde_json::Value::Bool(v) => ReflectRef::Bool(*v),
			serde_json::Value::Number(v) => {
				if let Some(int) = v.as_i64() {
					ReflectRef::Int(int)
				} else if let Some(uint) = v.as_u64() {
					ReflectRef::Uint(uint)
				} else {
					ReflectRef::Float64(v.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(v) => ReflectRef::String(v),
			serde_json::Value::Array(items) => ReflectRef::List(items.iter().map(|item| item as &dyn Reflect).collect()),
			serde_json::Value::Object(map) => ReflectRef::Map(map.iter().map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)).collect()),
		}
	}
}
