use std::time::Duration;

use chrono::{NaiveDate, TimeDelta};

use crate::field::adapter::Repr;
use crate::field::dispatch::dispatch;
use crate::field::{Complex64, RawJson, Reflect, Value};

fn static_value(value: &dyn Reflect) -> Value {
	match dispatch(value) {
		Repr::Value(value) => value,
		Repr::Raw(_) => panic!("unexpected raw dispatch"),
		Repr::Reflective(_) => panic!("unexpected reflective fallback"),
	}
}

#[test]
fn integers_of_every_width_dispatch_statically() {
	assert_eq!(static_value(&-8_i8), Value::I64(-8));
	assert_eq!(static_value(&-16_i16), Value::I64(-16));
	assert_eq!(static_value(&-32_i32), Value::I64(-32));
	assert_eq!(static_value(&i64::MIN), Value::I64(i64::MIN));
	assert_eq!(static_value(&-1_isize), Value::I64(-1));
	assert_eq!(static_value(&8_u8), Value::U64(8));
	assert_eq!(static_value(&u64::MAX), Value::U64(u64::MAX));
	assert_eq!(static_value(&7_usize), Value::U64(7));
}

#[test]
fn text_like_kinds_keep_their_semantics() {
	assert_eq!(static_value(&"hi"), Value::String("hi".into()));
	assert_eq!(static_value(&String::from("hi")), Value::String("hi".into()));
	assert_eq!(static_value(&'é'), Value::String("é".into()));
	assert_eq!(static_value(&b"hi".to_vec()), Value::Bytes(b"hi".to_vec()));
	assert_eq!(static_value(&vec!['h', 'i']), Value::Runes(vec!['h', 'i']));
}

#[test]
fn time_and_duration_kinds_dispatch_statically() {
	assert_eq!(static_value(&Duration::from_nanos(42)), Value::Duration(42));
	assert_eq!(static_value(&TimeDelta::nanoseconds(-42)), Value::Duration(-42));

	let at = NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|date| date.and_hms_opt(3, 4, 5)).expect("valid date").and_utc();
	assert_eq!(static_value(&at), Value::Time(at.into()));
}

#[test]
fn complex_and_float_widths_are_kept() {
	assert_eq!(static_value(&Complex64::new(1.0, 2.0)), Value::Complex64(Complex64::new(1.0, 2.0)));
	assert_eq!(static_value(&0.1_f32), Value::F32(0.1));
}

#[test]
fn errors_dispatch_by_message() {
	let err: Box<dyn std::error::Error + Send + Sync> = "boom".into();
	assert_eq!(static_value(&err), Value::Error("boom".into()));
}

#[test]
fn nil_chains_dispatch_to_null() {
	assert_eq!(static_value(&()), Value::Null);
	assert_eq!(static_value(&None::<i64>), Value::Null);
	assert_eq!(static_value(&Some(Box::new(None::<String>))), Value::Null);
}

#[test]
fn pointer_chains_dispatch_on_the_target_kind() {
	assert_eq!(static_value(&Some(Box::new(Some(3_u16)))), Value::U64(3));
}

#[test]
fn raw_json_dispatches_to_passthrough() {
	let raw = RawJson::from("{}");
	assert!(matches!(dispatch(&raw), Repr::Raw(Some(bytes)) if &bytes[..] == b"{}"));
}

#[test]
fn unknown_kinds_fall_back_to_reflection() {
	assert!(matches!(dispatch(&[1_u8, 2]), Repr::Reflective(_)));
	assert!(matches!(dispatch(&vec![1_i32]), Repr::Reflective(_)));
	assert!(matches!(dispatch(&serde_json::json!({"a": 1})), Repr::Reflective(_)));
}
