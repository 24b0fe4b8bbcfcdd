use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate};

use super::{display, json, text};
use crate::field::{Complex64, Complex128, FieldError, RawJson, Timestamp};

struct Inner {
	flag: bool,
}
crate::reflect_struct!(Inner { flag });

struct Outer {
	name: &'static str,
	inner: Inner,
	next: Option<Box<Inner>>,
	scores: [u8; 2],
}
crate::reflect_struct!(Outer { name, inner, next, scores });

#[test]
fn complex_numbers_display_but_do_not_encode() {
	let value = Complex128::new(1.0, -2.5);
	assert_eq!(display(&value), "(1-2.5i)");
	assert_eq!(text(&value), "(1-2.5i)");
	assert!(matches!(json(&value), Err(FieldError::UnsupportedType { kind: "complex128" })));
	assert!(matches!(json(&Complex64::new(0.0, 1.0)), Err(FieldError::UnsupportedType { kind: "complex64" })));
}

#[test]
fn byte_slices_encode_as_base64() {
	let value = "Hello, Wörld!".as_bytes().to_vec();
	assert_eq!(json(&value).expect("json renders"), "\"SGVsbG8sIFfDtnJsZCE=\"");
	assert_eq!(text(&value), "SGVsbG8sIFfDtnJsZCE=");
	assert_eq!(display(&b"Hi".to_vec()), "[72 105]");
	assert_eq!(json(&Vec::<u8>::new()).expect("json renders"), "\"\"");
}

#[test]
fn byte_arrays_encode_as_number_arrays() {
	assert_eq!(json(&[1_u8, 2]).expect("json renders"), "[1,2]");
}

#[test]
fn runes_render_as_code_points() {
	let value: Vec<char> = "Hi".chars().collect();
	assert_eq!(display(&value), "[72 105]");
	assert_eq!(text(&value), "[72 105]");
	assert_eq!(json(&value).expect("json renders"), "[72,105]");
}

#[test]
fn durations_encode_as_nanosecond_integers() {
	let value = Duration::from_nanos(42);
	assert_eq!(display(&value), "42ns");
	assert_eq!(text(&value), "42ns");
	assert_eq!(json(&value).expect("json renders"), "42");
}

#[test]
fn time_displays_verbose_but_encodes_rfc3339() {
	let at = NaiveDate::from_ymd_opt(2024, 1, 2)
		.and_then(|date| date.and_hms_nano_opt(3, 4, 5, 6_000))
		.expect("valid date");

	let utc = at.and_utc();
	assert_eq!(display(&utc), "2024-01-02 03:04:05.000006 +0000 UTC");
	assert_eq!(text(&utc), "2024-01-02 03:04:05.000006 +0000 UTC");
	assert_eq!(json(&utc).expect("json renders"), "\"2024-01-02T03:04:05.000006Z\"");

	let offset = FixedOffset::east_opt(-3600).expect("valid offset");
	let local = Timestamp::with_zone(at.and_local_timezone(offset).single().expect("unambiguous"), "XST");
	assert_eq!(display(&local), "2024-01-02 03:04:05.000006 -0100 XST");
	assert_eq!(json(&local).expect("json renders"), "\"2024-01-02T03:04:05.000006-01:00\"");
}

#[test]
fn structs_encode_fields_by_name() {
	let value = Outer {
		name: "a\"b",
		inner: Inner { flag: true },
		next: None,
		scores: [3, 4],
	};
	assert_eq!(display(&value), "{a\"b {true} <nil> [3 4]}");
	assert_eq!(
		json(&value).expect("json renders"),
		r#"{"name":"a\"b","inner":{"flag":true},"next":null,"scores":[3,4]}"#
	);
}

#[test]
fn nested_pointers_render_their_targets() {
	let value = Outer {
		name: "",
		inner: Inner { flag: false },
		next: Some(Box::new(Inner { flag: true })),
		scores: [0, 0],
	};
	assert_eq!(display(&value), "{ {false} {true} [0 0]}");
	assert!(json(&value).expect("json renders").contains(r#""next":{"flag":true}"#));
}

#[test]
fn maps_sort_keys() {
	let value = BTreeMap::from([("b", 2_i32), ("a", 1)]);
	assert_eq!(display(&value), "map[a:1 b:2]");
	assert_eq!(json(&value).expect("json renders"), r#"{"a":1,"b":2}"#);

	let numbered = HashMap::from([(10_u32, "x"), (2, "y")]);
	assert_eq!(json(&numbered).expect("json renders"), r#"{"10":"x","2":"y"}"#);
}

#[test]
fn maps_with_non_scalar_keys_do_not_encode() {
	let value = BTreeMap::from([(true, 1_i32)]);
	assert!(matches!(json(&value), Err(FieldError::MapKey { kind: "bool" })));
}

#[test]
fn non_finite_floats_do_not_encode() {
	assert!(matches!(json(&f64::NAN), Err(FieldError::UnsupportedValue { .. })));
	assert_eq!(display(&f32::INFINITY), "+Inf");
	assert_eq!(json(&0.1_f32).expect("json renders"), "0.1");
}

#[test]
fn errors_encode_as_empty_objects() {
	let err = std::io::Error::other("disk full");
	assert_eq!(display(&err), "disk full");
	assert_eq!(json(&err).expect("json renders"), "{}");
}

#[test]
fn raw_json_keeps_its_own_encoding() {
	let raw = RawJson::from("{ \"a\": 1 }");
	assert_eq!(json(&raw).expect("json renders"), r#"{"a":1}"#);
	assert_eq!(display(&RawJson::from("{}")), "[123 125]");
}

#[test]
fn nul_bytes_in_strings_are_escaped() {
	assert_eq!(json(&String::from("a\0b")).expect("json renders"), "\"a\\u0000b\"");
}
