use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;

use crate::field::{Complex64, Complex128, Field, FieldError, RawJson};

fn triple(field: &Field<'_>) -> (String, String, String) {
	(field.to_display(), field.to_text(), field.to_json().expect("json renders"))
}

fn null_triple() -> (String, String, String) {
	("null".to_owned(), "null".to_owned(), "null".to_owned())
}

#[test]
fn static_json_matches_native_json_encoding() {
	let tabbed = String::from("tab\there");
	let cases: Vec<(Field<'_>, serde_json::Value)> = vec![
		(Field::any(&42_i64), json!(42)),
		(Field::any(&-7_i8), json!(-7)),
		(Field::any(&u64::MAX), json!(u64::MAX)),
		(Field::any(&true), json!(true)),
		(Field::any(&1.5_f64), json!(1.5)),
		(Field::any(&0.1_f32), json!(0.1)),
		(Field::any(&""), json!("")),
		(Field::any(&tabbed), json!("tab\there")),
		(Field::any(&()), json!(null)),
	];
	for (field, expected) in cases {
		let rendered = field.to_json().expect("json renders");
		assert_eq!(serde_json::from_str::<serde_json::Value>(&rendered).expect("valid json"), expected, "{rendered}");
	}
}

#[test]
fn nil_pointers_render_null_for_every_constructor() {
	let fields = [
		Field::bool_ptr(None),
		Field::i8_ptr(None),
		Field::i64_ptr(None),
		Field::u32_ptr(None),
		Field::f32_ptr(None),
		Field::f64_ptr(None),
		Field::complex64_ptr(None),
		Field::complex128_ptr(None),
		Field::duration_ptr(None),
		Field::time_delta_ptr(None),
		Field::string_ptr(None),
		Field::bytes_ptr(None),
		Field::runes_ptr(None),
		Field::error_ptr(None),
		Field::time_ptr::<chrono::DateTime<chrono::Utc>>(None),
		Field::raw(None),
		Field::null(),
	];
	for field in &fields {
		assert!(field.is_null());
		assert_eq!(triple(field), null_triple());
	}
}

#[test]
fn nil_pointers_render_null_through_any_and_reflect() {
	let one: Option<i32> = None;
	let two: Option<Box<Option<i32>>> = Some(Box::new(None));
	let outer_nil: Option<Box<Option<i32>>> = None;

	for value in [&one as &dyn crate::field::Reflect, &two, &outer_nil] {
		assert_eq!(triple(&Field::any(value)), null_triple());
		assert_eq!(triple(&Field::reflect(value)), null_triple());
	}
}

#[test]
fn present_pointers_render_their_target() {
	let value = Some(Box::new(Some(5_i32)));
	assert_eq!(Field::any(&value).to_json().expect("json renders"), "5");
	assert_eq!(Field::reflect(&value).to_json().expect("json renders"), "5");
	assert_eq!(Field::i32_ptr(Some(&5)).to_json().expect("json renders"), "5");
}

#[test]
fn complex_numbers_diverge_between_paths() {
	let value = Complex128::new(1.0, 2.0);

	let reflected = Field::reflect(&value);
	assert_eq!(reflected.to_display(), "(1+2i)");
	assert!(matches!(reflected.to_json(), Err(FieldError::UnsupportedType { kind: "complex128" })));

	assert_eq!(triple(&Field::complex128(value)), ("(1+2i)".to_owned(), "(1+2i)".to_owned(), "\"1+2i\"".to_owned()));
	assert_eq!(Field::any(&value).to_json().expect("json renders"), "\"1+2i\"");
	assert_eq!(Field::complex64(Complex64::new(0.5, -1.0)).to_json().expect("json renders"), "\"0.5-1i\"");
}

#[test]
fn byte_sequences_diverge_between_paths() {
	let value = "Hello, Wörld!".as_bytes().to_vec();

	assert_eq!(Field::any(&value).to_json().expect("json renders"), "\"Hello, Wörld!\"");
	assert_eq!(Field::bytes(&value).to_json().expect("json renders"), "\"Hello, Wörld!\"");
	assert_eq!(Field::reflect(&value).to_json().expect("json renders"), "\"SGVsbG8sIFfDtnJsZCE=\"");
}

#[test]
fn rune_sequences_diverge_between_paths() {
	let value: Vec<char> = "Wö".chars().collect();

	assert_eq!(Field::any(&value).to_display(), "Wö");
	assert_eq!(Field::any(&value).to_json().expect("json renders"), "\"Wö\"");
	assert_eq!(Field::reflect(&value).to_display(), "[87 246]");
}

#[test]
fn durations_diverge_between_paths() {
	let value = Duration::from_nanos(42);

	assert_eq!(triple(&Field::any(&value)), ("42ns".to_owned(), "42ns".to_owned(), "\"42ns\"".to_owned()));
	assert_eq!(triple(&Field::reflect(&value)), ("42ns".to_owned(), "42ns".to_owned(), "42".to_owned()));
}

#[test]
fn time_diverges_between_paths() {
	let at = NaiveDate::from_ymd_opt(2024, 5, 6)
		.and_then(|date| date.and_hms_milli_opt(7, 8, 9, 250))
		.expect("valid date")
		.and_utc();

	let stat = Field::any(&at);
	assert_eq!(stat.to_display(), "2024-05-06T07:08:09.25Z");
	assert_eq!(stat.to_text(), "2024-05-06T07:08:09.25Z");
	assert_eq!(stat.to_json().expect("json renders"), "\"2024-05-06T07:08:09.25Z\"");

	let reflected = Field::reflect(&at);
	assert_eq!(reflected.to_display(), "2024-05-06 07:08:09.25 +0000 UTC");
	assert_eq!(reflected.to_text(), "2024-05-06 07:08:09.25 +0000 UTC");
	assert_eq!(reflected.to_json().expect("json renders"), "\"2024-05-06T07:08:09.25Z\"");
}

#[test]
fn raw_payloads_embed_or_fail_at_json_time() {
	let good = Field::raw(Some(&br#"{"foo":"bar"}"#[..]));
	assert_eq!(triple(&good), (r#"{"foo":"bar"}"#.to_owned(), r#"{"foo":"bar"}"#.to_owned(), r#"{"foo":"bar"}"#.to_owned()));

	let bad = Field::raw(Some(&br#"xyz{"foo":"bar"}"#[..]));
	assert_eq!(bad.to_display(), r#"xyz{"foo":"bar"}"#);
	assert_eq!(bad.to_text(), r#"xyz{"foo":"bar"}"#);
	assert!(matches!(bad.to_json(), Err(FieldError::MalformedRaw { .. })));

	let wrapped = RawJson::from("[1, 2]");
	assert_eq!(Field::any(&wrapped).to_json().expect("json renders"), "[1,2]");
	assert_eq!(Field::raw_owned("true").to_json().expect("json renders"), "true");
}

#[test]
fn rendering_is_idempotent() {
	let value = vec![String::from("a"), String::from("b")];
	let field = Field::any(&value);
	let first = triple(&field);
	assert_eq!(triple(&field), first);
	assert_eq!(first.2, r#"["a","b"]"#);
}

#[test]
fn nul_never_reaches_json_output() {
	for field in [Field::string("a\0b"), Field::bytes(b"a\0b"), Field::any(&"a\0b")] {
		let rendered = field.to_json().expect("json renders");
		assert_eq!(rendered, "\"a\\u0000b\"");
		assert!(!rendered.contains('\0'));
	}
}

#[test]
fn errors_render_their_message() {
	let err = std::io::Error::other("disk \"full\"");
	assert_eq!(triple(&Field::error(&err)).2, r#""disk \"full\"""#);
	assert_eq!(Field::any(&err).to_display(), "disk \"full\"");
	assert_eq!(Field::reflect(&err).to_json().expect("json renders"), "{}");
}

#[test]
fn display_trait_matches_display_rendering() {
	assert_eq!(Field::u16(7).to_string(), "7");
	assert_eq!(format!("{:?}", Field::string("x")), "Field(\"x\")");
}
