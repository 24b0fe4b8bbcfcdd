use std::fmt;

use crate::field::render::{format_f32, format_f64};

/// Complex number with `f32` parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex64 {
	/// Real part.
	pub re: f32,
	/// Imaginary part.
	pub im: f32,
}

/// Complex number with `f64` parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex128 {
	/// Real part.
	pub re: f64,
	/// Imaginary part.
	pub im: f64,
}

impl Complex64 {
	/// Build from real and imaginary parts.
	pub const fn new(re: f32, im: f32) -> Self {
		Self { re, im }
	}

	/// Render as `re+imi` without surrounding parentheses.
	pub fn bare(&self) -> String {
		join_parts(format_f32(self.re), format_f32(self.im))
	}
}

impl Complex128 {
	/// Build from real and imaginary parts.
	pub const fn new(re: f64, im: f64) -> Self {
		Self { re, im }
	}

	/// Render as `re+imi` without surrounding parentheses.
	pub fn bare(&self) -> String {
		join_parts(format_f64(self.re), format_f64(self.im))
	}
}

impl From<Complex64> for Complex128 {
	fn from(value: Complex64) -> Self {
		Self {
			re: f64::from(value.re),
			im: f64::from(value.im),
		}
	}
}

impl fmt::Display for Complex64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.bare())
	}
}

impl fmt::Display for Complex128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.bare())
	}
}

// The imaginary part always carries an explicit sign.
fn join_parts(re: String, im: String) -> String {
	if im.starts_with('-') || im.starts_with('+') {
		format!("{re}{im}i")
	} else {
		format!("{re}+{im}i")
	}
}
