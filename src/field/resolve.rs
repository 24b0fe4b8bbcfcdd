use crate::field::{Reflect, ReflectRef};

/// Outcome of walking a pointer chain.
#[derive(Clone, Copy)]
pub enum Resolved<'a> {
	/// Nil at some level of the chain, or an untyped nil.
	Absent,
	/// First non-pointer value reached.
	Present(&'a dyn Reflect),
}

impl<'a> Resolved<'a> {
	/// Resolved value, if any.
	pub fn present(self) -> Option<&'a dyn Reflect> {
		match self {
			Resolved::Absent => None,
			Resolved::Present(value) => Some(value),
		}
	}
}

/// Dereference `value` until it is no longer a pointer.
///
/// Stops at the first nil level, so a non-nil pointer to a nil pointer is
/// still [`Resolved::Absent`].
pub fn resolve(value: &dyn Reflect) -> Resolved<'_> {
	let mut current = value;
	loop {
		match current.reflect_ref() {
			ReflectRef::Nil | ReflectRef::Pointer(None) => return Resolved::Absent,
			ReflectRef::Pointer(Some(next)) => current = next,
			_ => return Resolved::Present(current),
		}
	}
}
