mod adapter;
mod complex;
mod dispatch;
mod error;
mod raw;
mod record;
mod reflect;
mod reflective;
pub mod render;
mod resolve;
mod value;

/// Field adapter and its constructors.
pub use adapter::Field;
/// Complex number types.
pub use complex::{Complex64, Complex128};
/// Error and result aliases.
pub use error::{FieldError, Result};
/// Raw JSON payload type and validation entry point.
pub use raw::{RawJson, embed};
/// Record assembly and display line options.
pub use record::{LineOptions, Record};
/// Runtime introspection trait and structural view.
pub use reflect::{Reflect, ReflectRef};
/// Pointer chain resolution.
pub use resolve::{Resolved, resolve};
/// Statically known value kinds.
pub use value::{Timestamp, Value};
