//! Design tokens: colors, typography, spacing, opacity and stacking layers.
//!
//! One canonical [`Theme`] ships with the crate. It is made available to
//! rendering code through a binding, either per thread ([`provide`] /
//! [`active_theme`]) or per gpui app ([`ThemeExt`]).

mod schema;
pub use schema::*;

mod color;
pub use color::*;

mod deserializers;

mod error;
pub use error::*;

mod scope;
pub use scope::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod export;
