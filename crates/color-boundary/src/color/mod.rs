//! Color representations and conversions
//!
//! A [`ColorValue`] is a plain triple tagged with its [`ColorFormat`]. Any
//! value converts to any other format through CIE XYZ:
//!
//! ```
//! use color_boundary::{ColorFormat, ColorValue};
//!
//! let srgb = ColorValue::from_u8(210, 121, 117);
//! let p3 = srgb.convert(ColorFormat::DisplayP3255);
//! let back = p3.convert(ColorFormat::Srgb255);
//! assert!((back.components[0] - 210.0).abs() < 0.01);
//! ```

pub mod convert;
mod error;
mod format;
pub mod matrix;
pub mod transfer;
mod value;

pub use convert::convert;
pub use error::{ParseColorError, ParseFormatError};
pub use format::ColorFormat;
pub use value::ColorValue;
