//! Specified values
//!
//! This module implements the value types carried by declarations and style
//! nodes:
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS 2.1 § 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)

mod display;
mod values;

pub use display::Display;
pub use values::{ColorValue, Unit, Value};
