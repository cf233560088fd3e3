//! Color handling for rendered packs.
//!
//! [`Color`] wraps `DynamicColor` from the color crate so style options can be
//! validated up front and written into SVG attributes.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellpack::color::Color;
    ///
    /// assert!(Color::new("#9ecae1").is_ok());
    /// assert!(Color::new("steelblue").is_ok());
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("rgb(0, 128, 255)").is_ok());

        let err = Color::new("bogus").unwrap_err();
        assert!(err.starts_with("invalid color `bogus`"));
    }

    #[test]
    fn test_color_into_svg_value() {
        let value: svg::node::Value = Color::new("black").unwrap().into();
        assert!(!value.to_string().is_empty());
    }
}
