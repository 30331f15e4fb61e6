use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a CSS color string, which is what the charting runtime expects
/// for every color-valued option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    /// Same hue with a replaced alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// 8-bit channel values, rounded.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }

    /// `#rrggbb` for opaque colors, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.alpha)
        }
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_css(input));
        }

        let (body, expects_alpha) = if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            (body, true)
        } else if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            (body, false)
        } else {
            return Err(invalid_css(input));
        };

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid_css(input));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| invalid_css(input))?;
        }
        let alpha = if expects_alpha {
            parts[3].parse::<f64>().map_err(|_| invalid_css(input))?
        } else {
            1.0
        };

        let color = Self::rgba8(channels[0], channels[1], channels[2], alpha);
        color.validate()?;
        Ok(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_css(&raw).map_err(serde::de::Error::custom)
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = match hex.len() {
        3 => hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
            .collect::<Option<_>>()?,
        6 => (0..3)
            .map(|i| u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };
    Some(Color::rgb8(digits[0], digits[1], digits[2]))
}

fn invalid_css(input: &str) -> ChartError {
    ChartError::InvalidData(format!("unsupported css color `{input}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(Color::rgb8(0, 123, 255).to_css(), "#007bff");
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        assert_eq!(
            Color::rgb8(0, 123, 255).with_alpha(0.5).to_css(),
            "rgba(0, 123, 255, 0.5)"
        );
        assert_eq!(
            Color::rgb8(0, 123, 255).with_alpha(0.0).to_css(),
            "rgba(0, 123, 255, 0)"
        );
    }

    #[test]
    fn parses_supported_css_forms() {
        assert_eq!(
            Color::parse_css("#007bff").expect("hex"),
            Color::rgb8(0, 123, 255)
        );
        assert_eq!(Color::parse_css("#fff").expect("short hex"), Color::rgb8(255, 255, 255));
        assert_eq!(
            Color::parse_css("rgba(0, 0, 0, 0.05)").expect("rgba"),
            Color::rgba8(0, 0, 0, 0.05)
        );
        assert!(Color::parse_css("hsl(0, 0%, 0%)").is_err());
        assert!(Color::parse_css("rgba(0, 0, 0, 2)").is_err());
    }
}
