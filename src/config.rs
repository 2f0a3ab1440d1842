use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{TrifillError, TrifillResult};

/// Straight-alpha color in normalized `0..1` channels.
///
/// Deserializes from `"#RRGGBB"` / `"#RRGGBBAA"` hex, an `{r, g, b, a?}`
/// object, or a `[r, g, b]` / `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    /// Red, `0..1`.
    pub r: f64,
    /// Green, `0..1`.
    pub g: f64,
    /// Blue, `0..1`.
    pub b: f64,
    /// Alpha, `0..1`.
    pub a: f64,
}

impl Color {
    /// Build from normalized channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    /// Convert to premultiplied RGBA8 as consumed by the surface.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let a = self.a.clamp(0.0, 1.0);
        Rgba8Premul {
            r: to_u8(self.r.clamp(0.0, 1.0) * a),
            g: to_u8(self.g.clamp(0.0, 1.0) * a),
            b: to_u8(self.b.clamp(0.0, 1.0) * a),
            a: to_u8(a),
        }
    }

    /// Straight-alpha 8-bit channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::rgba(v[0], v[1], v[2], 1.0))
                } else if v.len() == 4 {
                    Ok(Self::rgba(v[0], v[1], v[2], v[3]))
                } else {
                    Err(serde::de::Error::custom(
                        "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                    ))
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match s.len() {
        6 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            (r, g, b, 255)
        }
        8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = hex_byte(&s[6..8])?;
            (r, g, b, a)
        }
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

/// Immutable stage parameters.
///
/// Defaults reproduce the classic look: five nodes of two mirrored triangles,
/// deep-purple strokes on a grey background, half-cycle fill then rotation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageConfig {
    /// Number of nodes in the vertical chain.
    pub nodes: usize,
    /// Mirrored triangles drawn per node.
    pub triangles: usize,
    /// Per-tick scale increment applied while animating.
    pub sc_gap: f64,
    /// Divisor splitting a cycle into its slow and fast halves.
    pub sc_div: f64,
    /// Stroke width is `min(viewport sides) / stroke_factor`.
    pub stroke_factor: f64,
    /// Node size is `vertical gap / size_factor`.
    pub size_factor: f64,
    /// Stroke and fill color.
    pub fore_color: Color,
    /// Background clear color.
    pub back_color: Color,
    /// Animator tick period in milliseconds.
    pub tick_period_ms: u64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            nodes: 5,
            triangles: 2,
            sc_gap: 0.05,
            sc_div: 0.51,
            stroke_factor: 90.0,
            size_factor: 2.9,
            fore_color: Color::from_rgb8(0x67, 0x3A, 0xB7),
            back_color: Color::from_rgb8(0xBD, 0xBD, 0xBD),
            tick_period_ms: 50,
        }
    }
}

impl StageConfig {
    /// Reject configurations the state machine and renderer cannot drive.
    pub fn validate(&self) -> TrifillResult<()> {
        if self.nodes == 0 {
            return Err(TrifillError::validation("nodes must be > 0"));
        }
        if self.triangles == 0 {
            return Err(TrifillError::validation("triangles must be > 0"));
        }
        if !(self.sc_gap > 0.0) {
            return Err(TrifillError::validation("sc_gap must be > 0"));
        }
        if !(self.sc_div > 0.0) {
            return Err(TrifillError::validation("sc_div must be > 0"));
        }
        if !(self.stroke_factor > 0.0) {
            return Err(TrifillError::validation("stroke_factor must be > 0"));
        }
        if !(self.size_factor > 0.0) {
            return Err(TrifillError::validation("size_factor must be > 0"));
        }
        if self.tick_period_ms == 0 {
            return Err(TrifillError::validation("tick_period_ms must be > 0"));
        }
        Ok(())
    }

    /// Animator period as a [`Duration`].
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
