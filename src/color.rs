//! Packed RGB/RGBA colors for classification labels.
//!
//! Colors are stored as a single `0xAARRGGBB` integer wrapped in [Color].
//! All constructors clamp their channel inputs to `0..=255`, so building a
//! color never fails.

use std::fmt;

/// Clamps an integer channel value into the 8-bit range.
///
/// # Examples
/// ```
/// # use classlabel::color::clamp_channel;
/// assert_eq!(clamp_channel(-3), 0);
/// assert_eq!(clamp_channel(128), 128);
/// assert_eq!(clamp_channel(300), 255);
/// ```
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Packs red, green and blue into an opaque `0xAARRGGBB` integer.
pub fn pack_rgb(r: i32, g: i32, b: i32) -> u32 {
    pack_rgba(r, g, b, 255)
}

/// Packs red, green, blue and alpha into a `0xAARRGGBB` integer.
///
/// # Examples
/// ```
/// # use classlabel::color::pack_rgba;
/// assert_eq!(pack_rgba(255, 0, 0, 255), 0xFFFF_0000);
/// assert_eq!(pack_rgba(0, 0, 400, -1), 0x0000_00FF);
/// ```
pub fn pack_rgba(r: i32, g: i32, b: i32, a: i32) -> u32 {
    (u32::from(clamp_channel(a)) << 24)
        | (u32::from(clamp_channel(r)) << 16)
        | (u32::from(clamp_channel(g)) << 8)
        | u32::from(clamp_channel(b))
}

/// Unpacks a `0xAARRGGBB` integer into `[r, g, b, a]`.
pub fn unpack(packed: u32) -> [u8; 4] {
    let [a, r, g, b] = packed.to_be_bytes();
    [r, g, b, a]
}

/// Multiplies the red, green and blue channels of a packed color by `factor`.
///
/// Each scaled channel is clamped to `0..=255` and truncated towards zero.
/// Alpha is copied unchanged.
///
/// # Examples
/// ```
/// # use classlabel::color::{pack_rgb, scale_rgb, unpack};
/// let scaled = scale_rgb(pack_rgb(200, 50, 50), 1.25);
/// assert_eq!(unpack(scaled), [250, 62, 62, 255]);
/// ```
pub fn scale_rgb(packed: u32, factor: f64) -> u32 {
    let [r, g, b, a] = unpack(packed);
    let scale = |channel: u8| -> i32 { (f64::from(channel) * factor).clamp(0.0, 255.0) as i32 };
    pack_rgba(scale(r), scale(g), scale(b), i32::from(a))
}

// =#========================================================================#=
// COLOR
// =#========================================================================#=
/// A packed `0xAARRGGBB` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const CYAN: Color = Color(0xFF00_FFFF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Creates an opaque color, clamping each channel to `0..=255`.
    pub fn rgb(r: i32, g: i32, b: i32) -> Self {
        Color(pack_rgb(r, g, b))
    }

    /// Creates a color with alpha, clamping each channel to `0..=255`.
    pub fn rgba(r: i32, g: i32, b: i32, a: i32) -> Self {
        Color(pack_rgba(r, g, b, a))
    }

    /// Wraps an already packed `0xAARRGGBB` value.
    pub const fn from_packed(packed: u32) -> Self {
        Color(packed)
    }

    /// Returns the packed `0xAARRGGBB` value.
    pub const fn packed(self) -> u32 {
        self.0
    }

    pub fn red(self) -> u8 {
        unpack(self.0)[0]
    }

    pub fn green(self) -> u8 {
        unpack(self.0)[1]
    }

    pub fn blue(self) -> u8 {
        unpack(self.0)[2]
    }

    pub fn alpha(self) -> u8 {
        unpack(self.0)[3]
    }

    /// Returns the channels as `[r, g, b, a]`.
    pub fn channels(self) -> [u8; 4] {
        unpack(self.0)
    }

    /// Returns `true` if alpha is 255.
    pub fn is_opaque(self) -> bool {
        self.alpha() == u8::MAX
    }

    /// Returns this color with red, green and blue scaled by `factor`.
    ///
    /// See [scale_rgb] for clamping behavior.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Color(scale_rgb(self.0, factor))
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Formats as `#RRGGBB` for opaque colors and `#AARRGGBB` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}
