/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// LEDs have no backdrop to blend against, so alpha acts as an intensity
/// multiplier when a color is converted to device bytes (see [`Color::to_rgb_u8`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `f32` components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Opaque color from hue (degrees, wrapped), saturation and value in `[0, 1]`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgb(r + m, g + m, b + m)
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1).
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Multiplies the rgb channels by `factor`; alpha is untouched.
    #[inline]
    pub fn scale_rgb(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to [0, 1]. Non-finite channels become 0.
    #[inline]
    pub fn clamped(self) -> Self {
        fn c(v: f32) -> f32 {
            if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
        }
        Self::new(c(self.r), c(self.g), c(self.b), c(self.a))
    }

    /// Device bytes: rgb scaled by alpha and quantized.
    #[inline]
    pub fn to_rgb_u8(self) -> [u8; 3] {
        let c = self.clamped();
        let q = |v: f32| (v * c.a * 255.0).round() as u8;
        [q(c.r), q(c.g), q(c.b)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0).to_rgb_u8(), [255, 0, 0]);
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0).to_rgb_u8(), [0, 255, 0]);
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0).to_rgb_u8(), [0, 0, 255]);
        assert_eq!(Color::from_hsv(360.0, 1.0, 1.0).to_rgb_u8(), [255, 0, 0]);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::black().lerp(Color::white(), 0.5);
        assert_eq!(mid, Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn alpha_dims_device_bytes() {
        assert_eq!(Color::white().with_alpha(0.5).to_rgb_u8(), [128, 128, 128]);
        assert_eq!(Color::transparent().to_rgb_u8(), [0, 0, 0]);
    }

    #[test]
    fn clamped_sanitizes_out_of_range() {
        let c = Color::new(1.5, -0.5, f32::NAN, 2.0).clamped();
        assert_eq!(c, Color::new(1.0, 0.0, 0.0, 1.0));
    }
}
