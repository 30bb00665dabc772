/// Sample rate of every generated clip, in frames per second.
pub const FRAME_RATE: f32 = 60.0;

/// Tolerance used when comparing generated channel values.
pub const EPSILON: f32 = 1e-5;

/// Linear RGB color with unbounded (HDR) channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Build a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Opaque white.
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Black.
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Channels in `[r, g, b]` order.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Component-wise linear interpolation.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Multiply every channel by `k`.
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Largest absolute channel difference.
    pub fn max_abs_diff(self, other: Self) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// Decompose into hue/saturation/value. Hue is in `[0, 1)`.
    pub fn to_hsv(self) -> Hsv {
        if self.b > self.g && self.b > self.r {
            hsv_from_dominant(4.0, self.b, self.r, self.g)
        } else if self.g > self.r {
            hsv_from_dominant(2.0, self.g, self.b, self.r)
        } else {
            hsv_from_dominant(0.0, self.r, self.g, self.b)
        }
    }
}

fn hsv_from_dominant(offset: f32, dominant: f32, c1: f32, c2: f32) -> Hsv {
    let v = dominant;
    if v == 0.0 {
        return Hsv::new(0.0, 0.0, 0.0);
    }
    let delta = v - c1.min(c2);
    let (s, mut h) = if delta == 0.0 {
        (0.0, offset + (c1 - c2))
    } else {
        (delta / v, offset + (c1 - c2) / delta)
    };
    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    Hsv::new(h, s, v)
}

/// Hue/saturation/value triple. Hue is a unit angle, circular modulo 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsv {
    /// Hue in `[0, 1)`.
    pub h: f32,
    /// Saturation, nominally `[0, 1]`.
    pub s: f32,
    /// Value (brightness), unbounded above for HDR colors.
    pub v: f32,
}

impl Hsv {
    /// Build an HSV triple.
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert back to RGB without clamping.
    ///
    /// Bilinear in `(s, v)`: `to_rgb(h, s, v) == v * lerp(white, to_rgb(h, 1, 1), s)`.
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, v } = self;
        if s == 0.0 {
            return Rgb::new(v, v, v);
        }
        if v == 0.0 {
            return Rgb::black();
        }

        let h6 = h * 6.0;
        let sector = h6.floor();
        let frac = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * frac);
        let t = v * (1.0 - s * (1.0 - frac));

        match (sector as i64).rem_euclid(6) {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }

    /// Rotate the hue by `delta`, wrapping into `[0, 1)`.
    pub fn shift_hue(self, delta: f32) -> Self {
        Self {
            h: wrap_unit(self.h + delta),
            ..self
        }
    }
}

/// Wrap a unit angle into `[0, 1)`.
pub fn wrap_unit(x: f32) -> f32 {
    let w = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if w >= 1.0 { 0.0 } else { w }
}

/// Four-component shader vector (HSVG convention: hue offset, saturation, value, gamma).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec4 {
    /// First component (hue offset).
    pub x: f32,
    /// Second component (saturation multiplier).
    pub y: f32,
    /// Third component (value multiplier).
    pub z: f32,
    /// Fourth component (gamma-like channel).
    pub w: f32,
}

impl Vec4 {
    /// Build a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Components in `[x, y, z, w]` order.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
