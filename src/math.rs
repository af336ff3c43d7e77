use crate::color::Rgb32;
use crate::color::Rgba32;

/// Clamp a color component to [0,1]
///
/// NaN is mapped to 0
pub fn clamp01(v: f32) -> f32 {
    v.max(0.0).min(1.0)
}

/// Convert an f32 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f32) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}

/// Blend a translucent color with the color behind it
///
/// Each component is the average of the alpha weighted foreground
///   and the background:
///
/// out = (c * alpha + behind) / 2
///
/// The result is always opaque.
///
///     use abuffer::{Rgb32, Rgba32, blend_average};
///
///     let c = blend_average(&Rgba32::new(1.0, 1.0, 1.0, 0.5), &Rgb32::black());
///     assert_eq!(c, Rgba32::new(0.25, 0.25, 0.25, 1.0));
///
pub fn blend_average(c: &Rgba32, behind: &Rgb32) -> Rgba32 {
    let a = c.a();
    Rgba32::new((c.r() * a + behind.r()) / 2.0,
                (c.g() * a + behind.g()) / 2.0,
                (c.b() * a + behind.b()) / 2.0,
                1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_test() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(8.0), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(std::f32::NAN), 0.0);
        assert_eq!(cu8(1.0), 255);
        assert_eq!(cu8(0.5), 128);
    }

    #[test]
    fn blend_average_test() {
        let fg = Rgba32::new(1.0, 0.0, 0.5, 0.5);
        let bg = Rgb32::new(1.0, 0.0, 0.0);
        let c = blend_average(&fg, &bg);
        assert_eq!(c, Rgba32::new(0.75, 0.0, 0.125, 1.0));
        assert!(c.is_opaque());
    }
}
