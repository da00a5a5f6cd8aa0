//! Color helpers for chart rendering.

use plotters::style::RGBColor;

/// Fill for heatmap cells whose correlation is undefined.
pub const UNDEFINED_GRAY: RGBColor = RGBColor(200, 200, 200);

/// Primary series color.
pub const SERIES_BLUE: RGBColor = RGBColor(66, 110, 180);

/// Overlay color for density curves.
pub const DENSITY_RED: RGBColor = RGBColor(190, 60, 50);

/// Diverging blue-white-red scale over `[-1, 1]`, matching the usual
/// correlation-heatmap convention (cool negatives, warm positives).
pub fn coolwarm(t: f64) -> RGBColor {
    const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
    const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
    const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

    let t = t.clamp(-1.0, 1.0);
    let (from, to, frac) = if t < 0.0 {
        (COOL, MID, t + 1.0)
    } else {
        (MID, WARM, t)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * frac).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), RGBColor(59, 76, 192));
        assert_eq!(coolwarm(0.0), RGBColor(221, 221, 221));
        assert_eq!(coolwarm(1.0), RGBColor(180, 4, 38));
    }

    #[test]
    fn test_coolwarm_clamps_out_of_range() {
        assert_eq!(coolwarm(-5.0), coolwarm(-1.0));
        assert_eq!(coolwarm(5.0), coolwarm(1.0));
    }

    #[test]
    fn test_coolwarm_positive_is_warmer_than_negative() {
        let warm = coolwarm(0.8);
        let cool = coolwarm(-0.8);
        assert!(warm.0 > cool.0);
        assert!(cool.2 > warm.2);
    }
}
