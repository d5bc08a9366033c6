//! Farbumrechnung HSV → RGB
//!
//! Pure Functions ohne Hardware-Dependencies (testbar!)

use rgb::RGB;

/// RGB-Anteile im Bereich [0, 1]
pub type RgbF = RGB<f32>;

/// Wandelt HSV-Koordinaten in RGB-Anteile um (Sektor-Algorithmus)
///
/// - `h`: Farbwinkel in Grad [0, 360]
/// - `s`, `v`: Sättigung und Helligkeit [0, 1]
///
/// Eingaben werden nicht geprüft, der Aufrufer begrenzt sie.
///
/// # Beispiele
///
/// ```
/// # use light_core::color::hsv_to_rgb;
/// # use rgb::RGB;
/// assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), RGB::new(0.0, 1.0, 0.0));
/// ```
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> RgbF {
    let sector = libm::floorf(h / 60.0);
    let f = h / 60.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    RGB::new(r, g, b)
}

/// Skaliert einen Anteil [0, 1] auf gerundete Prozent [0, 100]
pub fn to_percent(component: f32) -> u8 {
    libm::roundf(component * 100.0).clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RGB::new(1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), RGB::new(0.0, 1.0, 0.0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), RGB::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), RGB::new(1.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.5), RGB::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_full_circle_wraps_to_red() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), RGB::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_secondary_colors() {
        // Gelb, Cyan, Magenta
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), RGB::new(1.0, 1.0, 0.0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), RGB::new(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), RGB::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_to_percent_rounds() {
        assert_eq!(to_percent(0.0), 0);
        assert_eq!(to_percent(0.504), 50);
        assert_eq!(to_percent(0.506), 51);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(1.2), 100);
    }
}
