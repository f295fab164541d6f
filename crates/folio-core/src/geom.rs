#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Angle = euclid::Angle<f64>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Screen-space polar projection: angle zero points right and angles grow clockwise (y down).
pub fn polar(center: Point, radius: f64, angle: Angle) -> Point {
    let (sin, cos) = angle.sin_cos();
    center + vector(radius * cos, radius * sin)
}

/// Fixed-precision number formatting for SVG attributes and path data.
///
/// Rounds to three decimals, strips trailing zeros and never emits `-0` or non-finite values.
pub fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_points_up_at_minus_half_pi() {
        let p = polar(point(10.0, 10.0), 5.0, Angle::radians(-std::f64::consts::FRAC_PI_2));
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn fmt_number_trims_and_normalizes() {
        assert_eq!(fmt_number(1.5), "1.5");
        assert_eq!(fmt_number(2.0), "2");
        assert_eq!(fmt_number(-0.0001), "0");
        assert_eq!(fmt_number(f64::NAN), "0");
        assert_eq!(fmt_number(1.23456), "1.235");
    }
}
