//! SVG path-data builder.

use crate::model::LayoutPoint;
use folio_core::geom::fmt_number;
use std::fmt::Write as _;

#[derive(Debug, Default, Clone)]
pub struct PathData {
    out: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    fn sep(&mut self) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
    }

    pub fn move_to(mut self, p: LayoutPoint) -> Self {
        self.sep();
        let _ = write!(&mut self.out, "M{},{}", fmt_number(p.x), fmt_number(p.y));
        self
    }

    pub fn line_to(mut self, p: LayoutPoint) -> Self {
        self.sep();
        let _ = write!(&mut self.out, "L{},{}", fmt_number(p.x), fmt_number(p.y));
        self
    }

    pub fn arc_to(mut self, r: f64, large_arc: bool, sweep: bool, p: LayoutPoint) -> Self {
        self.sep();
        let _ = write!(
            &mut self.out,
            "A{},{} 0 {} {} {},{}",
            fmt_number(r),
            fmt_number(r),
            u8::from(large_arc),
            u8::from(sweep),
            fmt_number(p.x),
            fmt_number(p.y)
        );
        self
    }

    pub fn cubic_to(mut self, c1: LayoutPoint, c2: LayoutPoint, p: LayoutPoint) -> Self {
        self.sep();
        let _ = write!(
            &mut self.out,
            "C{},{} {},{} {},{}",
            fmt_number(c1.x),
            fmt_number(c1.y),
            fmt_number(c2.x),
            fmt_number(c2.y),
            fmt_number(p.x),
            fmt_number(p.y)
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.sep();
        self.out.push('Z');
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// `M p0 L p1 ... Z`; empty for no points.
pub fn closed_polygon(points: &[LayoutPoint]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    rest.iter()
        .fold(PathData::new().move_to(*first), |d, p| d.line_to(*p))
        .close()
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_closes_back_to_start() {
        let pts = [
            LayoutPoint::new(0.0, 0.0),
            LayoutPoint::new(10.0, 0.0),
            LayoutPoint::new(5.0, 8.66),
        ];
        assert_eq!(closed_polygon(&pts), "M0,0 L10,0 L5,8.66 Z");
        assert_eq!(closed_polygon(&[]), "");
    }

    #[test]
    fn arc_flags_are_numeric() {
        let d = PathData::new()
            .move_to(LayoutPoint::new(1.0, 2.0))
            .arc_to(3.0, true, false, LayoutPoint::new(4.0, 5.0))
            .finish();
        assert_eq!(d, "M1,2 A3,3 0 1 0 4,5");
    }
}
