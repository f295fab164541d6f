//! Fixed illustration: a decaying and a growing trend crossing over.

use crate::model::{Bounds, Circle, CubicSegment, IndustryEvolutionGeometry, LayoutPoint};
use crate::path::PathData;
use folio_core::charts::IndustryEvolution;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 400.0;

fn p(x: f64, y: f64) -> LayoutPoint {
    LayoutPoint::new(x, y)
}

fn cubic_path(c: &CubicSegment) -> String {
    PathData::new()
        .move_to(c.from)
        .cubic_to(c.ctrl1, c.ctrl2, c.to)
        .finish()
}

pub fn industry_evolution_geometry(chart: &IndustryEvolution) -> IndustryEvolutionGeometry {
    let decay = CubicSegment {
        from: p(0.0, 50.0),
        ctrl1: p(100.0, 50.0),
        ctrl2: p(200.0, 300.0),
        to: p(600.0, 350.0),
    };
    let growth = CubicSegment {
        from: p(0.0, 350.0),
        ctrl1: p(200.0, 350.0),
        ctrl2: p(300.0, 300.0),
        to: p(600.0, 50.0),
    };
    let intersection = Circle {
        center: p(310.0, 270.0),
        r: 6.0,
    };
    let region_path = PathData::new()
        .move_to(p(310.0, 270.0))
        .cubic_to(p(350.0, 250.0), p(600.0, 50.0), p(600.0, 50.0))
        .line_to(p(600.0, 350.0))
        .line_to(p(310.0, 270.0))
        .close()
        .finish();

    IndustryEvolutionGeometry {
        bounds: Bounds::sized(WIDTH, HEIGHT),
        decay_path: cubic_path(&decay),
        growth_path: cubic_path(&growth),
        decay,
        growth,
        intersection,
        region_path,
        x_axis_label: chart.x_axis_label.clone(),
        y_axis_label: chart.y_axis_label.clone(),
        highlight: chart.highlight.clone(),
    }
}
