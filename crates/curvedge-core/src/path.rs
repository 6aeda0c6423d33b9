//! Draw commands for an edge and their SVG path data form.

use crate::curve::segment_handles;
use crate::geom::Coordinate;
use crate::model::PathPoint;
use crate::{Algorithm, Orientation};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd")]
pub enum PathCommand {
    #[serde(rename = "M")]
    MoveTo { to: Coordinate },
    #[serde(rename = "L")]
    LineTo { to: Coordinate },
    #[serde(rename = "C")]
    CubicTo {
        c1: Coordinate,
        c2: Coordinate,
        to: Coordinate,
    },
}

impl PathCommand {
    /// The point the pen ends up at.
    pub fn end(&self) -> Coordinate {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::CubicTo { to, .. } => to,
        }
    }
}

/// An ordered list of draw commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PathDescription(Vec<PathCommand>);

impl PathDescription {
    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.0.first().map(PathCommand::end)
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.0.last().map(PathCommand::end)
    }

    /// SVG path data, e.g. `M0,0C25,0,75,0,100,0`.
    ///
    /// Numbers use JavaScript number-to-string semantics, which is the shortest representation
    /// that parses back to the same `f64`.
    pub fn to_svg_d(&self) -> String {
        let mut out = String::with_capacity(self.0.len().saturating_mul(48));
        let mut buf = ryu_js::Buffer::new();
        for cmd in &self.0 {
            match *cmd {
                PathCommand::MoveTo { to } => emit_cmd_pair(&mut out, &mut buf, 'M', to),
                PathCommand::LineTo { to } => emit_cmd_pair(&mut out, &mut buf, 'L', to),
                PathCommand::CubicTo { c1, c2, to } => {
                    out.push('C');
                    push_coord(&mut out, &mut buf, c1);
                    out.push(',');
                    push_coord(&mut out, &mut buf, c2);
                    out.push(',');
                    push_coord(&mut out, &mut buf, to);
                }
            }
        }
        out
    }
}

impl From<Vec<PathCommand>> for PathDescription {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self(commands)
    }
}

fn emit_cmd_pair(out: &mut String, buf: &mut ryu_js::Buffer, cmd: char, at: Coordinate) {
    out.push(cmd);
    push_coord(out, buf, at);
}

fn push_coord(out: &mut String, buf: &mut ryu_js::Buffer, at: Coordinate) {
    out.push_str(js_number_to_string(at.x, buf));
    out.push(',');
    out.push_str(js_number_to_string(at.y, buf));
}

fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

/// Renders the anchor-inclusive sequence `points` as draw commands.
///
/// Two or more points always start with a move-to the first point and end exactly on the last
/// one. A single point yields a lone move-to; no points yield an empty description.
pub fn render_path(
    points: &[PathPoint],
    algorithm: Algorithm,
    orientation: Orientation,
    curvature: f64,
) -> PathDescription {
    let positions: Vec<Coordinate> = points.iter().map(PathPoint::position).collect();
    let Some(&start) = positions.first() else {
        return PathDescription::default();
    };

    let mut commands = Vec::with_capacity(positions.len());
    commands.push(PathCommand::MoveTo { to: start });

    if algorithm == Algorithm::Linear {
        commands.extend(
            positions[1..]
                .iter()
                .map(|&to| PathCommand::LineTo { to }),
        );
    } else {
        let handles = segment_handles(&positions, algorithm, orientation, curvature);
        commands.extend(
            handles
                .iter()
                .zip(&positions[1..])
                .map(|(h, &to)| PathCommand::CubicTo {
                    c1: h.c1,
                    c2: h.c2,
                    to,
                }),
        );
    }

    PathDescription(commands)
}
