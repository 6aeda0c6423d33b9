use crate::geom::{Coordinate, Side};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque point identifier, unique among the points of one edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generates a fresh random (UUID v4) id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The fixed id of an anchor.
    pub fn anchor(end: AnchorEnd) -> Self {
        match end {
            AnchorEnd::Source => Self::new("anchor:source"),
            AnchorEnd::Target => Self::new("anchor:target"),
            AnchorEnd::Interior(index) => Self(format!("anchor:{index}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PointId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

fn default_true() -> bool {
    true
}

/// A persisted, user-placed point on an edge.
///
/// Ids are regenerated when missing on load; coordinates and `active` round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    #[serde(default = "PointId::generate")]
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl ControlPoint {
    pub fn new(id: impl Into<PointId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            active: true,
        }
    }

    /// A fresh active point with a generated id.
    pub fn at(position: Coordinate) -> Self {
        Self {
            id: PointId::generate(),
            x: position.x,
            y: position.y,
            active: true,
        }
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// One entry of the anchor-inclusive sequence fed to the deriver and the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum PathPoint {
    Anchor(Coordinate),
    Control(ControlPoint),
}

impl PathPoint {
    pub fn position(&self) -> Coordinate {
        match self {
            PathPoint::Anchor(c) => *c,
            PathPoint::Control(p) => p.position(),
        }
    }

    pub fn control_id(&self) -> Option<&PointId> {
        match self {
            PathPoint::Anchor(_) => None,
            PathPoint::Control(p) => Some(&p.id),
        }
    }
}

/// Builds `[source, ...points, target]`.
pub fn path_points(source: Coordinate, points: &[ControlPoint], target: Coordinate) -> Vec<PathPoint> {
    let mut out = Vec::with_capacity(points.len() + 2);
    out.push(PathPoint::Anchor(source));
    out.extend(points.iter().cloned().map(PathPoint::Control));
    out.push(PathPoint::Anchor(target));
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorEnd {
    Source,
    Target,
    /// An anchor found between other points; only malformed sequences produce these.
    Interior(usize),
}

/// Interpolation algorithm of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "bezier")]
    Bezier,
    #[serde(rename = "catmull-rom")]
    CatmullRom,
    #[serde(rename = "bezier-catmull-rom")]
    BezierCatmullRom,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Linear,
        Algorithm::Bezier,
        Algorithm::CatmullRom,
        Algorithm::BezierCatmullRom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Linear => "linear",
            Algorithm::Bezier => "bezier",
            Algorithm::CatmullRom => "catmull-rom",
            Algorithm::BezierCatmullRom => "bezier-catmull-rom",
        }
    }

    /// Parses the persisted selector. Accepts a few spellings hosts commonly emit.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "bezier" => Some(Self::Bezier),
            "catmull-rom" | "catmullrom" | "catmull_rom" => Some(Self::CatmullRom),
            "bezier-catmull-rom" | "beziercatmullrom" | "bezier_catmull_rom" => {
                Some(Self::BezierCatmullRom)
            }
            _ => None,
        }
    }

    /// Whether the deriver exposes bezier handles for this algorithm.
    pub fn has_synthetic_handles(self) -> bool {
        matches!(self, Algorithm::Bezier | Algorithm::BezierCatmullRom)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exit side at the source and entry side at the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orientation {
    pub from_side: Side,
    pub to_side: Side,
}

impl Orientation {
    pub fn new(from_side: Side, to_side: Side) -> Self {
        Self { from_side, to_side }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            from_side: Side::Right,
            to_side: Side::Left,
        }
    }
}

// Unknown selectors load as `None` and resolve to the default algorithm at render time.
fn lenient_algorithm<'de, D>(deserializer: D) -> Result<Option<Algorithm>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(Algorithm::parse))
}

/// Per-edge persisted data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_algorithm"
    )]
    pub algorithm: Option<Algorithm>,
    #[serde(default)]
    pub points: Vec<ControlPoint>,
}

impl EdgeData {
    pub fn new(algorithm: Option<Algorithm>) -> Self {
        Self {
            algorithm,
            points: Vec::new(),
        }
    }

    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Where a derived point came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PointOrigin {
    Anchor { end: AnchorEnd },
    User,
    /// An algorithm-inserted handle serving segment `segment`. `insert_after` names the stored
    /// point that starts the segment (`None` for the source anchor); promoting the handle into a
    /// user point inserts it right after that point.
    #[serde(rename_all = "camelCase")]
    Synthetic {
        segment: usize,
        insert_after: Option<PointId>,
    },
}

/// Output of the deriver. Ids of synthetic points are assigned by the stabilizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedPoint {
    pub id: Option<PointId>,
    pub position: Coordinate,
    pub active: bool,
    pub origin: PointOrigin,
}

impl DerivedPoint {
    pub fn is_anchor(&self) -> bool {
        matches!(self.origin, PointOrigin::Anchor { .. })
    }
}

/// A derived point with its render-stable id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StablePoint {
    pub id: PointId,
    pub position: Coordinate,
    pub active: bool,
    pub origin: PointOrigin,
}

impl StablePoint {
    pub fn is_anchor(&self) -> bool {
        matches!(self.origin, PointOrigin::Anchor { .. })
    }

    pub fn insert_after(&self) -> Option<&PointId> {
        match &self.origin {
            PointOrigin::Synthetic { insert_after, .. } => insert_after.as_ref(),
            _ => None,
        }
    }
}
