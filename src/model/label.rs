use serde::{Deserialize, Serialize};

pub type LabelId = i32;

/// Declared kind of a label; decides which drawing tool applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    Any,
    Rectangle,
    Polygon,
    Polyline,
    Points,
    Ellipse,
    Cuboid,
    Mask,
    Skeleton,
    Tag,
}

/// Geometry of a shape object. `Any` is the wildcard shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Any,
    Rectangle,
    Polygon,
    Polyline,
    Points,
    Ellipse,
    Cuboid,
    Mask,
    Skeleton,
}

impl LabelKind {
    /// Shape drawn for a label of this kind. Tag labels draw no shape.
    pub const fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Any => Some(ShapeKind::Any),
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Polygon => Some(ShapeKind::Polygon),
            Self::Polyline => Some(ShapeKind::Polyline),
            Self::Points => Some(ShapeKind::Points),
            Self::Ellipse => Some(ShapeKind::Ellipse),
            Self::Cuboid => Some(ShapeKind::Cuboid),
            Self::Mask => Some(ShapeKind::Mask),
            Self::Skeleton => Some(ShapeKind::Skeleton),
            Self::Tag => None,
        }
    }

    pub const fn is_tag(self) -> bool {
        matches!(self, Self::Tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LabelKind,
}

impl Label {
    pub fn new(id: LabelId, name: impl Into<String>, kind: LabelKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}

pub fn find_label(labels: &[Label], id: LabelId) -> Option<&Label> {
    labels.iter().find(|label| label.id == id)
}
