//! The faces of an envelopment volume.

use crate::error::SpatialError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A face of the bounding volume, with its orientation.
///
/// `Front` and `FrontOutward` are the same face seen from inside and from
/// outside. Supply at most one of them; nothing enforces this, but both
/// render into the same plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    Back,
    Front,
    FrontOutward,
    Leading,
    Trailing,
    Top,
    Bottom,
}

impl Placement {
    /// Every placement, in layering order.
    pub const ALL: [Placement; 7] = [
        Placement::Back,
        Placement::Front,
        Placement::FrontOutward,
        Placement::Leading,
        Placement::Trailing,
        Placement::Top,
        Placement::Bottom,
    ];

    /// Name used in text and serialized forms.
    pub fn name(self) -> &'static str {
        match self {
            Placement::Back => "back",
            Placement::Front => "front",
            Placement::FrontOutward => "frontOutward",
            Placement::Leading => "leading",
            Placement::Trailing => "trailing",
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }

    /// Whether this placement occupies the front plane.
    pub fn is_front(self) -> bool {
        matches!(self, Placement::Front | Placement::FrontOutward)
    }

    /// Whether this placement's content faces away from the volume.
    pub fn faces_outward(self) -> bool {
        self == Placement::FrontOutward
    }

    /// Whether this placement is mirrored when drawn on a flat volume.
    ///
    /// Inward front content is seen from behind once the depth is gone.
    pub fn mirrored_when_flat(self) -> bool {
        self.is_front() && !self.faces_outward()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpatialError::UnknownPlacement(s.to_string()))
    }
}
