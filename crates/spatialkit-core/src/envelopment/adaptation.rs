//! What an envelopment shows when its depth collapses to zero.

use super::Placement;
use crate::error::SpatialError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Depth-zero rendering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Adaptation {
    /// Show one placement's content, flat and unrotated. `Front` is
    /// mirrored so it still reads as seen from inside the volume.
    Show(Placement),
    /// Show back content with mirrored front content layered above it.
    SimulateFrontView,
}

impl Adaptation {
    /// Placements this policy can render on a flat volume, in layer order.
    pub fn visible_placements(self) -> Vec<Placement> {
        match self {
            Adaptation::Show(placement) => vec![placement],
            Adaptation::SimulateFrontView => {
                vec![Placement::Back, Placement::Front, Placement::FrontOutward]
            }
        }
    }
}

impl fmt::Display for Adaptation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adaptation::Show(placement) => write!(f, "show:{}", placement),
            Adaptation::SimulateFrontView => f.write_str("simulateFrontView"),
        }
    }
}

impl FromStr for Adaptation {
    type Err = SpatialError;

    /// Accepts `simulateFrontView`, `show:<placement>` or a bare placement.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("simulateFrontView") {
            return Ok(Adaptation::SimulateFrontView);
        }
        let placement = s.strip_prefix("show:").unwrap_or(s);
        placement
            .parse::<Placement>()
            .map(Adaptation::Show)
            .map_err(|_| SpatialError::UnknownAdaptation(s.to_string()))
    }
}
