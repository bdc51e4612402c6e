//! Route cost configuration.
//!
//! Typically built with `RouteConfig::default()` and a chosen [`CostModel`],
//! or loaded from a JSON file by the application crate (feature `serde`).
//!
//! # Time model
//!
//! ```text
//! base_time_min = distance / average_speed * 60
//! ```
//!
//! `average_speed` is in distance units per hour, so the base time is in
//! minutes.  Turn-aware models then adjust the base time; see [`CostModel`].

use std::fmt;
use std::str::FromStr;

use crate::{DrError, DrResult};

/// Default average speed in distance units per hour.
pub const DEFAULT_AVERAGE_SPEED: f64 = 60.0;

/// Default per-turn severity multiplier for [`CostModel::TurnAngle`].
pub const DEFAULT_PENALTY_FACTOR: f64 = 0.3;

/// Default minutes added per intermediate node for [`CostModel::TurnCount`].
pub const DEFAULT_MINUTES_PER_TURN: f64 = 0.5;

// ── CostModel ─────────────────────────────────────────────────────────────────

/// Selects how a route is scored and which metric orders the results.
///
/// | Variant     | Time                                       | Sorted by |
/// |-------------|--------------------------------------------|-----------|
/// | `Distance`  | `base`                                     | distance  |
/// | `TurnAngle` | `base * (1 + Σ factor * (180 - θ) / 180)`  | time      |
/// | `TurnCount` | `base + intermediate_nodes * per_turn`     | time      |
///
/// With feature `serde` a model is written as `{"model": "angle",
/// "penalty_factor": 0.3}`.  Reading also accepts the bare names the CLI
/// uses (`"distance"`, `"angle"`, `"count"`), and a missing penalty field
/// falls back to its `DEFAULT_*` constant.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "repr::CostModelRepr", into = "repr::TaggedModel"))]
pub enum CostModel {
    /// Plain distance; time is the unpenalized base time.
    #[default]
    Distance,
    /// Multiplicative penalty from the bend angle at every intermediate node.
    TurnAngle { penalty_factor: f64 },
    /// Additive penalty per intermediate node.
    TurnCount { minutes_per_turn: f64 },
}

impl CostModel {
    /// `TurnAngle` with the default penalty factor.
    pub fn turn_angle() -> Self {
        CostModel::TurnAngle { penalty_factor: DEFAULT_PENALTY_FACTOR }
    }

    /// `TurnCount` with the default per-turn penalty.
    pub fn turn_count() -> Self {
        CostModel::TurnCount { minutes_per_turn: DEFAULT_MINUTES_PER_TURN }
    }

    /// `true` when routes are ordered by penalized time rather than distance.
    #[inline]
    pub fn is_turn_aware(self) -> bool {
        !matches!(self, CostModel::Distance)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CostModel::Distance         => "distance",
            CostModel::TurnAngle { .. } => "angle",
            CostModel::TurnCount { .. } => "count",
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostModel {
    type Err = DrError;

    /// Parse a model name, using the default penalty constants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(CostModel::Distance),
            "angle"    => Ok(CostModel::turn_angle()),
            "count"    => Ok(CostModel::turn_count()),
            other => Err(DrError::Parse(format!(
                "invalid cost model {other:?}: expected \"distance\", \"angle\", or \"count\""
            ))),
        }
    }
}

#[cfg(feature = "serde")]
mod repr {
    use serde::{Deserialize, Serialize};

    use super::{CostModel, DEFAULT_MINUTES_PER_TURN, DEFAULT_PENALTY_FACTOR};
    use crate::DrError;

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum CostModelRepr {
        Name(String),
        Tagged(TaggedModel),
    }

    #[derive(Serialize, Deserialize)]
    #[serde(tag = "model", rename_all = "lowercase")]
    pub(super) enum TaggedModel {
        Distance,
        #[serde(alias = "turn_angle")]
        Angle {
            #[serde(default = "default_penalty_factor")]
            penalty_factor: f64,
        },
        #[serde(alias = "turn_count")]
        Count {
            #[serde(default = "default_minutes_per_turn")]
            minutes_per_turn: f64,
        },
    }

    fn default_penalty_factor() -> f64 {
        DEFAULT_PENALTY_FACTOR
    }

    fn default_minutes_per_turn() -> f64 {
        DEFAULT_MINUTES_PER_TURN
    }

    impl TryFrom<CostModelRepr> for CostModel {
        type Error = DrError;

        fn try_from(repr: CostModelRepr) -> Result<Self, DrError> {
            match repr {
                CostModelRepr::Name(name) => name.parse(),
                CostModelRepr::Tagged(TaggedModel::Distance) => Ok(CostModel::Distance),
                CostModelRepr::Tagged(TaggedModel::Angle { penalty_factor }) => {
                    Ok(CostModel::TurnAngle { penalty_factor })
                }
                CostModelRepr::Tagged(TaggedModel::Count { minutes_per_turn }) => {
                    Ok(CostModel::TurnCount { minutes_per_turn })
                }
            }
        }
    }

    impl From<CostModel> for TaggedModel {
        fn from(model: CostModel) -> Self {
            match model {
                CostModel::Distance => TaggedModel::Distance,
                CostModel::TurnAngle { penalty_factor } => TaggedModel::Angle { penalty_factor },
                CostModel::TurnCount { minutes_per_turn } => TaggedModel::Count { minutes_per_turn },
            }
        }
    }
}

// ── RouteConfig ───────────────────────────────────────────────────────────────

/// Parameters for scoring enumerated routes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Vehicle speed in distance units per hour.  Default: 60.
    #[cfg_attr(feature = "serde", serde(alias = "averageSpeed"))]
    pub average_speed: f64,

    /// Scoring and ordering strategy.  Default: [`CostModel::Distance`].
    #[cfg_attr(feature = "serde", serde(alias = "turnPenaltyModel"))]
    pub cost_model: CostModel,
}

impl RouteConfig {
    pub fn with_model(cost_model: CostModel) -> Self {
        Self { cost_model, ..Self::default() }
    }

    /// Unpenalized travel time in minutes for `distance`.
    #[inline]
    pub fn base_time_min(&self, distance: f64) -> f64 {
        distance / self.average_speed * 60.0
    }

    /// Reject values that would make time estimates meaningless.
    pub fn validate(&self) -> DrResult<()> {
        if !(self.average_speed.is_finite() && self.average_speed > 0.0) {
            return Err(DrError::Config(format!(
                "average_speed must be positive and finite, got {}",
                self.average_speed
            )));
        }
        let penalty = match self.cost_model {
            CostModel::Distance => return Ok(()),
            CostModel::TurnAngle { penalty_factor } => penalty_factor,
            CostModel::TurnCount { minutes_per_turn } => minutes_per_turn,
        };
        if !(penalty.is_finite() && penalty >= 0.0) {
            return Err(DrError::Config(format!(
                "{} penalty must be non-negative and finite, got {penalty}",
                self.cost_model
            )));
        }
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            average_speed: DEFAULT_AVERAGE_SPEED,
            cost_model: CostModel::Distance,
        }
    }
}
