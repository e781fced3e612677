//! Shape formats and their precision factors.

use serde::{Deserialize, Serialize};

/// Precision of the classic polyline format (five decimal digits).
pub const DEFAULT_PRECISION: f64 = 1e5;

/// Precision of the `polyline6` format (six decimal digits).
pub const POLYLINE6_PRECISION: f64 = 1e6;

/// Encoding of a route or match shape in a routing response.
///
/// Both variants use the same wire format and differ only in precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFormat {
    /// 1e-5 degree precision.
    #[default]
    Polyline,
    /// 1e-6 degree precision, an order of magnitude finer than `Polyline`.
    Polyline6,
}

impl ShapeFormat {
    pub fn precision(self) -> f64 {
        match self {
            ShapeFormat::Polyline => DEFAULT_PRECISION,
            ShapeFormat::Polyline6 => POLYLINE6_PRECISION,
        }
    }
}
