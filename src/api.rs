//! Logical request/response schema.
//!
//! These are the wire shapes a transport collaborator (HTTP layer,
//! CLI, test harness) exchanges with the pipeline. Field names follow
//! the wire convention (`curveId`, `use_squared_distance`,
//! `infinityY`, `centerIdx`, `isInfinite`, `type`); no transport code
//! lives in this crate.

use serde::{Deserialize, Serialize};

use crate::diagram::{Diagrams, VineyardEntry};
use crate::error::Error;

/// One sample point on a closed curve. Points without an explicit
/// `curveId` all belong to the implicit curve 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointInput {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "curveId", default)]
    pub curve_id: u32,
}

/// One query center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterInput {
    pub x: f64,
    pub y: f64,
}

fn default_use_squared() -> bool {
    true
}

/// Single-center request: one diagram set for one query location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceRequest {
    pub center: CenterInput,
    pub points: Vec<PointInput>,
    #[serde(default = "default_use_squared")]
    pub use_squared_distance: bool,
}

/// Vineyard request: one diagram set per center, sharing a global cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VineyardRequest {
    pub centers: Vec<CenterInput>,
    pub points: Vec<PointInput>,
    #[serde(default = "default_use_squared")]
    pub use_squared_distance: bool,
}

/// Single-center response: six `[birth, death]` buckets plus the
/// distance range of this request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceResponse {
    #[serde(flatten)]
    pub diagrams: Diagrams<[f64; 2]>,
    pub r_min: f64,
    pub r_max: f64,
}

/// Vineyard response: six buckets of tagged entries, concatenated
/// across centers, plus the shared cap every infinite death was
/// reported at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VineyardResponse {
    #[serde(flatten)]
    pub diagrams: Diagrams<VineyardEntry>,
    #[serde(rename = "infinityY")]
    pub infinity_y: f64,
}

/// Error payload for the transport collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        let trace = match err {
            Error::Computation { trace, .. } => trace.clone(),
            _ => None,
        };
        ErrorResponse {
            error: err.to_string(),
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_id_defaults_to_zero_and_squared_to_true() {
        let req: PersistenceRequest = serde_json::from_str(
            r#"{"center":{"x":0,"y":0},"points":[{"x":1,"y":2}]}"#,
        )
        .unwrap();
        assert_eq!(req.points[0].curve_id, 0);
        assert!(req.use_squared_distance);
    }

    #[test]
    fn wire_field_names_round_trip() {
        let req: VineyardRequest = serde_json::from_str(
            r#"{
                "centers": [{"x": 0.5, "y": -1.0}],
                "points": [{"x": 1.0, "y": 2.0, "curveId": 3}],
                "use_squared_distance": false
            }"#,
        )
        .unwrap();
        assert_eq!(req.points[0].curve_id, 3);
        assert!(!req.use_squared_distance);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["points"][0]["curveId"], 3);
    }

    #[test]
    fn error_payload_carries_trace_only_for_computation() {
        let validation = ErrorResponse::from(&Error::Validation("Need at least 3 points".into()));
        assert!(validation.trace.is_none());
        assert!(validation.error.contains("Need at least 3 points"));

        let computation =
            ErrorResponse::from(&Error::computation_with_trace("bad diagram", "center 1"));
        assert_eq!(computation.trace.as_deref(), Some("center 1"));

        let json = serde_json::to_value(&validation).unwrap();
        assert!(json.get("trace").is_none());
    }
}
