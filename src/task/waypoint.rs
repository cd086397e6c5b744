//! Route stops built from map points of interest.

use serde::Serialize;
use serde_json::Value;

use super::action::Action;
use crate::error::BuildError;

/// Point type code for an ordinary navigation stop.
const POINT_TYPE: u8 = 0;
/// Arrival radius, in map units, for every stop.
const STOP_RADIUS: u32 = 1;

/// The subset of a map point-of-interest record needed to place a waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    /// Map area the point belongs to.
    pub area_id: String,
    /// Planar position `[x, y]`.
    pub coordinate: [f64; 2],
    /// Display name of the point.
    pub name: String,
    /// Heading in radians, when the record carries one.
    pub yaw: Option<f64>,
}

impl Poi {
    /// Creates a point of interest from its parts.
    #[must_use]
    pub fn new(area_id: impl Into<String>, x: f64, y: f64, name: impl Into<String>) -> Self {
        Self { area_id: area_id.into(), coordinate: [x, y], name: name.into(), yaw: None }
    }

    /// Sets the heading.
    #[must_use]
    pub fn with_yaw(mut self, yaw: f64) -> Self {
        self.yaw = Some(yaw);
        self
    }

    /// Extracts a point of interest from a raw record as returned by the map service.
    ///
    /// Fields other than `areaId`, `coordinate`, `name` and `yaw` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] when `areaId` or `name` is not a string,
    /// or `coordinate` does not start with two numbers.
    pub fn from_record(record: &Value) -> Result<Self, BuildError> {
        let area_id = record
            .get("areaId")
            .and_then(Value::as_str)
            .ok_or(BuildError::MissingField { field: "areaId" })?;
        let coordinate = record
            .get("coordinate")
            .and_then(Value::as_array)
            .and_then(|c| Some([c.first()?.as_f64()?, c.get(1)?.as_f64()?]))
            .ok_or(BuildError::MissingField { field: "coordinate" })?;
        let name =
            record.get("name").and_then(Value::as_str).ok_or(BuildError::MissingField { field: "name" })?;
        let yaw = record.get("yaw").and_then(Value::as_f64);

        Ok(Self { area_id: area_id.to_string(), coordinate, name: name.to_string(), yaw })
    }
}

/// Extra display metadata for a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointExt {
    /// Display name shown by the service.
    pub name: String,
}

/// One stop along a route, with the actions executed there in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    area_id: String,
    x: f64,
    y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    yaw: Option<f64>,
    #[serde(rename = "type")]
    point_type: u8,
    stop_radius: u32,
    ext: PointExt,
    step_acts: Vec<Action>,
}

impl Waypoint {
    /// Places a waypoint at `poi`.
    ///
    /// The heading is carried only when `include_yaw` is set; a point without a
    /// recorded heading then faces `0.0`.
    #[must_use]
    pub fn new(poi: &Poi, include_yaw: bool) -> Self {
        Self {
            area_id: poi.area_id.clone(),
            x: poi.coordinate[0],
            y: poi.coordinate[1],
            yaw: include_yaw.then(|| poi.yaw.unwrap_or(0.0)),
            point_type: POINT_TYPE,
            stop_radius: STOP_RADIUS,
            ext: PointExt { name: poi.name.clone() },
            step_acts: Vec::new(),
        }
    }

    /// Places a waypoint straight from a raw point-of-interest record.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if the record cannot be read as a [`Poi`].
    pub fn from_record(record: &Value, include_yaw: bool) -> Result<Self, BuildError> {
        Ok(Self::new(&Poi::from_record(record)?, include_yaw))
    }

    /// Appends an action; actions run in the order they were appended.
    pub fn append(&mut self, action: Action) -> &mut Self {
        self.step_acts.push(action);
        self
    }

    /// Map area of this stop.
    #[must_use]
    pub fn area_id(&self) -> &str {
        &self.area_id
    }

    /// Planar position `(x, y)`.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Heading, present only when requested at construction.
    #[must_use]
    pub fn yaw(&self) -> Option<f64> {
        self.yaw
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.ext.name
    }

    /// Actions in execution order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.step_acts
    }
}
