use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Entity kinds that carry a CDM schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Residential mortgage loan.
    Mortgage,
    /// Property with location, construction and flood-risk attributes.
    Property,
    /// River flood gauge sensor.
    FloodGauge,
    /// Physical risk swap over a basket of flood gauges.
    PhysicalRiskSwap,
    /// Tropical cyclone event.
    TcEvent,
    /// Tropical cyclone event time series (forecast fields).
    TcEventTimeseries,
}

impl EntityKind {
    /// All entity kinds in registry order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Mortgage,
            Self::Property,
            Self::FloodGauge,
            Self::PhysicalRiskSwap,
            Self::TcEvent,
            Self::TcEventTimeseries,
        ]
    }

    /// Top-level key under which a record of this kind is nested.
    pub fn root_key(&self) -> &'static str {
        match self {
            Self::Mortgage => "Mortgage",
            Self::Property => "PropertyHeader",
            Self::FloodGauge => "FloodGauge",
            Self::PhysicalRiskSwap => "PhysicalSwap",
            Self::TcEvent => "TropicalCycloneEvent",
            Self::TcEventTimeseries => "EventTimeseries",
        }
    }

    /// Snake-case identifier, also used as the embedded schema file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mortgage => "mortgage",
            Self::Property => "property",
            Self::FloodGauge => "flood_gauge",
            Self::PhysicalRiskSwap => "physical_risk_swap",
            Self::TcEvent => "tc_event",
            Self::TcEventTimeseries => "tc_event_timeseries",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mortgage => "Mortgage",
            Self::Property => "Property",
            Self::FloodGauge => "Flood Gauge",
            Self::PhysicalRiskSwap => "Physical Risk Swap",
            Self::TcEvent => "Tropical Cyclone Event",
            Self::TcEventTimeseries => "Tropical Cyclone Event Time Series",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    /// Accepts the snake-case identifier, the root key, or the label
    /// (case-insensitive, hyphens and spaces treated as underscores).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        for kind in Self::all() {
            if normalized == kind.as_str()
                || normalized == kind.root_key().to_lowercase()
                || normalized == kind.label().to_lowercase().replace(' ', "_")
            {
                return Ok(*kind);
            }
        }
        Err(ModelError::UnknownEntity(s.to_string()))
    }
}
