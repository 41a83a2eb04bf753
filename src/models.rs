use crate::error::PaceError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Race distance selection, either a standard preset or a custom length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum RaceDistance {
    #[serde(rename = "mile")]
    Mile,
    #[serde(rename = "3k")]
    ThreeK,
    #[default]
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half_marathon")]
    HalfMarathon,
    #[serde(rename = "marathon")]
    Marathon,
    #[serde(rename = "custom")]
    Custom,
}

impl RaceDistance {
    pub const PRESETS: [RaceDistance; 6] = [
        RaceDistance::Mile,
        RaceDistance::ThreeK,
        RaceDistance::FiveK,
        RaceDistance::TenK,
        RaceDistance::HalfMarathon,
        RaceDistance::Marathon,
    ];

    /// Length in meters, `None` for a custom distance
    pub fn meters(&self) -> Option<f64> {
        match self {
            RaceDistance::Mile => Some(1609.344),
            RaceDistance::ThreeK => Some(3000.0),
            RaceDistance::FiveK => Some(5000.0),
            RaceDistance::TenK => Some(10000.0),
            RaceDistance::HalfMarathon => Some(21097.5),
            RaceDistance::Marathon => Some(42195.0),
            RaceDistance::Custom => None,
        }
    }

    /// Name used on the wire and in configuration
    pub fn wire_name(&self) -> &'static str {
        match self {
            RaceDistance::Mile => "mile",
            RaceDistance::ThreeK => "3k",
            RaceDistance::FiveK => "5k",
            RaceDistance::TenK => "10k",
            RaceDistance::HalfMarathon => "half_marathon",
            RaceDistance::Marathon => "marathon",
            RaceDistance::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RaceDistance::Mile => "Mile",
            RaceDistance::ThreeK => "3K",
            RaceDistance::FiveK => "5K",
            RaceDistance::TenK => "10K",
            RaceDistance::HalfMarathon => "Half Marathon",
            RaceDistance::Marathon => "Marathon",
            RaceDistance::Custom => "Custom",
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for RaceDistance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RaceDistance::PRESETS
            .iter()
            .chain(std::iter::once(&RaceDistance::Custom))
            .find(|d| d.wire_name() == wanted)
            .copied()
            .ok_or_else(|| format!("unknown race distance '{}'", s))
    }
}

/// Resolve a distance selection into meters.
///
/// Presets ignore `custom_meters`. A custom selection needs a finite,
/// strictly positive custom length.
pub fn resolve_distance(choice: RaceDistance, custom_meters: Option<f64>) -> Result<f64, PaceError> {
    match choice.meters() {
        Some(meters) => Ok(meters),
        None => match custom_meters {
            Some(meters) if meters.is_finite() && meters > 0.0 => Ok(meters),
            Some(_) => Err(PaceError::InvalidInput(
                "custom distance must be a positive number of meters",
            )),
            None => Err(PaceError::InvalidInput(
                "custom distance selected but no distance given",
            )),
        },
    }
}

/// One row of a cumulative split table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub distance_meters: f64,
    pub cumulative_seconds: f64,
}

/// Cumulative 200m splits up to a repetition distance.
///
/// Rows are derived on demand from the 200m split and the rep count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    split_200: f64,
    reps_count: u32,
}

impl Breakdown {
    pub fn new(split_200: f64, reps_count: u32) -> Self {
        Self {
            split_200,
            reps_count,
        }
    }

    /// Number of 200m rows in the table
    pub fn reps(&self) -> u32 {
        self.reps_count
    }

    pub fn iter(&self) -> impl Iterator<Item = BreakdownRow> + '_ {
        (1..=self.reps_count).map(move |rep| BreakdownRow {
            distance_meters: f64::from(rep) * 200.0,
            cumulative_seconds: self.split_200 * f64::from(rep),
        })
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Goal-pace figures, all in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceResult {
    pub pace_per_mile: f64,
    pub pace_per_km: f64,
    pub split_200: f64,
    pub split_400: f64,
    pub rep_seconds: f64,
    pub breakdown: Breakdown,
}

/// Paces derived from a single 200m split, all in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitConversionResult {
    pub split_200: f64,
    pub pace_per_mile: f64,
    pub pace_per_km: f64,
}
