use std::error::Error;
use std::fmt;

/// Stable identifier for a sensor stake.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StakeId(String);

impl StakeId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for StakeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Geographic position in floating-point degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeoPoint {
	pub lat: f64,
	pub lng: f64,
}

impl GeoPoint {
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Planar Euclidean distance over raw coordinate deltas, in degrees.
	/// Fine at the scale of a single monitored site; not geodesic.
	pub fn distance(&self, other: &GeoPoint) -> f64 {
		let (dlat, dlng) = (self.lat - other.lat, self.lng - other.lng);
		(dlat * dlat + dlng * dlng).sqrt()
	}
}

/// Per-stake severity tier. The derived `Ord` gives the strict
/// precedence Normal < Warning < Danger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
	Normal,
	Warning,
	Danger,
}

impl Status {
	pub fn color(&self) -> &'static str {
		match self {
			Status::Normal => "#10b981",
			Status::Warning => "#f59e0b",
			Status::Danger => "#ef4444",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Status::Normal => "Normal",
			Status::Warning => "Warning",
			Status::Danger => "Fire Alert!",
		}
	}

	pub fn css_class(&self) -> &'static str {
		match self {
			Status::Normal => "normal",
			Status::Warning => "warning",
			Status::Danger => "danger",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AirQuality {
	Good,
	Moderate,
	Poor,
	Hazardous,
}

impl AirQuality {
	pub fn as_str(&self) -> &'static str {
		match self {
			AirQuality::Good => "Good",
			AirQuality::Moderate => "Moderate",
			AirQuality::Poor => "Poor",
			AirQuality::Hazardous => "Hazardous",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmokeState {
	Clear,
	Detected,
	Heavy,
}

impl SmokeState {
	pub fn as_str(&self) -> &'static str {
		match self {
			SmokeState::Clear => "Clear",
			SmokeState::Detected => "Detected",
			SmokeState::Heavy => "Heavy Smoke",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlameState {
	None,
	Detected,
}

impl FlameState {
	pub fn as_str(&self) -> &'static str {
		match self {
			FlameState::None => "No Flame",
			FlameState::Detected => "Flame Detected",
		}
	}
}

/// Current reading set for one stake. Continuous fields drift under the
/// simulation tick; the categorical fields are fixed per configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readings {
	pub temperature: f64,
	pub humidity: f64,
	pub moisture_30: f64,
	pub moisture_60: f64,
	pub moisture_90: f64,
	pub battery: f64,
	pub air_quality: AirQuality,
	pub smoke: SmokeState,
	pub flame: FlameState,
}

/// How the simulation perturbs a stake's continuous readings on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Volatility {
	/// Fire-adjacent stake: large temperature swings, drifting humidity.
	Hot,
	/// Ordinary field stake: small temperature drift only.
	Ambient,
	/// Readings held fixed.
	Static,
}

/// A single sensor stake. Status is assigned at configuration time and is
/// never recomputed from the drifting readings (see DESIGN.md).
#[derive(Clone, Debug, PartialEq)]
pub struct Stake {
	pub id: StakeId,
	pub position: GeoPoint,
	pub readings: Readings,
	pub status: Status,
	pub volatility: Volatility,
}

/// Stroke styling for a proximity edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
	pub color: &'static str,
	pub weight: f64,
	pub opacity: f64,
}

/// Proximity link between two stakes, styled by the worse endpoint status.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub a: StakeId,
	pub b: StakeId,
	pub from: GeoPoint,
	pub to: GeoPoint,
	pub severity: Status,
	pub style: LineStyle,
}

/// Renderable status-colored area derived from a stake cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
	pub boundary: Vec<GeoPoint>,
	pub color: &'static str,
	pub fill_opacity: f64,
}

/// One ring of the radial heat falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatRing {
	pub radius_m: f64,
	pub opacity: f64,
}

/// Per-stake heat glow: three concentric rings plus an optional
/// temperature label for hot stakes.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatLayer {
	pub stake: StakeId,
	pub center: GeoPoint,
	pub color: &'static str,
	pub rings: [HeatRing; 3],
	pub label: Option<String>,
}

/// Network-wide severity verdict with per-tier membership and summary
/// statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkVerdict {
	pub severity: Status,
	pub danger: Vec<StakeId>,
	pub warning: Vec<StakeId>,
	pub normal: Vec<StakeId>,
	pub mean_temperature: f64,
	pub mean_humidity: f64,
	pub low_battery: Vec<StakeId>,
	/// Centroid of the danger stakes once three or more report danger;
	/// anchors the incident label on the map.
	pub incident_site: Option<GeoPoint>,
}

/// Failures surfaced by the analysis core. Lookups of unconfigured stakes
/// fail explicitly instead of falling back to a default position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkError {
	UnknownStake(StakeId),
}

impl fmt::Display for NetworkError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NetworkError::UnknownStake(id) => {
				write!(f, "unknown stake id: {}", id)
			}
		}
	}
}

impl Error for NetworkError {}
