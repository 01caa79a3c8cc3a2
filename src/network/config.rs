use super::types::{
	AirQuality, FlameState, GeoPoint, Readings, SmokeState, Stake, StakeId, Status, Volatility,
};

struct StakeSpec {
	id: &'static str,
	lat: f64,
	lng: f64,
	status: Status,
	volatility: Volatility,
	temperature: f64,
	humidity: f64,
	moisture: (f64, f64, f64),
	air_quality: AirQuality,
	smoke: SmokeState,
	flame: FlameState,
	battery: f64,
}

/// The demo site: six scattered normal stakes, one warning stake on the
/// southern edge, and a tight fire triangle (F, G, H) in the middle.
/// F drives the fire simulation; A–E drift gently; the rest hold still.
const DEMO_SITE: &[StakeSpec] = &[
	StakeSpec {
		id: "A",
		lat: 36.7820,
		lng: -119.4145,
		status: Status::Normal,
		volatility: Volatility::Ambient,
		temperature: 22.8,
		humidity: 65.234,
		moisture: (42.567, 38.123, 35.789),
		air_quality: AirQuality::Good,
		smoke: SmokeState::Clear,
		flame: FlameState::None,
		battery: 87.456,
	},
	StakeSpec {
		id: "B",
		lat: 36.7765,
		lng: -119.4125,
		status: Status::Normal,
		volatility: Volatility::Ambient,
		temperature: 24.6,
		humidity: 62.789,
		moisture: (39.234, 36.567, 33.891),
		air_quality: AirQuality::Good,
		smoke: SmokeState::Clear,
		flame: FlameState::None,
		battery: 91.123,
	},
	StakeSpec {
		id: "C",
		lat: 36.7845,
		lng: -119.4220,
		status: Status::Normal,
		volatility: Volatility::Ambient,
		temperature: 21.5,
		humidity: 68.456,
		moisture: (45.123, 41.789, 45.234),
		air_quality: AirQuality::Good,
		smoke: SmokeState::Clear,
		flame: FlameState::None,
		battery: 89.567,
	},
	StakeSpec {
		id: "D",
		lat: 36.7735,
		lng: -119.4195,
		status: Status::Normal,
		volatility: Volatility::Ambient,
		temperature: 25.8,
		humidity: 64.123,
		moisture: (41.456, 37.789, 34.123),
		air_quality: AirQuality::Good,
		smoke: SmokeState::Clear,
		flame: FlameState::None,
		battery: 85.234,
	},
	StakeSpec {
		id: "E",
		lat: 36.7725,
		lng: -119.4155,
		status: Status::Warning,
		volatility: Volatility::Ambient,
		temperature: 27.1,
		humidity: 58.567,
		moisture: (35.891, 32.234, 29.567),
		air_quality: AirQuality::Moderate,
		smoke: SmokeState::Clear,
		flame: FlameState::None,
		battery: 82.789,
	},
	StakeSpec {
		id: "F",
		lat: 36.7800,
		lng: -119.4179,
		status: Status::Danger,
		volatility: Volatility::Hot,
		temperature: 31.2,
		humidity: 45.123,
		moisture: (28.456, 25.789, 22.123),
		air_quality: AirQuality::Poor,
		smoke: SmokeState::Detected,
		flame: FlameState::Detected,
		battery: 78.456,
	},
	StakeSpec {
		id: "G",
		lat: 36.7810,
		lng: -119.4190,
		status: Status::Danger,
		volatility: Volatility::Static,
		temperature: 30.8,
		humidity: 42.567,
		moisture: (26.123, 23.456, 20.789),
		air_quality: AirQuality::Poor,
		smoke: SmokeState::Detected,
		flame: FlameState::Detected,
		battery: 76.234,
	},
	StakeSpec {
		id: "H",
		lat: 36.7790,
		lng: -119.4190,
		status: Status::Danger,
		volatility: Volatility::Static,
		temperature: 31.0,
		humidity: 41.234,
		moisture: (24.789, 21.567, 18.456),
		air_quality: AirQuality::Hazardous,
		smoke: SmokeState::Heavy,
		flame: FlameState::Detected,
		battery: 74.567,
	},
	StakeSpec {
		id: "I",
		lat: 36.7815,
		lng: -119.4235,
		status: Status::Normal,
		volatility: Volatility::Static,
		temperature: 23.7,
		humidity: 64.567,
		moisture: (43.234, 39.567, 36.789),
		air_quality: AirQuality::Good,
		smoke: SmokeState::Clear,
		flame: FlameState::None,
		battery: 88.234,
	},
	StakeSpec {
		id: "J",
		lat: 36.7750,
		lng: -119.4245,
		status: Status::Normal,
		volatility: Volatility::Static,
		temperature: 24.2,
		humidity: 67.234,
		moisture: (44.567, 41.234, 38.567),
		air_quality: AirQuality::Good,
		smoke: SmokeState::Clear,
		flame: FlameState::None,
		battery: 90.567,
	},
];

/// Build the configured stakes for the demo site. Ids, positions, and
/// statuses are fixed for the process lifetime; only readings drift.
pub fn demo_stakes() -> Vec<Stake> {
	DEMO_SITE
		.iter()
		.map(|spec| Stake {
			id: StakeId::new(spec.id),
			position: GeoPoint::new(spec.lat, spec.lng),
			readings: Readings {
				temperature: spec.temperature,
				humidity: spec.humidity,
				moisture_30: spec.moisture.0,
				moisture_60: spec.moisture.1,
				moisture_90: spec.moisture.2,
				battery: spec.battery,
				air_quality: spec.air_quality,
				smoke: spec.smoke,
				flame: spec.flame,
			},
			status: spec.status,
			volatility: spec.volatility,
		})
		.collect()
}

/// Minimal stake fixture for unit tests.
#[cfg(test)]
pub fn test_stake(id: &str, position: GeoPoint, status: Status) -> Stake {
	Stake {
		id: StakeId::new(id),
		position,
		readings: Readings {
			temperature: 22.0,
			humidity: 60.0,
			moisture_30: 40.0,
			moisture_60: 38.0,
			moisture_90: 36.0,
			battery: 90.0,
			air_quality: AirQuality::Good,
			smoke: SmokeState::Clear,
			flame: FlameState::None,
		},
		status,
		volatility: Volatility::Static,
	}
}
