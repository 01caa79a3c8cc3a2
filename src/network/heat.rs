use super::types::{HeatLayer, HeatRing, Stake};

/// Ring radii of the heat glow, innermost first, in meters.
pub const RING_RADII: [f64; 3] = [120.0, 180.0, 240.0];

/// Stakes at or above this temperature get a reading label.
pub const LABEL_THRESHOLD: f64 = 26.0;

/// Discrete temperature-to-color tier. Boundaries resolve with `>=`
/// toward the hotter bucket, so a reading of exactly 29.0 is extreme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatBucket {
	pub color: &'static str,
	pub base_opacity: f64,
}

pub fn bucket(temperature: f64) -> HeatBucket {
	if temperature >= 29.0 {
		HeatBucket { color: "#dc2626", base_opacity: 0.7 }
	} else if temperature >= 27.0 {
		HeatBucket { color: "#ef4444", base_opacity: 0.6 }
	} else if temperature >= 25.0 {
		HeatBucket { color: "#f59e0b", base_opacity: 0.5 }
	} else if temperature >= 23.0 {
		HeatBucket { color: "#22c55e", base_opacity: 0.4 }
	} else {
		HeatBucket { color: "#10b981", base_opacity: 0.3 }
	}
}

/// Build the glow spec for one stake: three concentric rings sharing the
/// bucket color, opacity fading by 0.2 of the base per layer outward.
pub fn heat_layer(stake: &Stake) -> HeatLayer {
	let temperature = stake.readings.temperature;
	let bucket = bucket(temperature);

	let mut rings = [HeatRing { radius_m: 0.0, opacity: 0.0 }; 3];
	for (layer, ring) in rings.iter_mut().enumerate() {
		*ring = HeatRing {
			radius_m: RING_RADII[layer],
			opacity: bucket.base_opacity * (0.8 - layer as f64 * 0.2),
		};
	}

	let label = (temperature >= LABEL_THRESHOLD).then(|| format!("{:.1}°C", temperature));

	HeatLayer {
		stake: stake.id.clone(),
		center: stake.position,
		color: bucket.color,
		rings,
		label,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::config::test_stake;
	use crate::network::types::{GeoPoint, Status};

	#[test]
	fn buckets_step_at_documented_boundaries() {
		assert_eq!(bucket(20.0).color, "#10b981");
		assert_eq!(bucket(22.9).color, "#10b981");
		assert_eq!(bucket(23.0).color, "#22c55e");
		assert_eq!(bucket(24.9).color, "#22c55e");
		assert_eq!(bucket(25.0).color, "#f59e0b");
		assert_eq!(bucket(27.0).color, "#ef4444");
		assert_eq!(bucket(28.9).color, "#ef4444");
		assert_eq!(bucket(29.0).color, "#dc2626");
		assert_eq!(bucket(35.0).color, "#dc2626");
	}

	#[test]
	fn exact_29_is_the_extreme_bucket() {
		let b = bucket(29.0);
		assert_eq!(b.color, "#dc2626");
		assert_eq!(b.base_opacity, 0.7);
	}

	#[test]
	fn rings_fade_outward_from_the_base_opacity() {
		let mut stake = test_stake("F", GeoPoint::new(0.0, 0.0), Status::Danger);
		stake.readings.temperature = 31.0;
		let layer = heat_layer(&stake);

		assert_eq!(layer.color, "#dc2626");
		assert_eq!(layer.rings[0].radius_m, 120.0);
		assert_eq!(layer.rings[1].radius_m, 180.0);
		assert_eq!(layer.rings[2].radius_m, 240.0);
		let base = 0.7;
		assert!((layer.rings[0].opacity - base * 0.8).abs() < 1e-12);
		assert!((layer.rings[1].opacity - base * 0.6).abs() < 1e-12);
		assert!((layer.rings[2].opacity - base * 0.4).abs() < 1e-12);
	}

	#[test]
	fn label_appears_at_the_secondary_threshold() {
		let mut stake = test_stake("A", GeoPoint::new(0.0, 0.0), Status::Normal);
		stake.readings.temperature = 25.9;
		assert_eq!(heat_layer(&stake).label, None);

		stake.readings.temperature = 26.0;
		assert_eq!(heat_layer(&stake).label.as_deref(), Some("26.0°C"));

		stake.readings.temperature = 31.25;
		assert_eq!(heat_layer(&stake).label.as_deref(), Some("31.2°C"));
	}
}
