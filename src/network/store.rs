use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cluster::one_hop_clusters;
use super::config;
use super::graph::proximity_edges;
use super::heat::heat_layer;
use super::types::{
	Edge, GeoPoint, HeatLayer, NetworkError, NetworkVerdict, Stake, StakeId, Status, Volatility,
	Zone,
};
use super::verdict::classify;
use super::zone::{ZONE_EXPANSION, zone_boundary};

/// Seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// All stakes within this range of a warning stake join its zone.
pub const WARNING_INFLUENCE: f64 = 0.01;

/// One-hop clustering radius for grouping normal stakes into safe zones.
pub const NORMAL_CLUSTER_RADIUS: f64 = 0.012;

/// The owned sensor network: holds every configured stake, advances the
/// reading simulation, and derives all renderable geometry plus the
/// network verdict. The tick is the only mutator; every analysis method
/// is a pure read of the current snapshot, rebuilt from scratch per call.
pub struct SensorNetwork {
	stakes: Vec<Stake>,
	index: HashMap<StakeId, usize>,
	rng: ChaCha8Rng,
}

impl SensorNetwork {
	pub fn new(stakes: Vec<Stake>, seed: u64) -> Self {
		let index = stakes
			.iter()
			.enumerate()
			.map(|(i, s)| (s.id.clone(), i))
			.collect();
		Self {
			stakes,
			index,
			rng: ChaCha8Rng::seed_from_u64(seed),
		}
	}

	/// The ten-stake demo site from `config`.
	pub fn demo() -> Self {
		Self::new(config::demo_stakes(), DEFAULT_SEED)
	}

	pub fn stakes(&self) -> &[Stake] {
		&self.stakes
	}

	/// Look up one stake's full snapshot. Unknown ids fail explicitly;
	/// there is no fallback position.
	pub fn get(&self, id: &StakeId) -> Result<&Stake, NetworkError> {
		self.index
			.get(id)
			.map(|&i| &self.stakes[i])
			.ok_or_else(|| NetworkError::UnknownStake(id.clone()))
	}

	/// Advance the reading simulation one step. Continuous readings drift
	/// by a uniform delta scaled to the stake's volatility, then clamp to
	/// that profile's valid range. Status and position never change here.
	pub fn tick(&mut self) {
		for stake in &mut self.stakes {
			let r = &mut stake.readings;
			match stake.volatility {
				Volatility::Hot => {
					r.temperature =
						(r.temperature + self.rng.gen_range(-0.25..0.25)).clamp(25.0, 32.0);
					r.humidity = (r.humidity + self.rng.gen_range(-1.0..1.0)).clamp(40.0, 70.0);
				}
				Volatility::Ambient => {
					r.temperature =
						(r.temperature + self.rng.gen_range(-0.1..0.1)).clamp(22.0, 27.0);
				}
				Volatility::Static => {}
			}
		}
	}

	/// Current proximity graph with severity styling.
	pub fn edges(&self) -> Vec<Edge> {
		proximity_edges(&self.stakes)
	}

	/// Current status-colored zones: one danger zone over all danger
	/// stakes, a warning zone of everything near each warning stake, and
	/// a safe zone per one-hop cluster of at least three normal stakes.
	pub fn zones(&self) -> Vec<Zone> {
		let mut zones = Vec::new();

		let danger: Vec<GeoPoint> = self
			.by_status(Status::Danger)
			.map(|s| s.position)
			.collect();
		if danger.len() >= 2 {
			if let Some(boundary) = zone_boundary(&danger, ZONE_EXPANSION) {
				zones.push(Zone {
					boundary,
					color: Status::Danger.color(),
					fill_opacity: 0.3,
				});
			}
		}

		for warning in self.by_status(Status::Warning) {
			let nearby: Vec<GeoPoint> = self
				.stakes
				.iter()
				.filter(|s| s.position.distance(&warning.position) < WARNING_INFLUENCE)
				.map(|s| s.position)
				.collect();
			if nearby.len() >= 2 {
				if let Some(boundary) = zone_boundary(&nearby, ZONE_EXPANSION) {
					zones.push(Zone {
						boundary,
						color: Status::Warning.color(),
						fill_opacity: 0.2,
					});
				}
			}
		}

		let normal: Vec<&Stake> = self.by_status(Status::Normal).collect();
		for cluster in one_hop_clusters(&normal, NORMAL_CLUSTER_RADIUS) {
			if cluster.len() < 3 {
				continue;
			}
			let points: Vec<GeoPoint> = cluster.iter().map(|s| s.position).collect();
			if let Some(boundary) = zone_boundary(&points, ZONE_EXPANSION) {
				zones.push(Zone {
					boundary,
					color: Status::Normal.color(),
					fill_opacity: 0.15,
				});
			}
		}

		zones
	}

	/// Per-stake heat glow specs for the heat-map overlay.
	pub fn heat_layers(&self) -> Vec<HeatLayer> {
		self.stakes.iter().map(heat_layer).collect()
	}

	/// Aggregate severity and summary statistics over all stakes.
	pub fn verdict(&self) -> NetworkVerdict {
		classify(&self.stakes)
	}

	fn by_status(&self, status: Status) -> impl Iterator<Item = &Stake> {
		self.stakes.iter().filter(move |s| s.status == status)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::config::test_stake;

	#[test]
	fn unknown_stake_lookup_fails_explicitly() {
		let network = SensorNetwork::demo();
		let bogus = StakeId::new("Z");
		assert_eq!(
			network.get(&bogus),
			Err(NetworkError::UnknownStake(bogus.clone()))
		);
		assert!(network.get(&StakeId::new("A")).is_ok());
	}

	#[test]
	fn tick_keeps_readings_inside_profile_bounds() {
		let mut network = SensorNetwork::demo();
		for _ in 0..200 {
			network.tick();
		}
		for stake in network.stakes() {
			match stake.volatility {
				Volatility::Hot => {
					let r = &stake.readings;
					assert!((25.0..=32.0).contains(&r.temperature), "{}", r.temperature);
					assert!((40.0..=70.0).contains(&r.humidity), "{}", r.humidity);
				}
				Volatility::Ambient => {
					let t = stake.readings.temperature;
					assert!((22.0..=27.0).contains(&t), "{}", t);
				}
				Volatility::Static => {}
			}
		}
	}

	#[test]
	fn tick_never_touches_status_or_position() {
		let mut network = SensorNetwork::demo();
		let before: Vec<_> = network
			.stakes()
			.iter()
			.map(|s| (s.id.clone(), s.position, s.status))
			.collect();
		for _ in 0..50 {
			network.tick();
		}
		let after: Vec<_> = network
			.stakes()
			.iter()
			.map(|s| (s.id.clone(), s.position, s.status))
			.collect();
		assert_eq!(before, after);
	}

	#[test]
	fn static_stakes_never_drift() {
		let mut network = SensorNetwork::demo();
		let before = network.get(&StakeId::new("G")).unwrap().readings;
		for _ in 0..50 {
			network.tick();
		}
		assert_eq!(network.get(&StakeId::new("G")).unwrap().readings, before);
	}

	#[test]
	fn same_seed_gives_identical_simulation() {
		let mut a = SensorNetwork::demo();
		let mut b = SensorNetwork::demo();
		for _ in 0..20 {
			a.tick();
			b.tick();
		}
		for (sa, sb) in a.stakes().iter().zip(b.stakes()) {
			assert_eq!(sa.readings, sb.readings);
		}
	}

	#[test]
	fn derived_geometry_is_idempotent_between_ticks() {
		let mut network = SensorNetwork::demo();
		network.tick();
		assert_eq!(network.edges(), network.edges());
		assert_eq!(network.zones(), network.zones());
		assert_eq!(network.heat_layers(), network.heat_layers());
		assert_eq!(network.verdict(), network.verdict());
	}

	#[test]
	fn danger_triangle_produces_one_red_zone() {
		let stakes = vec![
			test_stake("X", GeoPoint::new(0.0, 0.0), Status::Danger),
			test_stake("Y", GeoPoint::new(0.0, 1.0), Status::Danger),
			test_stake("Z", GeoPoint::new(1.0, 0.0), Status::Danger),
		];
		let network = SensorNetwork::new(stakes, 0);
		let zones = network.zones();
		assert_eq!(zones.len(), 1);
		assert_eq!(zones[0].boundary.len(), 3);
		assert_eq!(zones[0].color, Status::Danger.color());
	}

	#[test]
	fn collinear_danger_stakes_yield_no_zone() {
		let stakes = vec![
			test_stake("X", GeoPoint::new(0.0, 0.0), Status::Danger),
			test_stake("Y", GeoPoint::new(0.0, 0.001), Status::Danger),
			test_stake("Z", GeoPoint::new(0.0, 0.002), Status::Danger),
		];
		let network = SensorNetwork::new(stakes, 0);
		assert!(network.zones().is_empty());
	}

	#[test]
	fn empty_network_yields_empty_everything() {
		let network = SensorNetwork::new(Vec::new(), 0);
		assert!(network.edges().is_empty());
		assert!(network.zones().is_empty());
		assert!(network.heat_layers().is_empty());
		assert_eq!(network.verdict().severity, Status::Normal);
	}

	#[test]
	fn demo_site_verdict_is_danger_with_incident_site() {
		let network = SensorNetwork::demo();
		let verdict = network.verdict();
		assert_eq!(verdict.severity, Status::Danger);
		assert_eq!(verdict.danger.len(), 3);
		assert_eq!(verdict.warning.len(), 1);
		let site = verdict.incident_site.unwrap();
		// Center of the F/G/H triangle.
		assert!((site.lat - 36.78).abs() < 0.01);
		assert!((site.lng + 119.4186).abs() < 0.01);
	}

	#[test]
	fn demo_site_builds_danger_and_safe_zones() {
		let network = SensorNetwork::demo();
		let zones = network.zones();
		assert!(
			zones
				.iter()
				.any(|z| z.color == Status::Danger.color() && z.fill_opacity == 0.3)
		);
		assert!(zones.iter().any(|z| z.color == Status::Warning.color()));
		for zone in &zones {
			assert!(zone.boundary.len() >= 3);
		}
	}
}
