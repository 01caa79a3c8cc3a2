use super::types::{GeoPoint, NetworkVerdict, Stake, StakeId, Status};

/// Stakes with battery charge below this are due for maintenance.
pub const LOW_BATTERY: f64 = 85.0;

/// Danger stakes needed before an incident site is pinpointed.
const INCIDENT_MIN_STAKES: usize = 3;

/// Reduce all stake statuses to one network verdict. Severity uses
/// presence semantics — a single Danger stake makes the whole network
/// Danger, else a single Warning makes it Warning. Recomputed fresh on
/// every call; there is no hysteresis.
pub fn classify(stakes: &[Stake]) -> NetworkVerdict {
	let mut danger = Vec::new();
	let mut warning = Vec::new();
	let mut normal = Vec::new();
	for stake in stakes {
		match stake.status {
			Status::Danger => danger.push(stake.id.clone()),
			Status::Warning => warning.push(stake.id.clone()),
			Status::Normal => normal.push(stake.id.clone()),
		}
	}

	let severity = if !danger.is_empty() {
		Status::Danger
	} else if !warning.is_empty() {
		Status::Warning
	} else {
		Status::Normal
	};

	let n = stakes.len() as f64;
	let (mean_temperature, mean_humidity) = if stakes.is_empty() {
		(0.0, 0.0)
	} else {
		(
			stakes.iter().map(|s| s.readings.temperature).sum::<f64>() / n,
			stakes.iter().map(|s| s.readings.humidity).sum::<f64>() / n,
		)
	};

	let low_battery: Vec<StakeId> = stakes
		.iter()
		.filter(|s| s.readings.battery < LOW_BATTERY)
		.map(|s| s.id.clone())
		.collect();

	let incident_site = incident_site(stakes, &danger);

	NetworkVerdict {
		severity,
		danger,
		warning,
		normal,
		mean_temperature,
		mean_humidity,
		low_battery,
		incident_site,
	}
}

fn incident_site(stakes: &[Stake], danger: &[StakeId]) -> Option<GeoPoint> {
	if danger.len() < INCIDENT_MIN_STAKES {
		return None;
	}
	let positions: Vec<GeoPoint> = stakes
		.iter()
		.filter(|s| s.status == Status::Danger)
		.map(|s| s.position)
		.collect();
	let n = positions.len() as f64;
	Some(GeoPoint::new(
		positions.iter().map(|p| p.lat).sum::<f64>() / n,
		positions.iter().map(|p| p.lng).sum::<f64>() / n,
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::config::test_stake;

	fn fixture(statuses: &[Status]) -> Vec<Stake> {
		statuses
			.iter()
			.enumerate()
			.map(|(i, &status)| {
				test_stake(
					&format!("S{}", i),
					GeoPoint::new(i as f64 * 0.001, 0.0),
					status,
				)
			})
			.collect()
	}

	#[test]
	fn severity_truth_table() {
		use Status::*;
		let tiers = [Normal, Warning, Danger];
		for &a in &tiers {
			for &b in &tiers {
				for &c in &tiers {
					let verdict = classify(&fixture(&[a, b, c]));
					let expected = if [a, b, c].contains(&Danger) {
						Danger
					} else if [a, b, c].contains(&Warning) {
						Warning
					} else {
						Normal
					};
					assert_eq!(verdict.severity, expected, "statuses {:?}", [a, b, c]);
				}
			}
		}
	}

	#[test]
	fn one_danger_among_nine_normal_flips_the_verdict() {
		let mut statuses = vec![Status::Normal; 9];
		statuses.push(Status::Danger);
		let verdict = classify(&fixture(&statuses));
		assert_eq!(verdict.severity, Status::Danger);
		assert_eq!(verdict.danger.len(), 1);
		assert_eq!(verdict.danger[0].as_str(), "S9");
		assert_eq!(verdict.normal.len(), 9);
	}

	#[test]
	fn tier_lists_partition_the_input() {
		let verdict = classify(&fixture(&[
			Status::Normal,
			Status::Danger,
			Status::Warning,
			Status::Danger,
		]));
		assert_eq!(verdict.danger.len(), 2);
		assert_eq!(verdict.warning.len(), 1);
		assert_eq!(verdict.normal.len(), 1);
	}

	#[test]
	fn summary_statistics() {
		let mut stakes = fixture(&[Status::Normal, Status::Normal]);
		stakes[0].readings.temperature = 20.0;
		stakes[1].readings.temperature = 30.0;
		stakes[0].readings.humidity = 40.0;
		stakes[1].readings.humidity = 60.0;
		stakes[0].readings.battery = 84.9;
		stakes[1].readings.battery = 85.0;

		let verdict = classify(&stakes);
		assert!((verdict.mean_temperature - 25.0).abs() < 1e-12);
		assert!((verdict.mean_humidity - 50.0).abs() < 1e-12);
		assert_eq!(verdict.low_battery.len(), 1);
		assert_eq!(verdict.low_battery[0].as_str(), "S0");
	}

	#[test]
	fn incident_site_needs_three_danger_stakes() {
		let two = classify(&fixture(&[Status::Danger, Status::Danger]));
		assert_eq!(two.incident_site, None);

		let mut stakes = fixture(&[Status::Danger, Status::Danger, Status::Danger]);
		stakes[0].position = GeoPoint::new(0.0, 0.0);
		stakes[1].position = GeoPoint::new(0.0, 3.0);
		stakes[2].position = GeoPoint::new(3.0, 0.0);
		let site = classify(&stakes).incident_site.unwrap();
		assert!((site.lat - 1.0).abs() < 1e-12);
		assert!((site.lng - 1.0).abs() < 1e-12);
	}

	#[test]
	fn empty_network_is_normal() {
		let verdict = classify(&[]);
		assert_eq!(verdict.severity, Status::Normal);
		assert!(verdict.danger.is_empty());
		assert_eq!(verdict.mean_temperature, 0.0);
	}
}
