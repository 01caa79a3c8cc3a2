use super::types::Stake;

/// Greedy one-hop grouping: walk the input in order, start a cluster at
/// each unassigned stake, and pull in every remaining unassigned stake
/// within `radius` of that seed. Members are close to the seed, not
/// necessarily to each other, and the sweep is a single hop — this is
/// deliberately not transitive-closure clustering, and the grouping
/// depends on input order.
pub fn one_hop_clusters<'a>(stakes: &[&'a Stake], radius: f64) -> Vec<Vec<&'a Stake>> {
	let mut clusters = Vec::new();
	let mut assigned = vec![false; stakes.len()];

	for i in 0..stakes.len() {
		if assigned[i] {
			continue;
		}
		assigned[i] = true;
		let seed = stakes[i];
		let mut cluster = vec![seed];

		for j in (i + 1)..stakes.len() {
			if assigned[j] {
				continue;
			}
			if seed.position.distance(&stakes[j].position) < radius {
				assigned[j] = true;
				cluster.push(stakes[j]);
			}
		}
		clusters.push(cluster);
	}
	clusters
}
