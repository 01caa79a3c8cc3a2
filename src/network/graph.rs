use super::types::{Edge, LineStyle, Stake, Status};

/// Stakes closer than this (in degrees) get a constellation link.
pub const EDGE_DISTANCE: f64 = 0.008;

fn line_style(severity: Status) -> LineStyle {
	match severity {
		Status::Danger => LineStyle {
			color: Status::Danger.color(),
			weight: 3.0,
			opacity: 0.8,
		},
		Status::Warning => LineStyle {
			color: Status::Warning.color(),
			weight: 2.0,
			opacity: 0.6,
		},
		Status::Normal => LineStyle {
			color: Status::Normal.color(),
			weight: 1.0,
			opacity: 0.4,
		},
	}
}

/// Build the proximity graph: every unordered stake pair strictly closer
/// than [`EDGE_DISTANCE`], styled by the worse of the two endpoint
/// statuses. Pure; an empty stake list yields no edges.
pub fn proximity_edges(stakes: &[Stake]) -> Vec<Edge> {
	let mut edges = Vec::new();
	for i in 0..stakes.len() {
		for j in (i + 1)..stakes.len() {
			let (a, b) = (&stakes[i], &stakes[j]);
			if a.position.distance(&b.position) >= EDGE_DISTANCE {
				continue;
			}
			let severity = a.status.max(b.status);
			edges.push(Edge {
				a: a.id.clone(),
				b: b.id.clone(),
				from: a.position,
				to: b.position,
				severity,
				style: line_style(severity),
			});
		}
	}
	edges
}
