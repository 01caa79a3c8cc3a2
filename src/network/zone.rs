use super::types::GeoPoint;

/// Radial expansion applied to zone boundaries, in degrees (~300 m).
pub const ZONE_EXPANSION: f64 = 0.003;

/// Polygon area below this (in squared degrees) counts as degenerate.
const DEGENERATE_AREA: f64 = 1e-12;

fn centroid(points: &[GeoPoint]) -> GeoPoint {
	let n = points.len() as f64;
	GeoPoint::new(
		points.iter().map(|p| p.lat).sum::<f64>() / n,
		points.iter().map(|p| p.lng).sum::<f64>() / n,
	)
}

/// Shoelace area of a polygon given in vertex order.
fn polygon_area(points: &[GeoPoint]) -> f64 {
	let mut twice_area = 0.0;
	for i in 0..points.len() {
		let (p, q) = (&points[i], &points[(i + 1) % points.len()]);
		twice_area += p.lng * q.lat - q.lng * p.lat;
	}
	twice_area.abs() / 2.0
}

/// Inflate-and-order boundary around a cluster of stakes: sort members by
/// bearing from the centroid and push each one radially outward by
/// `expansion` along its own bearing.
///
/// The bearing is `atan2(Δlat, Δlng)` and the offset is
/// `(sin θ, cos θ)` applied to (lat, lng) in that order. That pairing
/// looks swapped against the usual polar convention but it is the
/// convention the rendered shapes are calibrated to; changing it rotates
/// every zone by 90°.
///
/// Not a convex hull — sorting by bearing is enough for the small,
/// roughly convex clusters this runs on. Fewer than three members, or a
/// collinear cluster (zero-area ring), yields `None`.
pub fn zone_boundary(points: &[GeoPoint], expansion: f64) -> Option<Vec<GeoPoint>> {
	if points.len() < 3 {
		return None;
	}
	let center = centroid(points);

	let mut by_bearing: Vec<(f64, GeoPoint)> = points
		.iter()
		.map(|p| ((p.lat - center.lat).atan2(p.lng - center.lng), *p))
		.collect();
	by_bearing.sort_by(|a, b| a.0.total_cmp(&b.0));

	let ordered: Vec<GeoPoint> = by_bearing.iter().map(|&(_, p)| p).collect();
	if polygon_area(&ordered) < DEGENERATE_AREA {
		return None;
	}

	Some(
		by_bearing
			.iter()
			.map(|&(bearing, p)| {
				GeoPoint::new(
					p.lat + bearing.sin() * expansion,
					p.lng + bearing.cos() * expansion,
				)
			})
			.collect(),
	)
}
