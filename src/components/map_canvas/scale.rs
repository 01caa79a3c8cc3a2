use crate::network::GeoPoint;

/// Meters per degree of latitude, good enough at site scale.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Fit-bounds projection from geographic coordinates to canvas pixels.
///
/// The stake bounding box (plus padding) is mapped into the canvas with a
/// uniform scale on both axes and centered, so shapes keep their aspect.
/// Latitude grows northward, canvas y grows downward.
#[derive(Clone, Copy, Debug)]
pub struct MapProjection {
	max_lat: f64,
	min_lng: f64,
	/// Pixels per degree.
	scale: f64,
	offset_x: f64,
	offset_y: f64,
}

impl MapProjection {
	pub fn fit(points: &[GeoPoint], width: f64, height: f64, padding: f64) -> Self {
		let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
		let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
		for p in points {
			min_lat = min_lat.min(p.lat);
			max_lat = max_lat.max(p.lat);
			min_lng = min_lng.min(p.lng);
			max_lng = max_lng.max(p.lng);
		}
		if points.is_empty() {
			(min_lat, max_lat, min_lng, max_lng) = (0.0, 1.0, 0.0, 1.0);
		}

		let lat_span = (max_lat - min_lat).max(1e-9);
		let lng_span = (max_lng - min_lng).max(1e-9);
		let usable_w = (width - 2.0 * padding).max(1.0);
		let usable_h = (height - 2.0 * padding).max(1.0);
		let scale = (usable_w / lng_span).min(usable_h / lat_span);

		// Center the fitted box inside the canvas.
		let offset_x = (width - lng_span * scale) / 2.0;
		let offset_y = (height - lat_span * scale) / 2.0;

		Self {
			max_lat,
			min_lng,
			scale,
			offset_x,
			offset_y,
		}
	}

	pub fn project(&self, p: &GeoPoint) -> (f64, f64) {
		(
			self.offset_x + (p.lng - self.min_lng) * self.scale,
			self.offset_y + (self.max_lat - p.lat) * self.scale,
		)
	}

	/// Convert a real-world radius in meters to canvas pixels.
	pub fn meters_to_px(&self, meters: f64) -> f64 {
		meters / METERS_PER_DEGREE * self.scale
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> Vec<GeoPoint> {
		vec![
			GeoPoint::new(0.0, 0.0),
			GeoPoint::new(0.0, 1.0),
			GeoPoint::new(1.0, 0.0),
			GeoPoint::new(1.0, 1.0),
		]
	}

	#[test]
	fn corners_land_inside_the_padded_canvas() {
		let proj = MapProjection::fit(&square(), 800.0, 600.0, 40.0);
		for p in square() {
			let (x, y) = proj.project(&p);
			assert!((0.0..=800.0).contains(&x));
			assert!((0.0..=600.0).contains(&y));
		}
	}

	#[test]
	fn north_maps_to_smaller_y() {
		let proj = MapProjection::fit(&square(), 800.0, 600.0, 40.0);
		let (_, y_south) = proj.project(&GeoPoint::new(0.0, 0.5));
		let (_, y_north) = proj.project(&GeoPoint::new(1.0, 0.5));
		assert!(y_north < y_south);
	}

	#[test]
	fn scale_is_uniform_across_axes() {
		let proj = MapProjection::fit(&square(), 800.0, 600.0, 40.0);
		let (x0, y0) = proj.project(&GeoPoint::new(0.0, 0.0));
		let (x1, _) = proj.project(&GeoPoint::new(0.0, 1.0));
		let (_, y1) = proj.project(&GeoPoint::new(1.0, 0.0));
		// One degree east and one degree north cover the same pixel span.
		assert!(((x1 - x0).abs() - (y0 - y1).abs()).abs() < 1e-9);
	}

	#[test]
	fn meter_radii_scale_with_the_projection() {
		let proj = MapProjection::fit(&square(), 800.0, 600.0, 40.0);
		let one_degree_px = proj.meters_to_px(111_320.0);
		let (x0, _) = proj.project(&GeoPoint::new(0.0, 0.0));
		let (x1, _) = proj.project(&GeoPoint::new(0.0, 1.0));
		assert!((one_degree_px - (x1 - x0)).abs() < 1e-9);
	}

	#[test]
	fn empty_input_still_projects() {
		let proj = MapProjection::fit(&[], 800.0, 600.0, 40.0);
		let (x, y) = proj.project(&GeoPoint::new(0.5, 0.5));
		assert!(x.is_finite() && y.is_finite());
	}
}
