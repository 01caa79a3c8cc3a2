use crate::network::{GeoPoint, SensorNetwork, StakeId};

use super::scale::MapProjection;

pub const MARKER_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 14.0;
/// Translucent status circle drawn around every stake, in meters.
pub const STATUS_CIRCLE_M: f64 = 150.0;
/// Selection highlight ring, in meters, before the pulse scale.
pub const HIGHLIGHT_RADIUS_M: f64 = 180.0;
/// Canvas padding around the fitted stake bounds, in pixels.
const FIT_PADDING: f64 = 60.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// View-side state of the map surface: projection, pan/zoom transform,
/// and the cosmetic animation clocks. Holds no sensor data — the network
/// snapshot is borrowed per frame by the renderer.
pub struct MapCanvasState {
	pub projection: MapProjection,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl MapCanvasState {
	pub fn new(points: &[GeoPoint], width: f64, height: f64) -> Self {
		Self {
			projection: MapProjection::fit(points, width, height, FIT_PADDING),
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			pan: PanState::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	pub fn resize(&mut self, points: &[GeoPoint], width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.projection = MapProjection::fit(points, width, height, FIT_PADDING);
	}

	pub fn screen_to_canvas(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Hit-test the stake markers. HIT_RADIUS is in world-space and
	/// scales with zoom like the markers themselves.
	pub fn stake_at_position(
		&self,
		network: &SensorNetwork,
		sx: f64,
		sy: f64,
	) -> Option<StakeId> {
		let (cx, cy) = self.screen_to_canvas(sx, sy);
		let mut found = None;
		for stake in network.stakes() {
			let (x, y) = self.projection.project(&stake.position);
			let (dx, dy) = (x - cx, y - cy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(stake.id.clone());
			}
		}
		found
	}

	/// Radius multiplier of the selection highlight, within [1.0, 1.15].
	pub fn pulse_scale(&self) -> f64 {
		1.075 + 0.075 * (self.flow_time * 1.5).sin()
	}

	/// Stroke opacity of danger edges, pulsing within [0.3, 1.0].
	pub fn danger_pulse_opacity(&self) -> f64 {
		0.65 + 0.35 * (self.flow_time * 2.6).sin()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn animation_clocks_stay_inside_documented_bounds() {
		let mut state = MapCanvasState::new(&[], 800.0, 600.0);
		for _ in 0..1000 {
			state.tick(0.016);
			let pulse = state.pulse_scale();
			assert!((1.0..=1.15).contains(&pulse), "{}", pulse);
			let opacity = state.danger_pulse_opacity();
			assert!((0.3..=1.0).contains(&opacity), "{}", opacity);
		}
	}

	#[test]
	fn hit_test_finds_a_stake_under_the_cursor() {
		use crate::network::SensorNetwork;

		let network = SensorNetwork::demo();
		let points: Vec<GeoPoint> = network.stakes().iter().map(|s| s.position).collect();
		let state = MapCanvasState::new(&points, 800.0, 600.0);

		let target = &network.stakes()[0];
		let (x, y) = state.projection.project(&target.position);
		let hit = state.stake_at_position(&network, x, y);
		assert!(hit.is_some());

		assert_eq!(state.stake_at_position(&network, -500.0, -500.0), None);
	}

	#[test]
	fn screen_to_canvas_inverts_pan_and_zoom() {
		let mut state = MapCanvasState::new(&[], 800.0, 600.0);
		state.transform = ViewTransform {
			x: 120.0,
			y: -40.0,
			k: 2.0,
		};
		let (cx, cy) = state.screen_to_canvas(120.0 + 2.0 * 30.0, -40.0 + 2.0 * 50.0);
		assert!((cx - 30.0).abs() < 1e-12);
		assert!((cy - 50.0).abs() < 1e-12);
	}
}
