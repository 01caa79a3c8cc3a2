use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::network::{SensorNetwork, StakeId, Status};

use super::state::{HIGHLIGHT_RADIUS_M, MARKER_RADIUS, MapCanvasState, STATUS_CIRCLE_M};

const BACKGROUND: &str = "#1a2e1f";
const HIGHLIGHT_COLOR: &str = "#3b82f6";

pub fn render(
	state: &MapCanvasState,
	network: &SensorNetwork,
	selected: Option<&StakeId>,
	heat_on: bool,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_zones(state, network, ctx);
	draw_edges(state, network, ctx);
	if heat_on {
		draw_heat(state, network, ctx);
	}
	draw_stakes(state, network, ctx);
	if let Some(id) = selected {
		draw_highlight(state, network, id, ctx);
	}
	draw_incident(state, network, ctx);

	ctx.restore();
}

fn draw_zones(state: &MapCanvasState, network: &SensorNetwork, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	for zone in network.zones() {
		ctx.begin_path();
		for (i, vertex) in zone.boundary.iter().enumerate() {
			let (x, y) = state.projection.project(vertex);
			if i == 0 {
				ctx.move_to(x, y);
			} else {
				ctx.line_to(x, y);
			}
		}
		ctx.close_path();

		ctx.set_global_alpha(zone.fill_opacity);
		ctx.set_fill_style_str(zone.color);
		ctx.fill();

		ctx.set_global_alpha(0.8);
		ctx.set_stroke_style_str(zone.color);
		ctx.set_line_width(2.0 / k);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_edges(state: &MapCanvasState, network: &SensorNetwork, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	for edge in network.edges() {
		let (x1, y1) = state.projection.project(&edge.from);
		let (x2, y2) = state.projection.project(&edge.to);

		// Danger links pulse; the rest hold their configured opacity.
		let opacity = if edge.severity == Status::Danger {
			state.danger_pulse_opacity()
		} else {
			edge.style.opacity
		};

		ctx.set_global_alpha(opacity);
		ctx.set_stroke_style_str(edge.style.color);
		ctx.set_line_width(edge.style.weight / k);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_heat(state: &MapCanvasState, network: &SensorNetwork, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	for layer in network.heat_layers() {
		let (x, y) = state.projection.project(&layer.center);
		// Outermost ring first so the hotter core paints on top.
		for ring in layer.rings.iter().rev() {
			ctx.set_global_alpha(ring.opacity);
			ctx.set_fill_style_str(layer.color);
			ctx.begin_path();
			let _ = ctx.arc(x, y, state.projection.meters_to_px(ring.radius_m), 0.0, 2.0 * PI);
			ctx.fill();
		}
		ctx.set_global_alpha(1.0);

		if let Some(label) = &layer.label {
			let font = 11.0 / k.max(0.5);
			ctx.set_font(&format!("bold {}px Arial, sans-serif", font));
			ctx.set_fill_style_str("rgba(0, 0, 0, 0.8)");
			ctx.fill_rect(x - 24.0 / k, y - 34.0 / k, 48.0 / k, 16.0 / k);
			ctx.set_fill_style_str("white");
			let _ = ctx.fill_text(label, x - 20.0 / k, y - 22.0 / k);
		}
	}
}

fn draw_stakes(state: &MapCanvasState, network: &SensorNetwork, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let status_radius = state.projection.meters_to_px(STATUS_CIRCLE_M);

	for stake in network.stakes() {
		let (x, y) = state.projection.project(&stake.position);
		let color = stake.status.color();

		// Wide translucent status circle.
		ctx.begin_path();
		let _ = ctx.arc(x, y, status_radius, 0.0, 2.0 * PI);
		ctx.set_global_alpha(0.2);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_global_alpha(0.8);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0 / k);
		ctx.stroke();
		ctx.set_global_alpha(1.0);

		// Marker dot with white outline.
		ctx.begin_path();
		let _ = ctx.arc(x, y, MARKER_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_stroke_style_str("#ffffff");
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str("white");
		ctx.set_font(&format!("bold {}px sans-serif", 11.0 / k.max(0.5)));
		let _ = ctx.fill_text(
			stake.id.as_str(),
			x + MARKER_RADIUS + 4.0,
			y - MARKER_RADIUS,
		);
	}
}

fn draw_highlight(
	state: &MapCanvasState,
	network: &SensorNetwork,
	id: &StakeId,
	ctx: &CanvasRenderingContext2d,
) {
	let Ok(stake) = network.get(id) else {
		return;
	};
	let (x, y) = state.projection.project(&stake.position);
	let radius = state.projection.meters_to_px(HIGHLIGHT_RADIUS_M) * state.pulse_scale();
	let k = state.transform.k;

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_global_alpha(0.2);
	ctx.set_fill_style_str(HIGHLIGHT_COLOR);
	ctx.fill();
	ctx.set_global_alpha(0.8);
	ctx.set_stroke_style_str(HIGHLIGHT_COLOR);
	ctx.set_line_width(4.0 / k);
	ctx.stroke();
	ctx.set_global_alpha(1.0);
}

fn draw_incident(state: &MapCanvasState, network: &SensorNetwork, ctx: &CanvasRenderingContext2d) {
	let Some(site) = network.verdict().incident_site else {
		return;
	};
	let (x, y) = state.projection.project(&site);
	let k = state.transform.k;

	ctx.set_global_alpha(0.95);
	ctx.set_fill_style_str("#ef4444");
	ctx.fill_rect(x + 30.0 / k, y - 20.0 / k, 150.0 / k, 38.0 / k);
	ctx.set_global_alpha(1.0);

	ctx.set_fill_style_str("white");
	ctx.set_font(&format!("bold {}px Arial, sans-serif", 12.0 / k.max(0.5)));
	let _ = ctx.fill_text("FIRE DETECTED", x + 40.0 / k, y - 4.0 / k);
	ctx.set_font(&format!("{}px Arial, sans-serif", 9.0 / k.max(0.5)));
	let _ = ctx.fill_text(
		&format!("{:.6}°N, {:.6}°W", site.lat, site.lng.abs()),
		x + 40.0 / k,
		y + 10.0 / k,
	);
}
