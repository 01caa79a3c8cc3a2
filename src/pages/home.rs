use std::cell::RefCell;
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;

use crate::components::map_canvas::MapCanvas;
use crate::network::{NetworkVerdict, SensorNetwork, Stake, StakeId, Status};

/// Reading-simulation interval in milliseconds.
const TICK_MS: i32 = 3000;

fn id_list(ids: &[StakeId]) -> String {
	ids.iter()
		.map(|id| id.as_str())
		.collect::<Vec<_>>()
		.join(", ")
}

/// Narrative insight paragraphs for the modal, derived from the
/// structured verdict alone.
fn insight_paragraphs(verdict: &NetworkVerdict) -> Vec<String> {
	let total = verdict.danger.len() + verdict.warning.len() + verdict.normal.len();
	let mut paragraphs = Vec::new();

	match verdict.severity {
		Status::Danger if verdict.danger.len() > 1 => {
			paragraphs.push(format!(
				"CRITICAL FIRE CLUSTER: stakes {} are detecting coordinated fire \
				 activity across {} connected ignition points. Immediate large-scale \
				 emergency response required.",
				id_list(&verdict.danger),
				verdict.danger.len(),
			));
		}
		Status::Danger => {
			paragraphs.push(format!(
				"CRITICAL FIRE ALERT: stake {} is detecting active fire conditions. \
				 Flame sensors triggered and smoke levels elevated.",
				id_list(&verdict.danger),
			));
		}
		Status::Warning => {
			paragraphs.push(format!(
				"Warning conditions: stake{} {} showing elevated fire risk. \
				 Temperature and dryness are approaching dangerous thresholds.",
				if verdict.warning.len() > 1 { "s" } else { "" },
				id_list(&verdict.warning),
			));
		}
		Status::Normal => {
			paragraphs.push(format!(
				"All {} stakes report normal conditions. The detection network is \
				 operating with no immediate fire threats.",
				total,
			));
		}
	}

	paragraphs.push(format!(
		"Site conditions: temperature averaging {:.1}°C with humidity at {:.1}% \
		 across all monitoring points.",
		verdict.mean_temperature, verdict.mean_humidity,
	));

	paragraphs.push(if verdict.low_battery.is_empty() {
		format!(
			"Network status: all {} stakes online; every battery above maintenance \
			 threshold.",
			total,
		)
	} else {
		format!(
			"Network status: all {} stakes online. Schedule battery replacement for \
			 stake{} {}.",
			total,
			if verdict.low_battery.len() > 1 { "s" } else { "" },
			id_list(&verdict.low_battery),
		)
	});

	paragraphs
}

fn reading_rows(stake: &Stake) -> Vec<(&'static str, String)> {
	let r = &stake.readings;
	vec![
		("Temperature", format!("{:.3}°C", r.temperature)),
		("Humidity", format!("{:.3}%", r.humidity)),
		("Soil Moisture (30cm)", format!("{:.3}%", r.moisture_30)),
		("Soil Moisture (60cm)", format!("{:.3}%", r.moisture_60)),
		("Soil Moisture (90cm)", format!("{:.3}%", r.moisture_90)),
		("Air Quality", r.air_quality.as_str().to_string()),
		("Smoke Sensor", r.smoke.as_str().to_string()),
		("Flame Sensor", r.flame.as_str().to_string()),
		("Battery", format!("{:.3}%", r.battery)),
		(
			"Location",
			format!(
				"{:.4}°N, {:.4}°W",
				stake.position.lat,
				stake.position.lng.abs()
			),
		),
	]
}

/// Default Home Page: fullscreen map canvas with the stake panel, heat
/// toggle, and insights modal layered on top.
#[component]
pub fn Home() -> impl IntoView {
	let network = Rc::new(RefCell::new(SensorNetwork::demo()));
	let (version, set_version) = signal(0u32);
	let (selected, set_selected) = signal(None::<StakeId>);
	let (heat, set_heat) = signal(false);
	let (show_insights, set_show_insights) = signal(false);

	// Perturbation tick on a fixed interval; the canvas refresh loop is
	// independent and only ever reads the snapshot.
	{
		let network = network.clone();
		Effect::new(move |_| {
			let network = network.clone();
			let cb: Closure<dyn FnMut()> = Closure::new(move || {
				network.borrow_mut().tick();
				set_version.update(|v| *v += 1);
			});
			let _ = web_sys::window()
				.unwrap()
				.set_interval_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					TICK_MS,
				);
			// Interval lives for the whole page.
			cb.forget();
			debug!("reading simulation started, every {}ms", TICK_MS);
		});
	}

	let toggle_select = move |id: StakeId| {
		set_selected.update(|sel| {
			if sel.as_ref() == Some(&id) {
				*sel = None;
			} else {
				*sel = Some(id);
			}
		});
	};

	let network_buttons = SendWrapper::new(network.clone());
	let network_detail = SendWrapper::new(network.clone());
	let network_verdict = SendWrapper::new(network.clone());
	let network_map = SendWrapper::new(network.clone());

	let verdict = move || {
		version.get();
		network_verdict.borrow().verdict()
	};
	let verdict_badge = verdict.clone();
	let verdict_modal = verdict.clone();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-map">
				<MapCanvas
					network=network_map.take()
					selected=selected
					heat=heat
					on_select=move |id| toggle_select(id)
					fullscreen=true
				/>

				<div class="map-overlay">
					<h1>"Sensor Stake Network"</h1>
					<p class="subtitle">
						"Click a stake for live readings. Scroll to zoom. Drag to pan."
					</p>
				</div>

				<button
					class="heat-toggle"
					class:active=move || heat.get()
					on:click=move |_| set_heat.update(|on| *on = !*on)
				>
					{move || if heat.get() { "Heat Map ON" } else { "Heat Map" }}
				</button>

				<button
					class=move || format!("insights-btn {}", verdict_badge().severity.css_class())
					on:click=move |_| set_show_insights.set(true)
				>
					"Insights"
				</button>

				<div class="stake-buttons">
					{move || {
						version.get();
						let current = selected.get();
						network_buttons
							.borrow()
							.stakes()
							.iter()
							.map(|stake| {
								let id = stake.id.clone();
								let active = current.as_ref() == Some(&id);
								let class = format!(
									"tab-btn {}{}",
									stake.status.css_class(),
									if active { " active" } else { "" },
								);
								let details = format!(
									"{:.1}°C • Bat {:.0}%",
									stake.readings.temperature, stake.readings.battery,
								);
								view! {
									<button class=class on:click=move |_| toggle_select(id.clone())>
										<div class="btn-header">
											<div class="btn-name">"Stake " {stake.id.to_string()}</div>
											<div class=format!(
												"btn-status {}",
												stake.status.css_class(),
											)>{stake.status.label()}</div>
										</div>
										<div class="btn-details">{details}</div>
									</button>
								}
							})
							.collect_view()
					}}
				</div>

				{move || {
					version.get();
					selected
						.get()
						.and_then(|id| network_detail.borrow().get(&id).ok().cloned())
						.map(|stake| {
							view! {
								<div class="detail-panel">
									<h2>"Stake " {stake.id.to_string()}</h2>
									<div class="sensor-grid">
										{reading_rows(&stake)
											.into_iter()
											.map(|(label, value)| {
												view! {
													<div class="sensor-card">
														<h4>{label}</h4>
														<div class="sensor-value">{value}</div>
													</div>
												}
											})
											.collect_view()}
									</div>
								</div>
							}
						})
				}}

				<Show when=move || show_insights.get()>
					<div class="modal-backdrop" on:click=move |_| set_show_insights.set(false)>
						<div class="modal-content" on:click=|ev| ev.stop_propagation()>
							{
								let verdict = verdict_modal.clone();
								move || {
									let v = verdict();
									view! {
										<div class=format!(
											"status-badge {}",
											v.severity.css_class(),
										)>{v.severity.label()}</div>
										{insight_paragraphs(&v)
											.into_iter()
											.map(|p| view! { <p>{p}</p> })
											.collect_view()}
									}
								}
							}
							<button
								class="modal-close"
								on:click=move |_| set_show_insights.set(false)
							>
								"Close"
							</button>
						</div>
					</div>
				</Show>
			</div>
		</ErrorBoundary>
	}
}
