use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::detail_panel::DetailPanel;
use crate::components::network_graph::{NetworkCanvas, NetworkState, TooltipInfo, contrast_text_color};
use crate::components::person_form::PersonForm;

const CANVAS_WIDTH: f64 = 1200.0;
const CANVAS_HEIGHT: f64 = 800.0;

/// The network page: canvas, add form, detail panel and hover tooltip.
#[component]
pub fn Home() -> impl IntoView {
	let state = Rc::new(RefCell::new(NetworkState::new(CANVAS_WIDTH, CANVAS_HEIGHT)));
	let selected = RwSignal::new(None::<String>);
	let tooltip = RwSignal::new(None::<TooltipInfo>);

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

			<div class="app-layout">
				<aside class="sidebar">
					<h1>"Your Network"</h1>
					<p class="subtitle">
						"Drag nodes to reposition. Click a node for details, hover for a summary."
					</p>
					<PersonForm state=state.clone() />
					<DetailPanel state=state.clone() selected=selected />
				</aside>
				<div class="canvas-wrap">
					<NetworkCanvas state=state.clone() selected=selected tooltip=tooltip />
					{move || {
						tooltip
							.get()
							.map(|t| {
								let fill = t.details.kind.fill();
								let title_style = format!(
									"background: {}; color: {};",
									fill,
									contrast_text_color(fill),
								);
								view! {
									<div
										class="tooltip"
										style=format!("left: {}px; top: {}px;", t.x + 16.0, t.y + 16.0)
									>
										<div class="tooltip-title" style=title_style>{t.details.name.clone()}</div>
										{t.details.company.clone().map(|v| view! { <div class="tooltip-row">{format!("Company: {v}")}</div> })}
										{t.details.url.clone().map(|v| view! { <div class="tooltip-row">{format!("URL: {v}")}</div> })}
										{t.details.address.clone().map(|v| view! { <div class="tooltip-row">{format!("Address: {v}")}</div> })}
										{t.details.notes.clone().map(|v| view! { <div class="tooltip-row">{v}</div> })}
									</div>
								}
							})
					}}
				</div>
			</div>
		</ErrorBoundary>
	}
}
