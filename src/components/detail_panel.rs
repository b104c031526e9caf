use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::network_graph::{NetworkState, NodeDetails, NodeKind, PersonFields, contrast_text_color};

/// Side panel for the selected node. Persons get editable fields plus save
/// and delete, companies a read-only summary plus delete. The center node
/// shows details only.
#[component]
pub fn DetailPanel(
	state: Rc<RefCell<NetworkState>>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let details = RwSignal::new(None::<NodeDetails>);
	let name = RwSignal::new(String::new());
	let company = RwSignal::new(String::new());
	let url = RwSignal::new(String::new());
	let address = RwSignal::new(String::new());
	let notes = RwSignal::new(String::new());

	// repopulate whenever the selection changes (or a save re-resolves it)
	let state_fill = state.clone();
	Effect::new(move |_| {
		let Some(id) = selected.get() else {
			details.set(None);
			return;
		};
		let current = state_fill.borrow().model.details(&id);
		if let Some(d) = &current {
			name.set(d.name.clone());
			company.set(d.company.clone().unwrap_or_default());
			url.set(d.url.clone().unwrap_or_default());
			address.set(d.address.clone().unwrap_or_default());
			notes.set(d.notes.clone().unwrap_or_default());
		}
		details.set(current);
	});

	let state_save = state.clone();
	let on_save = move |_: MouseEvent| {
		let Some(id) = selected.get_untracked() else {
			return;
		};
		let fields = PersonFields::from_inputs(
			&url.get_untracked(),
			&address.get_untracked(),
			&notes.get_untracked(),
		);
		let updated = state_save.borrow_mut().update_person(
			&id,
			&name.get_untracked(),
			&company.get_untracked(),
			&fields,
		);
		if updated {
			// re-trigger population so the panel reads through the resolved company
			selected.set(Some(id));
		}
	};

	let state_delete = state.clone();
	let on_delete = move |_: MouseEvent| {
		let Some(id) = selected.get_untracked() else {
			return;
		};
		if state_delete.borrow_mut().delete_node(&id) {
			selected.set(None);
		}
	};

	let state_close = state.clone();
	let on_close = move |_: MouseEvent| {
		state_close.borrow_mut().select(None);
		selected.set(None);
	};

	view! {
		{move || {
			details
				.get()
				.map(|d| {
					let fill = d.kind.fill();
					let header_style = format!(
						"background: {}; color: {};",
						fill,
						contrast_text_color(fill),
					);
					let body = match d.kind {
						NodeKind::Person => {
							view! {
								<div class="panel-fields">
									<label>"Name" <input prop:value=name on:input=move |ev| name.set(event_target_value(&ev)) /></label>
									<label>"Company" <input prop:value=company on:input=move |ev| company.set(event_target_value(&ev)) /></label>
									<label>"Company URL" <input prop:value=url on:input=move |ev| url.set(event_target_value(&ev)) /></label>
									<label>"Company address" <input prop:value=address on:input=move |ev| address.set(event_target_value(&ev)) /></label>
									<label>"Notes" <input prop:value=notes on:input=move |ev| notes.set(event_target_value(&ev)) /></label>
									<div class="panel-actions">
										<button on:click=on_save.clone()>"Save"</button>
										<button class="danger" on:click=on_delete.clone()>"Delete"</button>
									</div>
								</div>
							}
								.into_any()
						}
						NodeKind::Company => {
							view! {
								<div class="panel-fields">
									{detail_row("URL", d.url.clone())}
									{detail_row("Address", d.address.clone())}
									{detail_row("Notes", d.notes.clone())}
									<div class="panel-actions">
										<button class="danger" on:click=on_delete.clone()>"Delete"</button>
									</div>
								</div>
							}
								.into_any()
						}
						NodeKind::Center => {
							view! {
								<div class="panel-fields">
									<p class="hint">"This is you. Add people to grow the network."</p>
								</div>
							}
								.into_any()
						}
					};
					view! {
						<aside class="detail-panel">
							<header style=header_style>
								<span class="panel-kind">{d.kind.label()}</span>
								<span class="panel-name">{d.name.clone()}</span>
								<button class="panel-close" on:click=on_close.clone()>"close"</button>
							</header>
							{body}
						</aside>
					}
				})
		}}
	}
}

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
	value.map(|v| {
		view! {
			<div class="detail-row">
				<span class="detail-label">{label}</span>
				<span class="detail-value">{v}</span>
			</div>
		}
	})
}
