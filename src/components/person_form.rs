use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::network_graph::{NetworkState, PersonFields};

/// Add-person form. Name and company are required; blank submissions are
/// dropped silently and the form keeps its values.
#[component]
pub fn PersonForm(state: Rc<RefCell<NetworkState>>) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let company = RwSignal::new(String::new());
	let url = RwSignal::new(String::new());
	let address = RwSignal::new(String::new());
	let notes = RwSignal::new(String::new());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let fields = PersonFields::from_inputs(
			&url.get_untracked(),
			&address.get_untracked(),
			&notes.get_untracked(),
		);
		let added = state
			.borrow_mut()
			.add_person(&name.get_untracked(), &company.get_untracked(), &fields);
		if added.is_some() {
			for field in [name, company, url, address, notes] {
				field.set(String::new());
			}
		}
	};

	view! {
		<form class="person-form" on:submit=on_submit>
			<h2>"Add person"</h2>
			<input
				placeholder="Name"
				prop:value=name
				on:input=move |ev| name.set(event_target_value(&ev))
			/>
			<input
				placeholder="Company"
				prop:value=company
				on:input=move |ev| company.set(event_target_value(&ev))
			/>
			<input
				placeholder="Company URL (optional)"
				prop:value=url
				on:input=move |ev| url.set(event_target_value(&ev))
			/>
			<input
				placeholder="Company address (optional)"
				prop:value=address
				on:input=move |ev| address.set(event_target_value(&ev))
			/>
			<input
				placeholder="Notes (optional)"
				prop:value=notes
				on:input=move |ev| notes.set(event_target_value(&ev))
			/>
			<button type="submit">"Add"</button>
		</form>
	}
}
