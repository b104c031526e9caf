use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::{NetworkState, TooltipInfo};

#[component]
pub fn NetworkCanvas(
	state: Rc<RefCell<NetworkState>>,
	/// Id of the selected node; drives highlighting and the detail panel.
	selected: RwSignal<Option<String>>,
	tooltip: RwSignal<Option<TooltipInfo>>,
	#[prop(default = 1200.0)] width: f64,
	#[prop(default = 800.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	// pressed on empty canvas; resolves to a deselect on mouseup
	let background_press = Rc::new(RefCell::new(false));

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		// Redraw every frame from current state. Layout is a synchronous
		// batch pass on structural change, so the loop only draws.
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			render::render(&state_anim.borrow(), &ctx);
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let (state_md, bg_md) = (state.clone(), background_press.clone());
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let mut s = state_md.borrow_mut();
		match s.node_at_position(x, y) {
			Some(id) => {
				s.begin_drag(&id, x, y);
				tooltip.set(None);
			}
			None => *bg_md.borrow_mut() = true,
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let mut s = state_mm.borrow_mut();
		if s.drag.active {
			s.drag_to(x, y);
			return;
		}
		let hovered = s.node_at_position(x, y);
		s.hover = hovered.clone();
		tooltip.set(hovered.and_then(|id| s.tooltip_at(&id, x, y)));
	};

	let (state_mu, bg_mu) = (state.clone(), background_press.clone());
	let on_mouseup = move |_: MouseEvent| {
		let clicked = state_mu.borrow_mut().end_drag();
		if let Some(id) = clicked {
			state_mu.borrow_mut().select(Some(id.clone()));
			selected.set(Some(id));
		} else if std::mem::take(&mut *bg_mu.borrow_mut()) {
			state_mu.borrow_mut().select(None);
			selected.set(None);
		}
	};

	let (state_ml, bg_ml) = (state.clone(), background_press.clone());
	let on_mouseleave = move |_: MouseEvent| {
		{
			let mut s = state_ml.borrow_mut();
			s.cancel_drag();
			s.hover = None;
		}
		*bg_ml.borrow_mut() = false;
		tooltip.set(None);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
