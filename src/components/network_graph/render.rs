use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;
use super::types::LinkKind;

const BACKGROUND: &str = "#1a1a2e";
const LINK_COLOR: (u8, u8, u8) = (148, 180, 255);

/// Black/white label color for a `#rrggbb` fill, by relative luminance.
pub fn contrast_text_color(fill: &str) -> &'static str {
	let hex = fill.strip_prefix('#').unwrap_or(fill);
	if hex.len() != 6 {
		return "#ffffff";
	}
	let Ok(rgb) = u32::from_str_radix(hex, 16) else {
		return "#ffffff";
	};
	let r = ((rgb >> 16) & 0xff) as f64;
	let g = ((rgb >> 8) & 0xff) as f64;
	let b = (rgb & 0xff) as f64;
	let luminance = (0.299 * r + 0.587 * g + 0.114 * b) / 255.0;
	if luminance > 0.6 { "#1a1a2e" } else { "#ffffff" }
}

pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_links(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	let has_selection = state.has_selection();
	let (lr, lg, lb) = LINK_COLOR;

	for link in state.model.links() {
		let (Some(source), Some(target)) = (state.model.node(&link.source), state.model.node(&link.target))
		else {
			continue;
		};

		let is_highlighted = state.is_link_highlighted(link);
		// dim unrelated links while something is selected
		let (alpha, width) = if is_highlighted {
			(0.9, 2.5)
		} else if has_selection {
			(0.15, 1.5)
		} else {
			(0.45, 1.5)
		};

		ctx.set_stroke_style_str(&format!("rgba({lr}, {lg}, {lb}, {alpha})"));
		ctx.set_line_width(width);
		if link.kind == LinkKind::Colleague {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0),
				&JsValue::from_f64(4.0),
			));
		}
		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.stroke();
		if link.kind == LinkKind::Colleague {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}
}

fn draw_nodes(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	let has_selection = state.has_selection();

	for node in state.model.nodes() {
		let is_highlighted = state.is_node_highlighted(&node.id);
		let radius = node.kind.radius();
		let alpha = if has_selection && !is_highlighted { 0.35 } else { 1.0 };

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * std::f64::consts::PI);
		ctx.set_fill_style_str(node.kind.fill());
		ctx.fill();

		if is_highlighted {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, radius + 3.0, 0.0, 2.0 * std::f64::consts::PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.85)");
			ctx.set_line_width(2.0);
			ctx.stroke();
		}

		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha * 0.9));
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&node.name, node.x, node.y + node.kind.label_offset());
		ctx.set_global_alpha(1.0);
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::NodeKind;
	use super::*;

	#[test]
	fn contrast_flips_on_luminance() {
		assert_eq!(contrast_text_color("#ffffff"), "#1a1a2e");
		assert_eq!(contrast_text_color("#000000"), "#ffffff");
		// the center's amber fill is bright enough for dark text
		assert_eq!(contrast_text_color(NodeKind::Center.fill()), "#1a1a2e");
		assert_eq!(contrast_text_color(NodeKind::Person.fill()), "#ffffff");
	}

	#[test]
	fn malformed_fills_fall_back_to_white() {
		assert_eq!(contrast_text_color("papayawhip"), "#ffffff");
		assert_eq!(contrast_text_color("#12"), "#ffffff");
		assert_eq!(contrast_text_color("#zzzzzz"), "#ffffff");
	}
}
