use std::collections::HashSet;

use super::layout::LayoutConfig;
use super::model::GraphModel;
use super::types::{Link, NodeDetails, NodeKind, PersonFields};

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_id: Option<String>,
	/// The center node is clickable but never draggable.
	pub draggable: bool,
	pub moved: bool,
	pub last_x: f64,
	pub last_y: f64,
}

/// Tooltip payload handed to the page: node details plus the canvas-relative
/// pointer position to place the tooltip at.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipInfo {
	pub x: f64,
	pub y: f64,
	pub details: NodeDetails,
}

/// Interactive state around the graph model: dragging, hover, selection and
/// the layout pass that runs after every structural change.
pub struct NetworkState {
	pub model: GraphModel,
	pub layout: LayoutConfig,
	pub drag: DragState,
	pub hover: Option<String>,
	pub selected: Option<String>,
	highlighted: HashSet<String>,
	pub width: f64,
	pub height: f64,
}

impl NetworkState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			model: GraphModel::seeded(),
			layout: LayoutConfig {
				width,
				height,
				..LayoutConfig::default()
			},
			drag: DragState::default(),
			hover: None,
			selected: None,
			highlighted: HashSet::new(),
			width,
			height,
		}
	}

	/// Topmost node under the pointer; later nodes draw over earlier ones.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<String> {
		self.model.nodes().iter().rev().find_map(|node| {
			let (dx, dy) = (node.x - x, node.y - y);
			let r = node.kind.radius();
			(dx * dx + dy * dy <= r * r).then(|| node.id.clone())
		})
	}

	pub fn begin_drag(&mut self, id: &str, x: f64, y: f64) {
		let Some(node) = self.model.node(id) else {
			return;
		};
		self.drag = DragState {
			active: true,
			node_id: Some(id.to_string()),
			draggable: node.kind != NodeKind::Center,
			moved: false,
			last_x: x,
			last_y: y,
		};
	}

	/// Manual drag bypasses the layout engine: the position comes straight
	/// from pointer deltas, unclamped, until the next structural change.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			return;
		}
		let (dx, dy) = (x - self.drag.last_x, y - self.drag.last_y);
		self.drag.last_x = x;
		self.drag.last_y = y;
		if dx != 0.0 || dy != 0.0 {
			self.drag.moved = true;
		}
		if !self.drag.draggable {
			return;
		}
		if let Some(id) = self.drag.node_id.clone() {
			if let Some(node) = self.model.node(&id) {
				let (nx, ny) = (node.x + dx, node.y + dy);
				self.model.set_position(&id, nx, ny);
			}
		}
	}

	/// Ends the drag; returns the pressed node id when the gesture never
	/// moved, i.e. when it should count as a click.
	pub fn end_drag(&mut self) -> Option<String> {
		let clicked = (!self.drag.moved).then(|| self.drag.node_id.clone()).flatten();
		self.drag = DragState::default();
		clicked
	}

	pub fn cancel_drag(&mut self) {
		self.drag = DragState::default();
	}

	/// Selects a node (or clears the selection). The selected node and its
	/// incident links highlight; a selected person also highlights their
	/// company node.
	pub fn select(&mut self, id: Option<String>) {
		self.highlighted.clear();
		if let Some(id) = &id {
			self.highlighted.insert(id.clone());
			if let Some(node) = self.model.node(id) {
				if node.kind == NodeKind::Person {
					if let Some(company) = node.company.as_deref().and_then(|n| self.model.company_by_name(n)) {
						let company_id = company.id.clone();
						self.highlighted.insert(company_id);
					}
				}
			}
		}
		self.selected = id;
	}

	pub fn is_node_highlighted(&self, id: &str) -> bool {
		self.highlighted.contains(id)
	}

	pub fn is_link_highlighted(&self, link: &Link) -> bool {
		self.selected
			.as_deref()
			.is_some_and(|id| link.source == id || link.target == id)
	}

	pub fn has_selection(&self) -> bool {
		self.selected.is_some()
	}

	pub fn tooltip_at(&self, id: &str, x: f64, y: f64) -> Option<TooltipInfo> {
		let details = self.model.details(id)?;
		Some(TooltipInfo { x, y, details })
	}

	pub fn add_person(&mut self, name: &str, company: &str, fields: &PersonFields) -> Option<String> {
		let id = self.model.add_person(name, company, fields)?;
		self.model.relax(&self.layout);
		Some(id)
	}

	pub fn update_person(&mut self, id: &str, name: &str, company: &str, fields: &PersonFields) -> bool {
		if !self.model.update_person(id, name, company, fields) {
			return false;
		}
		self.model.relax(&self.layout);
		// the company highlight may point somewhere new after a re-link
		self.select(Some(id.to_string()));
		true
	}

	pub fn delete_node(&mut self, id: &str) -> bool {
		if !self.model.delete_node(id) {
			return false;
		}
		if self.selected.as_deref() == Some(id) {
			self.select(None);
		}
		if self.hover.as_deref() == Some(id) {
			self.hover = None;
		}
		self.model.relax(&self.layout);
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn click_selection_highlights_person_and_company() {
		let mut state = NetworkState::new(1200.0, 800.0);
		state.select(Some("p1".into()));
		assert!(state.is_node_highlighted("p1"));
		let acme = state.model.company_by_name("Acme Ltd").unwrap().id.clone();
		assert!(state.is_node_highlighted(&acme));
		assert!(!state.is_node_highlighted("p2"));

		let membership = state.model.links()[0].clone();
		assert!(state.is_link_highlighted(&membership));

		state.select(None);
		assert!(!state.has_selection());
		assert!(!state.is_node_highlighted("p1"));
	}

	#[test]
	fn drag_without_movement_counts_as_click() {
		let mut state = NetworkState::new(1200.0, 800.0);
		state.begin_drag("p1", 340.0, 240.0);
		assert_eq!(state.end_drag().as_deref(), Some("p1"));

		state.begin_drag("p1", 340.0, 240.0);
		state.drag_to(350.0, 250.0);
		assert_eq!(state.end_drag(), None);
		let alice = state.model.node("p1").unwrap();
		assert_eq!((alice.x, alice.y), (350.0, 250.0));
	}

	#[test]
	fn center_drag_registers_click_but_never_moves() {
		let mut state = NetworkState::new(1200.0, 800.0);
		state.begin_drag("me", 600.0, 400.0);
		state.drag_to(700.0, 500.0);
		assert_eq!(state.end_drag(), None);
		let center = state.model.center().unwrap();
		assert_eq!((center.x, center.y), (600.0, 400.0));
	}

	#[test]
	fn hit_test_uses_per_kind_radius() {
		let state = NetworkState::new(1200.0, 800.0);
		// Alice sits at (340, 240) with radius 18
		assert_eq!(state.node_at_position(340.0, 240.0).as_deref(), Some("p1"));
		assert_eq!(state.node_at_position(340.0, 257.0).as_deref(), Some("p1"));
		assert_eq!(state.node_at_position(340.0, 260.0), None);
		// the center is bigger
		assert_eq!(state.node_at_position(600.0, 424.0).as_deref(), Some("me"));
	}

	#[test]
	fn structural_changes_relax_and_clamp() {
		let mut state = NetworkState::new(1200.0, 800.0);
		state.add_person("Dana", "Acme Ltd", &PersonFields::default());
		let margin = state.layout.margin;
		for node in state.model.nodes().iter().filter(|n| n.kind != NodeKind::Center) {
			assert!(node.x >= margin && node.x <= state.layout.width - margin);
			assert!(node.y >= margin && node.y <= state.layout.height - margin);
		}
		let center = state.model.center().unwrap();
		assert_eq!((center.x, center.y), (600.0, 400.0));
	}

	#[test]
	fn deleting_the_selected_node_clears_the_selection() {
		let mut state = NetworkState::new(1200.0, 800.0);
		state.select(Some("p1".into()));
		assert!(state.delete_node("p1"));
		assert!(!state.has_selection());
		assert!(!state.delete_node("me"));
	}
}
