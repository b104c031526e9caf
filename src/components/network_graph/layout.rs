//! Batch force relaxation: pairwise repulsion plus spring attraction along
//! links, run for a fixed number of steps after every structural change.

use std::collections::HashMap;

use super::types::{Link, LinkKind, Node, NodeKind};

#[derive(Clone, Debug)]
pub struct LayoutConfig {
	pub iterations: usize,
	pub width: f64,
	pub height: f64,
	pub repulsion_scale: f64,
	pub spring_scale: f64,
	/// Spring rest length for membership and employment links.
	pub link_distance: f64,
	/// Colleague pairs settle a little wider apart.
	pub colleague_distance: f64,
	pub damping: f64,
	/// Positions clamp to `[margin, dimension - margin]` on both axes.
	pub margin: f64,
	/// Pin position of the center node.
	pub anchor_x: f64,
	pub anchor_y: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			iterations: 60,
			width: 1200.0,
			height: 800.0,
			repulsion_scale: 0.02,
			spring_scale: 0.02,
			link_distance: 120.0,
			colleague_distance: 140.0,
			damping: 0.7,
			margin: 60.0,
			anchor_x: 600.0,
			anchor_y: 400.0,
		}
	}
}

impl LayoutConfig {
	fn target_distance(&self, kind: LinkKind) -> f64 {
		match kind {
			LinkKind::Colleague => self.colleague_distance,
			_ => self.link_distance,
		}
	}
}

/// Relaxes node positions in place. Always runs `config.iterations` steps to
/// completion; there is no convergence check and no failure mode. Velocities
/// are not reset between steps: impulses accumulate and decay only through
/// damping, so nodes carry momentum across steps.
pub fn relax(nodes: &mut [Node], links: &[Link], config: &LayoutConfig) {
	if nodes.is_empty() {
		return;
	}
	let k = (config.width * config.height / nodes.len() as f64).sqrt();
	let endpoints: Vec<(usize, usize, LinkKind)> = {
		let index: HashMap<&str, usize> = nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.as_str(), i))
			.collect();
		links
			.iter()
			.filter_map(|link| {
				let (Some(&a), Some(&b)) =
					(index.get(link.source.as_str()), index.get(link.target.as_str()))
				else {
					return None;
				};
				Some((a, b, link.kind))
			})
			.collect()
	};

	for _ in 0..config.iterations {
		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let dx = nodes[j].x - nodes[i].x;
				let dy = nodes[j].y - nodes[i].y;
				let mut d = (dx * dx + dy * dy).sqrt();
				if d == 0.0 {
					d = 1.0;
				}
				let f = (k * k / d) * config.repulsion_scale;
				let (ux, uy) = (dx / d, dy / d);
				nodes[i].vx -= ux * f;
				nodes[i].vy -= uy * f;
				nodes[j].vx += ux * f;
				nodes[j].vy += uy * f;
			}
		}

		for &(a, b, kind) in &endpoints {
			let dx = nodes[b].x - nodes[a].x;
			let dy = nodes[b].y - nodes[a].y;
			let mut d = (dx * dx + dy * dy).sqrt();
			if d == 0.0 {
				d = 1.0;
			}
			// attracts beyond the rest length, pushes apart inside it
			let f = (d - config.target_distance(kind)) * config.spring_scale;
			let (ux, uy) = (dx / d, dy / d);
			nodes[a].vx += ux * f;
			nodes[a].vy += uy * f;
			nodes[b].vx -= ux * f;
			nodes[b].vy -= uy * f;
		}

		for node in nodes.iter_mut() {
			if node.kind == NodeKind::Center {
				node.x = config.anchor_x;
				node.y = config.anchor_y;
				node.vx = 0.0;
				node.vy = 0.0;
				continue;
			}
			node.x += node.vx;
			node.y += node.vy;
			node.vx *= config.damping;
			node.vy *= config.damping;
			node.x = node.x.clamp(config.margin, config.width - config.margin);
			node.y = node.y.clamp(config.margin, config.height - config.margin);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, kind: NodeKind, x: f64, y: f64) -> Node {
		Node::new(id, kind, id, x, y)
	}

	#[test]
	fn center_stays_pinned_to_the_anchor() {
		let config = LayoutConfig::default();
		let mut nodes = vec![
			node("me", NodeKind::Center, config.anchor_x, config.anchor_y),
			node("p1", NodeKind::Person, 580.0, 390.0),
			node("p2", NodeKind::Person, 620.0, 410.0),
			node("c_1", NodeKind::Company, 600.0, 150.0),
		];
		let links = vec![
			Link::new("me", "p1", LinkKind::Membership),
			Link::new("me", "p2", LinkKind::Membership),
			Link::new("p1", "c_1", LinkKind::Employment),
		];
		relax(&mut nodes, &links, &config);
		assert_eq!((nodes[0].x, nodes[0].y), (config.anchor_x, config.anchor_y));
		assert_eq!((nodes[0].vx, nodes[0].vy), (0.0, 0.0));
	}

	#[test]
	fn every_other_node_ends_inside_the_clamp_bounds() {
		let config = LayoutConfig::default();
		let mut nodes = vec![node("me", NodeKind::Center, config.anchor_x, config.anchor_y)];
		for i in 0..12 {
			nodes.push(node(
				&format!("p{i}"),
				NodeKind::Person,
				50.0 * i as f64,
				2000.0 - 90.0 * i as f64,
			));
		}
		relax(&mut nodes, &[], &config);
		for n in nodes.iter().filter(|n| n.kind != NodeKind::Center) {
			assert!(n.x >= config.margin && n.x <= config.width - config.margin);
			assert!(n.y >= config.margin && n.y <= config.height - config.margin);
		}
	}

	#[test]
	fn coincident_nodes_do_not_produce_nan() {
		// Zero distance is treated as one, and the zero separation vector
		// yields a zero impulse rather than NaN.
		let config = LayoutConfig::default();
		let mut nodes = vec![
			node("p1", NodeKind::Person, 300.0, 300.0),
			node("p2", NodeKind::Person, 300.0, 300.0),
		];
		let links = vec![Link::new("p1", "p2", LinkKind::Colleague)];
		relax(&mut nodes, &links, &config);
		for n in &nodes {
			assert!(n.x.is_finite() && n.y.is_finite());
			assert!(n.vx.is_finite() && n.vy.is_finite());
		}
	}

	#[test]
	fn velocity_carries_over_between_steps() {
		// With damping off, the second step must move a node farther than the
		// first: the first step's impulse is still in the velocity when the
		// second step's impulse lands on top of it.
		let config = LayoutConfig {
			iterations: 1,
			damping: 1.0,
			margin: 0.0,
			width: 100_000.0,
			height: 100_000.0,
			..LayoutConfig::default()
		};
		let mut nodes = vec![
			node("p1", NodeKind::Person, 40_000.0, 50_000.0),
			node("p2", NodeKind::Person, 60_000.0, 50_000.0),
		];
		relax(&mut nodes, &[], &config);
		let first = nodes[1].x - 60_000.0;
		let before = nodes[1].x;
		relax(&mut nodes, &[], &config);
		let second = nodes[1].x - before;
		assert!(first > 0.0);
		assert!(second > 1.5 * first, "expected momentum: {first} then {second}");
	}

	#[test]
	fn springs_pull_linked_nodes_toward_the_rest_length() {
		let config = LayoutConfig {
			repulsion_scale: 0.0,
			margin: 0.0,
			..LayoutConfig::default()
		};
		let mut nodes = vec![
			node("p1", NodeKind::Person, 100.0, 400.0),
			node("c_1", NodeKind::Company, 1100.0, 400.0),
		];
		let links = vec![Link::new("p1", "c_1", LinkKind::Employment)];
		let start_gap = 1000.0;
		relax(&mut nodes, &links, &config);
		let gap = (nodes[1].x - nodes[0].x).abs();
		assert!(gap < start_gap, "spring should contract the pair: {gap}");
	}

	#[test]
	fn links_to_missing_nodes_are_ignored() {
		let config = LayoutConfig::default();
		let mut nodes = vec![node("p1", NodeKind::Person, 200.0, 200.0)];
		let links = vec![Link::new("p1", "ghost", LinkKind::Employment)];
		relax(&mut nodes, &links, &config);
		assert!(nodes[0].x.is_finite() && nodes[0].y.is_finite());
	}
}
