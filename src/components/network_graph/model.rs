use log::{debug, info};

use super::layout::{LayoutConfig, relax};
use super::types::{Link, LinkKind, Node, NodeDetails, NodeKind, PersonFields};

/// Fixed anchor of the center node; relaxation re-pins it here every step.
pub const CENTER_ANCHOR: (f64, f64) = (600.0, 400.0);

/// The mutable person/company graph. Owns the node set and the link list
/// derived from it; every mutating operation refreshes the links in full.
#[derive(Clone, Debug)]
pub struct GraphModel {
	nodes: Vec<Node>,
	links: Vec<Link>,
	person_seq: usize,
	company_seq: usize,
	rng_state: usize,
}

impl GraphModel {
	/// An empty graph holding only the center node.
	pub fn new() -> Self {
		let center = Node::new("me", NodeKind::Center, "You", CENTER_ANCHOR.0, CENTER_ANCHOR.1);
		Self {
			nodes: vec![center],
			links: Vec::new(),
			person_seq: 0,
			company_seq: 0,
			rng_state: 0,
		}
	}

	/// The demo graph the app starts with.
	pub fn seeded() -> Self {
		let mut model = Self::new();
		model.seed_person("Alice", 340.0, 240.0, "Acme Ltd");
		model.seed_person("Bob", 860.0, 240.0, "BetaCorp");
		model.seed_person("Clara", 600.0, 640.0, "Acme Ltd");
		model.recompute_links();
		model
	}

	fn seed_person(&mut self, name: &str, x: f64, y: f64, company: &str) {
		self.ensure_company(company);
		self.person_seq += 1;
		let mut node = Node::new(format!("p{}", self.person_seq), NodeKind::Person, name, x, y);
		node.company = Some(company.to_string());
		self.nodes.push(node);
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}

	pub fn center(&self) -> Option<&Node> {
		self.nodes.iter().find(|n| n.kind == NodeKind::Center)
	}

	/// Company resolution is by name lookup, never by stored reference, so a
	/// deleted company cannot leave a dangling pointer behind.
	pub fn company_by_name(&self, name: &str) -> Option<&Node> {
		self.nodes
			.iter()
			.find(|n| n.kind == NodeKind::Company && n.name == name)
	}

	/// Returns the id of the company with that exact name, creating it at a
	/// random position in the company spawn region if missing. Idempotent.
	pub fn ensure_company(&mut self, name: &str) -> String {
		if let Some(existing) = self.company_by_name(name) {
			return existing.id.clone();
		}
		self.company_seq += 1;
		let id = format!("c_{}", self.company_seq);
		let x = self.next_rand() * 1000.0 + 100.0;
		let y = self.next_rand() * 200.0 + 80.0;
		debug!("new company {name:?} as {id}");
		self.nodes.push(Node::new(id.clone(), NodeKind::Company, name, x, y));
		id
	}

	/// Adds a person and resolves their company, creating it if needed.
	/// Empty name or company after trimming is a silent no-op.
	pub fn add_person(&mut self, name: &str, company: &str, fields: &PersonFields) -> Option<String> {
		let name = name.trim();
		let company = company.trim();
		if name.is_empty() || company.is_empty() {
			debug!("add_person dropped: empty name or company");
			return None;
		}

		let company_id = self.ensure_company(company);
		self.apply_company_fields(&company_id, fields);

		self.person_seq += 1;
		let id = format!("p{}", self.person_seq);
		let x = self.next_rand() * 600.0 + 300.0;
		let y = self.next_rand() * 400.0 + 200.0;
		let mut node = Node::new(id.clone(), NodeKind::Person, name, x, y);
		node.company = Some(company.to_string());
		node.notes = fields.notes.clone();
		self.nodes.push(node);
		self.recompute_links();
		info!("added person {name:?} at {company:?}");
		Some(id)
	}

	/// Rewrites a person's fields. A changed company name is re-resolved
	/// through `ensure_company`, which may create a new company node; url and
	/// address write through to that company, last writer wins.
	pub fn update_person(&mut self, id: &str, name: &str, company: &str, fields: &PersonFields) -> bool {
		let name = name.trim();
		let company = company.trim();
		if name.is_empty() || company.is_empty() {
			debug!("update_person dropped: empty name or company");
			return false;
		}
		if !matches!(self.node(id), Some(n) if n.kind == NodeKind::Person) {
			debug!("update_person dropped: no person {id:?}");
			return false;
		}

		let company_id = self.ensure_company(company);
		self.apply_company_fields(&company_id, fields);

		// Lookup again: ensure_company may have grown the node vector.
		if let Some(node) = self.node_mut(id) {
			node.name = name.to_string();
			node.company = Some(company.to_string());
			if fields.notes.is_some() {
				node.notes = fields.notes.clone();
			}
		}
		self.recompute_links();
		info!("updated person {id}");
		true
	}

	/// Removes a person or company. The center node is never deletable, and
	/// deleting a company keeps its members; their company name re-resolves
	/// on the next edit.
	pub fn delete_node(&mut self, id: &str) -> bool {
		let Some(idx) = self.nodes.iter().position(|n| n.id == id) else {
			debug!("delete dropped: no node {id:?}");
			return false;
		};
		if self.nodes[idx].kind == NodeKind::Center {
			debug!("delete rejected for center node");
			return false;
		}
		let node = self.nodes.remove(idx);
		self.recompute_links();
		info!("deleted {:?} {:?}", node.kind, node.name);
		true
	}

	/// Drag path: overwrites a position directly, no relaxation, no clamping.
	/// The center node stays pinned.
	pub fn set_position(&mut self, id: &str, x: f64, y: f64) {
		if let Some(node) = self.node_mut(id) {
			if node.kind != NodeKind::Center {
				node.x = x;
				node.y = y;
			}
		}
	}

	/// Derives the full link list from the current node set. Membership links
	/// come first in person insertion order, then employment links, then
	/// colleague links grouped by company name in first-seen order.
	pub fn recompute_links(&mut self) {
		let mut links = Vec::new();
		let Some(center_id) = self.center().map(|c| c.id.clone()) else {
			self.links.clear();
			return;
		};

		let persons: Vec<(String, String)> = self
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Person)
			.map(|n| (n.id.clone(), n.company.clone().unwrap_or_default()))
			.collect();

		for (pid, _) in &persons {
			links.push(Link::new(center_id.clone(), pid.clone(), LinkKind::Membership));
		}

		for (pid, company) in &persons {
			if let Some(c) = self.company_by_name(company) {
				links.push(Link::new(pid.clone(), c.id.clone(), LinkKind::Employment));
			}
		}

		// Company names in first-seen order: surviving company nodes first,
		// then names whose company node has been deleted.
		let mut names: Vec<String> = self
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Company)
			.map(|n| n.name.clone())
			.collect();
		for (_, company) in &persons {
			if !company.is_empty() && !names.iter().any(|n| n == company) {
				names.push(company.clone());
			}
		}

		for name in &names {
			let members: Vec<&String> = persons
				.iter()
				.filter(|(_, company)| company == name)
				.map(|(pid, _)| pid)
				.collect();
			for i in 0..members.len() {
				for j in (i + 1)..members.len() {
					links.push(Link::new(members[i].clone(), members[j].clone(), LinkKind::Colleague));
				}
			}
		}

		self.links = links;
	}

	/// Descriptive data for the tooltip and the detail panel. A person's url
	/// and address are read through their resolved company.
	pub fn details(&self, id: &str) -> Option<NodeDetails> {
		let node = self.node(id)?;
		let details = match node.kind {
			NodeKind::Person => {
				let company = node.company.as_deref().and_then(|name| self.company_by_name(name));
				NodeDetails {
					kind: node.kind,
					name: node.name.clone(),
					company: node.company.clone(),
					url: company.and_then(|c| c.url.clone()),
					address: company.and_then(|c| c.address.clone()),
					notes: node.notes.clone(),
				}
			}
			_ => NodeDetails {
				kind: node.kind,
				name: node.name.clone(),
				company: None,
				url: node.url.clone(),
				address: node.address.clone(),
				notes: node.notes.clone(),
			},
		};
		Some(details)
	}

	/// Runs one batch relaxation pass over the current nodes and links.
	pub fn relax(&mut self, config: &LayoutConfig) {
		relax(&mut self.nodes, &self.links, config);
	}

	fn apply_company_fields(&mut self, company_id: &str, fields: &PersonFields) {
		let Some(company) = self.node_mut(company_id) else {
			return;
		};
		if fields.url.is_some() {
			company.url = fields.url.clone();
		}
		if fields.address.is_some() {
			company.address = fields.address.clone();
		}
	}

	fn next_rand(&mut self) -> f64 {
		self.rng_state = (self.rng_state * 9301 + 49297) % 233280;
		self.rng_state as f64 / 233280.0
	}
}

impl Default for GraphModel {
	fn default() -> Self {
		Self::new()
	}
}
