#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Center,
	Person,
	Company,
}

impl NodeKind {
	/// Circle radius in canvas pixels; also the hit-test radius.
	pub fn radius(self) -> f64 {
		match self {
			NodeKind::Center => 26.0,
			NodeKind::Company => 20.0,
			NodeKind::Person => 18.0,
		}
	}

	pub fn fill(self) -> &'static str {
		match self {
			NodeKind::Center => "#f2b134",
			NodeKind::Person => "#4c9aff",
			NodeKind::Company => "#9a7be0",
		}
	}

	/// Vertical offset of the name label relative to the node center.
	pub fn label_offset(self) -> f64 {
		match self {
			NodeKind::Center => -36.0,
			_ => -26.0,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			NodeKind::Center => "center",
			NodeKind::Person => "person",
			NodeKind::Company => "company",
		}
	}
}

#[derive(Clone, Debug)]
pub struct Node {
	pub id: String,
	pub kind: NodeKind,
	pub name: String,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Person: name of the employing company.
	pub company: Option<String>,
	/// Company: homepage.
	pub url: Option<String>,
	/// Company: street address.
	pub address: Option<String>,
	pub notes: Option<String>,
}

impl Node {
	pub fn new(id: impl Into<String>, kind: NodeKind, name: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			kind,
			name: name.into(),
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			company: None,
			url: None,
			address: None,
			notes: None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
	/// Center to person.
	Membership,
	/// Person to their company.
	Employment,
	/// Two persons sharing a company.
	Colleague,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
	pub source: String,
	pub target: String,
	pub kind: LinkKind,
}

impl Link {
	pub fn new(source: impl Into<String>, target: impl Into<String>, kind: LinkKind) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			kind,
		}
	}
}

/// Optional fields collected by the add form and the detail panel.
/// `url` and `address` are written through to the person's company.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonFields {
	pub url: Option<String>,
	pub address: Option<String>,
	pub notes: Option<String>,
}

impl PersonFields {
	/// Builds from raw form values; blank entries count as absent.
	pub fn from_inputs(url: &str, address: &str, notes: &str) -> Self {
		let clean = |value: &str| {
			let value = value.trim();
			(!value.is_empty()).then(|| value.to_string())
		};
		Self {
			url: clean(url),
			address: clean(address),
			notes: clean(notes),
		}
	}
}

/// Descriptive data for tooltip and detail-panel population.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDetails {
	pub kind: NodeKind,
	pub name: String,
	pub company: Option<String>,
	pub url: Option<String>,
	pub address: Option<String>,
	pub notes: Option<String>,
}
