mod component;
mod layout;
mod model;
mod render;
mod state;
mod types;

pub use component::NetworkCanvas;
pub use render::contrast_text_color;
pub use state::{NetworkState, TooltipInfo};
pub use types::{NodeDetails, NodeKind, PersonFields};
