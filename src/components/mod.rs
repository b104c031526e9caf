pub mod detail_panel;
pub mod network_graph;
pub mod person_form;
