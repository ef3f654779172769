//! Container module
//!
//! The container owns panels and answers the narrow set of queries the
//! gesture engine needs: snap candidates, ruler placement and layout
//! requests.

mod contract;
mod manager;

pub use contract::{Container, SnapQuery};
pub use manager::PanelManager;
