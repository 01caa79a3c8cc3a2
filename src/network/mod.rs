//! Spatial analysis and classification core for the stake network.
//!
//! Pure of any web dependency: the map canvas and page shell consume the
//! renderable output (`Edge`, `Zone`, `HeatLayer`, `NetworkVerdict`) and
//! drive [`SensorNetwork::tick`]; nothing in here touches the DOM.

pub mod cluster;
pub mod config;
pub mod graph;
pub mod heat;
pub mod store;
pub mod types;
pub mod verdict;
pub mod zone;

pub use store::SensorNetwork;
pub use types::{
	Edge, GeoPoint, HeatLayer, NetworkError, NetworkVerdict, Readings, Stake, StakeId, Status,
	Zone,
};
