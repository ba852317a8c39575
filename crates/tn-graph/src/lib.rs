//! tn-graph: the transit network graph engine.
//!
//! Provides:
//! - Station and route data structures
//! - `TransitGraph` with append-only construction, lookup and adjacency
//! - Breadth-first, depth-first and Dijkstra path searches
//! - A validating builder for callers that want errors instead of no-ops
//!
//! # Example
//!
//! ```
//! use tn_core::Color;
//! use tn_graph::TransitGraph;
//!
//! let mut graph = TransitGraph::new();
//! graph.add_station("A", 0, 0);
//! graph.add_station("B", 1, 1);
//! graph.add_station("C", 2, 2);
//! graph.add_route("A", "B", 5, Color::BLUE);
//! graph.add_route("B", "C", 3, Color::BLUE);
//! graph.add_route("A", "C", 1, Color::ORANGE);
//!
//! let path = graph.dijkstra("A", "C").unwrap();
//! assert_eq!(path.stations(), ["A", "C"]);
//! assert_eq!(graph.path_weight(&path), Some(1));
//! assert!(graph.breadth_first_search("A", "A").is_none());
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod network;
pub mod search;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::GraphError;
pub use graph::{Route, Station};
pub use network::TransitGraph;
pub use search::{Algorithm, Path};
