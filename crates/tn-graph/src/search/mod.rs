//! Path finding over a [`TransitGraph`].
//!
//! All three searches resolve station names, traverse by [`StationId`],
//! and hand their parent links to the same reconstruction routine, so a
//! result is always `[start, ..., end]` with at least two stations.
//! Unknown endpoints, unreachable targets and `start == end` all yield
//! `None`.

mod bfs;
mod dfs;
mod dijkstra;
pub(crate) mod path;

use std::fmt;
use std::str::FromStr;

use tn_core::{StationId, TnError};

use crate::network::TransitGraph;

pub use path::Path;

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    /// Fewest hops.
    Bfs,
    /// Any path, in adjacency order.
    Dfs,
    /// Lowest total weight.
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = TnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                TnError::invalid_arg(format!(
                    "unknown algorithm '{s}' (expected bfs, dfs or dijkstra)"
                ))
            })
    }
}

impl TransitGraph {
    /// Run the selected search.
    pub fn find_path(&self, algorithm: Algorithm, start: &str, end: &str) -> Option<Path> {
        match algorithm {
            Algorithm::Bfs => self.breadth_first_search(start, end),
            Algorithm::Dfs => self.depth_first_search(start, end),
            Algorithm::Dijkstra => self.dijkstra(start, end),
        }
    }

    fn resolve_endpoints(&self, start: &str, end: &str) -> Option<(StationId, StationId)> {
        let resolved = self.station_id(start).zip(self.station_id(end));
        if resolved.is_none() {
            tracing::debug!(start, end, "search endpoint is not a known station");
        }
        resolved
    }
}
