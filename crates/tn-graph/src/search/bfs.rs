use std::collections::VecDeque;

use tracing::{instrument, trace};

use super::path::{Parents, reconstruct};
use super::Path;
use crate::network::TransitGraph;

impl TransitGraph {
    /// Path with the fewest hops between two stations.
    ///
    /// Stations are marked when first discovered and their parent is never
    /// overwritten, so ties between equally short paths go to the one
    /// discovered first in adjacency order.
    #[instrument(skip(self), level = "debug")]
    pub fn breadth_first_search(&self, start: &str, end: &str) -> Option<Path> {
        let (start, end) = self.resolve_endpoints(start, end)?;

        let mut parents = Parents::new(self.station_count());
        let mut discovered = vec![false; self.station_count()];
        let mut frontier = VecDeque::from([start]);
        discovered[start.slot()] = true;

        while let Some(current) = frontier.pop_front() {
            if current == end {
                return reconstruct(self, &parents, start, end);
            }
            trace!(station = self.name_of(current), "expanding");

            for neighbor in self.neighbors(current) {
                if !discovered[neighbor.slot()] {
                    discovered[neighbor.slot()] = true;
                    parents.set(neighbor, current);
                    frontier.push_back(neighbor);
                }
            }
        }

        None
    }
}
