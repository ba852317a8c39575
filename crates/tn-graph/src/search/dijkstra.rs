use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{instrument, trace};

use super::path::{Parents, reconstruct};
use super::Path;
use crate::network::TransitGraph;

impl TransitGraph {
    /// Path with the lowest total route weight.
    ///
    /// Stations are pushed again on every improvement instead of having
    /// their key decreased; stale heap entries are skipped once a station
    /// is finalized. The search stops as soon as `end` is finalized.
    ///
    /// Edge costs come from [`TransitGraph::route_weight`], so among
    /// parallel routes only the first inserted one is considered.
    #[instrument(skip(self), level = "debug")]
    pub fn dijkstra(&self, start: &str, end: &str) -> Option<Path> {
        let (start, end) = self.resolve_endpoints(start, end)?;

        let mut parents = Parents::new(self.station_count());
        let mut distance = vec![u64::MAX; self.station_count()];
        let mut finalized = vec![false; self.station_count()];
        let mut frontier = BinaryHeap::new();

        distance[start.slot()] = 0;
        frontier.push(Reverse((0_u64, start)));

        while let Some(Reverse((dist, current))) = frontier.pop() {
            if finalized[current.slot()] {
                continue;
            }
            finalized[current.slot()] = true;
            if current == end {
                break;
            }
            trace!(station = self.name_of(current), dist, "finalized");

            for neighbor in self.neighbors(current) {
                let Some(weight) = self.weight_between(current, neighbor) else {
                    continue;
                };
                let candidate = dist + u64::from(weight);
                if candidate < distance[neighbor.slot()] {
                    distance[neighbor.slot()] = candidate;
                    parents.set(neighbor, current);
                    frontier.push(Reverse((candidate, neighbor)));
                }
            }
        }

        reconstruct(self, &parents, start, end)
    }
}
