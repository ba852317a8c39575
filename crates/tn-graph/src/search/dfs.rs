use tn_core::StationId;
use tracing::{instrument, trace};

use super::path::{Parents, reconstruct};
use super::Path;
use crate::network::TransitGraph;

impl TransitGraph {
    /// Some path between two stations, not necessarily the shortest.
    ///
    /// Neighbors are tried in adjacency order and the search descends into
    /// the first unvisited one, returning as soon as `end` is discovered.
    /// Uses an explicit stack of `(station, next neighbor)` frames, so
    /// depth is bounded by memory rather than the call stack.
    #[instrument(skip(self), level = "debug")]
    pub fn depth_first_search(&self, start: &str, end: &str) -> Option<Path> {
        let (start, end) = self.resolve_endpoints(start, end)?;

        let mut parents = Parents::new(self.station_count());
        if start == end {
            return reconstruct(self, &parents, start, end);
        }

        let mut visited = vec![false; self.station_count()];
        let mut stack: Vec<(StationId, usize)> = vec![(start, 0)];
        visited[start.slot()] = true;

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            frame.1 += 1;

            let Some(neighbor) = self.neighbor_at(current, cursor) else {
                stack.pop();
                continue;
            };
            if visited[neighbor.slot()] {
                continue;
            }

            parents.set(neighbor, current);
            if neighbor == end {
                return reconstruct(self, &parents, start, end);
            }
            trace!(station = self.name_of(neighbor), "descending");
            visited[neighbor.slot()] = true;
            stack.push((neighbor, 0));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::TransitGraph;
    use tn_core::Color;

    #[test]
    fn follows_first_branch_to_the_end() {
        // A's first neighbor leads the long way round.
        let mut graph = TransitGraph::new();
        for name in ["A", "B", "C", "D"] {
            graph.add_station(name, 0, 0);
        }
        graph.add_route("A", "B", 1, Color::BLUE);
        graph.add_route("A", "D", 1, Color::BLUE);
        graph.add_route("B", "C", 1, Color::BLUE);
        graph.add_route("C", "D", 1, Color::BLUE);

        let path = graph.depth_first_search("A", "D").unwrap();
        assert_eq!(path.stations(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let mut graph = TransitGraph::new();
        for name in ["A", "X", "Y", "B"] {
            graph.add_station(name, 0, 0);
        }
        graph.add_route("A", "X", 1, Color::BLUE);
        graph.add_route("X", "Y", 1, Color::BLUE);
        graph.add_route("A", "B", 1, Color::BLUE);

        let path = graph.depth_first_search("A", "B").unwrap();
        assert_eq!(path.stations(), ["A", "B"]);
    }

    #[test]
    fn deep_line_does_not_overflow() {
        let mut graph = TransitGraph::new();
        let names: Vec<String> = (0..50_000).map(|i| format!("S{i}")).collect();
        for name in &names {
            graph.add_station(name.as_str(), 0, 0);
        }
        for pair in names.windows(2) {
            graph.add_route(&pair[0], &pair[1], 1, Color::GRAY);
        }

        let path = graph.depth_first_search("S0", "S49999").unwrap();
        assert_eq!(path.len(), 50_000);
    }
}
