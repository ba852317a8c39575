//! Path reconstruction shared by every search.

use std::fmt;

use tn_core::StationId;

use crate::network::TransitGraph;

/// An ordered route through the network, from start to end inclusive.
///
/// Always holds at least two stations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Path {
    stations: Vec<String>,
}

impl Path {
    pub(crate) fn new(stations: Vec<String>) -> Self {
        Self { stations }
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of routes travelled.
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.stations.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.stations.iter().map(String::as_str)
    }

    pub fn into_stations(self) -> Vec<String> {
        self.stations
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stations.join(" -> "))
    }
}

/// Discovered-from relation built during a traversal: child -> parent.
#[derive(Debug, Clone)]
pub(crate) struct Parents {
    slots: Vec<Option<StationId>>,
}

impl Parents {
    pub(crate) fn new(station_count: usize) -> Self {
        Self {
            slots: vec![None; station_count],
        }
    }

    pub(crate) fn get(&self, child: StationId) -> Option<StationId> {
        self.slots.get(child.slot()).copied().flatten()
    }

    pub(crate) fn set(&mut self, child: StationId, parent: StationId) {
        self.slots[child.slot()] = Some(parent);
    }
}

/// Walk parent links back from `end` until `start` is reached.
///
/// Returns `None` unless the walk reaches `start` with at least two
/// stations collected, which covers both `start == end` and an `end`
/// that was never discovered. The walk is bounded by the station count.
pub(crate) fn reconstruct(
    graph: &TransitGraph,
    parents: &Parents,
    start: StationId,
    end: StationId,
) -> Option<Path> {
    let mut chain = vec![end];
    let mut current = end;

    while current != start && chain.len() <= graph.station_count() {
        let Some(parent) = parents.get(current) else {
            break;
        };
        chain.push(parent);
        current = parent;
    }

    if current != start || chain.len() < 2 {
        return None;
    }

    let stations = chain
        .into_iter()
        .rev()
        .map(|id| graph.name_of(id).to_owned())
        .collect();
    Some(Path::new(stations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tn_core::Color;

    fn line(names: &[&str]) -> (TransitGraph, Vec<StationId>) {
        let mut graph = TransitGraph::new();
        let ids = names
            .iter()
            .enumerate()
            .map(|(i, name)| graph.add_station(*name, i as i32, 0).unwrap())
            .collect::<Vec<_>>();
        for pair in names.windows(2) {
            graph.add_route(pair[0], pair[1], 1, Color::BLUE);
        }
        (graph, ids)
    }

    #[test]
    fn follows_chain_back_to_start() {
        let (graph, ids) = line(&["A", "B", "C"]);
        let mut parents = Parents::new(graph.station_count());
        parents.set(ids[1], ids[0]);
        parents.set(ids[2], ids[1]);

        let path = reconstruct(&graph, &parents, ids[0], ids[2]).unwrap();
        assert_eq!(path.stations(), ["A", "B", "C"]);
        assert_eq!(path.hops(), 2);
        assert_eq!(path.to_string(), "A -> B -> C");
    }

    #[test]
    fn start_equal_to_end_is_no_path() {
        let (graph, ids) = line(&["A", "B"]);
        let mut parents = Parents::new(graph.station_count());
        parents.set(ids[1], ids[0]);

        assert!(reconstruct(&graph, &parents, ids[0], ids[0]).is_none());
    }

    #[test]
    fn undiscovered_end_is_no_path() {
        let (graph, ids) = line(&["A", "B", "C"]);
        let mut parents = Parents::new(graph.station_count());
        parents.set(ids[1], ids[0]);

        assert!(reconstruct(&graph, &parents, ids[0], ids[2]).is_none());
    }

    #[test]
    fn chain_not_reaching_start_is_no_path() {
        let (graph, ids) = line(&["A", "B", "C"]);
        let mut parents = Parents::new(graph.station_count());
        parents.set(ids[2], ids[1]);

        assert!(reconstruct(&graph, &parents, ids[0], ids[2]).is_none());
    }

    #[test]
    fn cyclic_parents_terminate() {
        let (graph, ids) = line(&["A", "B", "C"]);
        let mut parents = Parents::new(graph.station_count());
        parents.set(ids[1], ids[2]);
        parents.set(ids[2], ids[1]);

        assert!(reconstruct(&graph, &parents, ids[0], ids[2]).is_none());
    }
}
