//! The transit graph: construction, lookup and adjacency.

use std::collections::{HashMap, HashSet};

use tn_core::{Color, RouteId, StationId};
use tracing::{debug, warn};

use crate::graph::{Route, Station};
use crate::search::Path;

/// Owns every station and route of a transit network.
///
/// Stations are referenced by name from the outside and by [`StationId`]
/// internally. Adjacency is index based: for each station, the ids of the
/// routes leaving it, in insertion order.
///
/// Inserts are append-only. Invalid inserts (a duplicate station name, a
/// route naming an unknown station) are ignored and reported through the
/// `Option` return values only.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    stations: Vec<Station>,
    routes: Vec<Route>,

    /// Exact-match name lookup.
    by_name: HashMap<String, StationId>,

    /// Outgoing route ids per station slot, in insertion order.
    outgoing: Vec<Vec<RouteId>>,
}

impl TransitGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station unless one with the same name already exists.
    ///
    /// Returns the id of the new station, or `None` when the name was
    /// taken (the existing station keeps its coordinates) or the graph
    /// already holds `u32::MAX` stations.
    pub fn add_station(&mut self, name: impl Into<String>, x: i32, y: i32) -> Option<StationId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            debug!(station = %name, "ignoring duplicate station");
            return None;
        }

        let Some(id) = StationId::try_from_index(self.stations.len()) else {
            warn!(station = %name, "station id space exhausted");
            return None;
        };
        self.by_name.insert(name.clone(), id);
        self.stations.push(Station { id, name, x, y });
        self.outgoing.push(Vec::new());
        Some(id)
    }

    /// Connect two existing stations in both directions.
    ///
    /// Inserts `from -> to` then `to -> from`, both with the same weight
    /// and color, and returns their ids. Returns `None` and changes nothing
    /// if either station is unknown or no route ids are left. Self-loops and
    /// parallel routes are accepted as-is.
    pub fn add_route(
        &mut self,
        from: &str,
        to: &str,
        weight: u32,
        color: Color,
    ) -> Option<(RouteId, RouteId)> {
        let (Some(from_id), Some(to_id)) = (self.station_id(from), self.station_id(to)) else {
            debug!(from, to, "ignoring route with unknown endpoint");
            return None;
        };

        let next = self.routes.len();
        let (Some(forward), Some(reverse)) = (
            RouteId::try_from_index(next),
            RouteId::try_from_index(next + 1),
        ) else {
            warn!(from, to, "route id space exhausted");
            return None;
        };

        self.push_route(forward, from_id, to_id, weight, color);
        self.push_route(reverse, to_id, from_id, weight, color);
        Some((forward, reverse))
    }

    fn push_route(&mut self, id: RouteId, from: StationId, to: StationId, weight: u32, color: Color) {
        self.routes.push(Route {
            id,
            from,
            to,
            weight,
            color,
        });
        self.outgoing[from.slot()].push(id);
    }

    /// Return all stations in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Return all route records in insertion order (forward/reverse pairs).
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Get a station by ID (returns None if ID out of bounds).
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.slot())
    }

    /// Get a route by ID (returns None if ID out of bounds).
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.slot())
    }

    /// Find a station by exact, case-sensitive name.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.station_id(name).and_then(|id| self.station(id))
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// The set of all station names.
    pub fn station_names(&self) -> HashSet<&str> {
        self.stations.iter().map(|s| s.name.as_str()).collect()
    }

    pub(crate) fn name_of(&self, id: StationId) -> &str {
        &self.stations[id.slot()].name
    }

    /// Names of a route's endpoints, for callers drawing it.
    pub fn route_endpoints(&self, route: &Route) -> Option<(&str, &str)> {
        let from = self.station(route.from)?;
        let to = self.station(route.to)?;
        Some((from.name.as_str(), to.name.as_str()))
    }

    /// Route records leaving a station, in insertion order.
    pub fn outgoing_routes(&self, id: StationId) -> impl Iterator<Item = &Route> + '_ {
        self.outgoing
            .get(id.slot())
            .into_iter()
            .flatten()
            .map(|route_id| &self.routes[route_id.slot()])
    }

    /// Ids of stations one hop away, in route insertion order, repeated
    /// once per parallel route.
    pub(crate) fn neighbors(&self, id: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.outgoing_routes(id).map(|route| route.to)
    }

    /// The `i`-th neighbor of a station in insertion order.
    pub(crate) fn neighbor_at(&self, id: StationId, i: usize) -> Option<StationId> {
        let route_id = self.outgoing.get(id.slot())?.get(i)?;
        Some(self.routes[route_id.slot()].to)
    }

    /// Names of stations one hop away from `name`, in route insertion order.
    ///
    /// Parallel routes produce repeated entries. An unknown name yields an
    /// empty list.
    pub fn adjacent_stations(&self, name: &str) -> Vec<&str> {
        match self.station_id(name) {
            Some(id) => self.neighbors(id).map(|n| self.name_of(n)).collect(),
            None => Vec::new(),
        }
    }

    /// Weight of the first route inserted from `from` to `to`.
    ///
    /// Returns `None` when there is no direct route. With parallel routes
    /// only the first one is visible here, which is not necessarily the
    /// cheapest.
    pub fn route_weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.station_id(from)?;
        let to = self.station_id(to)?;
        self.weight_between(from, to)
    }

    pub(crate) fn weight_between(&self, from: StationId, to: StationId) -> Option<u32> {
        self.outgoing_routes(from)
            .find(|route| route.to == to)
            .map(|route| route.weight)
    }

    /// Sum of the direct route weights along a path.
    ///
    /// Returns `None` if some consecutive pair has no direct route.
    pub fn path_weight(&self, path: &Path) -> Option<u64> {
        path.stations()
            .windows(2)
            .map(|pair| self.route_weight(&pair[0], &pair[1]).map(u64::from))
            .sum()
    }
}
