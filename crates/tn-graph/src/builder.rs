//! Validating builder for transit graphs.

use std::collections::HashSet;

use tn_core::{Color, TnResult};

use crate::error::GraphError;
use crate::network::TransitGraph;

#[derive(Debug, Clone)]
struct StationDecl {
    name: String,
    x: i32,
    y: i32,
}

#[derive(Debug, Clone)]
struct RouteDecl {
    from: String,
    to: String,
    weight: u32,
    color: Color,
}

/// Builder that rejects declarations [`TransitGraph`] would silently drop.
///
/// Collect stations and routes with `station` and `route`, then call
/// `build()` to validate them and replay them into a `TransitGraph`.
/// Parallel routes and self-loops are still accepted.
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    stations: Vec<StationDecl>,
    routes: Vec<RouteDecl>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a station.
    pub fn station(&mut self, name: impl Into<String>, x: i32, y: i32) -> &mut Self {
        self.stations.push(StationDecl {
            name: name.into(),
            x,
            y,
        });
        self
    }

    /// Declare a bidirectional route.
    pub fn route(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: u32,
        color: Color,
    ) -> &mut Self {
        self.routes.push(RouteDecl {
            from: from.into(),
            to: to.into(),
            weight,
            color,
        });
        self
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Validate every declaration and build the graph.
    pub fn build(&self) -> TnResult<TransitGraph> {
        self.validate()?;

        let mut graph = TransitGraph::new();
        for station in &self.stations {
            graph.add_station(station.name.as_str(), station.x, station.y);
        }
        for route in &self.routes {
            graph.add_route(&route.from, &route.to, route.weight, route.color);
        }
        Ok(graph)
    }

    fn validate(&self) -> Result<(), GraphError> {
        let mut names = HashSet::new();
        for station in &self.stations {
            if !names.insert(station.name.as_str()) {
                return Err(GraphError::DuplicateStation {
                    name: station.name.clone(),
                });
            }
        }

        for route in &self.routes {
            for endpoint in [&route.from, &route.to] {
                if !names.contains(endpoint.as_str()) {
                    return Err(GraphError::UnknownStation {
                        from: route.from.clone(),
                        to: route.to.clone(),
                        name: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
