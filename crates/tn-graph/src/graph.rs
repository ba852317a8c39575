//! Core transit data structures.

use tn_core::{Color, RouteId, StationId};

/// A named point in the transit network.
///
/// Coordinates are display hints for a renderer; the search
/// algorithms never read them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// One directed record of a connection between two stations.
///
/// Routes are always inserted in forward/reverse pairs, so an undirected
/// connection A–B is stored as `A -> B` followed by `B -> A`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    pub id: RouteId,
    pub from: StationId,
    pub to: StationId,
    pub weight: u32,
    pub color: Color,
}

impl Route {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tn_core::Id;

    #[test]
    fn self_loop_detection() {
        let a = Id::from_index(0);
        let b = Id::from_index(1);
        let route = |from, to| Route {
            id: Id::from_index(0),
            from,
            to,
            weight: 1,
            color: Color::BLUE,
        };
        assert!(route(a, a).is_self_loop());
        assert!(!route(a, b).is_self_loop());
    }
}
