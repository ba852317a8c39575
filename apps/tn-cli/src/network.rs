//! Network definitions for the CLI: the built-in demo system and
//! ad-hoc `--station` / `--route` specs.

use std::str::FromStr;

use tn_core::{Color, TnError, TnResult};
use tn_graph::{NetworkBuilder, TransitGraph};

/// `NAME:X:Y`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSpec {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl FromStr for StationSpec {
    type Err = TnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split from the right so names may contain ':'.
        let mut parts = s.rsplitn(3, ':');
        let (Some(y), Some(x), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TnError::invalid_arg(format!(
                "station '{s}' must look like NAME:X:Y"
            )));
        };
        Ok(Self {
            name: non_empty(name, "station name")?,
            x: parse_coord(x, s)?,
            y: parse_coord(y, s)?,
        })
    }
}

/// `FROM:TO:WEIGHT:COLOR`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
    pub weight: u32,
    pub color: Color,
}

impl FromStr for RouteSpec {
    type Err = TnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed =
            || TnError::invalid_arg(format!("route '{s}' must look like FROM:TO:WEIGHT:COLOR"));

        let mut parts = s.rsplitn(3, ':');
        let (Some(color), Some(weight), Some(ends)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let (from, to) = ends.split_once(':').ok_or_else(malformed)?;
        let weight = weight.trim().parse::<u32>().map_err(|_| {
            TnError::invalid_arg(format!(
                "route '{s}': weight '{weight}' must be a non-negative integer"
            ))
        })?;

        Ok(Self {
            from: non_empty(from, "route origin")?,
            to: non_empty(to, "route destination")?,
            weight,
            color: color.parse()?,
        })
    }
}

fn non_empty(value: &str, what: &str) -> TnResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TnError::invalid_arg(format!("{what} must not be empty")));
    }
    Ok(value.to_string())
}

fn parse_coord(value: &str, spec: &str) -> TnResult<i32> {
    value.trim().parse().map_err(|_| {
        TnError::invalid_arg(format!(
            "station '{spec}': coordinate '{value}' must be an integer"
        ))
    })
}

/// Build a graph from command-line specs, rejecting duplicates and
/// dangling routes.
pub fn from_specs(stations: &[StationSpec], routes: &[RouteSpec]) -> TnResult<TransitGraph> {
    let mut builder = NetworkBuilder::new();
    for station in stations {
        builder.station(station.name.as_str(), station.x, station.y);
    }
    for route in routes {
        builder.route(route.from.as_str(), route.to.as_str(), route.weight, route.color);
    }
    builder.build()
}

/// A small light-rail system used when no stations are given.
///
/// Weights are travel minutes; coordinates are screen positions.
pub fn demo_network() -> TnResult<TransitGraph> {
    const STATIONS: [(&str, i32, i32); 20] = [
        ("Old Town", 220, 160),
        ("Washington Street", 240, 230),
        ("Middletown", 255, 290),
        ("County Center/Little Italy", 265, 350),
        ("Santa Fe Depot", 275, 400),
        ("America Plaza", 300, 420),
        ("Civic Center", 330, 430),
        ("City College", 370, 420),
        ("12th & Imperial", 380, 480),
        ("Barrio Logan", 370, 540),
        ("Chula Vista", 400, 700),
        ("Fashion Valley", 300, 130),
        ("Hazard Center", 360, 130),
        ("Fenton Parkway", 430, 130),
        ("SDSU", 560, 140),
        ("Grossmont", 650, 170),
        ("El Cajon", 760, 200),
        ("Santee", 820, 120),
        ("Euclid Avenue", 500, 460),
        ("Lemon Grove", 600, 430),
    ];

    const ROUTES: [(&str, &str, u32, Color); 21] = [
        ("Old Town", "Washington Street", 3, Color::BLUE),
        ("Washington Street", "Middletown", 2, Color::BLUE),
        ("Middletown", "County Center/Little Italy", 2, Color::BLUE),
        ("County Center/Little Italy", "Santa Fe Depot", 2, Color::BLUE),
        ("Santa Fe Depot", "America Plaza", 2, Color::BLUE),
        ("America Plaza", "Civic Center", 2, Color::BLUE),
        ("Civic Center", "City College", 2, Color::BLUE),
        ("City College", "12th & Imperial", 3, Color::BLUE),
        ("12th & Imperial", "Barrio Logan", 3, Color::BLUE),
        ("Barrio Logan", "Chula Vista", 12, Color::BLUE),
        ("Old Town", "Fashion Valley", 5, Color::GREEN),
        ("Fashion Valley", "Hazard Center", 4, Color::GREEN),
        ("Hazard Center", "Fenton Parkway", 5, Color::GREEN),
        ("Fenton Parkway", "SDSU", 7, Color::GREEN),
        ("SDSU", "Grossmont", 6, Color::GREEN),
        ("Grossmont", "El Cajon", 7, Color::GREEN),
        ("12th & Imperial", "Euclid Avenue", 9, Color::ORANGE),
        ("Euclid Avenue", "Lemon Grove", 5, Color::ORANGE),
        ("Lemon Grove", "Grossmont", 8, Color::ORANGE),
        ("Grossmont", "El Cajon", 8, Color::COPPER),
        ("El Cajon", "Santee", 9, Color::COPPER),
    ];

    let mut builder = NetworkBuilder::new();
    for (name, x, y) in STATIONS {
        builder.station(name, x, y);
    }
    for (from, to, weight, color) in ROUTES {
        builder.route(from, to, weight, color);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_station_spec() {
        let spec: StationSpec = "Old Town:220:-16".parse().unwrap();
        assert_eq!(spec.name, "Old Town");
        assert_eq!((spec.x, spec.y), (220, -16));

        let spec: StationSpec = "Gate:A:1:2".parse().unwrap();
        assert_eq!(spec.name, "Gate:A");

        for bad in ["A", "A:1", ":1:2", "A:x:2", "A:1:2.5"] {
            assert!(bad.parse::<StationSpec>().is_err(), "{bad}");
        }
    }

    #[test]
    fn parse_route_spec() {
        let spec: RouteSpec = "A:B:7:orange".parse().unwrap();
        assert_eq!(spec.from, "A");
        assert_eq!(spec.to, "B");
        assert_eq!(spec.weight, 7);
        assert_eq!(spec.color, Color::ORANGE);

        let spec: RouteSpec = "A:B:0:#102030".parse().unwrap();
        assert_eq!(spec.color, Color::rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn route_spec_rejects_negative_weight() {
        let err = "A:B:-3:blue".parse::<RouteSpec>().unwrap_err();
        assert!(err.to_string().contains("non-negative"));
        assert!("A:B:3:mauve".parse::<RouteSpec>().is_err());
        assert!("A:3:blue".parse::<RouteSpec>().is_err());
    }

    #[test]
    fn specs_build_a_graph() {
        let stations = ["A:0:0", "B:1:0"].map(|s| s.parse::<StationSpec>().unwrap());
        let routes = ["A:B:4:red".parse::<RouteSpec>().unwrap()];

        let graph = from_specs(&stations, &routes).unwrap();
        assert_eq!(graph.route_weight("B", "A"), Some(4));

        let dangling = ["A:C:1:red".parse::<RouteSpec>().unwrap()];
        assert!(from_specs(&stations, &dangling).is_err());
    }

    #[test]
    fn demo_network_is_connected() {
        let graph = demo_network().unwrap();
        assert_eq!(graph.station_count(), 20);

        let path = graph.dijkstra("Chula Vista", "Santee").unwrap();
        assert_eq!(path.first(), Some("Chula Vista"));
        assert_eq!(path.last(), Some("Santee"));
        // First-inserted Green segment shadows the parallel Copper one.
        assert_eq!(graph.route_weight("Grossmont", "El Cajon"), Some(7));
    }
}
