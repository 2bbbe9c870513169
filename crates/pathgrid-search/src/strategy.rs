use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Breadth-first: FIFO queue, shortest by hop count.
    Bfs,
    /// Depth-first: LIFO stack, any connecting path.
    Dfs,
    /// Uniform-cost: open list by distance, shortest.
    Dijkstra,
    /// A*: open list by distance plus Manhattan estimate, shortest.
    AStar,
}

impl Strategy {
    /// Every strategy, in a fixed order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Dijkstra,
        Strategy::AStar,
        Strategy::Bfs,
        Strategy::Dfs,
    ];

    /// Whether a reached path is guaranteed to be shortest.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Strategy::Dfs)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a strategy name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search strategy \u{201c}{0}\u{201d}")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Case-insensitive; `a*` is accepted for A*.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Strategy::AStar).unwrap(), r#""astar""#);
        let s: Strategy = serde_json::from_str(r#""dijkstra""#).unwrap();
        assert_eq!(s, Strategy::Dijkstra);
    }
}
