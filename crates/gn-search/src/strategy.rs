//! The closed set of search strategies.

use std::fmt;
use std::str::FromStr;

use crate::SearchError;

/// Which frontier discipline [`search`](crate::search) uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchStrategy {
    /// Breadth-first: FIFO frontier, shortest path in edge count.
    Bfs,
    /// Depth-first: LIFO frontier, any path, no optimality guarantee.
    Dfs,
    /// A* with the Manhattan heuristic: shortest path, fewer expansions.
    #[default]
    AStar,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [SearchStrategy::Bfs, SearchStrategy::Dfs, SearchStrategy::AStar];

    /// `true` if the strategy always returns a minimum-edge path.
    #[inline]
    pub fn is_optimal(self) -> bool {
        !matches!(self, SearchStrategy::Dfs)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchStrategy::Bfs   => "bfs",
            SearchStrategy::Dfs   => "dfs",
            SearchStrategy::AStar => "astar",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs"                  => Ok(SearchStrategy::Bfs),
            "dfs"                  => Ok(SearchStrategy::Dfs),
            "astar" | "a*" | "a-star" => Ok(SearchStrategy::AStar),
            other                  => Err(SearchError::UnknownStrategy(other.to_owned())),
        }
    }
}
