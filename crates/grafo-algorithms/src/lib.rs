pub mod common;
pub mod community;
pub mod eulerian;
pub mod pathfinding;

pub use common::{GraphView, NodeId};
pub use community::{weakly_connected_components, WccResult, strongly_connected_components, SccResult};
pub use eulerian::{directed_eulerian, undirected_eulerian, EulerianKind, EulerianResult};
pub use pathfinding::{bfs, dijkstra, PathResult};
