use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Total weight of `path` in `graph`.
///
/// Sums the weight of every consecutive pair. Empty and single-node paths
/// have a distance of zero. Fails with [`Error::EdgeNotFound`] when two
/// consecutive nodes are not connected.
pub fn path_distance(graph: &Graph, path: &[NodeId]) -> Result<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let (from, to) = (&pair[0], &pair[1]);
        graph
            .weight(from, to)
            .map(|weight| total + weight)
            .ok_or_else(|| Error::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, EdgeRecord, GraphBuildOptions};

    fn path(nodes: &[&str]) -> Vec<NodeId> {
        nodes.iter().map(|node| node.to_string()).collect()
    }

    #[test]
    fn sums_consecutive_edges() {
        let graph = build_graph(
            vec![EdgeRecord::new("A", "B", 1.5), EdgeRecord::new("B", "C", 2.0)],
            &GraphBuildOptions::default(),
        )
        .unwrap();

        assert_eq!(path_distance(&graph, &path(&["A", "B", "C"])).unwrap(), 3.5);
        assert_eq!(path_distance(&graph, &path(&["C", "B"])).unwrap(), 2.0);
        assert_eq!(path_distance(&graph, &path(&["A"])).unwrap(), 0.0);
        assert_eq!(path_distance(&graph, &[]).unwrap(), 0.0);
    }

    #[test]
    fn missing_edge_is_reported() {
        let graph = build_graph(
            vec![EdgeRecord::new("A", "B", 1.0)],
            &GraphBuildOptions::directed(),
        )
        .unwrap();

        match path_distance(&graph, &path(&["B", "A"])) {
            Err(Error::EdgeNotFound { from, to }) => {
                assert_eq!(from, "B");
                assert_eq!(to, "A");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
