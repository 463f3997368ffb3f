//! Pairwise proximity scan.

use rayon::prelude::*;

use super::Node;
use crate::geo::round_tenth;

/// Node count above which the pairwise scan is spread across the rayon pool.
///
/// Below this the sequential scan is faster than the fork/join overhead.
pub const PARALLEL_PAIR_CUTOFF: usize = 256;

/// An undirected link between two node indices (`a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Link {
    pub a: usize,
    pub b: usize,
    pub weight_km: f64,
}

/// Find every unordered pair within `threshold_km` of each other.
///
/// The comparison uses the unrounded distance and is inclusive; only the
/// stored weight is rounded. Output is ordered by `(a, b)` regardless of
/// whether the scan ran in parallel.
pub(super) fn proximity_links(nodes: &[&Node], threshold_km: f64) -> Vec<Link> {
    if nodes.len() > PARALLEL_PAIR_CUTOFF {
        (0..nodes.len())
            .into_par_iter()
            .flat_map_iter(|a| links_from(nodes, a, threshold_km))
            .collect()
    } else {
        (0..nodes.len())
            .flat_map(|a| links_from(nodes, a, threshold_km))
            .collect()
    }
}

fn links_from<'n>(
    nodes: &'n [&'n Node],
    a: usize,
    threshold_km: f64,
) -> impl Iterator<Item = Link> + 'n {
    ((a + 1)..nodes.len()).filter_map(move |b| {
        let distance = nodes[a].distance_km(nodes[b]);
        (distance <= threshold_km).then(|| Link {
            a,
            b,
            weight_km: round_tenth(distance),
        })
    })
}
