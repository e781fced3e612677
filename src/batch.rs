//! Parallel decoding of many independent polylines.

use rayon::prelude::*;
use tracing::debug;

use crate::coordinates::decode_polyline;
use crate::error::Result;

/// Decodes each string on the rayon pool, returning results in input order.
///
/// Each polyline is decoded on its own; one malformed entry does not affect
/// the rest.
pub fn decode_all<S>(encoded: &[S], precision: f64) -> Vec<Result<Vec<(f64, f64)>>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<_> = encoded
        .par_iter()
        .map(|polyline| decode_polyline(polyline.as_ref(), precision))
        .collect();

    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        debug!(total = results.len(), failed, "batch polyline decode had failures");
    }

    results
}
