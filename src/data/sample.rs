use rand::rngs::StdRng;
use rand::SeedableRng;

/// Draw a uniform random sample of `sample_size` row indices out of
/// `row_count`, without replacement. Returns None when no sampling is
/// needed (sample covers the whole table), so the caller walks every row.
///
/// Indices come back sorted ascending: every column sees the same rows in
/// their original order, keeping cross-column relationships consistent
/// within one run. With a seed the draw is reproducible; without one the
/// RNG is OS-seeded and varies run to run.
pub fn sample_indices(row_count: usize, sample_size: usize, seed: Option<u64>) -> Option<Vec<usize>> {
    if sample_size >= row_count {
        return None;
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut indices = rand::seq::index::sample(&mut rng, row_count, sample_size).into_vec();
    indices.sort_unstable();
    Some(indices)
}
