//! Shared test infrastructure

use std::collections::HashSet;
use std::sync::Once;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGING: Once = Once::new();

/// Install a process-wide fmt subscriber honoring `RUST_LOG` (default `warn`).
///
/// Output goes through the test writer so it is captured per test.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_test_writer().with_target(true))
            .try_init();
    });
}

/// Two disjoint sets of random keys, reproducible from `seed`.
pub fn disjoint_workload(members: usize, strangers: usize, seed: u64) -> (Vec<u64>, Vec<u64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(members + strangers);

    let mut draw = |count: usize| {
        let mut keys = Vec::with_capacity(count);
        while keys.len() < count {
            let key: u64 = rng.gen();
            if seen.insert(key) {
                keys.push(key);
            }
        }
        keys
    };

    let inserted = draw(members);
    let absent = draw(strangers);
    (inserted, absent)
}

/// Fraction of `keys` that `query` reports as present.
pub fn positive_rate<F>(keys: &[u64], mut query: F) -> f64
where
    F: FnMut(&u64) -> bool,
{
    if keys.is_empty() {
        return 0.0;
    }
    let hits = keys.iter().filter(|&k| query(k)).count();
    hits as f64 / keys.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_is_disjoint_and_reproducible() {
        let (a, b) = disjoint_workload(500, 500, 7);
        let (a2, b2) = disjoint_workload(500, 500, 7);

        assert_eq!(a, a2);
        assert_eq!(b, b2);

        let members: HashSet<_> = a.iter().collect();
        assert!(b.iter().all(|k| !members.contains(k)));
    }

    #[test]
    fn test_positive_rate() {
        let keys = [1, 2, 3, 4];
        assert_eq!(positive_rate(&keys, |k| *k % 2 == 0), 0.5);
        assert_eq!(positive_rate(&[], |_| true), 0.0);
    }
}
