/// Concurrency management for RowTrace.
/// Configures the worker pool used to flatten many trees at once.

use anyhow::Result;

/// Number of workers to use: the explicit request, else half the cores (minimum 1).
pub fn worker_count(requested: Option<usize>) -> usize {
    match requested {
        Some(jobs) if jobs > 0 => jobs,
        _ => std::cmp::max(1, num_cpus::get() / 2),
    }
}

/// Initialize the global rayon thread pool with controlled worker count.
pub fn init_thread_pool(requested: Option<usize>) -> Result<()> {
    let workers = worker_count(requested);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    tracing::info!(workers, cores = num_cpus::get(), "initialized thread pool");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count() {
        assert_eq!(worker_count(Some(3)), 3);
        assert!(worker_count(Some(0)) >= 1);
        assert!(worker_count(None) >= 1);
    }
}
