//! Types used in evaluation configuration

use crate::Error;

/// Where batched evaluation runs its parallel chunks
///
/// [`EvalConfig`] borrows one of these; evaluating with `threads: None` skips
/// the pool entirely.
pub enum ThreadPool {
    /// A dedicated pool, owned by the caller
    Custom(rayon::ThreadPool),
    /// Rayon's process-wide pool
    Global,
}

impl ThreadPool {
    /// Builds a dedicated pool with the given number of workers
    pub fn with_threads(n: usize) -> Result<Self, Error> {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
        Ok(ThreadPool::Custom(pool))
    }

    /// Runs `f` inside this pool, so nested `par_*` calls use its workers
    pub fn run<F: FnOnce() -> V + Send, V: Send>(&self, f: F) -> V {
        match self {
            ThreadPool::Custom(p) => p.install(f),
            ThreadPool::Global => f(),
        }
    }

    /// Number of workers available to chunked evaluation
    pub fn thread_count(&self) -> usize {
        match self {
            ThreadPool::Custom(p) => p.current_num_threads(),
            ThreadPool::Global => rayon::current_num_threads(),
        }
    }
}

/// Settings for batch evaluation
///
/// Queries are split into chunks of `chunk_size` points; each chunk is looked
/// up and evaluated independently, writing into its own disjoint slice of the
/// output.
pub struct EvalConfig<'a> {
    /// Thread pool to use, or `None` to evaluate on the calling thread
    pub threads: Option<&'a ThreadPool>,

    /// Number of query points handed to a worker at a time
    pub chunk_size: usize,
}

impl Default for EvalConfig<'_> {
    fn default() -> Self {
        Self {
            threads: Some(&ThreadPool::Global),
            chunk_size: 4096,
        }
    }
}

impl EvalConfig<'_> {
    /// Evaluation configuration that stays on the calling thread
    pub fn serial() -> Self {
        Self {
            threads: None,
            ..Default::default()
        }
    }

    /// Applies `f` to every `(queries, out)` chunk pair
    ///
    /// Chunks are processed in parallel if a thread pool is configured and
    /// there is more than one chunk; otherwise, the whole batch is handed to
    /// `f` in one call on the current thread.
    ///
    /// # Panics
    /// If `queries` and `out` have different lengths
    pub(crate) fn for_each_chunk<T, F>(
        &self,
        queries: &[f64],
        out: &mut [T],
        f: F,
    ) where
        T: Send,
        F: Fn(&[f64], &mut [T]) + Send + Sync,
    {
        use rayon::prelude::*;

        assert_eq!(queries.len(), out.len());
        let chunk_size = self.chunk_size.max(1);
        match self.threads {
            Some(pool) if queries.len() > chunk_size => {
                log::debug!(
                    "evaluating {} points in {} chunks on {} threads",
                    queries.len(),
                    queries.len().div_ceil(chunk_size),
                    pool.thread_count()
                );
                pool.run(|| {
                    queries
                        .par_chunks(chunk_size)
                        .zip(out.par_chunks_mut(chunk_size))
                        .for_each(|(q, o)| f(q, o))
                })
            }
            _ => {
                log::debug!("evaluating {} points serially", queries.len());
                f(queries, out)
            }
        }
    }
}
