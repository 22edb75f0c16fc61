//! Parallel range conversion over scoped worker threads.
//!
//! Input ranges are independent, so they are cut into contiguous chunks,
//! one per worker. Every worker reads the same immutable pipeline, sends
//! its chunk's result back over a channel tagged with the chunk index, and
//! the caller reassembles the chunks in input order.

use remap_core::Interval;

use crate::pipeline::RangePipeline;

impl RangePipeline {
    /// [`convert_all_ranges`](Self::convert_all_ranges) split across up to
    /// `workers` threads.
    ///
    /// The output equals the serial output exactly. When the pipeline
    /// merges intervals, the reassembled chunks are normalized once more so
    /// that chunk boundaries leave no trace.
    pub fn convert_all_ranges_parallel(&self, ranges: &[Interval], workers: usize) -> Vec<Interval> {
        let workers = workers.clamp(1, ranges.len().max(1));
        if workers == 1 {
            return self.convert_all_ranges(ranges);
        }

        let chunk_len = ranges.len().div_ceil(workers);
        let (tx, rx) = crossbeam_channel::unbounded::<(usize, Vec<Interval>)>();
        std::thread::scope(|scope| {
            for (index, chunk) in ranges.chunks(chunk_len).enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let out = self.convert_all_ranges(chunk);
                    // The receiver lives until after the scope joins.
                    let _ = tx.send((index, out));
                });
            }
        });
        drop(tx);

        let mut parts: Vec<(usize, Vec<Interval>)> = rx.iter().collect();
        parts.sort_unstable_by_key(|(index, _)| *index);
        tracing::debug!(workers, chunks = parts.len(), "parallel range conversion");

        let out: Vec<Interval> = parts.into_iter().flat_map(|(_, part)| part).collect();
        if self.merges_intervals() {
            Interval::normalize(out)
        } else {
            out
        }
    }

    /// [`lowest_range`](Self::lowest_range) computed on up to `workers`
    /// threads.
    pub fn lowest_range_parallel(&self, ranges: &[Interval], workers: usize) -> Option<u64> {
        self.convert_all_ranges_parallel(ranges, workers)
            .iter()
            .map(Interval::min)
            .min()
    }
}
