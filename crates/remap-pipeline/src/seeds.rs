//! Reading a seed list as coalesced `(start, length)` ranges.

use remap_core::Interval;

use crate::error::PipelineError;

/// Pair up `seeds` as `(start, length)` and return the ranges sorted by
/// their start.
///
/// Zero-length pairs hold no values and are dropped.
///
/// # Examples
///
/// ```
/// use remap_core::Interval;
/// use remap_pipeline::coalesce_seed_ranges;
///
/// let ranges = coalesce_seed_ranges(&[79, 14, 55, 13]).unwrap();
/// assert_eq!(ranges, vec![Interval::new(55, 68), Interval::new(79, 93)]);
/// ```
pub fn coalesce_seed_ranges(seeds: &[u64]) -> Result<Vec<Interval>, PipelineError> {
    let pairs = seeds.chunks_exact(2);
    if let [seed] = pairs.remainder() {
        return Err(PipelineError::UnpairedSeed { seed: *seed });
    }

    let mut ranges = Vec::with_capacity(seeds.len() / 2);
    for pair in pairs {
        let (start, length) = (pair[0], pair[1]);
        if length == 0 {
            continue;
        }
        let range = Interval::from_start_len(start, length)
            .ok_or(PipelineError::SeedRangeOverflow { start, length })?;
        ranges.push(range);
    }
    ranges.sort_unstable_by_key(Interval::min);
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use remap_core::DOMAIN_END;

    #[test]
    fn odd_seed_count_rejected() {
        assert_eq!(
            coalesce_seed_ranges(&[79, 14, 55]),
            Err(PipelineError::UnpairedSeed { seed: 55 })
        );
    }

    #[test]
    fn zero_length_pairs_dropped() {
        let ranges = coalesce_seed_ranges(&[5, 0, 10, 2]).unwrap();
        assert_eq!(ranges, vec![Interval::new(10, 12)]);
    }

    #[test]
    fn overflowing_pair_rejected() {
        assert_eq!(
            coalesce_seed_ranges(&[DOMAIN_END - 1, 2]),
            Err(PipelineError::SeedRangeOverflow {
                start: DOMAIN_END - 1,
                length: 2
            })
        );
    }

    #[test]
    fn range_may_end_at_domain_end() {
        let ranges = coalesce_seed_ranges(&[DOMAIN_END - 2, 2]).unwrap();
        assert_eq!(ranges, vec![Interval::new(DOMAIN_END - 2, DOMAIN_END)]);
    }

    #[test]
    fn empty_seed_list_is_no_ranges() {
        assert_eq!(coalesce_seed_ranges(&[]), Ok(Vec::new()));
    }
}
