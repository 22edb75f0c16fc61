//! The documented seven-stage example almanac.

use remap_core::{Rule, StageSpec};

/// Example input: four seeds and seven stage maps.
pub const EXAMPLE_ALMANAC: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

/// Lowest location for the example seeds read as points.
pub const EXAMPLE_LOWEST_POINT: u64 = 35;

/// Lowest location for the example seeds read as `(start, length)` pairs.
pub const EXAMPLE_LOWEST_RANGE: u64 = 46;

const EXAMPLE_STAGES: [(&str, &str, &[[u64; 3]]); 7] = [
    ("seed", "soil", &[[50, 98, 2], [52, 50, 48]]),
    ("soil", "fertilizer", &[[0, 15, 37], [37, 52, 2], [39, 0, 15]]),
    (
        "fertilizer",
        "water",
        &[[49, 53, 8], [0, 11, 42], [42, 0, 7], [57, 7, 4]],
    ),
    ("water", "light", &[[88, 18, 7], [18, 25, 70]]),
    ("light", "temperature", &[[45, 77, 23], [81, 45, 19], [68, 64, 13]]),
    ("temperature", "humidity", &[[0, 69, 1], [1, 0, 69]]),
    ("humidity", "location", &[[60, 56, 37], [56, 93, 4]]),
];

/// The example seed list.
pub fn example_seeds() -> Vec<u64> {
    vec![79, 14, 55, 13]
}

/// Build rules from `[dest, source, length]` triples, in input-line order.
///
/// # Panics
///
/// Panics if a triple is not a valid rule.
pub fn rules_from_triples(triples: &[[u64; 3]]) -> Vec<Rule> {
    triples
        .iter()
        .map(|&[dest, source, len]| Rule::new(source, dest, len).unwrap())
        .collect()
}

/// The example's sparse rules, one list per stage.
pub fn example_stage_rules() -> Vec<Vec<Rule>> {
    EXAMPLE_STAGES
        .iter()
        .map(|(_, _, triples)| rules_from_triples(triples))
        .collect()
}

/// The example's stages with their category names.
pub fn example_specs() -> Vec<StageSpec> {
    EXAMPLE_STAGES
        .iter()
        .map(|(source, dest, triples)| StageSpec::new(*source, *dest, rules_from_triples(triples)))
        .collect()
}
