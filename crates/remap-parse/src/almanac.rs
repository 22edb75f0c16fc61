//! Line-oriented almanac parser.

use indexmap::IndexMap;
use remap_core::{Rule, StageSpec};
use std::str::FromStr;

use crate::error::ParseError;

const SEEDS_PREFIX: &str = "seeds:";
const HEADER_SUFFIX: &str = " map:";
const CATEGORY_SEPARATOR: &str = "-to-";

/// Parsed almanac: the seed list and the sparse stages in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Almanac {
    /// Seeds as listed. Read either as points or as `(start, length)` pairs.
    pub seeds: Vec<u64>,
    /// One entry per map section.
    pub stages: Vec<StageSpec>,
}

impl Almanac {
    /// The sparse rule lists alone, one per stage.
    pub fn stage_rules(&self) -> Vec<Vec<Rule>> {
        self.stages.iter().map(|s| s.rules.clone()).collect()
    }
}

impl FromStr for Almanac {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_almanac(s)
    }
}

/// Parse almanac text.
///
/// # Examples
///
/// ```
/// use remap_parse::parse_almanac;
///
/// let almanac = parse_almanac("seeds: 79 14\n\nseed-to-soil map:\n50 98 2\n").unwrap();
/// assert_eq!(almanac.seeds, vec![79, 14]);
/// assert_eq!(almanac.stages[0].label(), "seed-to-soil");
/// assert_eq!(almanac.stages[0].rules[0].source_start(), 98);
/// ```
pub fn parse_almanac(input: &str) -> Result<Almanac, ParseError> {
    let mut seeds: Option<Vec<u64>> = None;
    let mut stages: IndexMap<String, StageSpec> = IndexMap::new();
    let mut in_section = false;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();

        if text.is_empty() {
            in_section = false;
            continue;
        }

        if let Some(rest) = text.strip_prefix(SEEDS_PREFIX) {
            if seeds.is_some() {
                return Err(unexpected(line, text));
            }
            seeds = Some(parse_seeds(line, rest)?);
            in_section = false;
            continue;
        }

        if let Some(label) = text.strip_suffix(HEADER_SUFFIX) {
            if seeds.is_none() {
                return Err(ParseError::MissingSeeds);
            }
            let (source, destination) = parse_header(line, text, label)?;
            if stages.contains_key(source) {
                return Err(ParseError::DuplicateStage {
                    line,
                    category: source.to_string(),
                });
            }
            stages.insert(
                source.to_string(),
                StageSpec::new(source, destination, Vec::new()),
            );
            in_section = true;
            continue;
        }

        if !in_section {
            return Err(unexpected(line, text));
        }
        let rule = parse_rule(line, text)?;
        if let Some((_, stage)) = stages.last_mut() {
            stage.rules.push(rule);
        }
    }

    Ok(Almanac {
        seeds: seeds.ok_or(ParseError::MissingSeeds)?,
        stages: stages.into_values().collect(),
    })
}

fn unexpected(line: usize, text: &str) -> ParseError {
    ParseError::UnexpectedLine {
        line,
        content: text.to_string(),
    }
}

fn parse_number(line: usize, token: &str) -> Result<u64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_seeds(line: usize, rest: &str) -> Result<Vec<u64>, ParseError> {
    rest.split_whitespace()
        .map(|token| parse_number(line, token))
        .collect()
}

fn parse_header<'a>(
    line: usize,
    text: &str,
    label: &'a str,
) -> Result<(&'a str, &'a str), ParseError> {
    let invalid = || ParseError::InvalidHeader {
        line,
        header: text.to_string(),
    };
    let (source, destination) = label.trim().split_once(CATEGORY_SEPARATOR).ok_or_else(invalid)?;
    let valid = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace);
    if !valid(source) || !valid(destination) {
        return Err(invalid());
    }
    Ok((source, destination))
}

fn parse_rule(line: usize, text: &str) -> Result<Rule, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [dest, source, length] = tokens.as_slice() else {
        return Err(ParseError::WrongFieldCount {
            line,
            found: tokens.len(),
        });
    };
    let dest = parse_number(line, dest)?;
    let source = parse_number(line, source)?;
    let length = parse_number(line, length)?;
    Rule::new(source, dest, length).map_err(|reason| ParseError::InvalidRule { line, reason })
}
