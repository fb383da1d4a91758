//! Scorer - subsequence scoring of a query against a candidate
//!
//! Query characters are located left to right in the candidate, each search
//! starting just past the previous match. Every located character earns:
//!
//! - 0.7 when it sits right at the cursor (consecutive run, or start of string)
//! - 0.1 otherwise, plus 0.8 when the candidate character before it is a space
//! - 0.1 more when the original characters agree in case
//!
//! The sum is averaged over candidate and query length, divided by the fuzzy
//! miss divisor, and gets +0.15 when both strings start with the same
//! character and the score is still below 0.85. The result is not clamped.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{Fuzziness, ScorerConfig};
use crate::units::{self, TextUnit, Units};

const CONSECUTIVE_SCORE: f64 = 0.7;
const GAP_SCORE: f64 = 0.1;
const ACRONYM_BONUS: f64 = 0.8;
const SAME_CASE_BONUS: f64 = 0.1;
const FIRST_CHAR_BONUS: f64 = 0.15;
const FIRST_CHAR_BONUS_CEILING: f64 = 0.85;

/// How a score was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Candidate and query are byte-for-byte equal
    Exact,
    /// One side is empty
    Empty,
    /// A query character was not found and fuzziness is off
    Aborted,
    /// Every query character was scanned
    Scored,
}

/// Intermediate figures of a single scoring call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub outcome: Outcome,
    /// Sum of per-character contributions
    pub running_score: f64,
    pub source_len: usize,
    pub query_len: usize,
    pub matched: usize,
    pub missed: usize,
    pub fuzzy_divisor: f64,
    pub first_char_bonus: bool,
}

impl ScoreBreakdown {
    fn short_circuit(score: f64, outcome: Outcome, source_len: usize, query_len: usize) -> Self {
        Self {
            score,
            outcome,
            running_score: 0.0,
            source_len,
            query_len,
            matched: 0,
            missed: 0,
            fuzzy_divisor: 1.0,
            first_char_bonus: false,
        }
    }
}

/// Reusable scorer holding a validated configuration.
///
/// Stateless between calls; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    /// Create a scorer with fuzzy matching off and grapheme units
    pub fn new() -> Self {
        Self::with_config(ScorerConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: ScorerConfig) -> Self {
        debug!(
            fuzziness = ?config.fuzziness.map(Fuzziness::get),
            unit = ?config.unit,
            "created scorer"
        );
        Self { config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score `query` against `source`
    pub fn score(&self, source: &str, query: &str) -> f64 {
        self.explain(source, query).score
    }

    /// Score `query` against `source`, keeping the intermediate figures
    pub fn explain(&self, source: &str, query: &str) -> ScoreBreakdown {
        let penalty = self.config.fuzziness.map(Fuzziness::penalty);
        compute(source, query, penalty, self.config.unit)
    }
}

/// Score `query` against `source` in grapheme units.
///
/// `fuzziness` is not validated: values outside [0, 1) are a caller error and
/// give meaningless scores. Use [`Fuzziness`] or [`Scorer`] to reject them.
///
/// ```
/// use string_score::score;
///
/// assert_eq!(score("Hello World", "Hello World", None), 1.0);
/// assert_eq!(score("Hello World", "xyz", None), 0.0);
/// assert!(score("Kristofer", "kris", None) > score("Kristofer", "fer", None));
/// ```
pub fn score(source: &str, query: &str, fuzziness: Option<f64>) -> f64 {
    compute(source, query, fuzziness.map(|f| 1.0 - f), TextUnit::Grapheme).score
}

/// `penalty` is `1 - fuzziness`; `None` disables fuzzy matching
fn compute(source: &str, query: &str, penalty: Option<f64>, unit: TextUnit) -> ScoreBreakdown {
    if source == query {
        trace!("exact match");
        let len = units::count(source, unit);
        return ScoreBreakdown::short_circuit(1.0, Outcome::Exact, len, len);
    }
    if source.is_empty() || query.is_empty() {
        return ScoreBreakdown::short_circuit(
            0.0,
            Outcome::Empty,
            units::count(source, unit),
            units::count(query, unit),
        );
    }

    let src = Units::split(source, unit);
    let qry = Units::split(query, unit);

    let mut running_score = 0.0;
    let mut fuzzy_divisor = 1.0;
    let mut cursor = 0;
    let mut matched = 0;
    let mut missed = 0;

    for i in 0..qry.len() {
        let Some(idx) = src.find_folded(qry.folded(i), cursor) else {
            match penalty {
                None => {
                    trace!(position = i, "query character not found, aborting");
                    let mut breakdown =
                        ScoreBreakdown::short_circuit(0.0, Outcome::Aborted, src.len(), qry.len());
                    breakdown.matched = matched;
                    breakdown.missed = 1;
                    breakdown.running_score = running_score;
                    return breakdown;
                }
                Some(penalty) => {
                    trace!(position = i, "query character not found");
                    fuzzy_divisor += penalty;
                    missed += 1;
                    continue;
                }
            }
        };

        let mut char_score = if idx == cursor {
            CONSECUTIVE_SCORE
        } else if src.original(idx - 1) == " " {
            // Word start counts as if preceded by two perfect matches
            GAP_SCORE + ACRONYM_BONUS
        } else {
            GAP_SCORE
        };

        if src.original(idx) == qry.original(i) {
            char_score += SAME_CASE_BONUS;
        }

        running_score += char_score;
        cursor = idx + 1;
        matched += 1;
    }

    let source_len = src.len() as f64;
    let query_len = qry.len() as f64;
    let mut score = 0.5 * (running_score / source_len + running_score / query_len) / fuzzy_divisor;

    let first_char_bonus = qry.folded(0) == src.folded(0) && score < FIRST_CHAR_BONUS_CEILING;
    if first_char_bonus {
        score += FIRST_CHAR_BONUS;
    }

    ScoreBreakdown {
        score,
        outcome: Outcome::Scored,
        running_score,
        source_len: src.len(),
        query_len: qry.len(),
        matched,
        missed,
        fuzzy_divisor,
        first_char_bonus,
    }
}
