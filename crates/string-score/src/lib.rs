//! String Score
//!
//! Fuzzy subsequence scoring for ranking candidates (autocomplete, fuzzy
//! search) against a typed query. Returns a value nominally in [0, 1]:
//!
//! - 1.0 only for byte-for-byte equal strings
//! - 0.0 when either side is empty, or when a query character cannot be
//!   found in order and fuzziness is off
//! - otherwise a blend of consecutive-run, word-start (acronym), same-case
//!   and first-character bonuses
//!
//! Lengths and positions are counted in grapheme clusters by default, so
//! multi-byte characters count once. The score is not clamped; callers sort
//! by the raw value.
//!
//! # Example
//!
//! ```rust
//! use string_score::{score, Scorer, ScorerConfig};
//!
//! let prefix = score("Kristofer", "kris", None);
//! let suffix = score("Kristofer", "fer", None);
//! assert!(prefix > suffix);
//!
//! // Tolerate missing characters at a penalty
//! let scorer = Scorer::with_config(ScorerConfig::default().with_fuzziness(0.5).unwrap());
//! assert!(scorer.score("Hello World", "hxllo") > 0.0);
//! assert_eq!(score("Hello World", "hxllo", None), 0.0);
//! ```

pub mod config;
pub mod error;
pub mod scorer;
pub mod units;

// Re-export main types at crate root
pub use config::{Fuzziness, ScorerConfig};
pub use error::{ScoreError, ScoreResult};
pub use scorer::{score, Outcome, ScoreBreakdown, Scorer};
pub use units::TextUnit;
