//! Scorer configuration

use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};
use crate::units::TextUnit;

/// Validated fuzziness in [0, 1).
///
/// The free [`score`](crate::score) function accepts any `f64`; values
/// outside this range make the miss divisor shrink or go negative. Use this
/// type where input crosses an API boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Fuzziness(f64);

impl Fuzziness {
    pub fn new(value: f64) -> ScoreResult<Self> {
        if (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreError::FuzzinessOutOfRange(value))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Amount added to the miss divisor for every unmatched query unit
    #[inline]
    pub fn penalty(self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for Fuzziness {
    type Error = ScoreError;

    fn try_from(value: f64) -> ScoreResult<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Fuzziness {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Fuzziness::new(value).map_err(serde::de::Error::custom)
    }
}

/// Scorer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    /// Tolerance for unmatched query characters; `None` makes any miss score 0
    pub fuzziness: Option<Fuzziness>,
    /// Unit used for lengths and positions
    pub unit: TextUnit,
}

impl ScorerConfig {
    /// Parse a JSON config, e.g. `{"fuzziness": 0.5, "unit": "scalar"}`.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> ScoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_fuzziness(mut self, fuzziness: f64) -> ScoreResult<Self> {
        self.fuzziness = Some(Fuzziness::new(fuzziness)?);
        Ok(self)
    }

    pub fn with_unit(mut self, unit: TextUnit) -> Self {
        self.unit = unit;
        self
    }
}
