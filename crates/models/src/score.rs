//! A rider's accumulated scores, stored as a JSON array column.
//!
//! The collection behaves as a set: a value is only appended when no equal
//! value is already present. First-insertion order is kept for display.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize, Serializer};

/// One score value. Integral points render without a fractional part.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Points(pub f64);

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        crate::numeric::serialize_compact(&self.0, s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct ScoreSet(Vec<Points>);

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` unless already present; returns whether the set changed.
    pub fn insert(&mut self, value: f64) -> bool {
        if self.contains(value) {
            return false;
        }
        self.0.push(Points(value));
        true
    }

    pub fn contains(&self, value: f64) -> bool {
        self.0.iter().any(|p| p.0 == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|p| p.0)
    }
}

impl FromIterator<f64> for ScoreSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut set = ScoreSet::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}
