//! JSON rendering for floating point columns.

use serde::Serializer;

// Beyond 2^53 an f64 no longer holds every integer exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Serialize `v` as an integer when it has no fractional part, so `25.0`
/// goes out on the wire as `25`.
pub fn serialize_compact<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT {
        s.serialize_i64(*v as i64)
    } else {
        s.serialize_f64(*v)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    struct W(#[serde(serialize_with = "super::serialize_compact")] f64);

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(serde_json::to_string(&W(25.0)).unwrap(), "25");
        assert_eq!(serde_json::to_string(&W(-3.0)).unwrap(), "-3");
    }

    #[test]
    fn fractional_values_kept() {
        assert_eq!(serde_json::to_string(&W(12.5)).unwrap(), "12.5");
    }
}
