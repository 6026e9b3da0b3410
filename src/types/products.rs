//! Placeholder aggregates for the two text products the build pass fetches
//! but does not yet decode. Both are constructed from their raw payloads and
//! intentionally serialize to an empty map; they exist so the location
//! aggregate's shape is stable once decoding lands.

use serde::Serialize;
use serde_json::Value;

/// Daily hydrometeorological products (NWS `HYD`). Empty contract: carries
/// no fields and serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyHydrometeorologicalProducts {}

impl DailyHydrometeorologicalProducts {
    pub fn build(_product: &Value) -> Self {
        Self {}
    }
}

/// Freezing level product (NWS `FZL`). Empty contract: carries no fields and
/// serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FreezingLevel {}

impl FreezingLevel {
    pub fn build(_product: &Value) -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_serialize_empty() {
        let hyd = DailyHydrometeorologicalProducts::build(&serde_json::json!({"id": "x"}));
        let fzl = FreezingLevel::build(&serde_json::json!(null));
        assert_eq!(serde_json::to_value(hyd).unwrap(), serde_json::json!({}));
        assert_eq!(serde_json::to_value(fzl).unwrap(), serde_json::json!({}));
    }
}
