use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DORA_RESET_MESSAGE: &str = "DORA metrics reset to research defaults";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdValue {
    Percent(u32),
    Text(String),
}

/// Values of the DORA benchmark form in the settings page, keyed by input id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoraThresholds(pub BTreeMap<String, ThresholdValue>);

impl DoraThresholds {
    pub fn research_defaults() -> Self {
        let text = |value: &str| ThresholdValue::Text(value.to_string());
        let entries = [
            ("df-elite", text("Multiple per day")),
            ("df-high", text("1 per week")),
            ("df-medium", text("1 per month")),
            ("df-low", text("< 1 per month")),
            ("lt-elite", text("< 1 hour")),
            ("lt-high", text("1 day - 1 week")),
            ("lt-medium", text("1 week - 1 month")),
            ("lt-low", text("> 1 month")),
            ("cfr-elite", ThresholdValue::Percent(15)),
            ("cfr-high", ThresholdValue::Percent(30)),
            ("cfr-medium", ThresholdValue::Percent(45)),
            ("cfr-low", ThresholdValue::Percent(46)),
            ("mttr-elite", text("< 1 hour")),
            ("mttr-high", text("< 1 day")),
            ("mttr-medium", text("< 1 week")),
            ("mttr-low", text("> 1 week")),
        ];
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&ThresholdValue> {
        self.0.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_four_tiers_of_four_metrics() {
        let defaults = DoraThresholds::research_defaults();
        assert_eq!(defaults.0.len(), 16);
        assert_eq!(defaults.get("cfr-low"), Some(&ThresholdValue::Percent(46)));
        assert_eq!(
            defaults.get("lt-elite"),
            Some(&ThresholdValue::Text("< 1 hour".to_string()))
        );
    }

    #[test]
    fn serializes_as_flat_form_values() {
        let json = serde_json::to_value(DoraThresholds::research_defaults()).expect("json");
        assert_eq!(json["cfr-elite"], serde_json::json!(15));
        assert_eq!(json["df-elite"], serde_json::json!("Multiple per day"));
    }
}
