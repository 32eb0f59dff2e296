use crate::errors::{AppError, AppResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const DORA_GUIDE_URL: &str = "https://dora.dev/guides/dora-metrics-four-keys/";
pub const SPACE_ARTICLE_URL: &str = "https://queue.acm.org/detail.cfm?id=3454124";
pub const FALLBACK_REFERENCE_URL: &str = "https://dora.dev";

static REFERENCE_URLS: &[(&str, &str)] = &[
    ("deployment-frequency", DORA_GUIDE_URL),
    ("lead-time", DORA_GUIDE_URL),
    ("change-failure-rate", DORA_GUIDE_URL),
    ("mttr", DORA_GUIDE_URL),
    ("satisfaction", SPACE_ARTICLE_URL),
    ("performance", SPACE_ARTICLE_URL),
    ("activity", SPACE_ARTICLE_URL),
    ("collaboration", SPACE_ARTICLE_URL),
    ("efficiency", SPACE_ARTICLE_URL),
];

static WEB_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid url regex"));

pub fn validate_reference_url(url: &str) -> AppResult<()> {
    if WEB_URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(AppError::Invalid(format!("reference url must be http(s): {}", url)))
    }
}

/// Static metric id → reference URL table with optional per-install overrides.
#[derive(Debug, Clone)]
pub struct ReferenceLinks {
    overrides: BTreeMap<String, String>,
    fallback: String,
}

impl Default for ReferenceLinks {
    fn default() -> Self {
        Self {
            overrides: BTreeMap::new(),
            fallback: FALLBACK_REFERENCE_URL.to_string(),
        }
    }
}

impl ReferenceLinks {
    pub fn new(overrides: BTreeMap<String, String>, fallback: String) -> AppResult<Self> {
        validate_reference_url(&fallback)?;
        for url in overrides.values() {
            validate_reference_url(url)?;
        }
        Ok(Self { overrides, fallback })
    }

    pub fn reference_url(&self, metric_id: &str) -> &str {
        if let Some(url) = self.overrides.get(metric_id) {
            return url;
        }
        REFERENCE_URLS
            .iter()
            .find(|(id, _)| *id == metric_id)
            .map(|(_, url)| *url)
            .unwrap_or(self.fallback.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_framework_metrics_to_their_references() {
        let links = ReferenceLinks::default();
        assert_eq!(links.reference_url("mttr"), DORA_GUIDE_URL);
        assert_eq!(links.reference_url("efficiency"), SPACE_ARTICLE_URL);
    }

    #[test]
    fn unmapped_ids_use_fallback() {
        let links = ReferenceLinks::default();
        assert_eq!(links.reference_url("burnout-risk"), "https://dora.dev");
        assert_eq!(links.reference_url("not-a-metric"), "https://dora.dev");
    }

    #[test]
    fn overrides_take_precedence() {
        let mut overrides = BTreeMap::new();
        overrides.insert("burnout-risk".to_string(), "https://example.com/burnout".to_string());
        let links = ReferenceLinks::new(overrides, "https://example.com".to_string()).expect("links");
        assert_eq!(links.reference_url("burnout-risk"), "https://example.com/burnout");
        assert_eq!(links.reference_url("code-churn"), "https://example.com");
        assert_eq!(links.reference_url("lead-time"), DORA_GUIDE_URL);
    }

    #[test]
    fn rejects_non_web_urls() {
        assert!(validate_reference_url("javascript:alert(1)").is_err());
        assert!(validate_reference_url("file:///etc/passwd").is_err());
        assert!(validate_reference_url("https://dora.dev").is_ok());
        assert!(ReferenceLinks::new(BTreeMap::new(), "ftp://x".to_string()).is_err());
    }
}
