use crate::error::{ReportError, Result};
use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Root structure of a Lighthouse JSON report. Unknown keys are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuditDocument {
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>, // audit id -> result
}

impl AuditDocument {
    pub fn audit(&self, audit_id: &str) -> Option<&Audit> {
        self.audits.get(audit_id)
    }

    /// Performance score scaled to 0-100.
    pub fn performance_score(&self) -> Result<f64> {
        self.categories
            .performance_score()
            .map(|score| score * 100.0)
            .ok_or_else(|| ReportError::missing("categories.performance.score"))
    }

    /// `numericValue` of an audit that must be present in every report.
    pub fn required_numeric_value(&self, audit_id: &str) -> Result<f64> {
        self.audit(audit_id)
            .ok_or_else(|| ReportError::missing(format!("audits.{}", audit_id)))?
            .required_numeric_value(audit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> AuditDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn scales_performance_score() {
        let doc = document(json!({
            "categories": { "performance": { "score": 0.75 } },
            "audits": {}
        }));
        assert_eq!(doc.performance_score().unwrap(), 75.0);
    }

    #[test]
    fn null_score_is_missing() {
        let doc = document(json!({
            "categories": { "performance": { "score": null } }
        }));
        let err = doc.performance_score().unwrap_err();
        assert!(matches!(err, ReportError::MissingField(ref p) if p == "categories.performance.score"));
    }

    #[test]
    fn missing_audit_is_reported_by_id() {
        let doc = document(json!({ "audits": {} }));
        let err = doc.required_numeric_value("interactive").unwrap_err();
        assert_eq!(err.to_string(), "missing required field audits.interactive");
    }

    #[test]
    fn ignores_unrelated_keys() {
        let doc = document(json!({
            "lighthouseVersion": "12.0.0",
            "requestedUrl": "https://example.com/",
            "audits": {
                "speed-index": {
                    "id": "speed-index",
                    "score": 0.9,
                    "numericValue": 1234.5,
                    "displayValue": "1.2 s"
                }
            }
        }));
        assert_eq!(doc.required_numeric_value("speed-index").unwrap(), 1234.5);
    }
}
