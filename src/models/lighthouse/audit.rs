use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Audit {
    #[serde(rename = "numericValue")]
    pub numeric_value: Option<f64>,
    pub details: Option<AuditDetails>,
}

// Items are kept as raw JSON since their shape depends on the audit type.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuditDetails {
    pub items: Option<Vec<Value>>,
}

/// One row of a `details.items` table, reduced to the network fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuditItem {
    pub resource_type: Option<String>,
    pub transfer_size: Option<f64>,
}

impl AuditItem {
    pub fn from_value(value: &Value) -> Self {
        AuditItem {
            resource_type: value
                .get("resourceType")
                .and_then(Value::as_str)
                .map(str::to_string),
            transfer_size: value.get("transferSize").and_then(Value::as_f64),
        }
    }
}

impl Audit {
    /// `numericValue` of this audit, failing with the full key path when absent.
    pub fn required_numeric_value(&self, audit_id: &str) -> Result<f64> {
        self.numeric_value
            .ok_or_else(|| ReportError::missing(format!("audits.{}.numericValue", audit_id)))
    }

    /// `details.items` of this audit in document order.
    pub fn items(&self, audit_id: &str) -> Result<Vec<AuditItem>> {
        let items = self
            .details
            .as_ref()
            .and_then(|d| d.items.as_ref())
            .ok_or_else(|| ReportError::missing(format!("audits.{}.details.items", audit_id)))?;

        Ok(items.iter().map(AuditItem::from_value).collect())
    }
}
