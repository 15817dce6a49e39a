use crate::errors::DispatchError;
use base64::Engine;
use serde_json::Value;

#[derive(Clone)]
pub struct Validation;

impl Validation {
    pub fn new() -> Self {
        Self
    }

    pub fn ensure_string(&self, value: Option<&Value>, label: &str) -> Result<String, DispatchError> {
        let text = value.and_then(|v| v.as_str()).ok_or_else(|| {
            DispatchError::validation(format!("{} must be a non-empty string", label))
        })?;
        let normalized = text.trim();
        if normalized.is_empty() {
            return Err(DispatchError::validation(format!(
                "{} must be a non-empty string",
                label
            )));
        }
        Ok(normalized.to_string())
    }

    pub fn ensure_optional_string(
        &self,
        value: Option<&Value>,
        label: &str,
    ) -> Result<Option<String>, DispatchError> {
        match value {
            None => Ok(None),
            Some(val) if val.is_null() => Ok(None),
            Some(val) => self.ensure_string(Some(val), label).map(Some),
        }
    }

    pub fn ensure_bool(&self, value: Option<&Value>, fallback: bool) -> bool {
        value.and_then(|v| v.as_bool()).unwrap_or(fallback)
    }

    /// Objects come through as-is; a JSON-encoded string is parsed first,
    /// since the host tool hands JSON fields over as text.
    pub fn ensure_json_value(
        &self,
        value: Option<&Value>,
        label: &str,
        fallback: Value,
    ) -> Result<Value, DispatchError> {
        let Some(value) = value else {
            return Ok(fallback);
        };
        if value.is_null() {
            return Ok(fallback);
        }
        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(fallback);
            }
            return serde_json::from_str(raw).map_err(|_| {
                DispatchError::validation(format!("{} must be valid JSON", label))
            });
        }
        Ok(value.clone())
    }

    /// Splits a comma-separated ID list, trimming each element and dropping
    /// empties. `"a, b ,c"` normalizes to `["a", "b", "c"]`.
    pub fn ensure_id_list(
        &self,
        value: Option<&Value>,
        label: &str,
    ) -> Result<Vec<String>, DispatchError> {
        let raw = self.ensure_string(value, label)?;
        let ids: Vec<String> = raw
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        if ids.is_empty() {
            return Err(DispatchError::validation(format!(
                "{} must contain at least one ID",
                label
            )));
        }
        Ok(ids)
    }

    /// Accepts a JSON array of strings or a comma-separated string.
    pub fn ensure_string_array(
        &self,
        value: Option<&Value>,
        label: &str,
    ) -> Result<Vec<String>, DispatchError> {
        match value {
            Some(Value::Array(items)) => {
                let out: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(|s| s.trim().to_string()))
                    .filter(|s| !s.is_empty())
                    .collect();
                if out.is_empty() {
                    return Err(DispatchError::validation(format!(
                        "{} must contain at least one entry",
                        label
                    )));
                }
                Ok(out)
            }
            _ => self.ensure_id_list(value, label),
        }
    }

    pub fn ensure_base64(
        &self,
        value: Option<&Value>,
        label: &str,
    ) -> Result<Vec<u8>, DispatchError> {
        let raw = self.ensure_string(value, label)?;
        base64::engine::general_purpose::STANDARD
            .decode(raw.as_bytes())
            .map_err(|_| DispatchError::validation(format!("{} must be valid base64", label)))
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::new()
    }
}
