//! Required-field collection for create and update payloads.
//!
//! Payload DTOs deserialize every field as `Option<String>` so that a missing
//! field and a blank field are reported the same way, in one error listing
//! every offender.

use crate::error::CoreError;

/// Accumulates required fields, remembering which ones were absent or blank.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a required field, trimming surrounding whitespace.
    pub fn trimmed(&mut self, name: &'static str, value: Option<&str>) -> String {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Take a required field verbatim. Blank values still count as missing.
    pub fn verbatim(&mut self, name: &'static str, value: Option<&str>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v.to_string(),
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Names of the fields recorded as missing so far, in request order.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// Fail with a `Validation` error naming every missing field.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            )))
        }
    }
}

/// Trim an optional value, mapping blank strings to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_present_passes() {
        let mut fields = RequiredFields::new();
        let name = fields.trimmed("name", Some("  Skyline Villas "));
        let description = fields.verbatim("description", Some(" Lakeside homes\n"));
        assert!(fields.finish().is_ok());
        assert_eq!(name, "Skyline Villas");
        assert_eq!(description, " Lakeside homes\n");
    }

    #[test]
    fn lists_every_missing_field() {
        let mut fields = RequiredFields::new();
        fields.trimmed("name", None);
        fields.verbatim("description", Some("   "));
        fields.trimmed("designation", Some("CEO"));
        assert_eq!(fields.missing(), &["name", "description"]);

        let err = fields.finish().unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(ref msg) if msg == "Missing required fields: name, description"
        );
    }

    #[test]
    fn non_blank_drops_whitespace() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" x ")), Some("x".to_string()));
    }
}
