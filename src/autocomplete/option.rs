use std::collections::{BTreeMap, HashSet};

use color_eyre::eyre::{bail, Result};
use serde::{Deserialize, Serialize};

/// A single selectable suggestion as supplied by the host.
///
/// Either plain text, or a record carrying a unique `value`, optional
/// display text (`children`) and any extra display attributes. In YAML:
///
/// ```yaml
/// - Apple
/// - value: banana
///   children: Banana 🍌
///   fg: yellow
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AutocompleteOption {
    Text(String),
    Record(OptionRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,

    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl AutocompleteOption {
    pub fn record(value: impl Into<String>) -> OptionRecord {
        OptionRecord {
            value: value.into(),
            children: None,
            attributes: BTreeMap::new(),
        }
    }
}

impl OptionRecord {
    pub fn children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl From<&str> for AutocompleteOption {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AutocompleteOption {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<OptionRecord> for AutocompleteOption {
    fn from(record: OptionRecord) -> Self {
        Self::Record(record)
    }
}

/// The one shape the rest of the component works with, whatever the host
/// handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOption {
    /// Selection identity and list key; also the text filters compare against
    pub value: String,
    /// Text drawn in the suggestion list
    pub display: String,
    pub attributes: BTreeMap<String, String>,
}

impl NormalizedOption {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl From<AutocompleteOption> for NormalizedOption {
    fn from(option: AutocompleteOption) -> Self {
        match option {
            AutocompleteOption::Text(text) => Self {
                display: text.clone(),
                value: text,
                attributes: BTreeMap::new(),
            },
            AutocompleteOption::Record(record) => Self {
                display: record.children.unwrap_or_else(|| record.value.clone()),
                value: record.value,
                attributes: record.attributes,
            },
        }
    }
}

impl From<&str> for NormalizedOption {
    fn from(value: &str) -> Self {
        AutocompleteOption::from(value).into()
    }
}

/// Checks the host supplied options and flattens them into
/// [`NormalizedOption`]s. Values must be non-empty and unique.
pub fn normalize_options(options: Vec<AutocompleteOption>) -> Result<Vec<NormalizedOption>> {
    let mut seen = HashSet::with_capacity(options.len());
    let mut normalized = Vec::with_capacity(options.len());

    for option in options {
        let option = NormalizedOption::from(option);
        if option.value.is_empty() {
            bail!("autocomplete option at position {} has an empty value", normalized.len());
        }
        if !seen.insert(option.value.clone()) {
            bail!("autocomplete option value {:?} is not unique", option.value);
        }
        normalized.push(option);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_option_normalizes_to_itself() {
        let option = NormalizedOption::from(AutocompleteOption::from("Apple"));
        assert_eq!(option.value, "Apple");
        assert_eq!(option.display, "Apple");
        assert!(option.attributes.is_empty());
    }

    #[test]
    fn test_record_display_defaults_to_value() {
        let option = NormalizedOption::from(AutocompleteOption::from(
            AutocompleteOption::record("kiwi").attribute("fg", "green"),
        ));
        assert_eq!(option.display, "kiwi");
        assert_eq!(option.attribute("fg"), Some("green"));
    }

    #[test]
    fn test_record_children_become_display() {
        let option = NormalizedOption::from(AutocompleteOption::from(
            AutocompleteOption::record("banana").children("Banana 🍌"),
        ));
        assert_eq!(option.value, "banana");
        assert_eq!(option.display, "Banana 🍌");
    }

    #[test]
    fn test_duplicate_values_rejected() {
        let options = vec!["Apple".into(), AutocompleteOption::record("Apple").into()];
        let err = normalize_options(options).unwrap_err();
        assert!(format!("{err}").contains("not unique"));
    }

    #[test]
    fn test_empty_value_rejected() {
        let options = vec!["Apple".into(), "".into()];
        assert!(normalize_options(options).is_err());
    }

    #[test]
    fn test_deserialize_mixed_yaml() {
        let yaml = r#"
- Apple
- value: banana
  children: Banana
  fg: yellow
"#;
        let options: Vec<AutocompleteOption> = serde_yml::from_str(yaml).unwrap();
        let normalized = normalize_options(options).unwrap();
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[1].value, "banana");
        assert_eq!(normalized[1].display, "Banana");
        assert_eq!(normalized[1].attribute("fg"), Some("yellow"));
        assert_eq!(normalized[1].attribute("children"), None);
    }

    #[test]
    fn test_deserialize_record_without_value_fails() {
        let yaml = "- children: Nameless\n";
        let parsed: Result<Vec<AutocompleteOption>, _> = serde_yml::from_str(yaml);
        assert!(parsed.is_err());
    }
}
