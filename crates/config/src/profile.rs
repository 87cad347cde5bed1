//! Mapping profiles — user-authored TOML documents that pair spreadsheet
//! column labels with the form fields they fill.
//!
//! ```toml
//! name = "crm-contact"
//!
//! [fields]
//! "First name" = "ctl00$first"
//! "Country" = ["ctl00$country", "ctl00$country_shadow"]
//!
//! [custom]
//! "ctl00$source" = "import"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use gridfill_protocol::{CustomFields, FieldMapping, TargetSpec};

use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingProfile {
    pub name: String,
    /// Column label → target name(s).
    pub fields: BTreeMap<String, FieldTargets>,
    /// Fixed identifier → value overrides applied on every fill.
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

/// One target or several; the bare-string form is the common case.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldTargets {
    One(String),
    Many(Vec<String>),
}

impl FieldTargets {
    fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

impl MappingProfile {
    /// Parse and validate a profile document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let profile: MappingProfile =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("profile name is empty".into()));
        }
        if self.fields.is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile '{}': no fields mapped",
                self.name
            )));
        }
        for (label, targets) in &self.fields {
            if targets.names().iter().all(|t| t.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "profile '{}': field '{label}' has no usable target",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// The label → targets map in wire form.
    pub fn mapping(&self) -> FieldMapping {
        self.fields
            .iter()
            .map(|(label, targets)| {
                let spec = match targets {
                    FieldTargets::One(name) => TargetSpec::One(name.clone()),
                    FieldTargets::Many(names) => TargetSpec::Many(names.clone()),
                };
                (label.clone(), spec)
            })
            .collect()
    }

    /// The fixed overrides, or `None` when the profile has none — absent,
    /// not empty, to match the wire contract.
    pub fn custom_fields(&self) -> Option<CustomFields> {
        if self.custom.is_empty() {
            None
        } else {
            Some(self.custom.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"
name = "crm-contact"

[fields]
"First name" = "ctl00$first"
"Country" = ["ctl00$country", "ctl00$country_shadow"]

[custom]
"ctl00$source" = "import"
"#;

    #[test]
    fn parses_bare_and_list_targets() {
        let profile = MappingProfile::from_toml(PROFILE).unwrap();
        assert_eq!(profile.name, "crm-contact");

        let mapping = profile.mapping();
        assert_eq!(mapping["First name"], TargetSpec::One("ctl00$first".into()));
        assert_eq!(mapping["Country"].targets().len(), 2);

        let custom = profile.custom_fields().unwrap();
        assert_eq!(custom["ctl00$source"], "import");
    }

    #[test]
    fn no_custom_section_means_none() {
        let profile = MappingProfile::from_toml(
            "name = \"p\"\n\n[fields]\nA = \"x\"\n",
        )
        .unwrap();
        assert!(profile.custom_fields().is_none());
    }

    #[test]
    fn empty_fields_rejected() {
        let err = MappingProfile::from_toml("name = \"p\"\n\n[fields]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "{err}");
    }

    #[test]
    fn all_blank_targets_rejected() {
        let err = MappingProfile::from_toml(
            "name = \"p\"\n\n[fields]\nA = [\"\", \"  \"]\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "{err}");
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = MappingProfile::from_toml(
            "name = \"p\"\nbogus = 1\n\n[fields]\nA = \"x\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }
}
