//! # Form Configuration
//!
//! Knobs of the form and list layer. The input engine itself reads no
//! configuration; `max_digits` is the caller-side truncation policy applied
//! before digits reach it. Digit strings never exceed a CNPJ, so the only
//! accepted cap is 14.
//!
//! ```yaml
//! default_page_size: 10
//! page_size_options: [5, 10, 20]
//! max_digits: 14
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use natreg_core::CNPJ_DIGITS;

use crate::error::ConfigError;

/// Form and listing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Rows per page when the list screen opens.
    pub default_page_size: u32,
    /// Page sizes the operator may choose.
    pub page_size_options: Vec<u32>,
    /// Digits kept from the number field; extra input is dropped. Must be 14.
    pub max_digits: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![5, 10, 20],
            max_digits: CNPJ_DIGITS,
        }
    }
}

impl FormConfig {
    /// Parse and check a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.checked()
    }

    /// Load and check a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded form config");
        Ok(config)
    }

    /// Whether `size` is an allowed page size.
    pub fn offers_page_size(&self, size: u32) -> bool {
        self.page_size_options.contains(&size)
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.offers_page_size(self.default_page_size) {
            return Err(ConfigError::DefaultPageSizeNotOffered {
                default: self.default_page_size,
                options: self.page_size_options,
            });
        }
        if self.max_digits < CNPJ_DIGITS {
            return Err(ConfigError::MaxDigitsTooSmall(self.max_digits));
        }
        if self.max_digits > CNPJ_DIGITS {
            return Err(ConfigError::MaxDigitsTooLarge(self.max_digits));
        }
        Ok(self)
    }
}
