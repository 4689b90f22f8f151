//! Configuration structures for meter reading extraction.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the keyword appears relative to the number to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordPosition {
    /// The keyword token appears before the numeric token.
    Before,
    /// The keyword token appears after the numeric token.
    After,
}

/// How to interpret a token stream when extracting a reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Keyword to anchor on, compared case-insensitively as a prefix match
    /// against each token. Absent means "no keyword anchor".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// Position of the keyword relative to the number. Only meaningful
    /// when a keyword is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_position: Option<KeywordPosition>,

    /// Nominal digit count of a valid reading.
    pub expected_digits: u32,

    /// Number of fractional digits to apply when scaling the matched
    /// digit string.
    #[serde(default)]
    pub decimals: u32,
}

impl ExtractorConfig {
    pub fn new(expected_digits: u32, decimals: u32) -> Self {
        Self {
            keyword: None,
            keyword_position: None,
            expected_digits,
            decimals,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>, position: KeywordPosition) -> Self {
        self.keyword = Some(keyword.into());
        self.keyword_position = Some(position);
        self
    }

    /// Check the configuration contract: a positive digit count, and a
    /// keyword whenever a keyword position is requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expected_digits == 0 {
            return Err(ConfigError::ExpectedDigitsZero);
        }
        if self.keyword_position.is_some() && self.keyword.is_none() {
            return Err(ConfigError::KeywordRequired);
        }
        Ok(())
    }
}

/// A named reading source: display metadata plus its extractor shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Display name of the source.
    pub name: String,

    /// Stable identifier, if the caller tracks sources across config edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,

    /// Unit to attach to readings (e.g. "kWh", "m³").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<String>,

    #[serde(flatten)]
    pub extractor: ExtractorConfig,
}

impl SourceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extractor.validate().map_err(|inner| ConfigError::Source {
            name: self.name.clone(),
            inner: Box::new(inner),
        })
    }
}

/// Top-level configuration: the list of reading sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeterscanConfig {
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

impl MeterscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate every configured source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for source in &self.sources {
            source.validate()?;
        }
        Ok(())
    }

    /// Look up a source by name.
    pub fn source(&self, name: &str) -> Result<&SourceConfig, ConfigError> {
        self.sources
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ConfigError::UnknownSource(name.to_string()))
    }

    /// A starter configuration with one example source.
    pub fn sample() -> Self {
        Self {
            sources: vec![SourceConfig {
                name: "electricity".to_string(),
                unique_id: Some("meterscan_electricity".to_string()),
                unit_of_measurement: Some("kWh".to_string()),
                extractor: ExtractorConfig::new(5, 2)
                    .with_keyword("kwh", KeywordPosition::After),
            }],
        }
    }
}
