use serde::Deserialize;
use std::path::PathBuf;

fn default_generators_enabled() -> bool {
    true
}

fn default_mapping_size() -> usize {
    3
}

fn default_sequence_length() -> usize {
    3
}

fn default_text_length() -> usize {
    8
}

fn default_populate_references() -> bool {
    true
}

fn default_max_nested_depth() -> usize {
    2
}

/// Knobs that shape every value a generator synthesizes.
///
/// A config bound to a generator or registry replaces the built-in default as a
/// whole. Only when parsing TOML do missing keys fall back to their defaults.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct FabricateConfig {
    /// Fall back to type-driven default generators for primitive fields.
    #[serde(default = "default_generators_enabled")]
    pub default_generators_enabled: bool,
    /// Number of insertion attempts for mapping fields.
    #[serde(default = "default_mapping_size")]
    pub default_mapping_size: usize,
    #[serde(default = "default_sequence_length")]
    pub default_sequence_length: usize,
    #[serde(default = "default_text_length")]
    pub default_text_length: usize,
    /// When false, optional fields are left as `None`.
    #[serde(default = "default_populate_references")]
    pub populate_references: bool,
    /// How many levels of the same record type may be populated, counting the
    /// top-level record as the first.
    #[serde(default = "default_max_nested_depth")]
    pub max_nested_depth: usize,
    /// Fixed seed for every session; `None` draws a fresh seed per call.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl FabricateConfig {
    pub fn load_from_file(path: &PathBuf) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file at {:?}: {}", path, e))?;

        Self::from_toml_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from config file {:?}: {}", path, e)
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, anyhow::Error> {
        let config: FabricateConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn with_default_generators(mut self, enabled: bool) -> Self {
        self.default_generators_enabled = enabled;
        self
    }

    pub fn with_mapping_size(mut self, size: usize) -> Self {
        self.default_mapping_size = size;
        self
    }

    pub fn with_sequence_length(mut self, length: usize) -> Self {
        self.default_sequence_length = length;
        self
    }

    pub fn with_text_length(mut self, length: usize) -> Self {
        self.default_text_length = length;
        self
    }

    pub fn with_populate_references(mut self, populate: bool) -> Self {
        self.populate_references = populate;
        self
    }

    pub fn with_max_nested_depth(mut self, depth: usize) -> Self {
        self.max_nested_depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for FabricateConfig {
    fn default() -> Self {
        Self {
            default_generators_enabled: default_generators_enabled(),
            default_mapping_size: default_mapping_size(),
            default_sequence_length: default_sequence_length(),
            default_text_length: default_text_length(),
            populate_references: default_populate_references(),
            max_nested_depth: default_max_nested_depth(),
            seed: None,
        }
    }
}
