use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(String),

    #[error("YAML mapping keys must be strings")]
    NonStringKey,

    #[error("unsupported YAML value (tags are not supported)")]
    UnsupportedYamlValue,

    #[error("YAML number could not be represented as f64")]
    YamlNumber,

    #[error("template is not valid: {0}")]
    Template(String),
}
