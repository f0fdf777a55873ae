use crate::common::*;

/// Indexes counted by the connectivity check, and the named query template to
/// count with (match-all when absent).
#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct CheckConfig {
    pub indexes: Vec<String>,
    pub template_name: Option<String>,
}
