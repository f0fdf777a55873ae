use crate::common::*;

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for one Elasticsearch cluster.
#[derive(Serialize, Deserialize, Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct EsConfig {
    pub addrs: Vec<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_timeout_secs")]
    #[new(value = "default_timeout_secs()")]
    pub timeout_secs: u64,
}

impl EsConfig {
    #[doc = "Basic auth credentials, only when both id and password are set."]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.is_empty(), self.password.is_empty()) {
            (false, false) => Some((self.username.as_str(), self.password.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let config: EsConfig = toml::from_str(r#"addrs = ["localhost:9200"]"#).unwrap();

        assert_eq!(config.addrs(), &vec!["localhost:9200".to_string()]);
        assert_eq!(*config.timeout_secs(), 30);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn credentials_need_both_parts() {
        let only_id = EsConfig::new(vec![], "elastic".to_string(), String::new());
        assert!(only_id.credentials().is_none());

        let both = EsConfig::new(vec![], "elastic".to_string(), "changeme".to_string());
        assert_eq!(both.credentials(), Some(("elastic", "changeme")));
        assert_eq!(*both.timeout_secs(), 30);
    }
}
