use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::{check_config::*, es_config::*};

use crate::env_configuration::env_config::*;

static SERVER_CONFIG: once_lazy<Arc<Config>> =
    once_lazy::new(|| Arc::new(initialize_server_config()));

#[doc = "Function to initialize System configuration information instances"]
pub fn initialize_server_config() -> Config {
    info!("initialize_server_config() START!");
    Config::new()
}

#[doc = "Elasticsearch connection config"]
pub fn get_es_config_info() -> Arc<EsConfig> {
    Arc::clone(&SERVER_CONFIG.es)
}

#[doc = "Connectivity check config"]
pub fn get_check_config_info() -> Arc<CheckConfig> {
    Arc::clone(&SERVER_CONFIG.check)
}

#[derive(Debug)]
pub struct Config {
    pub es: Arc<EsConfig>,
    pub check: Arc<CheckConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigNotSafe {
    pub es: EsConfig,
    pub check: CheckConfig,
}

impl Config {
    pub fn new() -> Self {
        let system_config: ConfigNotSafe =
            match read_toml_from_file::<ConfigNotSafe>(&SYSTEM_CONFIG_PATH) {
                Ok(system_config) => system_config,
                Err(e) => {
                    error!(
                        "[Config::new] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                    panic!(
                        "[Config::new] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                }
            };

        Config::from(system_config)
    }
}

impl From<ConfigNotSafe> for Config {
    fn from(config: ConfigNotSafe) -> Self {
        Config {
            es: Arc::new(config.es),
            check: Arc::new(config.check),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_system_config() {
        let raw = r#"
[es]
addrs = ["http://10.0.0.1:9200", "10.0.0.2:9200"]
username = "elastic"
password = "changeme"
timeout_secs = 60

[check]
indexes = ["books", "reviews"]
template_name = "recent"
"#;
        let config: Config = Config::from(toml::from_str::<ConfigNotSafe>(raw).unwrap());

        assert_eq!(config.es.addrs().len(), 2);
        assert_eq!(*config.es.timeout_secs(), 60);
        assert_eq!(config.check.indexes(), &vec!["books".to_string(), "reviews".to_string()]);
        assert_eq!(config.check.template_name().as_deref(), Some("recent"));
    }
}
