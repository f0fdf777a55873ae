use crate::common::*;

#[doc = "Reads a required environment variable"]
fn get_env_or_panic(key: &str) -> String {
    match std::env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = "Function to globally initialize the 'SYSTEM_CONFIG_PATH' variable"]
pub static SYSTEM_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SYSTEM_CONFIG_PATH"));

#[doc = "Optional 'QUERY_TEMPLATE_PATH' variable: toml file of query templates"]
pub static QUERY_TEMPLATE_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| std::env::var("QUERY_TEMPLATE_PATH").ok());
