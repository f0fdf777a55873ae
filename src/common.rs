pub use std::borrow::Cow;
pub use std::collections::HashMap;
pub use std::io::Write;
pub use std::sync::Arc;

pub use tokio::time::Duration;

pub use log::{debug, error, info, warn};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::value::RawValue;
pub use serde_json::{json, Value};

pub use elasticsearch::auth::Credentials as EsCredentials;
pub use elasticsearch::http::request::JsonBody;
pub use elasticsearch::http::response::Response;
pub use elasticsearch::http::transport::{
    MultiNodeConnectionPool, SingleNodeConnectionPool, Transport as EsTransport, TransportBuilder,
};
pub use elasticsearch::http::{StatusCode, Url};
pub use elasticsearch::params::{Conflicts, Refresh};
pub use elasticsearch::{
    BulkParts, CountParts, CreateParts, DeleteByQueryParts, DeleteParts, Elasticsearch, GetParts,
    IndexParts, MgetParts, ScrollParts, SearchParts, UpdateByQueryParts, UpdateParts,
};

pub use anyhow::{anyhow, Result};

pub use thiserror::Error;

pub use derive_builder::Builder;
pub use derive_new::new;
pub use getset::Getters;

pub use async_trait::async_trait;

pub use once_cell::sync::Lazy as once_lazy;

pub use dotenv::dotenv;

pub use futures::future::join_all;

pub use regex::Regex;
