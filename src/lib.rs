/*
Description : Thin adapter over the Elasticsearch client.
              Document get/index/delete, bulk, count, search, scroll and by-query
              operations, plus text templates for building query bodies.
*/
pub mod common;

pub mod env_configuration;
pub mod errors;
pub mod model;
pub mod repository;
pub mod traits;
pub mod utils_modules;

pub use errors::{es_oper_error::EsOperError, template_error::TemplateError};
pub use model::configs::es_config::EsConfig;
pub use model::elastic_dto::{bulk_body::BulkBody, elastic_source_parser::*};
pub use model::options::request_options::*;
pub use model::template_dto::{query_source::QuerySource, template_param::TemplateParam};
pub use repository::es_oper_repository::{
    must_new_es_client, new_es_client, EsOperImpl, SCROLL_KEEP_ALIVE,
};
pub use traits::{repository::es_oper_trait::EsOper, template_engine_trait::TemplateEngine};
pub use utils_modules::text_template::TextTemplate;
