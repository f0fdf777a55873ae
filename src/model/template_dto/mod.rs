pub mod query_source;
pub mod template_param;
