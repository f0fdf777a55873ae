pub mod bulk_body;
pub mod elastic_source_parser;
