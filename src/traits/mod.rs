pub mod repository;
pub mod template_engine_trait;
