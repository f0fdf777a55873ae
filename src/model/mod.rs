pub mod configs;
pub mod elastic_dto;
pub mod options;
pub mod template_dto;
