pub mod io_utils;
pub mod logger_utils;
pub mod text_template;
