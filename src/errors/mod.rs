pub mod es_oper_error;
pub mod template_error;
