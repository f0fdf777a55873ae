pub mod es_oper_trait;
