pub mod es_oper_repository;
