pub mod chain_table_routine;
pub mod join;
