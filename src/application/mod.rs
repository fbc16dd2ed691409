pub mod chain_table;
