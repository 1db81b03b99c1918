pub mod system;
pub mod test_table;
