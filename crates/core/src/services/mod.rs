pub mod parser;
pub mod symbols;
