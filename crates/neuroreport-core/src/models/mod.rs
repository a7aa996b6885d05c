pub mod audiogram;
pub mod metric;
pub mod result;
pub mod tier;
