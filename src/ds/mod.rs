pub mod big_int;
pub mod error;
pub mod operations;
pub mod symbol;
pub mod value;
