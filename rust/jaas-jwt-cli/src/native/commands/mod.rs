pub mod key;
pub mod sign;
