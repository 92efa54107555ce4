pub mod order;
pub mod random;
