pub mod filter;
pub mod requests;
pub mod response;
