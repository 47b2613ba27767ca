pub mod config;
pub mod errors;
pub mod identity;
pub mod models;

#[cfg(test)]
pub mod test_utils;
