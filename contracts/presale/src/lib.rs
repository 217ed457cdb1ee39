pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod ownership;
pub mod query;
pub mod state;
pub mod token;

#[cfg(test)]
pub mod testing;
