pub mod connection;
pub mod properties;
pub mod seed;
pub mod users;
