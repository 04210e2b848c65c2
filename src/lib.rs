pub mod config;
pub mod error;
pub mod mongo;
pub mod routes;
pub mod startup;
