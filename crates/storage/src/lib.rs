pub mod repository;
pub mod sqlite;
pub mod stats;
