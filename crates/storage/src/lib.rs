#![forbid(unsafe_code)]

pub mod connection;
pub mod inspect;
pub mod repository;
pub mod sqlite;
