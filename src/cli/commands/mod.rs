pub mod analyses;
pub mod check;
pub mod config;
pub mod symbolic;
pub mod table;
