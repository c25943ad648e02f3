pub mod config;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod record;
pub mod vocab;
