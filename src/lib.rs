pub mod cli;
pub mod constants;
pub mod sessions;
pub mod training;
pub mod types;
pub mod utils;
