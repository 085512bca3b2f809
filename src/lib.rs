pub mod app;
pub mod cli;
pub mod config;
pub mod directory;
pub mod fetcher;
pub mod gallery;
pub mod modal;
pub mod router;
pub mod search;
pub mod surface;
pub mod utils;

#[cfg(test)]
mod tests;
