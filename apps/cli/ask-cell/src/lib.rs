// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod commands;
pub mod console_host;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;
