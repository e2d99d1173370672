mod cli;
mod console_host;
mod logger;
