mod answer_client;
mod config;
mod credentials;
mod panel;
