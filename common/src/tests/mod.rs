mod bearer_token;
mod http_status;
