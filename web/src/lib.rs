// Web front-end for the activity suggester:
// - config: file, environment and CLI-driven settings
// - render: page templates and their context
// - http_server: routes, handlers, composition of the running server

pub mod config;
pub mod http_server;
pub mod render;
