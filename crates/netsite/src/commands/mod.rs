//! Command handlers: bridge CLI args -> reconciler / config -> output.

pub mod config_cmd;
pub mod site;
pub mod util;
