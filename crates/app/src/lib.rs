pub mod config_file;
pub mod console;
pub mod launch_args;
pub mod save_file;

pub const APP_NAME: &str = "Geocoin";
