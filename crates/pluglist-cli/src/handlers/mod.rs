pub mod attribution;
pub mod plugins;
