pub mod equilibrium;
pub mod init;
pub mod presets;
pub mod run;
pub mod sweep;
pub mod threshold;
