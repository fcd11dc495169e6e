pub mod cli;
pub mod credentials;
pub mod duration;
pub mod error;
pub mod logging;
pub mod menu;
pub mod player;
pub mod youtube;
