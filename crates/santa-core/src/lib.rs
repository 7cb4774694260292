// Library root: the participant store, pairing engine, and configuration
// shared by the terminal front end and its tests.

pub mod assignment;
pub mod config;
pub mod exchange;
pub mod participants;
