//! Secondary log destinations

pub mod file_hook;

pub use file_hook::LevelFileHook;
