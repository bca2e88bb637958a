pub mod assignment;
pub mod common;
pub mod config;
pub mod heuristic;
pub mod map;
pub mod puzzle;
pub mod solver;
pub mod stat;
