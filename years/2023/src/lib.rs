//! Solutions for Advent of Code 2023.
//!
//! Each day is a binary under `src/bin`, built on top of the modules here.

pub mod calibration;
pub mod cubes;
pub mod schematic;
