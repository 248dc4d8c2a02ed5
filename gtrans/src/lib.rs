#![doc = include_str!("../README.md")]

pub mod config;
pub mod tkk;
pub mod token;

#[cfg(feature = "translate")]
pub mod translate;
