pub mod cli;
pub mod config;
pub mod controllers;
pub mod rest;
pub mod utils;
pub mod view;

#[cfg(test)]
pub(crate) mod testutils;
