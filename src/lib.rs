// ABOUTME: Library crate for bookstand exposing public API for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod calendar;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
