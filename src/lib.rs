//! Wasm Compile Times
//!
//! Per-function report of Wasm compilation times and code sizes, built
//! from the output of V8's `--trace-wasm-compilation-times`.
//!
//! This crate provides the core implementation for the
//! `wasm-compile-times` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! d8 --trace-wasm-compilation-times test.js > trace.txt
//! wasm-compile-times trace.txt
//! ```
//!
//! Each function gets one line with its Liftoff and TurboFan times, memory
//! use and code sizes, sorted by TurboFan time, followed by the total
//! TurboFan time and code size.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
