// Library root
// -----------
// This crate exposes the pieces of the product seeding CLI. The binary
// (`main.rs`) wires them together for a single run.
//
// Module responsibilities:
// - `record`: the product record shape and the fixed list of sources.
// - `loader`: reads a source's JSON file into records.
// - `api`: the HTTP client, per-record outcomes and the upload loop.
// - `orchestrator`: walks every source and computes the final summary.
// - `ui`: writes the human-readable progress report.
// - `config` / `logging`: CLI/env settings and tracing setup.
pub mod api;
pub mod config;
pub mod loader;
pub mod logging;
pub mod orchestrator;
pub mod record;
pub mod ui;
