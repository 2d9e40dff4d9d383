#![doc = "as-ingest: CLI for the AlphaSense document ingestion API."]

//! All reusable logic (config record, clients, pipeline) lives in
//! [`as_ingest_core`]; this crate is argument parsing, config loading with
//! environment secret injection, and orchestration glue.

pub mod cli;
pub mod load_config;
