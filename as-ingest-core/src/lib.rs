#![doc = "as-ingest-core: core library for the AlphaSense document ingestor."]

//! This crate contains the configuration record, error taxonomy, client
//! traits and the linear ingest pipeline for as-ingest. The CLI crate is
//! argument parsing and orchestration glue on top of this.
//!
//! # Usage
//! Construct an [`auth::AuthClient`] and an [`upload::IngestionClient`] from a
//! loaded [`config::Config`], then run [`ingest::ingest`] for one document.

pub mod auth;
pub mod config;
pub mod contract;
pub mod error;
pub mod ingest;
pub mod metadata;
pub mod upload;
