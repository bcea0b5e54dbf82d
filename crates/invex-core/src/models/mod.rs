//! Data models: the invoice record contract and pipeline configuration.

pub mod config;
pub mod invoice;
