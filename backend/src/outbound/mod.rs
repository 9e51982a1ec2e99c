//! Outbound adapters implementing domain ports for external infrastructure.

pub mod persistence;
