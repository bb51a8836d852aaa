//! Integration tests for the sports agent data store

mod persistence;
mod properties;
mod scenarios;
