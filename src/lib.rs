//! Sportsdesk: Local Data Management for Sports Agents
//!
//! Keeps three related collections (athletes, organizations and the contracts
//! between them), parses a prefix-based command language, and applies each
//! command to an in-memory model whose filtered views drive the display.

pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
pub mod tooling;
