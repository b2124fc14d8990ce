//! Infrastructure layer modules
//!
//! This module contains shared infrastructure components:
//! - `config`: Connection parameters loaded from the environment and `.env`
//! - `error`: Unified error type for the probe
//! - `postgres`: PostgreSQL pool factory and leased connections

pub mod config;
pub mod error;
pub mod postgres;
