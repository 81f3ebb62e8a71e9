//! Utility functions and helpers for server operations.
//!
//! This module provides reusable, pure helpers used by the services, such as cleaning up
//! ship names reported by ESI before they are persisted.

pub mod ship_name;
