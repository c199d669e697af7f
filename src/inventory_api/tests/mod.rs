//! Unit tests for the inventory API module.
