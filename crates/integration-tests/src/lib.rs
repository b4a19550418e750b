//! End-to-end tests for Parley live under `tests/`
