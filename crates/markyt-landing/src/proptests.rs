//! Property-based tests for slug derivation.
