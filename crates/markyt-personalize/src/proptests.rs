//! Property-based tests for the substitution engine.
