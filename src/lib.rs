//! Cross-crate integration tests for the ModFib workspace live in `tests/`.
