//! Integration tests for pipfile-sort.
//!
//! Following the single-integration-test pattern from:
//! <https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html>


mod exit_code;
mod verbosity;
