//! Unit tests for the command-line layer.

mod output_tests;
