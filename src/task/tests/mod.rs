//! Unit tests for the task module.

pub(crate) mod support;

mod service_tests;
