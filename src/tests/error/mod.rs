//! Error type tests.

mod display_tests;
