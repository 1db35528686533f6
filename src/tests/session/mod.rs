//! InputSession tests.

mod extract_tests;
