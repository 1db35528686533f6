//! Game configuration tests.

mod format_tests;
