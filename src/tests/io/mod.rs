//! I/O provider tests.
