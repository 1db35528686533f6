//! BoundedIntegerReader tests.
