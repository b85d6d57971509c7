//! Unit tests for drag zoom.

mod snapshot_tests;
