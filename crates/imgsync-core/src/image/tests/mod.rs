//! Unit tests for the image domain.

mod fixtures;

mod context_tests;
