//! Record store integration tests.

mod properties;
