//! Integration tests for the settings provider
