// Test modules for reqres-contract crate
//
// Each source file has a corresponding test file focused on the behavior that
// module owns. Tests that need a live HTTP endpoint live in the crate's
// tests/ directory and run against wiremock.

// Test helper utilities (canned service responses, mock service builders)
pub mod helpers;

pub mod endpoints;
