//! Logging utilities for reqres-contract
//!
//! Contract cases, the HTTP client and the error constructors all log through
//! these `log_*` aliases of the tracing macros. The crate never installs a
//! subscriber; binaries and tests choose their own.

pub use tracing::{
    debug as log_debug, error as log_error, info as log_info, trace as log_trace, warn as log_warn,
};
