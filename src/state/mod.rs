//! Client-side state shared across guards, services, and workflows.

pub mod session;
