//! Public library API for converting RBXMX GUI models into Luau scripts.

/// RBXMX parsing, typed value decoding, layout normalization, and Luau emission.
pub mod rbxmx;
