//! Error types and error handling for the scanner and parser.
//!
//! This module defines the error types used throughout the pipeline.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntactic failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
