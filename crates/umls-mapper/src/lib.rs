//! # umls-mapper
//!
//! Command-line front end for the umls-loader crate.
//!
//! Reads `MRCONSO.RRF` (and `MRREL.RRF` for propagating methods) from a
//! UMLS release directory and writes `cui_to_snomed_<METHOD>.json` and
//! `cui_to_icd10_<METHOD>.json`.

#![warn(missing_docs)]

pub mod cli;

pub use cli::{run, Args};
