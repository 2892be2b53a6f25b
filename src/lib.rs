//! A batch liveness checker for the URLs kept in a CSV file.
//!
//! `linkprobe` reads a CSV file with a `url` column, probes every distinct
//! URL over HTTP with a bounded number of concurrent workers, and writes the
//! observed status code and the check time back into the file, creating the
//! `code` and `datetime` columns when they are missing.
//!
//! ```text
//! cargo run -- links.csv --max-workers 25
//! ```
//!
//! The crate is organized around the checker and its collaborators:
//!
//! - [`checker::probe`]: the per-URL probe policy. A header-only request
//!   goes out first; servers that reject it with 400 or 403 get one full
//!   retrieval request, whose status wins. A timeout maps to the synthetic
//!   code 408 and any lower-level failure to an unknown outcome.
//! - [`checker::dispatcher`]: fans the probes out to a bounded pool of
//!   tasks and collects exactly one timestamped result per distinct URL.
//! - [`table`]: loads the CSV file and writes the results back into it,
//!   preserving unrelated columns and row order.
//! - [`config`], [`report`], [`console`], [`app`]: the surrounding program.
pub mod app;
pub mod checker;
pub mod config;
pub mod console;
pub mod report;
pub mod table;
