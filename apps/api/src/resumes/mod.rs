// Resume parsing API: upload decoding, field extraction, history and export.
// Extraction itself lives in crate::extraction; this module only wires it to storage.

pub mod export;
pub mod handlers;
pub mod ingest;
