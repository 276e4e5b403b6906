//! Source-level checks that need the crate layout on disk.
