//! Integration tests for kithara-text

mod source_updater;
mod track_lifecycle;
