//! Configuration management for tidyname.
//!
//! The void-word table, kept character classes, naming rules and walk
//! options live in [`settings::Config`], optionally read from a TOML file.

pub mod settings;
