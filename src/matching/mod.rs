//! Fuzzy matching and search utilities.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType, SearchSettings};
