//! Fuzzy matching implementation for the `search` command.
//!
//! This module provides contact lookup with:
//! - Exact matching on phone digits
//! - Fuzzy name matching (substring and Levenshtein similarity)
//! - Confidence scoring (0-100 scale)

use crate::models::{AddressBook, Record};

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// One of the record's phones has the same digits as the query
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Limits applied to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Maximum number of results to return
    pub max_results: usize,

    /// Minimum confidence (0-100) for fuzzy name matches
    pub min_confidence: u8,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 5,
            min_confidence: 30,
        }
    }
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records matching `query` by phone or by name.
    ///
    /// A phone hit wins over a name hit for the same record. Results are
    /// sorted by confidence (highest first), then by name, and truncated to
    /// `settings.max_results`.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        book: &'a AddressBook,
        settings: SearchSettings,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in book.iter() {
            if let Some(confidence) = self.match_phone(query, record) {
                results.push(MatchResult {
                    record,
                    confidence,
                    match_type: MatchType::ExactPhone,
                });
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, record.name().as_str()) {
                if confidence >= settings.min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });

        results.truncate(settings.max_results);

        results
    }

    /// Match phone numbers on digits only.
    ///
    /// Returns confidence score (100) if matched, None otherwise.
    fn match_phone(&self, query: &str, record: &Record) -> Option<u8> {
        let normalized_query = Self::normalize_phone(query);
        if normalized_query.is_empty() {
            return None;
        }

        record
            .phones()
            .iter()
            .any(|phone| phone.digits_only() == normalized_query)
            .then_some(100)
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();
        let (len1, len2) = (s1_chars.len(), s2_chars.len());

        if len1 == 0 {
            return len2;
        }
        if len2 == 0 {
            return len1;
        }

        let mut matrix: Vec<Vec<usize>> = vec![vec![0; len2 + 1]; len1 + 1];

        for (i, row) in matrix.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in matrix[0].iter_mut().enumerate() {
            *cell = j;
        }

        for (i, c1) in s1_chars.iter().enumerate() {
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1)
                    .min(matrix[i + 1][j] + 1)
                    .min(matrix[i][j] + cost);
            }
        }

        matrix[len1][len2]
    }

    // ==================== Normalization Functions ====================

    /// Normalize a phone query: keep digits only.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
