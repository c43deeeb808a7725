//! Commonly used error helpers.

use std::{error::Error, iter};

/// Displays a chain of errors in a single line.
pub fn display_chain(error: &(dyn Error + 'static)) -> String {
    dedup_chain(error).join("; ")
}

/// Deduplicates a chain of errors.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes = all_sources(error);
    // Deduplicate the common pattern `msg1: msg2; msg2` -> `msg1: msg2`.
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

fn all_sources(error: &(dyn Error + 'static)) -> Vec<String> {
    iter::successors(Some(error), |err| (*err).source())
        .map(|cause| cause.to_string().trim().to_string())
        .collect()
}
