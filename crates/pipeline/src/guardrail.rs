/// Terms that reject an extended-path response outright.
pub const DISALLOWED_TERMS: &[&str] = &["illegal", "exploit", "harm"];

/// Response-side filter for extended-path output.
///
/// Input screening is limited to the PII-sentinel abort at the request
/// boundary; this check only ever sees the serialized response. The
/// deterministic core bypasses it entirely.
#[must_use]
pub fn response_ok(response: &str) -> bool {
    let lowered = response.to_lowercase();
    !DISALLOWED_TERMS.iter().any(|term| lowered.contains(term))
}
