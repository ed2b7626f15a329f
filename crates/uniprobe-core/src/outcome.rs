// ── Check outcome variants ──
//
// One poll ends in exactly one of four ways; callers branch on the variant
// instead of unwinding through error hierarchies. Partial results still
// carry the data -- the monitoring pipeline gets best-effort rows plus the
// anomalies found while extracting them.

use std::fmt;

use crate::error::CheckError;

/// The result of running one check against one asset.
#[derive(Debug)]
pub enum CheckOutcome<T> {
    /// All sections extracted cleanly.
    Complete(T),
    /// Best-effort data plus the anomalies found while extracting it.
    Partial(T, Vec<Diagnostic>),
    /// The asset is not ready to be polled; no result, no failure.
    Skipped(SkipReason),
    /// The poll failed as a whole.
    Failed(CheckError),
}

impl<T> CheckOutcome<T> {
    /// The extracted data, if any was produced.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Complete(data) | Self::Partial(data, _) => Some(data),
            Self::Skipped(_) | Self::Failed(_) => None,
        }
    }

    /// `true` only for a fully healthy result with no diagnostics.
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Why a poll was withdrawn without producing a result.
///
/// These are expected "not yet configured" states, logged but never
/// surfaced as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Username or password not configured for the asset.
    CredentialsMissing,
    /// No MAC address configured for a per-device check.
    MacMissing,
    /// The configured MAC is a `?`-prefixed placeholder.
    MacPlaceholder,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::CredentialsMissing => "credentials not configured",
            Self::MacMissing => "mac address not configured",
            Self::MacPlaceholder => "mac address is a placeholder",
        };
        f.write_str(reason)
    }
}

/// A non-fatal anomaly found while normalizing a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    RadioWithoutName,
    VapWithoutName,
    PortWithoutName,
    /// MAC addresses seen on more than one port, first-seen order.
    DuplicateMacs(Vec<String>),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadioWithoutName => f.write_str("At least one radio without a name"),
            Self::VapWithoutName => f.write_str("At least one VAP without a name"),
            Self::PortWithoutName => f.write_str("At least one Port without a name"),
            Self::DuplicateMacs(macs) => {
                let summary = if macs.len() > 5 {
                    format!("{} duplicates found", macs.len())
                } else {
                    macs.join(", ")
                };
                write!(
                    f,
                    "The same MAC address detected on multiple ports ({summary})"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_macs_are_enumerated_up_to_five() {
        let diag = Diagnostic::DuplicateMacs(vec![
            "aa:bb:cc:dd:ee:01".into(),
            "aa:bb:cc:dd:ee:02".into(),
        ]);
        assert_eq!(
            diag.to_string(),
            "The same MAC address detected on multiple ports \
             (aa:bb:cc:dd:ee:01, aa:bb:cc:dd:ee:02)"
        );
    }

    #[test]
    fn more_than_five_duplicates_collapse_to_a_count() {
        let macs = (1..=6).map(|i| format!("aa:bb:cc:dd:ee:{i:02}")).collect();
        let diag = Diagnostic::DuplicateMacs(macs);
        assert_eq!(
            diag.to_string(),
            "The same MAC address detected on multiple ports (6 duplicates found)"
        );
    }
}
