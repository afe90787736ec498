//! Exit code constants for the linescope CLI.
//!
//! - 0: Success, or no findings retained after scoping
//! - 1..=254: Number of findings retained by `parse-result`
//! - 255: Structural failure (bad args, unreadable report, git or HTTP failure)

/// Successful execution with nothing left to report.
pub const SUCCESS: u8 = 0;

/// Largest finding count that can be reported through the exit status.
pub const MAX_FINDINGS: u8 = 254;

/// Any failure that aborts the run.
pub const FAILURE: u8 = 255;

/// Map a retained finding count onto the process exit status.
///
/// Counts above [`MAX_FINDINGS`] saturate so a large report never wraps
/// around to a "clean" status or collides with [`FAILURE`].
pub fn for_findings(count: usize) -> u8 {
    u8::try_from(count).map_or(MAX_FINDINGS, |c| c.min(MAX_FINDINGS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_findings_is_success() {
        assert_eq!(for_findings(0), SUCCESS);
    }

    #[test]
    fn small_counts_pass_through() {
        assert_eq!(for_findings(2), 2);
        assert_eq!(for_findings(254), 254);
    }

    #[test]
    fn large_counts_saturate_below_failure() {
        assert_eq!(for_findings(255), MAX_FINDINGS);
        assert_eq!(for_findings(256), MAX_FINDINGS);
        assert_eq!(for_findings(100_000), MAX_FINDINGS);
        assert_ne!(for_findings(usize::MAX), FAILURE);
    }
}
