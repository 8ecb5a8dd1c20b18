use metrics::{Unit, describe_counter};

/// Counter of gate evaluations, labelled by `gate`, `outcome` and `basis`.
pub const AUTHZ_DECISIONS_TOTAL: &str = "authz_decisions_total";

/// Register descriptions with the installed recorder. Call once after the
/// recorder is installed; without one this is a no-op.
pub fn describe_metrics() {
    describe_counter!(
        AUTHZ_DECISIONS_TOTAL,
        Unit::Count,
        "Authorization gate evaluations by gate, outcome and grant basis"
    );
}
