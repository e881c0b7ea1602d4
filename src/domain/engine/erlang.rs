/// Number of circuit counts tried above `ceil(A)` before the search gives up.
pub const SEARCH_WINDOW: u32 = 20;

/// Largest offered load, in Erlangs, accepted for a single link.
pub const MAX_OFFERED_ERLANGS: f64 = 100_000.0;

/// Outcome of the minimum-circuit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitSearch {
    pub circuits: u32,

    /// `false` when no count in the search window reached the target and
    /// `circuits` holds the capped fallback.
    pub target_met: bool,
}

/// Erlang-B blocking probability for `circuits` trunks offered
/// `offered_erlangs` of traffic (blocked calls cleared).
///
/// ```text
/// B(A, N) = (A^N / N!) / Σ_{i=0..N} A^i / i!
/// ```
///
/// Evaluated with the recurrence `B(A,n) = A·B(A,n-1) / (n + A·B(A,n-1))`,
/// `B(A,0) = 1`, which stays finite for large `N`.
///
/// `offered_erlangs` must be finite and non-negative; callers validate it.
pub fn erlang_b(offered_erlangs: f64, circuits: u32) -> f64 {
    let mut blocking = 1.0;
    for n in 1..=circuits {
        let a_b = offered_erlangs * blocking;
        blocking = a_b / (n as f64 + a_b);
    }
    blocking
}

/// Smallest circuit count `N >= ceil(A)` whose Erlang-B blocking is at most
/// `max_blocking`.
///
/// Scans `ceil(A) ..= ceil(A) + SEARCH_WINDOW`. Blocking falls monotonically
/// with `N`, so the first hit is the minimum. If the window is exhausted the
/// last candidate is returned with `target_met == false`.
///
/// For an integral load the fallback is `A + 20`, one less than the
/// `A + 21` a `while N <= A + 20` loop would leave behind; for fractional
/// loads both agree on `ceil(A) + 20`.
///
/// Cost is `O(N)` per candidate, so callers keep `offered_erlangs` at or
/// below [`MAX_OFFERED_ERLANGS`]. Larger values still terminate: the window
/// saturates at `u32::MAX`.
pub fn find_min_circuits(offered_erlangs: f64, max_blocking: f64) -> CircuitSearch {
    let (start, cap) = search_window(offered_erlangs);

    for circuits in start..=cap {
        if erlang_b(offered_erlangs, circuits) <= max_blocking {
            return CircuitSearch { circuits, target_met: true };
        }
    }

    tracing::warn!(
        offered_erlangs,
        max_blocking,
        cap,
        "circuit search exhausted without meeting the blocking target; using capped value"
    );
    CircuitSearch { circuits: cap, target_met: false }
}

/// First and last circuit count tried for `offered_erlangs`.
fn search_window(offered_erlangs: f64) -> (u32, u32) {
    let start = offered_erlangs.ceil() as u32;
    (start, start.saturating_add(SEARCH_WINDOW))
}
