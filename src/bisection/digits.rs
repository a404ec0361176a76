//! Decimal digit-matching convergence comparison.

/// True if the first `d` characters of the 15-decimal fixed renderings of
/// `curr` and `prev` agree.
///
/// The prefix is taken over the *whole* rendering: a sign, the integer digits,
/// and the decimal point all occupy positions and count toward `d`. So with
/// `d = 4`, `2.0001` and `2.0042` match on `"2.00"`, while `1.999` and `2.0`
/// do not. This is the historical rule and is preserved as-is; `d` larger
/// than the rendering compares the full strings.
pub fn digits_match(curr: f64, prev: f64, d: u32) -> bool {
    let sc = format!("{curr:.15}");
    let sp = format!("{prev:.15}");
    let d = d as usize;
    sc[..d.min(sc.len())] == sp[..d.min(sp.len())]
}
