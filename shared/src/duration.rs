/// Whole-unit decomposition of an elapsed-seconds total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dhms {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Split a seconds total into days/hours/minutes/seconds.
/// Negative input clamps to zero rather than wrapping.
pub fn decompose_seconds(total_secs: i64) -> Dhms {
    let secs = total_secs.max(0);
    let days = secs / 86_400;
    let rem = secs - days * 86_400;
    let hours = (rem / 3_600) % 24;
    let rem = rem - hours * 3_600;
    let minutes = (rem / 60) % 60;
    let seconds = rem - minutes * 60;
    Dhms {
        days,
        hours,
        minutes,
        seconds,
    }
}
