//! Display formatting for the Home screen.

/// Format elapsed seconds as `HH:MM:SS`.
///
/// Each field is zero-padded to two digits. Hours do not roll over into days,
/// so 100 hours renders as `100:00:00`.
pub fn format_elapsed(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a ping/quality percentage (`16` becomes `16%`).
pub fn format_ping(ping: u8) -> String {
    format!("{ping}%")
}
