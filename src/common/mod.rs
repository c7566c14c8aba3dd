use std::time::Duration;

/// Reset SIGPIPE to its default action so that piping output into `head`
/// ends the process quietly instead of surfacing a broken-pipe error.
/// Rust ignores SIGPIPE by default. Call this first thing in `main()`.
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Format an elapsed time for timing reports, e.g. "850us", "12.40ms", "3.25s".
pub fn format_elapsed(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros < 1_000 {
        format!("{}us", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_micros(850)), "850us");
        assert_eq!(format_elapsed(Duration::from_micros(12_400)), "12.40ms");
        assert_eq!(format_elapsed(Duration::from_millis(3_250)), "3.25s");
        assert_eq!(format_elapsed(Duration::ZERO), "0us");
    }
}
