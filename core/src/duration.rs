//! Human-readable build duration formatting

/// Format a build duration in seconds as a human sentence.
///
/// Zero-valued units are dropped (`3600` formats as "1 hour"); a duration of
/// zero prints "0 seconds". Printed units are separated by a space, with
/// " and " before the last one: `3661` formats as
/// "1 hour 1 minute and 1 second".
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(unit(seconds, "second"));
    }

    match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(" "), last),
        _ => parts.concat(),
    }
}

fn unit(value: u64, name: &str) -> String {
    if value == 1 {
        format!("{} {}", value, name)
    } else {
        format!("{} {}s", value, name)
    }
}
