const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar fields of a local timestamp. `month0` is zero-based, matching
/// `Date.prototype.getMonth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// `SYSTEM TIME: October 18, 2026, 14:05` (24-hour clock).
pub fn format_system_time(p: DateParts) -> String {
    let month = MONTHS.get(p.month0 as usize).copied().unwrap_or("January");
    format!(
        "SYSTEM TIME: {} {}, {}, {:02}:{:02}",
        month, p.day, p.year, p.hour, p.minute
    )
}
