/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.344;
/// Feet in one meter
pub const FEET_PER_METER: f64 = 3.28084;
/// Below this many miles distances are shown in feet
pub const FEET_THRESHOLD_MILES: f64 = 0.5;

/// Human-readable distance.
///
/// Under half a mile (804.672 m): whole feet with thousands separators,
/// e.g. `2,625 ft`. Otherwise miles to two decimals, e.g. `1.24 miles`.
pub fn format_distance(meters: f64) -> String {
    let miles = meters / METERS_PER_MILE;
    if miles < FEET_THRESHOLD_MILES {
        let feet = (meters * FEET_PER_METER).round() as i64;
        format!("{} ft", group_thousands(feet))
    } else {
        format!("{:.2} miles", miles)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
