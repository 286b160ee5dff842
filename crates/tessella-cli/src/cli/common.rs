//! Common utilities shared across CLI commands.

/// Value following a flag, e.g. `-d 4` -> Some("4").
pub fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Presence of a bare flag, e.g. `--json`.
pub fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

pub fn flag_f64(args: &[String], name: &str, default: f64) -> f64 {
    flag_value(args, name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub fn flag_u32(args: &[String], name: &str, default: u32) -> u32 {
    flag_value(args, name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse a region flag of the form "x0,y0,x1,y1".
pub fn flag_region(args: &[String], name: &str, default: (f64, f64, f64, f64)) -> (f64, f64, f64, f64) {
    let Some(raw) = flag_value(args, name) else {
        return default;
    };
    let parts: Vec<f64> = raw
        .split(',')
        .filter_map(|p| p.trim().parse().ok())
        .collect();
    match parts.as_slice() {
        [x0, y0, x1, y1] => (*x0, *y0, *x1, *y1),
        _ => {
            eprintln!("ignoring malformed region '{}', expected x0,y0,x1,y1", raw);
            default
        }
    }
}
