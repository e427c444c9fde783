//! Display formatting for dashboard figures

const FILE_SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Compact dollar amount: `$1.2B`, `$37.2M`, `$4.5K` or `$12.34`
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs >= 1e9 {
        format!("{}${:.1}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}${:.1}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}${:.1}K", sign, abs / 1e3)
    } else {
        format!("{}${:.2}", sign, abs)
    }
}

/// Percentage with a fixed number of decimals, e.g. `2.0%`
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Levelized cost per MWh, e.g. `$34.56/MWh`
pub fn format_levelized_cost(value: f64) -> String {
    format!("${:.2}/MWh", value)
}

/// Human-readable file size in base-1024 units, e.g. `1.5 MB`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut size = bytes as f64;
    while size >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", size);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, FILE_SIZE_UNITS[unit])
}
