//! Banners and formatted output for the CLI

/// Inner width of the boxed banners.
const BANNER_WIDTH: usize = 41;

/// Render `lines` centred inside an ASCII box.
///
/// ```
/// use guess_animal::cli::output::boxed;
///
/// let banner = boxed(&["Hi"]);
/// assert!(banner.starts_with("+---"));
/// assert!(banner.contains("|                   Hi                    |"));
/// ```
pub fn boxed(lines: &[&str]) -> String {
    let border = format!("+{}+", "-".repeat(BANNER_WIDTH));
    let mut out = border.clone();
    for line in lines {
        out.push_str(&format!("\n|{line:^BANNER_WIDTH$}|"));
    }
    out.push('\n');
    out.push_str(&border);
    out
}

/// Start-up banner.
pub fn title_banner() -> String {
    boxed(&["Animal", "", "Guessing", "", "Game"])
}

/// Farewell banner.
pub fn farewell_banner() -> String {
    boxed(&["Thanks for playing."])
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_lines_have_equal_width() {
        let banner = title_banner();
        let widths: Vec<usize> = banner.lines().map(|line| line.chars().count()).collect();
        assert_eq!(widths.len(), 7);
        assert!(widths.iter().all(|&w| w == BANNER_WIDTH + 2));
    }

    #[test]
    fn test_farewell_mentions_thanks() {
        assert!(farewell_banner().contains("Thanks for playing."));
    }
}
