use std::io::Write;

use dupscan_core::Finder;

use crate::bench::{BenchRow, SpeedUp};
use crate::config::ReportFormat;

const RULE_WIDTH: usize = 60;

pub const TITLE: &str = "Performance Comparison: duplicate detection";
pub const SUCCESS: &str = "Performance test completed successfully!";

pub fn write_report<W: Write>(
    out: &mut W,
    rows: &[BenchRow],
    format: ReportFormat,
) -> std::io::Result<()> {
    match format {
        ReportFormat::Table => write_table(out, rows),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
            // keep stdout pure JSON
            log::info!("{SUCCESS}");
            Ok(())
        }
    }
}

fn write_table<W: Write>(out: &mut W, rows: &[BenchRow]) -> std::io::Result<()> {
    let naive = format!("Naive ({})", Finder::Naive.complexity());
    let optimized = format!("Optimized ({})", Finder::Optimized.complexity());

    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{:<10} {naive:<15} {optimized:<15} {:<15}", "Size", "Speed-up")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for row in rows {
        writeln!(
            out,
            "{:<10} {:<15.6} {:<15.6} {}",
            row.size,
            row.naive.as_secs_f64(),
            row.optimized.as_secs_f64(),
            speed_up_cell(row.speed_up)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", console::style(format!("✅ {SUCCESS}")).green().bold())?;
    writeln!(out, "The optimized finder pulls further ahead as the input grows.")
}

/// The number is padded and the `x` follows the padding.
fn speed_up_cell(speed_up: SpeedUp) -> String {
    match speed_up {
        SpeedUp::Ratio(ratio) => format!("{ratio:<15.2}x"),
        SpeedUp::Infinite => format!("{:<15}", "inf"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn row(size: usize, naive_ms: u64, optimized_us: u64) -> BenchRow {
        let naive = Duration::from_millis(naive_ms);
        let optimized = Duration::from_micros(optimized_us);
        BenchRow {
            size,
            input_len: size + size / 10,
            naive,
            optimized,
            speed_up: SpeedUp::new(naive, optimized),
            duplicates: size / 20,
        }
    }

    fn render(rows: &[BenchRow], format: ReportFormat) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, rows, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let rows = [row(100, 2, 50), row(500, 40, 250)];
        let text = render(&rows, ReportFormat::Table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[1], "=".repeat(60));
        assert!(lines[2].starts_with("Size"));
        assert!(lines[2].contains("Naive (O(n^2))"));
        assert!(lines[2].contains("Optimized (O(n))"));
        assert!(lines[2].contains("Speed-up"));
        assert_eq!(lines[3], "-".repeat(60));
        assert!(lines[4].starts_with("100 "));
        assert!(lines[4].contains("0.002000"));
        assert!(lines[4].ends_with(&format!("{:<15}x", "40.00")), "got {:?}", lines[4]);
        assert!(lines[5].starts_with("500 "));
        assert!(lines[5].ends_with(&format!("{:<15}x", "160.00")), "got {:?}", lines[5]);
        assert!(text.contains(SUCCESS));
    }

    #[test]
    fn test_table_infinite_speed_up() {
        let text = render(&[row(100, 1, 0)], ReportFormat::Table);
        let data_line = text.lines().nth(4).unwrap();
        assert!(data_line.trim_end().ends_with("inf"), "got {data_line:?}");
    }

    #[test]
    fn test_speed_up_cell() {
        assert_eq!(speed_up_cell(SpeedUp::Ratio(2.5)), "2.50           x");
        assert_eq!(speed_up_cell(SpeedUp::Infinite), "inf            ");
    }

    #[test]
    fn test_table_without_rows_still_reports() {
        let text = render(&[], ReportFormat::Table);
        assert!(text.starts_with(TITLE));
        assert!(text.contains(SUCCESS));
    }

    #[test]
    fn test_json_report() {
        let rows = [row(100, 2, 50), row(200, 1, 0)];
        let text = render(&rows, ReportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = value.as_array().unwrap();

        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["size"], 100);
        assert_eq!(array[0]["input_len"], 110);
        assert!((array[0]["naive"].as_f64().unwrap() - 0.002).abs() < 1e-12);
        assert!((array[0]["speed_up"].as_f64().unwrap() - 40.0).abs() < 1e-9);
        assert_eq!(array[1]["speed_up"], "inf");
        assert!(!text.contains(SUCCESS));
    }
}
