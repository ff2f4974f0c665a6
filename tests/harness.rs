use dupscan::bench::{self, SpeedUp};
use dupscan::config::{BenchConfig, ReportFormat};
use dupscan::report::{self, SUCCESS};

#[test]
fn test_full_run_table_report() -> anyhow::Result<()> {
    let config = BenchConfig {
        sizes: vec![100, 500, 1000, 2000],
        seed: Some(2024),
        ..BenchConfig::default()
    };
    config.validate()?;

    let rows = bench::run(&config);
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_eq!(row.input_len, row.size + row.size / 10);
        assert!(row.duplicates > 0, "size {} should contain repeats", row.size);
        if let SpeedUp::Ratio(r) = row.speed_up {
            assert!(r.is_finite() && r >= 0.0);
        }
    }

    let mut out = Vec::new();
    report::write_report(&mut out, &rows, ReportFormat::Table)?;
    let text = String::from_utf8(out)?;

    // title, two rules, header, one line per size
    let data_lines: Vec<&str> = text.lines().skip(4).take(4).collect();
    for (line, size) in data_lines.iter().zip(["100", "500", "1000", "2000"]) {
        assert!(line.starts_with(size), "expected row for {size}, got {line:?}");
    }
    assert!(text.contains(SUCCESS));

    Ok(())
}

#[test]
fn test_seeded_runs_find_same_repeats() {
    let config = BenchConfig {
        sizes: vec![300],
        seed: Some(11),
        ..BenchConfig::default()
    };
    let first = bench::run(&config);
    let second = bench::run(&config);
    assert_eq!(first[0].duplicates, second[0].duplicates);
}

#[test]
fn test_json_report_round_trips_sizes() -> anyhow::Result<()> {
    let config = BenchConfig {
        sizes: vec![50, 150],
        seed: Some(8),
        format: ReportFormat::Json,
        ..BenchConfig::default()
    };
    let rows = bench::run(&config);

    let mut out = Vec::new();
    report::write_report(&mut out, &rows, config.format)?;
    let value: serde_json::Value = serde_json::from_slice(&out)?;
    let sizes: Vec<u64> = value
        .as_array()
        .map(|rows| rows.iter().filter_map(|r| r["size"].as_u64()).collect())
        .unwrap_or_default();
    assert_eq!(sizes, vec![50, 150]);

    Ok(())
}
