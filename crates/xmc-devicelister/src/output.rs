//! Output formatting: report lines or JSON.
//!
//! Rendering is pure; printing goes to a locked stdout so a closed pipe
//! surfaces as an IO error instead of a panic.

use std::io::{self, Write};

use xmc_core::{DeviceRecord, report};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render the device report in the chosen format.
///
/// Text mode yields no lines for an empty inventory; JSON mode yields `[]`.
pub fn render(format: OutputFormat, devices: &[DeviceRecord]) -> Result<Vec<String>, CliError> {
    match format {
        OutputFormat::Text => Ok(report::format(devices)),
        OutputFormat::Json => Ok(vec![serde_json::to_string_pretty(&report::views(devices))?]),
    }
}

/// Write each line to stdout.
pub fn print_lines(lines: &[String]) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(ip: &str, up: bool) -> DeviceRecord {
        DeviceRecord {
            ip: ip.into(),
            reachable: up,
            vendor: "Extreme".into(),
            family: "VSP Series".into(),
            ..DeviceRecord::default()
        }
    }

    #[test]
    fn text_is_one_line_per_device() {
        let devices = [device("10.0.0.2", true), device("10.0.0.1", false)];
        let lines = render(OutputFormat::Text, &devices).expect("text renders");
        assert_eq!(
            lines,
            [
                "- 10.0.0.1 (Extreme VSP Series \"\") is down.",
                "+ 10.0.0.2 (Extreme VSP Series \"\") is up.",
            ]
        );
    }

    #[test]
    fn empty_text_report_prints_nothing() {
        assert!(render(OutputFormat::Text, &[]).expect("renders").is_empty());
    }

    #[test]
    fn json_is_a_sorted_array() {
        let devices = [device("10.0.0.2", true), device("10.0.0.1", false)];
        let lines = render(OutputFormat::Json, &devices).expect("json renders");
        assert_eq!(lines.len(), 1);

        let value: serde_json::Value = serde_json::from_str(&lines[0]).expect("valid json");
        let ips: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|d| d["ip"].as_str())
            .collect();
        assert_eq!(ips, ["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn empty_json_report_is_an_empty_array() {
        assert_eq!(
            render(OutputFormat::Json, &[]).expect("renders"),
            ["[]"]
        );
    }
}
