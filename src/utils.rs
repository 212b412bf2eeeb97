//! Helpers for the human-readable report printed after each file and batch.

use crate::processing::ResizeReport;
use indicatif::{ProgressBar, ProgressStyle};

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB", "EB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Lines describing one resized file: dimensions, output path and the
/// before/after byte sizes when both are known.
pub fn describe_report(report: &ResizeReport) -> Vec<String> {
    let name = report
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.input.display().to_string());

    let mut lines = vec![
        format!("Resized {}: {} -> {}", name, report.original, report.resized),
        format!("Output: {}", report.output.display()),
    ];
    if let (Some(before), Some(after)) = (report.input_bytes, report.output_bytes) {
        lines.push(format!(
            "File size: {} -> {}",
            format_file_size(before),
            format_file_size(after)
        ));
    }
    lines
}

/// Print per-file detail for a resized image
pub fn print_resize_report(report: &ResizeReport) {
    for line in describe_report(report) {
        println!("{}", line);
    }
}

/// Create a progress bar for `total` files with consistent styling
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(crate::constants::PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Dimensions;
    use std::path::PathBuf;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_describe_report() {
        let report = ResizeReport {
            input: PathBuf::from("/photos/cat.jpg"),
            output: PathBuf::from("/photos/cat_400x300.jpg"),
            original: Dimensions::new(800, 600),
            resized: Dimensions::new(400, 300),
            input_bytes: Some(2048),
            output_bytes: Some(512),
        };

        assert_eq!(
            describe_report(&report),
            vec![
                "Resized cat.jpg: 800x600 -> 400x300".to_string(),
                "Output: /photos/cat_400x300.jpg".to_string(),
                "File size: 2.0 KB -> 512 B".to_string(),
            ]
        );
    }

    #[test]
    fn test_describe_report_unknown_size() {
        let report = ResizeReport {
            input: PathBuf::from("cat.png"),
            output: PathBuf::from("cat_1x1.png"),
            original: Dimensions::new(2, 2),
            resized: Dimensions::new(1, 1),
            input_bytes: None,
            output_bytes: Some(10),
        };
        assert_eq!(describe_report(&report).len(), 2);
    }
}
