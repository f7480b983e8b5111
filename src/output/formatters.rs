//! Output formatting functionality
//!
//! This module renders a package report as text or JSON.

use crate::error::Result;
use crate::models::PackageReport;
use ansi_term::Colour::{Blue, Cyan, Green, Yellow};
use ansi_term::Style;

/// Format a package report as text
pub fn format_report_text(report: &PackageReport, use_colors: bool, verbose: bool) -> String {
    let info = &report.module_info;
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!("{}\n\n", Blue.bold().paint(&report.package_name)));
    } else {
        output.push_str(&format!("{}\n\n", report.package_name));
    }

    push_section(&mut output, "Declared modules", &info.declared_modules, use_colors, |name| {
        Green.paint(name).to_string()
    });
    push_section(&mut output, "Globals", &info.globals, use_colors, |name| {
        Cyan.paint(name).to_string()
    });
    push_section(&mut output, "Dependencies", &info.dependencies, use_colors, |name| {
        Yellow.paint(name).to_string()
    });
    push_section(&mut output, "Test dependencies", &report.test_dependencies, use_colors, |name| {
        Yellow.paint(name).to_string()
    });

    if verbose {
        push_section(&mut output, "Declaration files", &info.decl_files, use_colors, |name| {
            Style::new().dimmed().paint(name).to_string()
        });
    } else {
        output.push_str(&format!("Declaration files: {}\n", info.decl_files.len()));
    }

    output
}

fn push_section<'a, I, F>(output: &mut String, title: &str, items: I, use_colors: bool, paint: F)
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> String,
{
    let items: Vec<&String> = items.into_iter().collect();

    if use_colors {
        output.push_str(&format!("{} ({})\n", Style::new().bold().paint(title), items.len()));
    } else {
        output.push_str(&format!("{} ({})\n", title, items.len()));
    }

    if items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in items {
        if use_colors {
            output.push_str(&format!("  {}\n", paint(item)));
        } else {
            output.push_str(&format!("  {}\n", item));
        }
    }
    output.push('\n');
}

/// Format a package report as JSON
pub fn format_report_json(report: &PackageReport, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    json.push('\n');
    Ok(json)
}
