//! Output Formatting
//!
//! Renders fingerprints and comparison reports as text, JSON or YAML.
//! Every renderer returns a `String` so the caller decides where it goes.

use owo_colors::OwoColorize;
use serde::Serialize;

use simhash_rs::core::config::OutputConfig;
use simhash_rs::{Comparison, ComparisonReport, DocumentFingerprint, OutputFormat};

/// Machine-readable rendering; `None` for text, which each renderer lays out itself.
fn serialize<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<Option<String>> {
    Ok(match format {
        OutputFormat::Json => Some(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Some(serde_yaml::to_string(value)?),
        OutputFormat::Text => None,
    })
}

fn label(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn similarity_value(similarity: usize, color: bool) -> String {
    let text = format!("{similarity}%");
    if !color {
        return text;
    }
    match similarity {
        90..=100 => text.bright_green().bold().to_string(),
        50..=89 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

fn distance_lines(comparison: &Comparison, color: bool) -> String {
    format!(
        "{} {}\n{} {}\n",
        label("Hamming Distance:", color),
        comparison.hamming_distance,
        label("Similarity:", color),
        similarity_value(comparison.similarity, color),
    )
}

/// Render a two-document comparison
pub fn format_comparison(
    report: &ComparisonReport,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    if let Some(rendered) = serialize(report, output.format)? {
        return Ok(rendered);
    }

    let color = output.color;
    let mut text = String::new();
    for document in [&report.first, &report.second] {
        text.push_str(&format!(
            "{} {}: [{}]\n",
            label("Result for file", color),
            document.source.display(),
            document.fingerprint
        ));
    }
    text.push_str(&distance_lines(
        &Comparison {
            num_hash_bits: report.num_hash_bits,
            hamming_distance: report.hamming_distance,
            similarity: report.similarity,
        },
        color,
    ));
    Ok(text)
}

/// Render fingerprints of several documents
pub fn format_fingerprints(
    documents: &[DocumentFingerprint],
    output: &OutputConfig,
    hex: bool,
) -> anyhow::Result<String> {
    if let Some(rendered) = serialize(documents, output.format)? {
        return Ok(rendered);
    }

    let mut text = String::new();
    for document in documents {
        let path = document.source.display().to_string();
        let path = if output.color {
            path.cyan().to_string()
        } else {
            path
        };
        text.push_str(&format!("{path}: [{}]", document.fingerprint));
        if hex {
            text.push_str(&format!(" 0x{}", document.fingerprint.to_hex()));
        }
        text.push('\n');
    }
    Ok(text)
}

/// Render a raw fingerprint comparison
pub fn format_distance(comparison: &Comparison, output: &OutputConfig) -> anyhow::Result<String> {
    if let Some(rendered) = serialize(comparison, output.format)? {
        return Ok(rendered);
    }
    Ok(distance_lines(comparison, output.color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use simhash_rs::Fingerprint;
    use std::path::PathBuf;

    fn plain(format: OutputFormat) -> OutputConfig {
        OutputConfig {
            format,
            color: false,
        }
    }

    fn document(path: &str, bits: &str) -> DocumentFingerprint {
        DocumentFingerprint {
            source: PathBuf::from(path),
            fingerprint: Fingerprint::parse(bits).unwrap(),
            token_count: 2,
            distinct_terms: 2,
        }
    }

    fn report() -> ComparisonReport {
        ComparisonReport::new(
            document("text1.txt", "11110000"),
            document("text2.txt", "11111111"),
            Comparison {
                num_hash_bits: 8,
                hamming_distance: 4,
                similarity: 50,
            },
        )
    }

    #[test]
    fn text_comparison_matches_classic_layout() {
        let text = format_comparison(&report(), &plain(OutputFormat::Text)).unwrap();
        assert_eq!(
            text,
            "Result for file text1.txt: [11110000]\n\
             Result for file text2.txt: [11111111]\n\
             Hamming Distance: 4\n\
             Similarity: 50%\n"
        );
    }

    #[test]
    fn json_comparison_is_parseable() {
        let json = format_comparison(&report(), &plain(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hamming_distance"], 4);
        assert_eq!(value["second"]["fingerprint"], "11111111");
    }

    #[test]
    fn fingerprints_with_hex() {
        let text = format_fingerprints(
            &[document("a.txt", "11110000")],
            &plain(OutputFormat::Text),
            true,
        )
        .unwrap();
        assert_eq!(text, "a.txt: [11110000] 0xf0\n");
    }

    #[test]
    fn yaml_distance() {
        let comparison = Comparison {
            num_hash_bits: 4,
            hamming_distance: 0,
            similarity: 100,
        };
        let yaml = format_distance(&comparison, &plain(OutputFormat::Yaml)).unwrap();
        assert!(yaml.contains("similarity: 100"));
    }

    #[test]
    fn colored_text_still_contains_values() {
        let output = OutputConfig {
            format: OutputFormat::Text,
            color: true,
        };
        let text = format_comparison(&report(), &output).unwrap();
        assert!(text.contains("11110000"));
        assert!(text.contains("50%"));
    }
}
