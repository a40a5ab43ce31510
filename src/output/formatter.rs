//! Output formatters for shortlist reports

use crate::config::OutputFormat;
use crate::error::{Result, ShortlistError};
use crate::output::report::{CandidateRecord, RoleSection, ShortlistReport};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting shortlist reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_snippets: bool,
}

/// Flat tabular dump, one row per ranked candidate
pub struct CsvFormatter;

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    csv_formatter: CsvFormatter,
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score(&self, score: f64) -> String {
        let percentage = format!("{:.1}%", score * 100.0);
        let color = match score {
            s if s >= 0.5 => Color::Green,
            s if s >= 0.25 => Color::Yellow,
            s if s > 0.0 => Color::BrightRed,
            _ => Color::Red,
        };
        self.colorize(&percentage, color)
    }

    fn format_candidate(&self, candidate: &CandidateRecord) -> String {
        let mut output = format!(
            "#{} | ID: {} | Match: {}\n",
            candidate.rank,
            candidate.id,
            self.format_score(candidate.score)
        );
        output.push_str(&format!("   Category: {}\n", candidate.category));
        output.push_str(&format!(
            "   Skills: {}\n",
            join_or(&candidate.candidate_skills, "none detected")
        ));

        if candidate.missing_skills.is_empty() {
            output.push_str(&format!("   {}\n", self.colorize("All required skills found!", Color::Green)));
        } else {
            output.push_str(&format!(
                "   Missing: {}\n",
                self.colorize(&candidate.missing_skills.join(", "), Color::Red)
            ));
        }

        if self.detailed {
            output.push_str(&format!("   Snippet: {}\n", candidate.snippet.replace('\n', " ")));
        }
        output
    }

    fn format_role(&self, role: &RoleSection, top_n: usize) -> String {
        let mut output = self.format_header(&role.title, 2);

        if let Some(warning) = &role.warning {
            output.push_str(&format!("⚠️  {}\n", self.colorize(warning, Color::Yellow)));
            return output;
        }

        output.push_str(&format!(
            "Required skills: {}\n",
            join_or(&role.required_skills, "No specific skills detected")
        ));
        output.push_str(&format!(
            "Top {} of {} candidates (category: {})\n\n",
            top_n.min(role.candidates_considered),
            role.candidates_considered,
            role.category
        ));

        for candidate in &role.candidates {
            output.push_str(&self.format_candidate(candidate));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        let mut output = self.format_header("CANDIDATE SHORTLIST", 1);
        output.push_str(&format!(
            "Generated: {} | Corpus: {} resumes | Category: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.corpus_size,
            report.category_filter
        ));

        for role in &report.roles {
            output.push_str(&self.format_role(role, report.top_n));
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_snippets: bool) -> Self {
        Self { include_snippets }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        let mut output = String::from("# Candidate Shortlist\n\n");
        output.push_str(&format!(
            "*Generated {} over {} resumes, category: {}*\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.corpus_size,
            report.category_filter
        ));

        for role in &report.roles {
            output.push_str(&format!("\n## {}\n\n", role.title));

            if let Some(warning) = &role.warning {
                output.push_str(&format!("> ⚠️ {}\n", warning));
                continue;
            }

            output.push_str(&format!(
                "**Category:** {}  \n**Required skills:** {}\n\n",
                role.category,
                join_or(&role.required_skills, "No specific skills detected")
            ));
            output.push_str("| Rank | ID | Category | Match | Missing skills |\n");
            output.push_str("|---:|---|---|---:|---|\n");
            for candidate in &role.candidates {
                output.push_str(&format!(
                    "| {} | {} | {} | {:.1}% | {} |\n",
                    candidate.rank,
                    candidate.id,
                    candidate.category,
                    candidate.score * 100.0,
                    join_or(&candidate.missing_skills, "none")
                ));
            }

            if self.include_snippets {
                for candidate in &role.candidates {
                    output.push_str(&format!(
                        "\n**#{} ({})**\n\n```\n{}\n```\n",
                        candidate.rank, candidate.id, candidate.snippet
                    ));
                }
            }
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "role",
            "rank",
            "id",
            "category",
            "similarity_score",
            "extracted_skills",
            "matched_skills",
            "missing_skills",
            "snippet",
        ])?;

        for role in &report.roles {
            for candidate in &role.candidates {
                let rank = candidate.rank.to_string();
                let score = format!("{:.6}", candidate.score);
                let extracted = candidate.candidate_skills.join("; ");
                let matched = candidate.matched_skills.join("; ");
                let missing = candidate.missing_skills.join("; ");
                writer.write_record([
                    role.title.as_str(),
                    rank.as_str(),
                    candidate.id.as_str(),
                    candidate.category.as_str(),
                    score.as_str(),
                    extracted.as_str(),
                    matched.as_str(),
                    missing.as_str(),
                    candidate.snippet.as_str(),
                ])?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ShortlistError::OutputFormatting(format!("Failed to flush CSV output: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ShortlistError::OutputFormatting(format!("CSV output is not UTF-8: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(detailed),
            csv_formatter: CsvFormatter,
        }
    }

    pub fn generate_report(&self, report: &ShortlistReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Csv => self.csv_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("ranked_candidates{}.txt", timestamp_suffix),
        OutputFormat::Json => format!("ranked_candidates{}.json", timestamp_suffix),
        OutputFormat::Markdown => format!("ranked_candidates{}.md", timestamp_suffix),
        OutputFormat::Csv => format!("ranked_candidates{}.csv", timestamp_suffix),
    }
}
