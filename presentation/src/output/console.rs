//! Console output formatter for toolbar results

use colored::Colorize;
use serde_json::json;
use toolbar_application::{InteractionOutcome, RegionUpdate};
use toolbar_domain::{ReconciledUrl, ToolbarOptions};

/// What a simulated interaction left behind on the page.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub outcome: InteractionOutcome,
    /// Address bar after the interaction
    pub address: String,
    pub content: Vec<String>,
    pub sidebar: Vec<String>,
    pub scroll_top: i64,
    pub alerts: Vec<String>,
}

/// Formats toolbar results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Widget options as the page initialization payload
    pub fn format_options_json(options: &ToolbarOptions) -> String {
        serde_json::to_string_pretty(options).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_options(options: &ToolbarOptions) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Catalog Toolbar Options"));
        output.push('\n');

        let mode = if options.async_enabled {
            "asynchronous".green().bold()
        } else {
            "navigation".yellow().bold()
        };
        output.push_str(&format!("{} {}\n", "Mode:".cyan().bold(), mode));

        if options.async_enabled {
            let timeout = match options.request_timeout() {
                Some(timeout) => format!("{} ms", timeout.as_millis()),
                None => "none".to_string(),
            };
            output.push_str(&format!("{} {}\n", "Timeout:".cyan().bold(), timeout));
            if options.scroll_enabled {
                output.push_str(&format!(
                    "{} {} over {} ms, offset {} px\n",
                    "Scroll:".cyan().bold(),
                    options.easing(),
                    options.scroll_duration_ms,
                    options.scroll_offset_px
                ));
            } else {
                output.push_str(&format!("{} off\n", "Scroll:".cyan().bold()));
            }
        }

        output.push_str(&format!("{} {}\n", "Content:".cyan().bold(), options.selectors.content_container));
        output.push_str(&format!("{} {}\n", "Sidebar:".cyan().bold(), options.selectors.sidebar_container));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_reconciled(reconciled: &ReconciledUrl, show_async: bool) -> String {
        if show_async {
            format!("{}\n{}", reconciled.url(), reconciled.async_url())
        } else {
            reconciled.url()
        }
    }

    /// One line describing the outcome
    pub fn format_outcome(outcome: &InteractionOutcome) -> String {
        match outcome {
            InteractionOutcome::Navigated { url } => {
                format!("{} {}", "Navigated".yellow().bold(), url)
            }
            InteractionOutcome::Applied { url, regions } => format!(
                "{} {} ({})",
                "Applied".green().bold(),
                url,
                Self::regions(regions)
            ),
            InteractionOutcome::Rejected { message } => format!(
                "{} {}",
                "Rejected".red().bold(),
                message.as_deref().unwrap_or("(no message)")
            ),
            InteractionOutcome::Failed { error } => {
                format!("{} {}", "Failed".red().bold(), error)
            }
            InteractionOutcome::Superseded { sequence } => {
                format!("{} request #{}", "Superseded".dimmed(), sequence)
            }
        }
    }

    pub fn format_simulation(report: &SimulationReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Toolbar Simulation"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Outcome:".cyan().bold(),
            Self::format_outcome(&report.outcome)
        ));
        output.push_str(&format!("{} {}\n", "Address:".cyan().bold(), report.address));
        output.push_str(&format!("{} {}\n", "Scroll top:".cyan().bold(), report.scroll_top));

        if let InteractionOutcome::Applied { regions, .. } = &report.outcome {
            if regions.content {
                output.push_str(&Self::section_header("Main content"));
                for html in &report.content {
                    output.push_str(&Self::indent(html.trim(), "  "));
                    output.push('\n');
                }
            }
            if regions.sidebar {
                output.push_str(&Self::section_header("Sidebar"));
                for html in &report.sidebar {
                    output.push_str(&Self::indent(html.trim(), "  "));
                    output.push('\n');
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_simulation_json(report: &SimulationReport) -> String {
        let outcome = match &report.outcome {
            InteractionOutcome::Navigated { url } => json!({ "type": "navigated", "url": url }),
            InteractionOutcome::Applied { url, regions } => json!({
                "type": "applied",
                "url": url,
                "content": regions.content,
                "sidebar": regions.sidebar,
            }),
            InteractionOutcome::Rejected { message } => {
                json!({ "type": "rejected", "message": message })
            }
            InteractionOutcome::Failed { error } => {
                json!({ "type": "failed", "error": error.to_string() })
            }
            InteractionOutcome::Superseded { sequence } => {
                json!({ "type": "superseded", "sequence": sequence })
            }
        };
        let value = json!({
            "outcome": outcome,
            "address": report.address,
            "scrollTop": report.scroll_top,
            "content": report.content,
            "sidebar": report.sidebar,
            "alerts": report.alerts,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn regions(regions: &RegionUpdate) -> &'static str {
        match (regions.content, regions.sidebar) {
            (true, true) => "content, sidebar",
            (true, false) => "content",
            (false, true) => "sidebar",
            (false, false) => "no regions",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
