//! Terminal rendering of result cards

use colored::*;

use crate::domain::{PlatformCatalog, ToolRecord};
use crate::error::Result;

/// Result count line: "1 Resultado", "3 Resultados"
pub fn results_label(count: usize) -> String {
    if count == 1 {
        format!("{} Resultado", count)
    } else {
        format!("{} Resultados", count)
    }
}

/// Platform labels of a tool.
///
/// Labels missing from the catalog are listed separately so the card can
/// mark them.
pub fn split_platforms<'a>(
    tool: &'a ToolRecord,
    platforms: &PlatformCatalog,
) -> (Vec<&'a str>, Vec<&'a str>) {
    tool.platforms
        .iter()
        .map(String::as_str)
        .partition(|label| platforms.contains(label))
}

/// Render one tool as a multi-line card
pub fn card(tool: &ToolRecord, platforms: &PlatformCatalog) -> String {
    let mut heading = format!("{} [{}]", tool.name.bold(), tool.category.cyan());
    if tool.featured.is_featured() {
        heading.push_str(&format!(" {}", "★".yellow()));
    }
    if tool.is_open_source {
        heading.push_str(&format!(" {}", "open-source".green()));
    }

    let mut lines = vec![heading];
    if !tool.description.is_empty() {
        lines.push(format!("  {}", tool.description));
    }
    let (known, unknown) = split_platforms(tool, platforms);
    if !known.is_empty() || !unknown.is_empty() {
        let mut labels: Vec<String> = known.iter().map(|l| l.to_string()).collect();
        labels.extend(unknown.iter().map(|l| format!("{}?", l).dimmed().to_string()));
        lines.push(format!("  {} {}", "Plataformas:".dimmed(), labels.join(", ")));
    }
    if !tool.link.is_empty() {
        lines.push(format!("  {}", tool.link.blue().underline()));
    }
    lines.join("\n")
}

/// Render the full result list with its count line
pub fn results(tools: &[&ToolRecord], platforms: &PlatformCatalog) -> String {
    let mut out = results_label(tools.len()).bold().to_string();
    if tools.is_empty() {
        out.push('\n');
        out.push_str(&"Nenhuma ferramenta encontrada".dimmed().to_string());
        return out;
    }
    for tool in tools {
        out.push_str("\n\n");
        out.push_str(&card(tool, platforms));
    }
    out
}

/// Render the result list as a JSON array
pub fn results_json(tools: &[&ToolRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tools)?)
}
