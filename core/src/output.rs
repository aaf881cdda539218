//! Output formatting for parsed menus.

use crate::types::DayMenu;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

/// Formats a list of day menus in the requested output format.
pub fn format_menus(menus: &[DayMenu], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(menus)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(menus).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(menus_to_table(menus)),
    }
}

fn menus_to_table(menus: &[DayMenu]) -> String {
    let mut out = String::new();

    for (idx, menu) in menus.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", menu.date));
        if menu.meals.is_empty() {
            out.push_str("  (no dishes)\n");
            continue;
        }

        let name_width = menu
            .meals
            .iter()
            .map(|dish| dish.name.chars().count())
            .max()
            .unwrap_or(0);

        for dish in &menu.meals {
            let padding = name_width - dish.name.chars().count();
            out.push_str(&format!(
                "  {:>2}  {}{}  {:<12}",
                dish.id,
                dish.name,
                " ".repeat(padding),
                dish.code.as_deref().unwrap_or("-"),
            ));
            if !dish.options.is_empty() {
                out.push_str(&format!("  {}", dish.options.join(", ")));
            }
            let trimmed_len = out.trim_end_matches(' ').len();
            out.truncate(trimmed_len);
            out.push('\n');
        }
    }

    out
}
