use crate::types::report::{CatalogReport, TeaAnalysis};

fn push_tea(output: &mut String, tea: &TeaAnalysis) {
    output.push_str(&format!("## {}\n\n", tea.name));
    if let Some(tea_type) = &tea.tea_type {
        output.push_str(&format!("Type: {tea_type}\n"));
    }
    if let Some(season) = tea.season {
        output.push_str(&format!("Harvest season: {season}\n"));
    }
    output.push_str(&format!(
        "Dominant effect: {}\n\n",
        tea.dominant_effect.as_deref().unwrap_or("none")
    ));

    output.push_str("### Effects\n\n");
    for (effect, score) in tea.ranked() {
        output.push_str(&format!("- {effect}: {score:.2}\n"));
    }
    output.push('\n');

    if !tea.influences.is_empty() {
        output.push_str("### Growing Conditions\n\n");
        for influence in &tea.influences {
            output.push_str(&format!("- {}: {}", influence.source, influence.description));
            if !influence.flavor_influence.is_empty() {
                output.push_str(&format!(
                    " (flavor: {})",
                    influence.flavor_influence.join(", ")
                ));
            }
            output.push('\n');
        }
        output.push('\n');
    }
}

pub fn to_markdown(report: &CatalogReport) -> String {
    let mut output = String::new();
    output.push_str("# Tea Effect Report\n\n");

    if report.teas.is_empty() {
        output.push_str("No teas analyzed.\n\n");
    }
    for tea in &report.teas {
        push_tea(&mut output, tea);
    }

    if !report.skipped.is_empty() {
        output.push_str("## Skipped Files\n\n");
        for skipped in &report.skipped {
            output.push_str(&format!("- {}: {}\n", skipped.path, skipped.reason));
        }
    }

    output
}
