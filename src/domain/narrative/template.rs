//! Deterministic narration assembled from the analysis alone.

use super::{NarrationContext, NarrationSections, DEFAULT_CONCLUSION};

/// Builds all six sections without any external service.
pub fn compose_narration(ctx: &NarrationContext) -> NarrationSections {
    NarrationSections {
        summary: summary(ctx),
        trait_interpretation: trait_interpretation(ctx),
        process_rationale: process_rationale(ctx),
        risk_explanation: risk_explanation(ctx),
        lifestyle_story: lifestyle_story(ctx),
        conclusion: DEFAULT_CONCLUSION.to_string(),
    }
}

fn summary(ctx: &NarrationContext) -> String {
    let top = ctx
        .profile
        .indicators
        .top(3)
        .into_iter()
        .map(|(indicator, score)| format!("{} ({})", indicator.area_label(), score))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} the strongest signals are {}.",
        ctx.tone.opening(),
        top
    )
}

fn trait_interpretation(ctx: &NarrationContext) -> String {
    let mut text = if ctx.profile.keywords.is_empty() {
        format!("Your daily rhythm reads as {}.", ctx.profile.lifestyle)
    } else {
        format!(
            "You come across as {}, with a {} daily rhythm.",
            ctx.profile.keywords.join(", "),
            ctx.profile.lifestyle
        )
    };
    if let Some(area) = ctx.profile.priority_areas.first() {
        text.push_str(&format!(" {area} stands out as the area you care about most."));
    }
    text
}

fn process_rationale(ctx: &NarrationContext) -> String {
    let grade = format!("A {} finish grade is a safe range for this home.", ctx.grade);
    let Some(space) = ctx.priority_spaces.first() else {
        return grade;
    };

    let essentials: Vec<&str> = ctx
        .processes
        .iter()
        .filter(|p| p.is_essential())
        .map(|p| p.label.as_str())
        .collect();
    let mut text = format!("Under these conditions the {} comes first.", space.label);
    if !essentials.is_empty() {
        text.push_str(&format!(" The essential work is {}.", essentials.join(", ")));
    }
    text.push(' ');
    text.push_str(&grade);
    text
}

fn risk_explanation(ctx: &NarrationContext) -> String {
    match ctx.risks.first() {
        Some(risk) => {
            let remedy = risk.remedies.first().map(String::as_str).unwrap_or_default();
            format!("The main thing to watch is {}. {}.", risk.title.to_lowercase(), remedy)
        }
        None => "No particular risks were found.".to_string(),
    }
}

fn lifestyle_story(ctx: &NarrationContext) -> String {
    match ctx.scenarios.first() {
        Some(scenario) => format!("{}: {}", scenario.title, scenario.narrative.with_change),
        None => "Your home will be shaped around the way you actually live.".to_string(),
    }
}
