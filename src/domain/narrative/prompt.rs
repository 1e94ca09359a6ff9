//! Prompt text for a language-model narrator.

use std::fmt::Write;

use super::NarrationContext;
use crate::domain::recommendation::ProcessPriority;

/// System and user messages for one narration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationPrompt {
    pub system: String,
    pub user: String,
}

const SYSTEM_PREAMBLE: &str = "You are an interior consultant with fifteen years of site experience. \
You organise choices and lower the chance of regret; you do not make new judgments. \
Explain only the analysis you are given, in the order empathy, reason, effect, alternative. \
Never say \"I recommend this\" or \"this is the most popular\". \
Prefer phrasing such as \"under these conditions this choice is safe\".";

const SYSTEM_STRUCTURE: &str = "Answer in six paragraphs separated by blank lines: \
1. greeting and empathy, 2. interpretation of the twelve indicators, \
3. why these spaces and processes, 4. risks and remedies, \
5. one or two lifestyle scenarios as a story, 6. closing with budget advice and next steps.";

pub fn build_prompt(ctx: &NarrationContext) -> NarrationPrompt {
    let system = format!(
        "{SYSTEM_PREAMBLE}\n\nTone: {}. {}\n\n{SYSTEM_STRUCTURE}",
        ctx.tone,
        ctx.tone.guide()
    );
    NarrationPrompt {
        system,
        user: user_prompt(ctx),
    }
}

fn user_prompt(ctx: &NarrationContext) -> String {
    // Writing into a String never fails.
    let mut out = String::new();

    let _ = writeln!(out, "## Preference indicators (0-100)");
    for (indicator, score) in ctx.profile.indicators.iter() {
        let _ = writeln!(out, "- {indicator}: {score}");
    }
    let _ = writeln!(out, "\nKeywords: {}", ctx.profile.keywords.join(", "));
    let _ = writeln!(out, "Priority areas: {}", ctx.profile.priority_areas.join(", "));
    let _ = writeln!(out, "Lifestyle: {}", ctx.profile.lifestyle);

    let _ = writeln!(out, "\n## Priority spaces");
    for space in &ctx.priority_spaces {
        let _ = writeln!(
            out,
            "{}. {} ({}) - {}",
            space.rank, space.label, space.score, space.rationale
        );
    }

    let _ = writeln!(out, "\n## Organised processes");
    for (heading, priority) in [
        ("Essential", ProcessPriority::Essential),
        ("Recommended", ProcessPriority::Recommended),
        ("Optional", ProcessPriority::Optional),
    ] {
        let group: Vec<_> = ctx.processes.iter().filter(|p| p.priority == priority).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "### {heading}");
        for p in group {
            let _ = writeln!(out, "- {}: {}", p.label, p.rationale);
        }
    }
    let _ = writeln!(out, "\nGrade: {}", ctx.grade);

    if !ctx.warnings.is_empty() {
        let _ = writeln!(out, "\n## Warnings");
        for w in &ctx.warnings {
            let _ = writeln!(out, "- {}: {}", w.process_label, w.message);
        }
    }

    let _ = writeln!(out, "\n## Risks ({} found)", ctx.risks.len());
    for (i, risk) in ctx.risks.iter().enumerate() {
        let _ = writeln!(out, "{}. [{}] {}", i + 1, risk.level, risk.title);
        let _ = writeln!(out, "   - {}", risk.description);
        let _ = writeln!(out, "   - Impact: {}", risk.impact);
        if let Some(remedy) = risk.remedies.first() {
            let _ = writeln!(out, "   - Remedy: {remedy}");
        }
    }

    let _ = writeln!(out, "\n## Lifestyle scenarios ({} matched)", ctx.scenarios.len());
    for (i, scenario) in ctx.scenarios.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({})", i + 1, scenario.title, scenario.category);
        let _ = writeln!(out, "   - Now: {}", scenario.narrative.current);
        let _ = writeln!(out, "   - After: {}", scenario.narrative.with_change);
    }

    let _ = write!(out, "\n---\nExplain the above to the customer in a {} tone.", ctx.tone);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::narrative::Tone;
    use crate::domain::profile::{IndicatorProfile, LifestyleType, PreferenceIndicatorVector};
    use crate::domain::recommendation::Grade;

    fn context(tone: Tone) -> NarrationContext {
        NarrationContext {
            tone,
            profile: IndicatorProfile {
                indicators: PreferenceIndicatorVector::neutral(),
                keywords: vec!["organised".to_string()],
                priority_areas: vec![],
                lifestyle: LifestyleType::Morning,
            },
            priority_spaces: vec![],
            processes: vec![],
            grade: Grade::Enhanced,
            warnings: vec![],
            risks: vec![],
            scenarios: vec![],
        }
    }

    #[test]
    fn system_prompt_carries_tone_guide() {
        let prompt = build_prompt(&context(Tone::Direct));
        assert!(prompt.system.contains("Tone: direct."));
        assert!(prompt.system.contains(Tone::Direct.guide()));
    }

    #[test]
    fn user_prompt_lists_all_indicators() {
        let prompt = build_prompt(&context(Tone::Warm));
        assert!(prompt.user.contains("- storage_importance: 50"));
        assert!(prompt.user.contains("- home_value_consciousness: 50"));
        assert!(prompt.user.contains("Lifestyle: morning"));
        assert!(prompt.user.contains("Grade: enhanced"));
        assert!(prompt.user.contains("## Risks (0 found)"));
    }

    #[test]
    fn same_context_builds_same_prompt() {
        let ctx = context(Tone::Logical);
        assert_eq!(build_prompt(&ctx), build_prompt(&ctx));
    }
}
