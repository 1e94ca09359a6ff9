//! Risk detection over the adjusted profile and the final process list.

use super::{Risk, RiskLevel, RiskTiming, RiskType};
use crate::domain::profile::{PreferenceIndicatorVector, SpaceAttributes};
use crate::domain::recommendation::{PrioritySpace, RecommendedProcess};

/// Indicators at or above this need a matching process.
pub const CURRENT_RISK_AT: u8 = 70;

/// Age bracket that triggers the child-growth risk.
pub const YOUNG_CHILD_AGE_RANGE: &str = "0-5";

/// Runs the current, future and missing passes and sorts the result by
/// level, then timing.
pub fn detect_risks(
    indicators: &PreferenceIndicatorVector,
    processes: &[RecommendedProcess],
    priority_spaces: &[PrioritySpace],
    space: &SpaceAttributes,
) -> Vec<Risk> {
    let mut risks = current_risks(indicators, processes);
    risks.extend(future_risks(indicators, processes, space));
    risks.extend(missing_risks(processes, priority_spaces));
    risks.sort_by_key(|r| (r.level, r.timing));

    tracing::debug!(risks = risks.len(), "risks detected");
    risks
}

fn covers(processes: &[RecommendedProcess], keywords: &[&str]) -> bool {
    processes.iter().any(|p| {
        keywords
            .iter()
            .any(|kw| p.id.contains(kw) || p.category.contains(kw))
    })
}

fn current_risks(indicators: &PreferenceIndicatorVector, processes: &[RecommendedProcess]) -> Vec<Risk> {
    let mut risks = Vec::new();

    if indicators.storage_importance.value() >= CURRENT_RISK_AT
        && !covers(processes, &["storage", "closet"])
    {
        risks.push(Risk::new(
            "storage_shortage",
            RiskType::Current,
            RiskLevel::High,
            RiskTiming::Immediate,
            "Storage shortage",
            "Storage matters a lot to you, but no storage work is planned.",
            "Clutter will build up quickly and daily tidying gets harder.",
            [
                "Add built-in closets or a storage system",
                "Plan tall cabinetry in the kitchen and entrance",
            ],
        ));
    }

    if indicators.flow_importance.value() >= CURRENT_RISK_AT && !covers(processes, &["layout", "flow"]) {
        risks.push(Risk::new(
            "flow_congestion",
            RiskType::Current,
            RiskLevel::High,
            RiskTiming::Immediate,
            "Circulation bottlenecks",
            "Smooth movement is important to you, but no layout work is planned.",
            "Busy hours will keep producing collisions between household members.",
            [
                "Rework the kitchen or living layout",
                "Clear the main walkways of free-standing furniture",
            ],
        ));
    }

    if indicators.noise_sensitivity.value() >= CURRENT_RISK_AT
        && !covers(processes, &["soundproof", "door"])
    {
        risks.push(Risk::new(
            "noise_exposure",
            RiskType::Current,
            RiskLevel::Medium,
            RiskTiming::ShortTerm,
            "Noise exposure",
            "You are sensitive to noise, but no soundproofing is planned.",
            "Sleep and concentration will keep being disturbed.",
            [
                "Soundproof the bedroom walls",
                "Switch to solid-core, sealed doors",
            ],
        ));
    }

    let cleaning_covered = processes
        .iter()
        .any(|p| p.id.contains("easy_clean") || p.label.to_lowercase().contains("clean"));
    if indicators.maintenance_sensitivity.value() >= CURRENT_RISK_AT && !cleaning_covered {
        risks.push(Risk::new(
            "maintenance_burden",
            RiskType::Current,
            RiskLevel::Medium,
            RiskTiming::ShortTerm,
            "Maintenance burden",
            "Easy upkeep matters to you, but no easy-clean finishes are planned.",
            "Cleaning will take more of your time than you want.",
            [
                "Choose easy-clean bathroom finishes",
                "Prefer large-format tiles and closed storage",
            ],
        ));
    }

    risks
}

fn future_risks(
    indicators: &PreferenceIndicatorVector,
    processes: &[RecommendedProcess],
    space: &SpaceAttributes,
) -> Vec<Risk> {
    let mut risks = Vec::new();

    if space.has_age_range(YOUNG_CHILD_AGE_RANGE) {
        risks.push(Risk::new(
            "kids_growth",
            RiskType::Future,
            RiskLevel::Medium,
            RiskTiming::MidTerm,
            "Growing children",
            "Young children will need different space within a few years.",
            "Rooms designed only for today may need rework soon.",
            [
                "Plan flexible room layouts",
                "Use adjustable shelving and furniture",
            ],
        ));
    }

    if indicators.pet_impact.value() >= 60 && !covers(processes, &["pet", "floor"]) {
        risks.push(Risk::new(
            "pet_damage",
            RiskType::Future,
            RiskLevel::Medium,
            RiskTiming::ShortTerm,
            "Pet wear and tear",
            "Pets affect your home, but no durable finishes are planned.",
            "Floors and lower walls will wear out early.",
            [
                "Choose scratch-resistant flooring",
                "Use wipeable wall finishes at pet height",
            ],
        ));
    }

    if indicators.home_value_consciousness.value() >= 60 {
        risks.push(Risk::new(
            "resale_value",
            RiskType::Future,
            RiskLevel::Low,
            RiskTiming::LongTerm,
            "Resale value",
            "Home value matters to you.",
            "Very personal choices can narrow the pool of future buyers.",
            [
                "Favour neutral, durable materials in visible areas",
                "Invest first in kitchen and bathroom",
            ],
        ));
    }

    risks
}

fn missing_risks(processes: &[RecommendedProcess], priority_spaces: &[PrioritySpace]) -> Vec<Risk> {
    let mut risks = Vec::new();

    let essentials = processes.iter().filter(|p| p.is_essential()).count();
    if essentials < 2 {
        risks.push(Risk::new(
            "insufficient_processes",
            RiskType::Missing,
            RiskLevel::Medium,
            RiskTiming::Immediate,
            "Too few essential processes",
            "The plan contains fewer than two essential processes.",
            "The renovation may not solve the problems that prompted it.",
            [
                "Review the recommended processes again",
                "Select the processes for the spaces you use most",
            ],
        ));
    }

    if priority_spaces.is_empty() {
        risks.push(Risk::new(
            "no_priority_spaces",
            RiskType::Missing,
            RiskLevel::High,
            RiskTiming::Immediate,
            "No spaces selected",
            "No space has been selected for renovation.",
            "Processes cannot be recommended without target spaces.",
            [
                "Select the spaces you want to renovate",
                "Start with the space you spend the most time in",
            ],
        ));
    }

    risks
}
