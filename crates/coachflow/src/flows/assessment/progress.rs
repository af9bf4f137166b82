use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::SessionStatus;

/// Coarse grouping of questions for progress display. Descriptive only;
/// navigation never consults the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    BasicInformation,
    HealthAssessment,
    DietPreferences,
    FoodDetails,
    Lifestyle,
    Goals,
    PlanCustomization,
}

impl Phase {
    pub const TOTAL: u8 = 7;

    pub const fn ordered() -> [Self; 7] {
        [
            Self::BasicInformation,
            Self::HealthAssessment,
            Self::DietPreferences,
            Self::FoodDetails,
            Self::Lifestyle,
            Self::Goals,
            Self::PlanCustomization,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BasicInformation => "Basic Information",
            Self::HealthAssessment => "Health Assessment",
            Self::DietPreferences => "Diet Preferences",
            Self::FoodDetails => "Food Details",
            Self::Lifestyle => "Lifestyle",
            Self::Goals => "Goals",
            Self::PlanCustomization => "Plan Customization",
        }
    }

    pub const fn ordinal(self) -> u8 {
        match self {
            Self::BasicInformation => 1,
            Self::HealthAssessment => 2,
            Self::DietPreferences => 3,
            Self::FoodDetails => 4,
            Self::Lifestyle => 5,
            Self::Goals => 6,
            Self::PlanCustomization => 7,
        }
    }
}

/// Read-only progress projection for one session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    pub phase: Phase,
    pub phase_label: &'static str,
    pub phase_ordinal: u8,
    pub total_phases: u8,
    pub percent_complete: u8,
}

/// Derives phase and percent complete from the current question's declared
/// phase and its position within that phase in the catalog table. Returns
/// `None` when the question key is not part of the catalog.
pub fn progress(
    catalog: &QuestionCatalog,
    current_question: &str,
    status: SessionStatus,
) -> Option<ProgressView> {
    let node = catalog.node(current_question)?;
    let phase = node.phase;

    let percent_complete = if status == SessionStatus::Completed {
        100
    } else {
        let base = f64::from(phase.ordinal() - 1);
        let within = catalog
            .phase_position(current_question)
            .map(|(index, count)| index as f64 / count.max(1) as f64)
            .unwrap_or(0.0);
        let fraction = (base + within) / f64::from(Phase::TOTAL);
        // An in-progress session never reports 100.
        ((fraction * 100.0) as u8).min(99)
    };

    Some(ProgressView {
        phase,
        phase_label: phase.label(),
        phase_ordinal: phase.ordinal(),
        total_phases: Phase::TOTAL,
        percent_complete,
    })
}
