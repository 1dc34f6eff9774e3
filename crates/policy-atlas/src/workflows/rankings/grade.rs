use super::domain::GradeBand;

/// Stepped thresholds, evaluated highest to lowest; first match wins.
const GRADE_TABLE: &[(f64, GradeBand)] = &[
    (
        90.0,
        GradeBand {
            letter: "A+",
            color: "green",
            description: "Exceptional policy-driven workforce gains",
        },
    ),
    (
        85.0,
        GradeBand {
            letter: "A",
            color: "green",
            description: "Strong workforce impact across the evidence base",
        },
    ),
    (
        80.0,
        GradeBand {
            letter: "A-",
            color: "green",
            description: "Strong workforce impact with minor gaps",
        },
    ),
    (
        75.0,
        GradeBand {
            letter: "B+",
            color: "yellow",
            description: "Above-average workforce impact",
        },
    ),
    (
        70.0,
        GradeBand {
            letter: "B",
            color: "yellow",
            description: "Solid workforce impact",
        },
    ),
    (
        65.0,
        GradeBand {
            letter: "B-",
            color: "yellow",
            description: "Moderate workforce impact",
        },
    ),
    (
        60.0,
        GradeBand {
            letter: "C+",
            color: "orange",
            description: "Mixed workforce impact",
        },
    ),
    (
        55.0,
        GradeBand {
            letter: "C",
            color: "orange",
            description: "Average workforce impact",
        },
    ),
    (
        50.0,
        GradeBand {
            letter: "C-",
            color: "orange",
            description: "Below-average workforce impact",
        },
    ),
    (
        40.0,
        GradeBand {
            letter: "D",
            color: "red",
            description: "Weak workforce impact",
        },
    ),
];

const FAILING_GRADE: GradeBand = GradeBand {
    letter: "F",
    color: "red",
    description: "Critical workforce concerns",
};

/// Map a composite score onto its letter grade band. Total over all finite
/// inputs; callers pass already-clamped scores.
pub fn grade_for_score(score: f64) -> GradeBand {
    GRADE_TABLE
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, band)| *band)
        .unwrap_or(FAILING_GRADE)
}
