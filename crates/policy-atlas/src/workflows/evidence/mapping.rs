use super::normalizer::normalize_state;
use std::collections::HashMap;
use std::sync::OnceLock;

static STATE_NAME_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

/// Resolve a raw state token from an export to the canonical uppercase full
/// name the rest of the system groups by. Unrecognized tokens keep their
/// normalized form so unexpected jurisdictions still rank under one key.
pub(crate) fn canonical_state_name(raw: &str) -> String {
    let normalized = normalize_state(raw);
    match state_name_map().get(normalized.as_str()) {
        Some(full_name) => (*full_name).to_string(),
        None => normalized,
    }
}

fn state_name_map() -> &'static HashMap<String, &'static str> {
    STATE_NAME_MAP.get_or_init(|| {
        const ABBREVIATION_TO_NAME: &[(&str, &str)] = &[
            ("AL", "ALABAMA"),
            ("AK", "ALASKA"),
            ("AZ", "ARIZONA"),
            ("AR", "ARKANSAS"),
            ("CA", "CALIFORNIA"),
            ("CO", "COLORADO"),
            ("CT", "CONNECTICUT"),
            ("DE", "DELAWARE"),
            ("FL", "FLORIDA"),
            ("GA", "GEORGIA"),
            ("HI", "HAWAII"),
            ("ID", "IDAHO"),
            ("IL", "ILLINOIS"),
            ("IN", "INDIANA"),
            ("IA", "IOWA"),
            ("KS", "KANSAS"),
            ("KY", "KENTUCKY"),
            ("LA", "LOUISIANA"),
            ("ME", "MAINE"),
            ("MD", "MARYLAND"),
            ("MA", "MASSACHUSETTS"),
            ("MI", "MICHIGAN"),
            ("MN", "MINNESOTA"),
            ("MS", "MISSISSIPPI"),
            ("MO", "MISSOURI"),
            ("MT", "MONTANA"),
            ("NE", "NEBRASKA"),
            ("NV", "NEVADA"),
            ("NH", "NEW HAMPSHIRE"),
            ("NJ", "NEW JERSEY"),
            ("NM", "NEW MEXICO"),
            ("NY", "NEW YORK"),
            ("NC", "NORTH CAROLINA"),
            ("ND", "NORTH DAKOTA"),
            ("OH", "OHIO"),
            ("OK", "OKLAHOMA"),
            ("OR", "OREGON"),
            ("PA", "PENNSYLVANIA"),
            ("RI", "RHODE ISLAND"),
            ("SC", "SOUTH CAROLINA"),
            ("SD", "SOUTH DAKOTA"),
            ("TN", "TENNESSEE"),
            ("TX", "TEXAS"),
            ("UT", "UTAH"),
            ("VT", "VERMONT"),
            ("VA", "VIRGINIA"),
            ("WA", "WASHINGTON"),
            ("WV", "WEST VIRGINIA"),
            ("WI", "WISCONSIN"),
            ("WY", "WYOMING"),
            ("DC", "DISTRICT OF COLUMBIA"),
            ("D.C.", "DISTRICT OF COLUMBIA"),
            ("WASHINGTON DC", "DISTRICT OF COLUMBIA"),
            ("WASHINGTON D.C.", "DISTRICT OF COLUMBIA"),
        ];

        let mut map = HashMap::with_capacity(ABBREVIATION_TO_NAME.len());
        for (abbreviation, full_name) in ABBREVIATION_TO_NAME {
            map.insert(normalize_state(abbreviation), *full_name);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(raw: &str) -> String {
    canonical_state_name(raw)
}
