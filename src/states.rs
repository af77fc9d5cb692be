//! FIPS state codes as used in the FARS STATE column.
//!
//! Covers the 50 states, DC, Puerto Rico (43) and the Virgin Islands (52).

/// `(code, abbreviation, name)` ordered by code.
const STATES: &[(u32, &str, &str)] = &[
    (1, "AL", "Alabama"),
    (2, "AK", "Alaska"),
    (4, "AZ", "Arizona"),
    (5, "AR", "Arkansas"),
    (6, "CA", "California"),
    (8, "CO", "Colorado"),
    (9, "CT", "Connecticut"),
    (10, "DE", "Delaware"),
    (11, "DC", "District of Columbia"),
    (12, "FL", "Florida"),
    (13, "GA", "Georgia"),
    (15, "HI", "Hawaii"),
    (16, "ID", "Idaho"),
    (17, "IL", "Illinois"),
    (18, "IN", "Indiana"),
    (19, "IA", "Iowa"),
    (20, "KS", "Kansas"),
    (21, "KY", "Kentucky"),
    (22, "LA", "Louisiana"),
    (23, "ME", "Maine"),
    (24, "MD", "Maryland"),
    (25, "MA", "Massachusetts"),
    (26, "MI", "Michigan"),
    (27, "MN", "Minnesota"),
    (28, "MS", "Mississippi"),
    (29, "MO", "Missouri"),
    (30, "MT", "Montana"),
    (31, "NE", "Nebraska"),
    (32, "NV", "Nevada"),
    (33, "NH", "New Hampshire"),
    (34, "NJ", "New Jersey"),
    (35, "NM", "New Mexico"),
    (36, "NY", "New York"),
    (37, "NC", "North Carolina"),
    (38, "ND", "North Dakota"),
    (39, "OH", "Ohio"),
    (40, "OK", "Oklahoma"),
    (41, "OR", "Oregon"),
    (42, "PA", "Pennsylvania"),
    (43, "PR", "Puerto Rico"),
    (44, "RI", "Rhode Island"),
    (45, "SC", "South Carolina"),
    (46, "SD", "South Dakota"),
    (47, "TN", "Tennessee"),
    (48, "TX", "Texas"),
    (49, "UT", "Utah"),
    (50, "VT", "Vermont"),
    (51, "VA", "Virginia"),
    (52, "VI", "Virgin Islands"),
    (53, "WA", "Washington"),
    (54, "WV", "West Virginia"),
    (55, "WI", "Wisconsin"),
    (56, "WY", "Wyoming"),
];

fn lookup(code: u32) -> Option<&'static (u32, &'static str, &'static str)> {
    STATES
        .binary_search_by_key(&code, |(c, _, _)| *c)
        .ok()
        .map(|i| &STATES[i])
}

/// Full name for a state code, e.g. `6` → `"California"`.
#[must_use]
pub fn state_name(code: u32) -> Option<&'static str> {
    lookup(code).map(|(_, _, name)| *name)
}

/// Two-letter postal abbreviation for a state code.
#[must_use]
pub fn state_abbr(code: u32) -> Option<&'static str> {
    lookup(code).map(|(_, abbr, _)| *abbr)
}

/// Human label for plot captions and listings; falls back to the bare code.
pub fn state_label(code: u32) -> String {
    match state_name(code) {
        Some(name) => name.to_string(),
        None => format!("state {code}"),
    }
}
