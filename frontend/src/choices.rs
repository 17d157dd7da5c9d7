//! Option lists for the select fields: (value, label).

pub const GARBAGE_LEVELS: &[(&str, &str)] = &[
    ("low", "Low - bin partly full"),
    ("medium", "Medium - bin full"),
    ("high", "High - overflowing"),
    ("critical", "Critical - spilling onto the road"),
];

pub const GARBAGE_TYPES: &[(&str, &str)] = &[
    ("organic", "Organic / wet waste"),
    ("recyclable", "Recyclable (paper, plastic, metal)"),
    ("electronic", "Electronic waste"),
    ("construction", "Construction debris"),
    ("mixed", "Mixed household waste"),
];
