/// Ordered synonym table applied as plain substring replacement. Order is
/// load-bearing: multi-word phrases must sit before their own substrings
/// ("head of department" before "head"), and later rules see the partially
/// rewritten string. Partial matches inside unrelated words are a known,
/// accepted limitation of the substring approach.
const SYNONYMS: &[(&str, &str)] = &[
    ("faculties", "faculty"),
    ("professors", "faculty"),
    ("teachers", "faculty"),
    ("lecturers", "faculty"),
    ("staffs", "staff"),
    ("incharge", "hod"),
    ("head of department", "hod"),
    ("leader", "hod"),
    ("head", "hod"),
    ("dept", "department"),
    ("academic calendar", "calendar"),
    ("calendar of events", "calendar"),
    ("event calendar", "calendar"),
    ("events calendar", "calendar"),
    ("time table", "timetable"),
    ("time-table", "timetable"),
    ("fees", "fee"),
    ("examination", "exam"),
    ("7th sem", "seventh semester"),
    ("7th semester", "seventh semester"),
    ("7 th sem", "seventh semester"),
];

/// Lowercase, trim, and rewrite known synonym phrases to canonical tokens.
pub fn normalize_text(query: &str) -> String {
    let mut q = query.trim().to_lowercase();
    for (phrase, canonical) in SYNONYMS {
        if q.contains(phrase) {
            q = q.replace(phrase, canonical);
        }
    }
    q
}
