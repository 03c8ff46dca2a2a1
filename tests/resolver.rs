use campusdesk::resolver::FALLBACK_ANSWER;
use campusdesk::{KnowledgeBase, Resolver};

fn resolver() -> Resolver {
    let kb: KnowledgeBase =
        serde_json::from_str(include_str!("../data/knowledge_base.json")).unwrap();
    Resolver::new(kb)
}

#[test]
fn vice_principal_query() {
    let answer = resolver().resolve("Vice principal");
    assert!(
        answer.starts_with("Vice Principal: Dr. M. Iyer"),
        "unexpected answer: {answer}"
    );
}

#[test]
fn principal_query_includes_detail() {
    let answer = resolver().resolve("Who is the principal");
    assert!(answer.starts_with("Principal: Dr. S. Rao"));
    assert!(answer.contains("Specialization: Power Systems"));
    assert!(answer.contains("Contact: principal@acme.edu"));
}

#[test]
fn cse_hod_query() {
    let answer = resolver().resolve("CSE HOD");
    assert_eq!(answer, "HOD of Computer Science and Engineering: Dr. K. Prasad");
}

#[test]
fn hod_without_department_prompts() {
    let answer = resolver().resolve("Who is the HOD");
    assert_eq!(answer, "Please specify a valid department for HOD information.");
}

#[test]
fn faculty_listing() {
    let answer = resolver().resolve("CSE faculty");
    assert_eq!(
        answer,
        "Computer Science and Engineering Faculty Members: \
         Prof. A. Kulkarni, Prof. B. Shetty, Prof. C. Nair"
    );
}

#[test]
fn monday_timetable_section_a() {
    let answer = resolver().resolve("Monday timetable for 7th sem A");
    // Monday in section A has five periods; the single-day header stops at P5
    // even though Wednesday is wider.
    assert!(answer.contains("<th>P5</th>"), "unexpected answer: {answer}");
    assert!(!answer.contains("<th>P6</th>"));
    assert!(answer.contains("Monday - 7th Sem A"));
    assert!(answer.contains("<td>IoT</td>"));
}

#[test]
fn full_week_timetable_section_b() {
    let answer = resolver().resolve("Show section b timetable");
    assert!(answer.contains("7th Semester B Timetable"), "unexpected answer: {answer}");
    // Widest row in section B has four periods; every data row is padded to it.
    assert!(answer.contains("<th>P4</th>"));
    assert!(!answer.contains("<th>P5</th>"));
    for row in answer.split("<tr>").skip(2) {
        assert_eq!(row.matches("<td>").count(), 5, "row not padded: {row}");
    }
}

#[test]
fn general_fee_query_has_no_department_breakdown() {
    let answer = resolver().resolve("Exam fee last date?");
    assert_eq!(
        answer,
        "Tuition Last Date: 10 Aug 2025 | Exam Fee Last Date: 25 Aug 2025 | \
         Payment via: https://pay.acme.edu"
    );
}

#[test]
fn department_fee_query_includes_breakdown() {
    let answer = resolver().resolve("CSE tuition fee");
    assert!(answer.contains("Computer Science and Engineering Tuition: ₹85,000"));
    assert!(answer.contains("Exam Fee Last Date: 25 Aug 2025"));
}

#[test]
fn qna_override_beats_fee_intent() {
    // "fee" keywords would otherwise route this to the fee handler.
    let answer = resolver().resolve("What is the exam fee amount?");
    assert!(answer.starts_with("The exam fee is ₹1,500 for all departments"));
}

#[test]
fn named_calendar_event() {
    let answer = resolver().resolve("When is CIE-1?");
    assert_eq!(answer, "CIE-1: 8 Sep 2025 to 10 Sep 2025.");
}

#[test]
fn calendar_link_request() {
    let answer = resolver().resolve("Academic calendar please");
    assert!(answer.contains("<a href='/calendar'"), "unexpected answer: {answer}");
}

#[test]
fn subject_lookup_by_name() {
    let answer = resolver().resolve("Who teaches IoT?");
    assert_eq!(answer, "18CS71 — IoT | Faculty: Prof. A. Kulkarni | Credits: 4");
}

#[test]
fn facility_detail_and_listing() {
    let desk = resolver();
    let detail = desk.resolve("Where is the library");
    assert!(detail.starts_with("Library — Central Block, Ground Floor"));
    assert!(detail.contains("Hours: 8:00 AM - 8:00 PM"));

    let listing = desk.resolve("What facilities are available");
    assert!(listing.starts_with("Facilities: "));
    assert!(listing.contains("Canteen — Near Block C"));
}

#[test]
fn lab_lookup() {
    let answer = resolver().resolve("Where is the IoT lab?");
    assert!(answer.starts_with("IoT Lab — Block A, 3rd Floor"));
    assert!(answer.contains("Directions: Next to the CSE seminar hall."));
}

#[test]
fn events_listing() {
    let answer = resolver().resolve("Any events this month?");
    assert!(answer.starts_with("Upcoming / scheduled events: "));
    assert!(answer.contains("Orientation Day — 1 Sep 2025 at Main Auditorium"));
}

#[test]
fn college_name_query() {
    let answer = resolver().resolve("What is the name of college?");
    assert_eq!(answer, "This helpdesk is for: Acme Institute of Technology.");
}

#[test]
fn directions_to_unlisted_keyword_facility() {
    let answer = resolver().resolve("Where is the auditorium?");
    assert_eq!(answer, "Auditorium is at Main Block, Ground Floor.");
}

#[test]
fn compound_question_joins_answers_in_order() {
    let answer = resolver().resolve("Who is the principal? Who is the HOD of CSE?");
    let parts: Vec<&str> = answer.split("<br>").collect();
    assert_eq!(parts.len(), 2, "unexpected answer: {answer}");
    assert!(parts[0].starts_with("Principal: Dr. S. Rao"));
    assert_eq!(parts[1], "HOD of Computer Science and Engineering: Dr. K. Prasad");
}

#[test]
fn nonsense_query_falls_back() {
    assert_eq!(resolver().resolve("xyzzy qwerty"), FALLBACK_ANSWER);
}

#[test]
fn empty_query_falls_back() {
    let desk = resolver();
    assert_eq!(desk.resolve(""), FALLBACK_ANSWER);
    assert_eq!(desk.resolve("  ?  "), FALLBACK_ANSWER);
}

#[test]
fn resolution_is_deterministic() {
    let desk = resolver();
    let first = desk.resolve("CSE HOD and ECE faculty");
    for _ in 0..5 {
        assert_eq!(desk.resolve("CSE HOD and ECE faculty"), first);
    }
}
