use super::*;

// =============================================================
// Student wire format
// =============================================================

#[test]
fn student_deserializes_backend_field_names() {
    let json = serde_json::json!({
        "studentUSN": "1CS20CS001",
        "studentName": "Asha Rao",
        "isLateralEntry": false,
        "branch": "CS",
        "className": "3A",
        "subject": "OS"
    });
    let s: Student = serde_json::from_value(json).expect("student");
    assert_eq!(s.student_usn, "1CS20CS001");
    assert_eq!(s.student_name, "Asha Rao");
    assert!(!s.is_lateral_entry);
    assert_eq!(s.class_name, "3A");
}

#[test]
fn student_scoping_fields_default_when_absent() {
    let json = serde_json::json!({
        "studentUSN": "1A",
        "studentName": "B",
        "isLateralEntry": true
    });
    let s: Student = serde_json::from_value(json).expect("student");
    assert!(s.branch.is_empty());
    assert!(s.class_name.is_empty());
    assert!(s.subject.is_empty());
}

#[test]
fn student_list_response_unwraps_students_key() {
    let json = serde_json::json!({
        "students": [
            {"studentUSN": "1A", "studentName": "A", "isLateralEntry": false},
            {"studentUSN": "1B", "studentName": "B", "isLateralEntry": true}
        ]
    });
    let resp: StudentListResponse = serde_json::from_value(json).expect("list");
    assert_eq!(resp.students.len(), 2);
    assert_eq!(resp.students[1].student_usn, "1B");
}

// =============================================================
// FilterCriteria
// =============================================================

#[test]
fn criteria_complete_requires_all_three_fields() {
    let full = FilterCriteria {
        branch: "CS".to_owned(),
        class_name: "3A".to_owned(),
        subject: "OS".to_owned(),
    };
    assert!(full.is_complete());

    for blank in [
        FilterCriteria { branch: String::new(), ..full.clone() },
        FilterCriteria { class_name: String::new(), ..full.clone() },
        FilterCriteria { subject: String::new(), ..full.clone() },
    ] {
        assert!(!blank.is_complete());
    }
}

#[test]
fn criteria_serializes_class_name_as_camel_case() {
    let c = FilterCriteria {
        branch: "CS".to_owned(),
        class_name: "3A".to_owned(),
        subject: "OS".to_owned(),
    };
    let v = serde_json::to_value(&c).expect("json");
    assert_eq!(v["className"], "3A");
    assert!(v.get("class_name").is_none());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn update_request_serializes_backend_field_names() {
    let req = UpdateStudentRequest {
        student_usn: "1A".to_owned(),
        student_name: "New Name".to_owned(),
        is_lateral_entry: true,
    };
    let v = serde_json::to_value(&req).expect("json");
    assert_eq!(v["studentUSN"], "1A");
    assert_eq!(v["studentName"], "New Name");
    assert_eq!(v["isLateralEntry"], true);
}

#[test]
fn delete_request_carries_only_the_key() {
    let req = DeleteStudentRequest { student_usn: "1A".to_owned() };
    let v = serde_json::to_value(&req).expect("json");
    assert_eq!(v, serde_json::json!({"studentUSN": "1A"}));
}
