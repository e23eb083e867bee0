use pdf_email_extract::*;

fn config() -> ParserConfig {
    ParserConfig::default()
}

// --- Detection ---

#[test]
fn test_find_start_first_line() {
    let lines = ["From: a@x.com", "Date: 2021-03-25"];
    assert_eq!(find_header_start(&lines, &config()), Some(0));
}

#[test]
fn test_find_start_after_preamble() {
    let lines = ["", "Printed by Yogi Bear", "", "From: a@x.com"];
    assert_eq!(find_header_start(&lines, &config()), Some(3));
}

#[test]
fn test_find_start_ignores_colon_past_column_bound() {
    // colon at character 19
    let lines = ["               From: a@x.com"];
    assert_eq!(find_header_start(&lines, &config()), None);
}

#[test]
fn test_find_start_column_bound() {
    // colon at index 13, the last searched character
    let lines = ["Subject      : picnic"];
    assert_eq!(find_header_start(&lines, &config()), Some(0));

    // colon at index 14
    let lines = ["Subject       : picnic"];
    assert_eq!(find_header_start(&lines, &config()), None);
}

#[test]
fn test_find_start_ignores_unrecognized_label() {
    let lines = ["Status: Urgent", "Note: read me"];
    assert_eq!(find_header_start(&lines, &config()), None);
}

#[test]
fn test_find_start_ignores_prose_with_late_colon() {
    let lines = ["Here is what the ranger said: from now on, no picnics"];
    assert_eq!(find_header_start(&lines, &config()), None);
}

#[test]
fn test_find_start_line_depth_bound() {
    let mut lines = vec![""; 11];
    lines.push("From: a@x.com");
    assert_eq!(find_header_start(&lines, &config()), Some(11));

    let mut lines = vec![""; 12];
    lines.push("From: a@x.com");
    assert_eq!(find_header_start(&lines, &config()), None);
}

#[test]
fn test_find_start_custom_bounds() {
    let lines = ["", "", "From: a@x.com"];
    let config = ParserConfig {
        max_start_line: 2,
        max_colon_column: 14,
    };
    assert_eq!(find_header_start(&lines, &config), None);
}

#[test]
fn test_find_start_ocr_spaced_label() {
    let lines = ["S u b j e c t: picnic"];
    assert_eq!(find_header_start(&lines, &config()), Some(0));
}

#[test]
fn test_find_start_empty_page() {
    let lines: [&str; 0] = [];
    assert_eq!(find_header_start(&lines, &config()), None);
}

// --- Scanning ---

#[test]
fn test_scan_from_and_date() {
    let lines = ["From: a@x.com", "Date: 2021-03-25"];
    let fields = scan_header(&lines, 0);

    assert_eq!(fields.get(FieldToken::From), "a@x.com");
    assert_eq!(fields.get(FieldToken::Date), "2021-03-25");
    assert_eq!(fields.begin_ln, 1);
    assert_eq!(fields.end_ln, 2);
}

#[test]
fn test_scan_stops_at_blank_line() {
    let lines = ["", "From: a@x.com", "Date: 2021-03-25", "   ", "Subject: body text"];
    let fields = scan_header(&lines, 1);

    assert_eq!(fields.begin_ln, 2);
    assert_eq!(fields.end_ln, 3);
    assert_eq!(fields.get(FieldToken::Subject), "");
}

#[test]
fn test_scan_wrapped_value_no_separator() {
    let lines = ["To: alice@x.com,", "  bob@x.com"];
    let fields = scan_header(&lines, 0);

    assert_eq!(fields.get(FieldToken::To), "alice@x.com,  bob@x.com");
    assert_eq!(fields.end_ln, 2);
}

#[test]
fn test_scan_unprocessed_line_does_not_stop_scan() {
    let lines = ["From: a@x.com", "Status: Urgent", "Subject: picnic", "Date: 2021-03-25"];
    let fields = scan_header(&lines, 0);

    assert_eq!(fields.unprocessed, vec!["Status: Urgent".to_string()]);
    assert_eq!(fields.get(FieldToken::Subject), "picnic");
    assert_eq!(fields.get(FieldToken::Date), "2021-03-25");
}

#[test]
fn test_scan_drops_continuation_after_unprocessed() {
    let lines = ["From: a@x.com", "Status: Urgent", "very urgent", "Date: d"];
    let fields = scan_header(&lines, 0);

    assert_eq!(fields.get(FieldToken::From), "a@x.com");
    assert_eq!(fields.unprocessed.len(), 1);
}

#[test]
fn test_scan_later_value_overwrites() {
    let lines = ["To: first@x.com", "To: second@x.com"];
    let fields = scan_header(&lines, 0);

    assert_eq!(fields.get(FieldToken::To), "second@x.com");
}

#[test]
fn test_scan_value_keeps_later_colons() {
    let lines = ["Date: Thursday, March 25, 2021 06:16:10 AM"];
    let fields = scan_header(&lines, 0);

    assert_eq!(
        fields.get(FieldToken::Date),
        "Thursday, March 25, 2021 06:16:10 AM"
    );
}

#[test]
fn test_raw_fields_read_does_not_insert() {
    let fields = RawHeaderFields::default();
    assert_eq!(fields.get(FieldToken::Cc), "");
    assert_eq!(fields, RawHeaderFields::default());
}

// --- Validation ---

#[test]
fn test_validate_requires_from_and_date() {
    let mut fields = RawHeaderFields::default();
    fields.set(FieldToken::From, "a@x.com");
    assert!(validate_header(fields.clone()).is_none());

    fields.set(FieldToken::Date, "2021-03-25");
    let header = validate_header(fields).unwrap();
    assert_eq!(header.from_email, "a@x.com");
    assert_eq!(header.date.as_deref(), Some("2021-03-25"));
}

#[test]
fn test_validate_sent_fallback() {
    let mut fields = RawHeaderFields::default();
    fields.set(FieldToken::From, "a@x.com");
    fields.set(FieldToken::Sent, "Monday, May 3, 2021 9:00 AM");

    let header = validate_header(fields).unwrap();
    assert_eq!(header.date.as_deref(), Some("Monday, May 3, 2021 9:00 AM"));
}

#[test]
fn test_validate_date_wins_over_sent() {
    let mut fields = RawHeaderFields::default();
    fields.set(FieldToken::From, "a@x.com");
    fields.set(FieldToken::Date, "2021-03-25");
    fields.set(FieldToken::Sent, "2020-01-01");

    let header = validate_header(fields).unwrap();
    assert_eq!(header.date.as_deref(), Some("2021-03-25"));
}

#[test]
fn test_validate_missing_from_is_false_positive() {
    let mut fields = RawHeaderFields::default();
    fields.set(FieldToken::To, "b@x.com");
    fields.set(FieldToken::Date, "2021-03-25");
    assert!(validate_header(fields).is_none());
}

#[test]
fn test_validate_absent_optional_fields() {
    let mut fields = RawHeaderFields::default();
    fields.set(FieldToken::From, "a@x.com");
    fields.set(FieldToken::Date, "2021-03-25");

    let header = validate_header(fields).unwrap();
    assert!(header.to.is_empty());
    assert!(header.cc.is_empty());
    assert!(header.bcc.is_empty());
    assert!(header.attachments.is_empty());
    assert!(header.subject.is_none());
    assert!(header.importance.is_none());
    assert!(header.unprocessed.is_empty());
}

#[test]
fn test_parse_header_full() {
    let lines = [
        "From:        Yogi Bear <yogi.bear@cartoon.com>",
        "Sent:        Thursday, March 25, 2021 06:16:10 AM",
        "To:          booboo.bear@cartoon.com; ranger.smith@parks.gov",
        "Cc:          cindy.bear@cartoon.com",
        "Subject:     this afternoon",
        "Importance:  High",
        "Attachments: map.pdf",
        "",
        "Hi Booboo",
    ];
    let header = parse_header(&lines, &config()).unwrap();

    assert_eq!(header.begin_ln, 1);
    assert_eq!(header.end_ln, 7);
    assert_eq!(header.subject.as_deref(), Some("this afternoon"));
    assert_eq!(header.importance.as_deref(), Some("High"));
    assert_eq!(header.attachments, vec!["map.pdf".to_string()]);
    assert_eq!(header.sender_address(), Some("yogi.bear@cartoon.com"));
    assert_eq!(
        header.recipient_addresses(),
        vec![
            "booboo.bear@cartoon.com".to_string(),
            "ranger.smith@parks.gov".to_string(),
            "cindy.bear@cartoon.com".to_string(),
        ]
    );
}

#[test]
fn test_parsed_date_formats() {
    let mut fields = RawHeaderFields::default();
    fields.set(FieldToken::From, "a@x.com");
    fields.set(FieldToken::Date, "Thursday, March 25, 2021 06:16:10 AM");
    let header = validate_header(fields.clone()).unwrap();
    assert_eq!(
        header.parsed_date().unwrap().to_string(),
        "2021-03-25 06:16:10"
    );

    fields.set(FieldToken::Date, "2021-03-25");
    let header = validate_header(fields.clone()).unwrap();
    assert_eq!(
        header.parsed_date().unwrap().to_string(),
        "2021-03-25 00:00:00"
    );

    fields.set(FieldToken::Date, "sometime last spring");
    let header = validate_header(fields).unwrap();
    assert!(header.parsed_date().is_none());
}
