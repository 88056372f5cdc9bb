use duolist_state::Record;

/// Keep the records whose first name, last name or email contains `query`,
/// ignoring case.
///
/// This only narrows the page that was fetched; matches on other pages are
/// not found here.
pub fn post_filter(records: Vec<Record>, query: Option<&str>) -> Vec<Record> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return records;
    };
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

fn matches(record: &Record, needle: &str) -> bool {
    [&record.first_name, &record.last_name, &record.email]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use duolist_state::RecordId;

    fn person(first: &str, last: &str, email: &str) -> Record {
        Record {
            id: RecordId::Number(1),
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            tagline: String::new(),
            comment: "jane is mentioned here".into(),
        }
    }

    #[test]
    fn matches_any_name_field_case_insensitively() {
        let records = vec![
            person("Jane", "Doe", "jd@example.com"),
            person("Mary", "Janeway", "mj@example.com"),
            person("Bob", "Smith", "JANE.fan@example.com"),
            person("Alice", "Brown", "ab@example.com"),
        ];
        let kept = post_filter(records, Some("jane"));
        let names: Vec<_> = kept.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Jane", "Mary", "Bob"]);
    }

    #[test]
    fn comment_is_not_searched() {
        let kept = post_filter(vec![person("Alice", "Brown", "ab@example.com")], Some("jane"));
        assert!(kept.is_empty());
    }

    #[test]
    fn no_query_keeps_everything() {
        let records = vec![person("A", "B", "c"), person("D", "E", "f")];
        assert_eq!(post_filter(records.clone(), None), records);
        assert_eq!(post_filter(records.clone(), Some("")), records);
    }
}
