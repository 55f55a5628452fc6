#[cfg(test)]
mod tests {
    use crate::logic::{derive_window, missing_fields, BookingRequest, EVENT_DURATION_MINUTES};
    use chrono::{Duration, NaiveDate};

    fn request() -> BookingRequest {
        BookingRequest {
            service: "Home Cleaning".to_string(),
            date: "2024-06-01".to_string(),
            time: "10:00".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_window_is_exactly_one_hour() {
        let (start, end) = derive_window("2024-06-01", "10:00").unwrap();

        assert_eq!(
            start,
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        assert_eq!(end - start, Duration::minutes(EVENT_DURATION_MINUTES));
        assert_eq!(end - start, Duration::seconds(3600));
    }

    #[test]
    fn test_window_rolls_over_midnight() {
        // 23:30 must produce an end time on the following calendar day
        let (start, end) = derive_window("2024-06-01", "23:30").unwrap();

        assert_eq!(end - start, Duration::seconds(3600));
        assert_eq!(
            end,
            NaiveDate::from_ymd_opt(2024, 6, 2)
                .unwrap()
                .and_hms_opt(0, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_window_accepts_seconds_in_time() {
        let (start, end) = derive_window("2024-06-01", "10:00:00").unwrap();
        assert_eq!(end - start, Duration::seconds(3600));
        assert_eq!(start.format("%H:%M:%S").to_string(), "10:00:00");
    }

    #[test]
    fn test_window_rejects_garbage() {
        assert!(derive_window("first of june", "10:00").is_err());
        assert!(derive_window("2024-06-01", "ten").is_err());
    }

    #[test]
    fn test_complete_request_has_no_missing_fields() {
        assert!(missing_fields(&request()).is_empty());
    }

    #[test]
    fn test_empty_fields_are_reported_in_field_order() {
        let mut req = request();
        req.service = String::new();
        req.email = "   ".to_string(); // whitespace counts as missing

        assert_eq!(missing_fields(&req), vec!["service", "email"]);
    }

    #[test]
    fn test_absent_json_fields_deserialize_to_empty() {
        let req: BookingRequest =
            serde_json::from_str(r#"{ "date": "2024-06-01", "time": "10:00" }"#).unwrap();

        assert_eq!(missing_fields(&req), vec!["service", "email"]);
    }
}
