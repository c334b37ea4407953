pub fn greeting_object_key(timestamp: &str) -> String {
    format!("hello_world_{timestamp}.txt")
}

pub fn greeting_body(timestamp: &str) -> String {
    format!("Hello mole! it is {timestamp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_greeting_key_from_timestamp() {
        let key = greeting_object_key("2026-02-14 09:30:05");
        assert_eq!(key, "hello_world_2026-02-14 09:30:05.txt");
    }

    #[test]
    fn builds_greeting_body_from_timestamp() {
        let body = greeting_body("2026-02-14 09:30:05");
        assert_eq!(body, "Hello mole! it is 2026-02-14 09:30:05");
    }

    #[test]
    fn key_and_body_share_the_timestamp_verbatim() {
        let timestamp = "2026-02-14 23:59:59";
        let key = greeting_object_key(timestamp);
        let body = greeting_body(timestamp);

        let key_timestamp = key
            .strip_prefix("hello_world_")
            .and_then(|rest| rest.strip_suffix(".txt"))
            .expect("key should carry the timestamp between prefix and suffix");
        let body_timestamp = body
            .strip_prefix("Hello mole! it is ")
            .expect("body should carry the timestamp after the greeting");

        assert_eq!(key_timestamp, body_timestamp);
    }
}
