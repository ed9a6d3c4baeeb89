use chrono::{DateTime, Utc};
use uuid::Uuid;

pub type Id = String;

pub type Timestamp = DateTime<Utc>;

pub fn generate_id() -> Id {
    Uuid::new_v4().to_string()
}

pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = generate_id();
        let b = generate_id();

        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
