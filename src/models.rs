use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of application statuses. The server stores these as plain
/// strings, so the serde names must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Status {
    Applied,
    Interview,
    Offer,
    Rejected,
}

/// Fixed chart/legend order.
pub const STATUS_ORDER: [Status; 4] = [
    Status::Applied,
    Status::Interview,
    Status::Offer,
    Status::Rejected,
];

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }

    /// Next status in display order, wrapping around.
    pub fn next(&self) -> Status {
        match self {
            Status::Applied => Status::Interview,
            Status::Interview => Status::Offer,
            Status::Offer => Status::Rejected,
            Status::Rejected => Status::Applied,
        }
    }

    pub fn prev(&self) -> Status {
        match self {
            Status::Applied => Status::Rejected,
            Status::Interview => Status::Applied,
            Status::Offer => Status::Interview,
            Status::Rejected => Status::Offer,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record as the server returns it. `id` is assigned server-side and
/// never regenerated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: i64,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub date_applied: String,
    pub status: Status,
    pub notes: Option<String>,
}

/// Payload for creating a record. The server assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub date_applied: String,
    pub status: Status,
    pub notes: String,
}

impl NewApplication {
    /// Company, role and date are all required; nothing is sent until they
    /// pass.
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty()
            || self.role.trim().is_empty()
            || self.date_applied.trim().is_empty()
        {
            bail!("Please fill in company, role and date applied");
        }
        if NaiveDate::parse_from_str(self.date_applied.trim(), "%Y-%m-%d").is_err() {
            bail!(
                "Invalid date '{}' (expected YYYY-MM-DD)",
                self.date_applied.trim()
            );
        }
        Ok(())
    }
}

/// The two fields this client may change after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationPatch {
    pub status: Status,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app() -> NewApplication {
        NewApplication {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            date_applied: "2026-03-05".to_string(),
            status: Status::Applied,
            notes: String::new(),
        }
    }

    #[test]
    fn valid_application_passes() {
        assert!(new_app().validate().is_ok());
    }

    #[test]
    fn empty_company_is_rejected() {
        let mut app = new_app();
        app.company = "   ".to_string();
        assert!(app.validate().is_err());
    }

    #[test]
    fn missing_date_is_rejected() {
        let mut app = new_app();
        app.date_applied = String::new();
        assert!(app.validate().is_err());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut app = new_app();
        app.date_applied = "next tuesday".to_string();
        assert!(app.validate().is_err());
    }

    #[test]
    fn status_serializes_to_server_names() {
        assert_eq!(
            serde_json::to_string(&Status::Interview).unwrap(),
            "\"Interview\""
        );
        let parsed: Status = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(parsed, Status::Rejected);
    }

    #[test]
    fn status_cycle_wraps() {
        assert_eq!(Status::Rejected.next(), Status::Applied);
        let mut s = Status::Applied;
        for _ in 0..4 {
            s = s.next();
        }
        assert_eq!(s, Status::Applied);
    }
}
