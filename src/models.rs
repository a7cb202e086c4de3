use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct College {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub ranking: u32,
    pub students: u32,
    pub tuition_fee: &'static str,
    pub programs: &'static [&'static str],
    pub rating: f32,
    pub description: &'static str,
    pub admission_rate: &'static str,
    pub established_year: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Counsellor {
    pub id: u32,
    pub name: &'static str,
    pub specializations: &'static [&'static str],
    pub experience_years: u32,
    pub rating: f32,
    pub reviews: u32,
    pub location: &'static str,
    pub languages: &'static [&'static str],
    pub availability: &'static str,
    pub hourly_rate: &'static str,
    pub description: &'static str,
    pub education: &'static str,
    pub consultation_modes: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scholarship {
    pub id: u32,
    pub title: &'static str,
    pub amount: &'static str,
    /// ISO calendar date, e.g. `2024-03-15`.
    pub deadline: &'static str,
    pub eligibility: &'static [&'static str],
    pub provider: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub requirements: &'static [&'static str],
}

impl Scholarship {
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.deadline, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub career_options: &'static [&'static str],
    pub average_salary: &'static str,
    pub skills: &'static [&'static str],
    pub eligibility: &'static [&'static str],
    pub popular_colleges: &'static [&'static str],
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Sender::Ai, text)
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
