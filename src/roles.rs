use std::fmt;
use std::str::FromStr;

use colored::{ColoredString, Colorize};

use crate::error::PortalError;

pub const INVALID_ROLE_NOTICE: &str = "Invalid role selected. Please return to the homepage.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Teacher,
    Counsellor,
    Ngo,
    College,
    Admin,
}

/// Theme accent shared by the role card, login and registration headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Accent,
    Success,
}

impl Accent {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Accent::Primary => text.bold().cyan(),
            Accent::Secondary => text.bold().magenta(),
            Accent::Accent => text.bold().yellow(),
            Accent::Success => text.bold().green(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Phone,
    LongText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField { name, label, kind }
}

const NAME: FormField = field("name", "Full Name", FieldKind::Text);
const EMAIL: FormField = field("email", "Email Address", FieldKind::Email);
const PASSWORD: FormField = field("password", "Password", FieldKind::Password);
const PHONE: FormField = field("phone", "Phone Number", FieldKind::Phone);
const EXPERIENCE: FormField = field("experience", "Years of Experience", FieldKind::Text);
const ADDRESS: FormField = field("address", "Address", FieldKind::LongText);

const STUDENT_FIELDS: &[FormField] = &[
    NAME,
    EMAIL,
    PASSWORD,
    PHONE,
    field("school", "School/Institution", FieldKind::Text),
    field("grade", "Grade/Class", FieldKind::Text),
];

const TEACHER_FIELDS: &[FormField] = &[
    NAME,
    EMAIL,
    PASSWORD,
    PHONE,
    field("school", "School/Institution", FieldKind::Text),
    field("subjects", "Subjects Taught", FieldKind::Text),
    EXPERIENCE,
];

const COUNSELLOR_FIELDS: &[FormField] = &[
    NAME,
    EMAIL,
    PASSWORD,
    PHONE,
    field("organization", "Organization", FieldKind::Text),
    field("specialization", "Specialization", FieldKind::Text),
    EXPERIENCE,
];

const NGO_FIELDS: &[FormField] = &[
    field("organizationName", "Organization Name", FieldKind::Text),
    EMAIL,
    PASSWORD,
    PHONE,
    ADDRESS,
    field("description", "Description", FieldKind::LongText),
    field("focusArea", "Focus Area", FieldKind::Text),
];

const COLLEGE_FIELDS: &[FormField] = &[
    field("collegeName", "College Name", FieldKind::Text),
    EMAIL,
    PASSWORD,
    PHONE,
    ADDRESS,
    field("courses", "Courses Offered", FieldKind::LongText),
    field("accreditation", "Accreditation", FieldKind::Text),
];

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Student,
        Role::Teacher,
        Role::Counsellor,
        Role::Ngo,
        Role::College,
        Role::Admin,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Counsellor => "counsellor",
            Role::Ngo => "ngo",
            Role::College => "college",
            Role::Admin => "admin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Counsellor => "Counsellor",
            Role::Ngo => "NGO",
            Role::College => "College",
            Role::Admin => "Admin",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::Student => "Discover your career path with AI guidance and expert counseling",
            Role::Teacher => "Share knowledge and guide students on their academic journey",
            Role::Counsellor => {
                "Provide professional guidance to help students make informed decisions"
            }
            Role::Ngo => "Connect with students and promote educational initiatives",
            Role::College => "Showcase your institution and attract quality students",
            Role::Admin => "Manage platform operations and user permissions",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Role::Student | Role::College => Accent::Primary,
            Role::Teacher | Role::Admin => Accent::Secondary,
            Role::Counsellor => Accent::Accent,
            Role::Ngo => Accent::Success,
        }
    }

    pub fn login_title(self) -> String {
        format!("{} Login", self.title())
    }

    pub fn dashboard_path(self) -> String {
        format!("/{}/dashboard", self.slug())
    }

    pub fn login_path(self) -> String {
        format!("/login/{}", self.slug())
    }

    pub fn register_path(self) -> String {
        format!("/register/{}", self.slug())
    }

    /// Registration form fields; admins are provisioned, not registered.
    pub fn registration_fields(self) -> Option<&'static [FormField]> {
        match self {
            Role::Student => Some(STUDENT_FIELDS),
            Role::Teacher => Some(TEACHER_FIELDS),
            Role::Counsellor => Some(COUNSELLOR_FIELDS),
            Role::Ngo => Some(NGO_FIELDS),
            Role::College => Some(COLLEGE_FIELDS),
            Role::Admin => None,
        }
    }

    pub fn registration_title(self) -> Option<String> {
        self.registration_fields()
            .map(|_| format!("{} Registration", self.title()))
    }

    /// Mock sign-in: any submission lands on the role's dashboard.
    pub fn login(self, email: &str, _password: &str) -> String {
        tracing::info!(role = self.slug(), email, "mock login");
        self.dashboard_path()
    }

    /// Mock sign-up. Returns the login path to continue to.
    pub fn register(self, password: &str, confirm_password: &str) -> Result<String, PortalError> {
        if self.registration_fields().is_none() {
            return Err(PortalError::RegistrationUnavailable(self.title()));
        }
        if password != confirm_password {
            return Err(PortalError::PasswordMismatch);
        }
        tracing::info!(role = self.slug(), "mock registration");
        Ok(self.login_path())
    }
}

impl FromStr for Role {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.slug() == s)
            .ok_or_else(|| PortalError::InvalidRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.slug().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_or_differently_cased_roles_are_rejected() {
        assert_eq!(
            "principal".parse::<Role>(),
            Err(PortalError::InvalidRole("principal".to_string()))
        );
        assert!("Student".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn login_metadata() {
        assert_eq!(Role::Ngo.login_title(), "NGO Login");
        assert_eq!(Role::Counsellor.dashboard_path(), "/counsellor/dashboard");
        assert_eq!(Role::Admin.login("a@b.c", "x"), "/admin/dashboard");
        assert_eq!(Role::Counsellor.accent(), Accent::Accent);
        assert_eq!(Role::Ngo.accent(), Accent::Success);
    }

    #[test]
    fn every_form_asks_for_credentials() {
        for role in Role::ALL {
            let Some(fields) = role.registration_fields() else {
                assert_eq!(role, Role::Admin);
                continue;
            };
            for required in ["email", "password", "phone"] {
                assert!(
                    fields.iter().any(|f| f.name == required),
                    "{role} is missing {required}"
                );
            }
        }
    }

    #[test]
    fn registration_checks_password_confirmation() {
        assert_eq!(
            Role::Student.register("secret", "secret"),
            Ok("/login/student".to_string())
        );
        assert_eq!(
            Role::Student.register("secret", "other"),
            Err(PortalError::PasswordMismatch)
        );
        assert_eq!(
            Role::Admin.register("secret", "secret"),
            Err(PortalError::RegistrationUnavailable("Admin"))
        );
    }
}
