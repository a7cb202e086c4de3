use crate::roles::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Raw role parameter; the page decides whether it is valid.
    Login(String),
    Register(String),
    StudentDashboard,
    CareerChat,
    ScholarshipSearch,
    CollegeSearch,
    Counsellors,
    Streams,
    NotFound(String),
}

impl Route {
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login", role] => Route::Login(role.to_string()),
            ["register", role] => Route::Register(role.to_string()),
            ["student", "dashboard"] => Route::StudentDashboard,
            ["student", "career-ai"] => Route::CareerChat,
            ["student", "scholarship-ai"] => Route::ScholarshipSearch,
            ["student", "colleges"] => Route::CollegeSearch,
            ["student", "counsellors"] => Route::Counsellors,
            ["student", "streams"] => Route::Streams,
            _ => {
                tracing::warn!(path = trimmed, "404: user attempted to access non-existent route");
                Route::NotFound(trimmed.to_string())
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login(role) => format!("/login/{role}"),
            Route::Register(role) => format!("/register/{role}"),
            Route::StudentDashboard => "/student/dashboard".to_string(),
            Route::CareerChat => "/student/career-ai".to_string(),
            Route::ScholarshipSearch => "/student/scholarship-ai".to_string(),
            Route::CollegeSearch => "/student/colleges".to_string(),
            Route::Counsellors => "/student/counsellors".to_string(),
            Route::Streams => "/student/streams".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn role_param(&self) -> Option<Result<Role, crate::error::PortalError>> {
        match self {
            Route::Login(role) | Route::Register(role) => Some(role.parse()),
            _ => None,
        }
    }
}
