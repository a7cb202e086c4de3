//! Plain-text rendering of the portal pages.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::career_chat;
use crate::catalog::{MAIN_FEATURES, NOTIFICATIONS, QUICK_STATS, SECONDARY_FEATURES};
use crate::filter::{
    CollegeFilters, CounsellorFilters, FilterCriteria, Listing, ScholarshipFilters, StreamFilters,
};
use crate::models::Sender;
use crate::roles::{Role, INVALID_ROLE_NOTICE};
use crate::routes::Route;
use crate::scholarship_chat;
use crate::transcript::Transcript;
use crate::ui::{ButtonConfig, ButtonSize, ButtonVariant};
use crate::urgency::{days_until, deadline_label, Urgency};

const OUTLINE: ButtonConfig = ButtonConfig::variant(ButtonVariant::Outline);
const PRIMARY: ButtonConfig = ButtonConfig::variant(ButtonVariant::Default);
const HERO: ButtonConfig = ButtonConfig::new(ButtonVariant::Default, ButtonSize::Lg);
const SECONDARY: ButtonConfig = ButtonConfig::variant(ButtonVariant::Secondary);
const LINK: ButtonConfig = ButtonConfig::variant(ButtonVariant::Link);
const DANGER: ButtonConfig = ButtonConfig::new(ButtonVariant::Destructive, ButtonSize::Sm);
const BACK: ButtonConfig = ButtonConfig::new(ButtonVariant::Ghost, ButtonSize::Sm);
const SETTINGS: ButtonConfig = ButtonConfig::new(ButtonVariant::Ghost, ButtonSize::Icon);

pub fn stars(rating: f32) -> String {
    let full = rating.floor() as usize;
    let mut out = "★".repeat(full);
    if rating.fract() != 0.0 {
        out.push('½');
    }
    out
}

fn active_filters<C: FilterCriteria>(output: &mut String, listing: &Listing<C>) {
    let criteria = listing.criteria();
    if criteria.is_default() {
        return;
    }
    let active: Vec<String> = C::KEYS
        .iter()
        .filter_map(|key| {
            criteria
                .get(key)
                .filter(|value| !crate::filter::is_unconstrained(value))
                .map(|value| format!("{key}={value}"))
        })
        .collect();
    let _ = writeln!(
        output,
        "Filters: {} ({} of {} shown)",
        active.join(", "),
        listing.results().len(),
        listing.total()
    );
}

fn empty_state(output: &mut String, noun: &str) {
    let _ = writeln!(output, "No {noun} found");
    let _ = writeln!(output, "Try adjusting your search or filter criteria");
    let _ = writeln!(output, "{}", OUTLINE.paint("Clear Filters"));
}

pub fn render_home() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# CareerPath");
    let _ = writeln!(
        output,
        "Your journey to the right career starts here. Choose your role to get started."
    );
    for role in Role::ALL {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {}", role.accent().paint(role.title()));
        let _ = writeln!(output, "{}", role.description());
        let mut actions = vec![format!("{} {}", HERO.paint("Login"), role.login_path())];
        if role.registration_fields().is_some() {
            actions.push(format!(
                "{} {}",
                SECONDARY.paint("Register"),
                role.register_path()
            ));
        }
        let _ = writeln!(output, "{}", actions.join("  "));
    }
    output
}

pub fn render_invalid_role() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{INVALID_ROLE_NOTICE}");
    let _ = writeln!(output, "{} /", PRIMARY.paint("Go Home"));
    output
}

pub fn render_login(role: Role) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} /", BACK.paint("Back to Home"));
    let _ = writeln!(output, "# {}", role.accent().paint(&role.login_title()));
    let _ = writeln!(output, "Welcome back! Please sign in to your account.");
    let _ = writeln!(output);
    let _ = writeln!(output, "- Email Address (email)");
    let _ = writeln!(output, "- Password (password)");
    let _ = writeln!(output, "{}", LINK.paint("Forgot password?"));
    let _ = writeln!(output, "{} -> {}", PRIMARY.paint("Sign In"), role.dashboard_path());
    if role.registration_fields().is_some() {
        let _ = writeln!(
            output,
            "Don't have an account? {} {}",
            LINK.paint("Sign up"),
            role.register_path()
        );
    }
    output
}

pub fn render_register(role: Role) -> String {
    let (Some(title), Some(fields)) = (role.registration_title(), role.registration_fields())
    else {
        return render_invalid_role();
    };

    let mut output = String::new();
    let _ = writeln!(output, "{} /", BACK.paint("Back to Home"));
    let _ = writeln!(output, "# {}", role.accent().paint(&title));
    let _ = writeln!(output, "Create your account to get started");
    let _ = writeln!(output);
    for field in fields {
        let _ = writeln!(output, "- {} ({})", field.label, field.name);
    }
    let _ = writeln!(output, "- Confirm Password (confirmPassword)");
    let _ = writeln!(
        output,
        "{} -> {}",
        PRIMARY.paint("Create Account"),
        role.login_path()
    );
    let _ = writeln!(
        output,
        "Already have an account? {} {}",
        LINK.paint("Sign in"),
        role.login_path()
    );
    output
}

pub fn render_not_found(path: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# 404");
    let _ = writeln!(output, "Oops! Page not found ({path})");
    let _ = writeln!(output, "{} /", BACK.paint("Return to Home"));
    output
}

pub fn render_dashboard() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Welcome back, Student!");
    let _ = writeln!(output, "Ready to explore your career possibilities today?");
    let _ = writeln!(output);

    let stats: Vec<String> = QUICK_STATS
        .iter()
        .map(|stat| format!("{}: {}", stat.label, stat.value))
        .collect();
    let _ = writeln!(output, "{}", stats.join(" | "));

    let _ = writeln!(output);
    let _ = writeln!(output, "## Core Features");
    for feature in MAIN_FEATURES.iter().chain(SECONDARY_FEATURES) {
        let _ = writeln!(
            output,
            "- {} ({}): {}",
            feature.title, feature.link, feature.description
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Notifications");
    for notification in NOTIFICATIONS {
        let _ = writeln!(
            output,
            "- [{}] {} ({})",
            notification.kind, notification.title, notification.time
        );
    }
    output
}

pub fn render_colleges(listing: &Listing<CollegeFilters>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} /student/dashboard", BACK.paint("Back to Dashboard"));
    let _ = writeln!(output, "# College Search");
    let _ = writeln!(output, "{} Colleges Found", listing.results().len());
    active_filters(&mut output, listing);

    if listing.results().is_empty() {
        empty_state(&mut output, "colleges");
        return output;
    }

    for college in listing.results() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {} (#{})", college.name, college.ranking);
        let _ = writeln!(output, "{} | {}", college.kind, college.location);
        let _ = writeln!(
            output,
            "{} {:.1} | {} students | {} | admission {} | est. {}",
            stars(college.rating),
            college.rating,
            college.students,
            college.tuition_fee,
            college.admission_rate,
            college.established_year
        );
        let _ = writeln!(output, "{}", college.description);
        let _ = writeln!(output, "Programs: {}", college.programs.join(", "));
    }
    output
}

pub fn render_counsellors(listing: &Listing<CounsellorFilters>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} /student/dashboard", BACK.paint("Back to Dashboard"));
    let _ = writeln!(output, "# Expert Counsellors");
    let _ = writeln!(output, "{} Counsellors Available", listing.results().len());
    active_filters(&mut output, listing);

    if listing.results().is_empty() {
        empty_state(&mut output, "counsellors");
        return output;
    }

    for counsellor in listing.results() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {}", counsellor.name);
        let _ = writeln!(
            output,
            "{} {:.1} ({} reviews) | {} years | {}",
            stars(counsellor.rating),
            counsellor.rating,
            counsellor.reviews,
            counsellor.experience_years,
            counsellor.location
        );
        let _ = writeln!(output, "{}", counsellor.description);
        let _ = writeln!(output, "Education: {}", counsellor.education);
        let _ = writeln!(
            output,
            "Specializations: {}",
            counsellor.specializations.join(", ")
        );
        let _ = writeln!(output, "Languages: {}", counsellor.languages.join(", "));
        let _ = writeln!(
            output,
            "Available {} | {} | {}",
            counsellor.availability,
            counsellor.hourly_rate,
            counsellor.consultation_modes.join(" / ")
        );
    }
    output
}

pub fn render_scholarships(listing: &Listing<ScholarshipFilters>, now: DateTime<Utc>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} /student/dashboard", BACK.paint("Back to Dashboard"));
    let _ = writeln!(output, "# Scholarship AI");
    let _ = writeln!(output, "{} Matches", listing.results().len());
    active_filters(&mut output, listing);

    if listing.results().is_empty() {
        empty_state(&mut output, "scholarships");
        return output;
    }

    for scholarship in listing.results() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {}", scholarship.title);
        let _ = writeln!(
            output,
            "{} | {} | {}",
            scholarship.provider, scholarship.category, scholarship.amount
        );
        let deadline = match scholarship.deadline_date() {
            Some(date) => {
                let days = days_until(date, now);
                let urgency = Urgency::classify(days);
                format!(
                    "{} ({})",
                    scholarship.deadline,
                    urgency.paint(&deadline_label(days))
                )
            }
            None => scholarship.deadline.to_string(),
        };
        let _ = writeln!(output, "Deadline: {deadline}");
        let _ = writeln!(output, "{}", scholarship.description);
        let _ = writeln!(output, "Eligibility: {}", scholarship.eligibility.join(", "));
        let _ = writeln!(output, "Requirements: {}", scholarship.requirements.join(", "));
    }
    output
}

pub fn render_streams(listing: &Listing<StreamFilters>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} /student/dashboard", BACK.paint("Back to Dashboard"));
    let _ = writeln!(output, "# Stream Information");
    let _ = writeln!(output, "{} Streams", listing.results().len());
    active_filters(&mut output, listing);

    if listing.results().is_empty() {
        empty_state(&mut output, "streams");
        return output;
    }

    for stream in listing.results() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {} [{}]", stream.name, stream.category);
        let _ = writeln!(
            output,
            "{} {:.1} | {} | {}",
            stars(stream.rating),
            stream.rating,
            stream.duration,
            stream.average_salary
        );
        let _ = writeln!(output, "{}", stream.description);
        let _ = writeln!(output, "Careers: {}", stream.career_options.join(", "));
        let _ = writeln!(output, "Skills: {}", stream.skills.join(", "));
        let _ = writeln!(output, "Eligibility: {}", stream.eligibility.join(", "));
        let _ = writeln!(
            output,
            "Popular colleges: {}",
            stream.popular_colleges.join(", ")
        );
    }
    output
}

pub fn render_message_text(sender: Sender, text: &str) -> String {
    let who = match sender {
        Sender::User => "You",
        Sender::Ai => "AI",
    };
    let mut output = String::new();
    for (i, line) in text.lines().enumerate() {
        if i == 0 {
            let _ = writeln!(output, "{who}: {line}");
        } else {
            let _ = writeln!(output, "    {line}");
        }
    }
    if output.is_empty() {
        let _ = writeln!(output, "{who}:");
    }
    output
}

pub fn render_transcript(transcript: &Transcript) -> String {
    transcript
        .messages()
        .iter()
        .map(|message| {
            format!(
                "[{}] {}",
                message.timestamp.format("%H:%M"),
                render_message_text(message.sender, &message.text)
            )
        })
        .collect()
}

pub fn render_career_chat_intro() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} /student/dashboard", BACK.paint("Back to Dashboard"));
    let _ = writeln!(output, "# Career Path AI");
    let _ = writeln!(output, "{}", render_message_text(Sender::Ai, career_chat::GREETING));
    let _ = writeln!(output, "Try asking:");
    for question in career_chat::SUGGESTED_QUESTIONS {
        let _ = writeln!(output, "- {question}");
    }
    let _ = writeln!(output, "{} /reset", DANGER.paint("Reset"));
    output
}

pub fn render_api_key_prompt() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} Perplexity API Key required", SETTINGS.paint("⚙"));
    let _ = writeln!(
        output,
        "Get your API key from perplexity.ai, then type /key <your key>."
    );
    output
}

/// Renders the page a path resolves to.
pub fn render_route(route: &Route, now: DateTime<Utc>) -> String {
    match route {
        Route::Home => render_home(),
        Route::Login(_) | Route::Register(_) => match route.role_param() {
            Some(Ok(role)) if matches!(route, Route::Login(_)) => render_login(role),
            Some(Ok(role)) => render_register(role),
            _ => render_invalid_role(),
        },
        Route::StudentDashboard => render_dashboard(),
        Route::CareerChat => render_career_chat_intro(),
        Route::ScholarshipSearch => {
            let mut page = render_scholarships(&Listing::new(crate::catalog::SCHOLARSHIPS), now);
            page.push('\n');
            page.push_str(&render_message_text(Sender::Ai, scholarship_chat::GREETING));
            page.push_str(&render_api_key_prompt());
            page
        }
        Route::CollegeSearch => render_colleges(&Listing::new(crate::catalog::COLLEGES)),
        Route::Counsellors => render_counsellors(&Listing::new(crate::catalog::COUNSELLORS)),
        Route::Streams => render_streams(&Listing::new(crate::catalog::STREAMS)),
        Route::NotFound(_) => render_not_found(&route.path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COLLEGES, SCHOLARSHIPS, STREAMS};
    use crate::models::Message;
    use chrono::TimeZone;

    #[test]
    fn stars_follow_rating() {
        assert_eq!(stars(4.0), "★★★★");
        assert_eq!(stars(4.5), "★★★★½");
    }

    #[test]
    fn invalid_role_shows_notice() {
        let now = Utc::now();
        let page = render_route(&Route::resolve("/login/wizard"), now);
        assert!(page.contains(INVALID_ROLE_NOTICE));
        assert!(page.contains("Go Home"));

        let page = render_route(&Route::resolve("/register/admin"), now);
        assert!(page.contains(INVALID_ROLE_NOTICE));

        let page = render_route(&Route::resolve("/login/admin"), now);
        assert!(page.contains("Admin Login"));
        assert!(!page.contains("Sign up"));
    }

    #[test]
    fn registration_lists_role_fields() {
        let page = render_register(Role::Ngo);
        assert!(page.contains("NGO Registration"));
        assert!(page.contains("(focusArea)"));
        assert!(page.contains("(confirmPassword)"));
        assert!(!page.contains("(grade)"));
    }

    #[test]
    fn empty_listing_renders_empty_state() {
        let mut listing: Listing<StreamFilters> = Listing::new(STREAMS);
        listing.set_filter("search", "astronaut").unwrap();
        let page = render_streams(&listing);
        assert!(page.contains("0 Streams"));
        assert!(page.contains("No streams found"));
        assert!(page.contains("Clear Filters"));
        assert!(page.contains("Filters: search=astronaut (0 of 5 shown)"));
    }

    #[test]
    fn colleges_render_in_dataset_order() {
        let listing: Listing<CollegeFilters> = Listing::new(COLLEGES);
        let page = render_colleges(&listing);
        let first = page.find("Metropolitan Institute").unwrap();
        let last = page.find("Business Leadership Institute").unwrap();
        assert!(first < last);
        assert!(page.contains("5 Colleges Found"));
    }

    #[test]
    fn scholarships_show_deadline_labels() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let page = render_scholarships(&Listing::new(SCHOLARSHIPS), now);
        assert!(page.contains("14 days left"));
        assert!(page.contains("Deadline passed"));
    }

    #[test]
    fn transcript_lines_are_prefixed_by_sender() {
        let mut transcript = Transcript::new("Hi");
        transcript.append(Message::user("line one\nline two"));
        let text = render_transcript(&transcript);
        assert!(text.contains("AI: Hi"));
        assert!(text.contains("You: line one"));
        assert!(text.contains("    line two"));
    }

    #[test]
    fn unknown_route_renders_not_found() {
        let now = Utc::now();
        let page = render_route(&Route::resolve("/nowhere"), now);
        assert!(page.contains("404"));
        assert!(page.contains("/nowhere"));
    }
}
