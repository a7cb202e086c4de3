use crate::models::{College, Counsellor, Feature, Notification, QuickStat, Scholarship, Stream};

pub static COLLEGES: &[College] = &[
    College {
        id: 1,
        name: "Metropolitan Institute of Technology",
        location: "New York, NY",
        kind: "Private University",
        ranking: 15,
        students: 12000,
        tuition_fee: "$55,000/year",
        programs: &["Computer Science", "Engineering", "Business", "Medicine"],
        rating: 4.7,
        description: "Leading research university with strong emphasis on technology and innovation",
        admission_rate: "18%",
        established_year: 1885,
    },
    College {
        id: 2,
        name: "State University of California",
        location: "Los Angeles, CA",
        kind: "Public University",
        ranking: 28,
        students: 35000,
        tuition_fee: "$15,000/year",
        programs: &["Liberal Arts", "Sciences", "Engineering", "Medicine", "Law"],
        rating: 4.5,
        description: "Comprehensive public university offering diverse academic programs",
        admission_rate: "32%",
        established_year: 1919,
    },
    College {
        id: 3,
        name: "Excellence Medical College",
        location: "Boston, MA",
        kind: "Medical School",
        ranking: 8,
        students: 3500,
        tuition_fee: "$65,000/year",
        programs: &["Medicine", "Nursing", "Public Health", "Biomedical Sciences"],
        rating: 4.8,
        description: "Premier medical institution with world-class research facilities",
        admission_rate: "8%",
        established_year: 1847,
    },
    College {
        id: 4,
        name: "Creative Arts University",
        location: "Portland, OR",
        kind: "Arts College",
        ranking: 45,
        students: 8500,
        tuition_fee: "$42,000/year",
        programs: &["Fine Arts", "Design", "Music", "Theater", "Film"],
        rating: 4.3,
        description: "Innovative arts college fostering creativity and artistic expression",
        admission_rate: "45%",
        established_year: 1962,
    },
    College {
        id: 5,
        name: "Business Leadership Institute",
        location: "Chicago, IL",
        kind: "Business School",
        ranking: 22,
        students: 6800,
        tuition_fee: "$58,000/year",
        programs: &["MBA", "Finance", "Marketing", "Entrepreneurship"],
        rating: 4.6,
        description: "Top-tier business school with strong industry connections",
        admission_rate: "25%",
        established_year: 1901,
    },
];

pub const COLLEGE_TYPES: &[&str] = &[
    "Private University",
    "Public University",
    "Medical School",
    "Arts College",
    "Business School",
];

pub static COUNSELLORS: &[Counsellor] = &[
    Counsellor {
        id: 1,
        name: "Dr. Sarah Johnson",
        specializations: &["Career Counseling", "Engineering Streams", "Study Abroad"],
        experience_years: 8,
        rating: 4.9,
        reviews: 234,
        location: "New York, USA",
        languages: &["English", "Spanish"],
        availability: "Mon-Fri, 9 AM - 6 PM",
        hourly_rate: "$75/hour",
        description: "Experienced career counselor specializing in STEM fields with 8+ years of helping students navigate their career paths.",
        education: "PhD in Educational Psychology, Columbia University",
        consultation_modes: &["Video Call", "Phone Call", "Chat"],
    },
    Counsellor {
        id: 2,
        name: "Prof. Rajesh Kumar",
        specializations: &[
            "Medical Career Guidance",
            "NEET Preparation",
            "Medical College Selection",
        ],
        experience_years: 12,
        rating: 4.8,
        reviews: 156,
        location: "Delhi, India",
        languages: &["English", "Hindi"],
        availability: "Tue-Sat, 10 AM - 8 PM",
        hourly_rate: "$45/hour",
        description: "Former medical college professor turned career counselor, helping students achieve their medical career dreams.",
        education: "MBBS, MD - AIIMS Delhi",
        consultation_modes: &["Video Call", "Phone Call"],
    },
    Counsellor {
        id: 3,
        name: "Ms. Emily Chen",
        specializations: &["Business & Management", "MBA Guidance", "Entrepreneurship"],
        experience_years: 6,
        rating: 4.7,
        reviews: 89,
        location: "Singapore",
        languages: &["English", "Mandarin"],
        availability: "Mon-Thu, 2 PM - 10 PM",
        hourly_rate: "$65/hour",
        description: "Business consultant and career coach helping students explore opportunities in business and management.",
        education: "MBA - Harvard Business School",
        consultation_modes: &["Video Call", "Chat"],
    },
    Counsellor {
        id: 4,
        name: "Dr. Michael Brown",
        specializations: &["Psychology", "Arts & Humanities", "Research Careers"],
        experience_years: 10,
        rating: 4.6,
        reviews: 143,
        location: "London, UK",
        languages: &["English", "French"],
        availability: "Wed-Sun, 11 AM - 7 PM",
        hourly_rate: "$80/hour",
        description: "Clinical psychologist and academic advisor with expertise in humanities and social science careers.",
        education: "PhD in Psychology, University of Oxford",
        consultation_modes: &["Video Call", "Phone Call", "Chat"],
    },
];

pub const SPECIALIZATIONS: &[&str] = &[
    "all",
    "Career Counseling",
    "Engineering Streams",
    "Medical Career Guidance",
    "Business & Management",
    "Psychology",
    "Study Abroad",
];

pub const CONSULTATION_MODES: &[&str] = &["all", "Video Call", "Phone Call", "Chat"];

pub static SCHOLARSHIPS: &[Scholarship] = &[
    Scholarship {
        id: 1,
        title: "Merit Excellence Scholarship",
        amount: "$5,000 - $15,000",
        deadline: "2024-03-15",
        eligibility: &["GPA 3.5+", "Undergraduate", "STEM Field"],
        provider: "Tech Foundation",
        description: "Supporting outstanding students in technology and engineering fields",
        category: "Merit-based",
        requirements: &[
            "Academic transcripts",
            "Personal essay",
            "2 recommendation letters",
        ],
    },
    Scholarship {
        id: 2,
        title: "Diversity in Medicine Scholarship",
        amount: "$10,000",
        deadline: "2024-04-01",
        eligibility: &[
            "Medical Student",
            "Underrepresented minority",
            "Financial need",
        ],
        provider: "Healthcare Alliance",
        description: "Promoting diversity in healthcare professions",
        category: "Need-based",
        requirements: &["FAFSA", "Personal statement", "Clinical experience proof"],
    },
    Scholarship {
        id: 3,
        title: "Future Leaders Scholarship",
        amount: "$7,500",
        deadline: "2024-05-20",
        eligibility: &["Leadership experience", "Community service", "GPA 3.0+"],
        provider: "Leadership Institute",
        description: "Recognizing students with exceptional leadership potential",
        category: "Leadership",
        requirements: &[
            "Leadership portfolio",
            "Community service hours",
            "Interview",
        ],
    },
    Scholarship {
        id: 4,
        title: "Innovation in Business Scholarship",
        amount: "$12,000",
        deadline: "2024-02-28",
        eligibility: &[
            "Business Major",
            "Entrepreneurial project",
            "Junior/Senior",
        ],
        provider: "Business Network",
        description: "Supporting innovative business students and entrepreneurs",
        category: "Field-specific",
        requirements: &[
            "Business plan",
            "Project presentation",
            "Faculty recommendation",
        ],
    },
];

pub const SCHOLARSHIP_CATEGORIES: &[&str] = &[
    "all",
    "Merit-based",
    "Need-based",
    "Leadership",
    "Field-specific",
];

pub static STREAMS: &[Stream] = &[
    Stream {
        id: 1,
        name: "Computer Science & Engineering",
        description: "Focus on software development, algorithms, data structures, and computer systems",
        category: "Engineering",
        duration: "4 years",
        career_options: &[
            "Software Engineer",
            "Data Scientist",
            "System Analyst",
            "AI/ML Engineer",
        ],
        average_salary: "$75,000 - $120,000",
        skills: &["Programming", "Problem Solving", "Mathematics", "Logic"],
        eligibility: &["PCM in 12th", "JEE Mains/Advanced", "Minimum 75% in 12th"],
        popular_colleges: &["IIT Delhi", "BITS Pilani", "VIT", "SRM"],
        rating: 4.8,
    },
    Stream {
        id: 2,
        name: "Medicine (MBBS)",
        description: "Comprehensive medical education covering anatomy, physiology, pathology, and clinical practice",
        category: "Medical",
        duration: "5.5 years",
        career_options: &["Doctor", "Surgeon", "Specialist", "Medical Researcher"],
        average_salary: "$60,000 - $200,000",
        skills: &["Biology", "Chemistry", "Empathy", "Critical Thinking"],
        eligibility: &["PCB in 12th", "NEET UG", "Minimum 50% in 12th"],
        popular_colleges: &["AIIMS Delhi", "CMC Vellore", "JIPMER", "MAMC"],
        rating: 4.9,
    },
    Stream {
        id: 3,
        name: "Business Administration (BBA/MBA)",
        description: "Management, finance, marketing, and business strategy fundamentals",
        category: "Business",
        duration: "3-2 years",
        career_options: &[
            "Business Analyst",
            "Marketing Manager",
            "HR Manager",
            "Entrepreneur",
        ],
        average_salary: "$45,000 - $90,000",
        skills: &["Leadership", "Communication", "Analytics", "Strategy"],
        eligibility: &[
            "Any stream in 12th",
            "Entrance exams (CAT/MAT)",
            "Minimum 50% in graduation",
        ],
        popular_colleges: &["IIM Ahmedabad", "FMS Delhi", "XLRI", "ISB Hyderabad"],
        rating: 4.6,
    },
    Stream {
        id: 4,
        name: "Arts & Humanities",
        description: "Literature, history, philosophy, languages, and social sciences",
        category: "Arts",
        duration: "3 years",
        career_options: &[
            "Writer",
            "Teacher",
            "Journalist",
            "Civil Services",
            "Translator",
        ],
        average_salary: "$30,000 - $65,000",
        skills: &["Writing", "Critical Analysis", "Research", "Communication"],
        eligibility: &[
            "Any stream in 12th",
            "University entrance",
            "Minimum 50% in 12th",
        ],
        popular_colleges: &["DU", "JNU", "BHU", "Presidency College"],
        rating: 4.3,
    },
    Stream {
        id: 5,
        name: "Commerce & Finance",
        description: "Accounting, finance, economics, and business mathematics",
        category: "Commerce",
        duration: "3 years",
        career_options: &[
            "Accountant",
            "Financial Analyst",
            "Banker",
            "CA/CS",
            "Investment Advisor",
        ],
        average_salary: "$35,000 - $80,000",
        skills: &["Mathematics", "Analytics", "Attention to Detail", "Finance"],
        eligibility: &[
            "Commerce/Any stream in 12th",
            "University entrance",
            "Minimum 50% in 12th",
        ],
        popular_colleges: &["SRCC", "LSR", "Christ University", "Loyola College"],
        rating: 4.4,
    },
];

pub const STREAM_CATEGORIES: &[&str] =
    &["all", "Engineering", "Medical", "Business", "Arts", "Commerce"];

pub static NOTIFICATIONS: &[Notification] = &[
    Notification {
        title: "New scholarship opportunity available",
        time: "2 hours ago",
        kind: "scholarship",
    },
    Notification {
        title: "Your counselor responded to your message",
        time: "4 hours ago",
        kind: "message",
    },
    Notification {
        title: "Aptitude test results are ready",
        time: "1 day ago",
        kind: "test",
    },
];

pub static QUICK_STATS: &[QuickStat] = &[
    QuickStat {
        label: "Career Matches",
        value: "12",
    },
    QuickStat {
        label: "Applications",
        value: "5",
    },
    QuickStat {
        label: "Messages",
        value: "8",
    },
    QuickStat {
        label: "Scholarships",
        value: "23",
    },
];

pub static MAIN_FEATURES: &[Feature] = &[
    Feature {
        title: "Career Path AI",
        description: "Get personalized career recommendations based on your interests and skills",
        link: "/student/career-ai",
    },
    Feature {
        title: "Scholarship AI",
        description: "Find scholarships that match your profile and academic achievements",
        link: "/student/scholarship-ai",
    },
    Feature {
        title: "Expert Counsellors",
        description: "Connect with certified counselors for personalized guidance",
        link: "/student/counsellors",
    },
    Feature {
        title: "Registered NGOs",
        description: "Explore opportunities with educational NGOs and organizations",
        link: "/student/ngos",
    },
];

pub static SECONDARY_FEATURES: &[Feature] = &[
    Feature {
        title: "College Search",
        description: "Advanced search and filtering for colleges and universities",
        link: "/student/colleges",
    },
    Feature {
        title: "Stream Information",
        description: "Detailed information about different academic streams",
        link: "/student/streams",
    },
    Feature {
        title: "Academic Resources",
        description: "Access study materials and guidance lectures",
        link: "/student/resources",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        fn check(ids: Vec<u32>) {
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(ids, sorted);
        }

        check(COLLEGES.iter().map(|c| c.id).collect());
        check(COUNSELLORS.iter().map(|c| c.id).collect());
        check(SCHOLARSHIPS.iter().map(|s| s.id).collect());
        check(STREAMS.iter().map(|s| s.id).collect());
    }

    #[test]
    fn every_scholarship_deadline_parses() {
        for scholarship in SCHOLARSHIPS {
            assert!(
                scholarship.deadline_date().is_some(),
                "bad deadline for {}",
                scholarship.title
            );
        }
    }

    #[test]
    fn select_options_cover_dataset_values() {
        for college in COLLEGES {
            assert!(COLLEGE_TYPES.contains(&college.kind));
        }
        for scholarship in SCHOLARSHIPS {
            assert!(SCHOLARSHIP_CATEGORIES.contains(&scholarship.category));
        }
        for stream in STREAMS {
            assert!(STREAM_CATEGORIES.contains(&stream.category));
        }
        for counsellor in COUNSELLORS {
            for mode in counsellor.consultation_modes {
                assert!(CONSULTATION_MODES.contains(mode));
            }
        }
    }
}
