//! Static site content. Everything here is read-only and lives for the
//! whole program; sections borrow straight from these tables.

use crate::components::variant::{Accent, Difficulty};

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub children: &'static [NavLink],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/", children: &[] },
    NavItem {
        label: "Career Guidance",
        href: "/counselor",
        children: &[
            NavLink { label: "Interest Test", href: "/counselor" },
            NavLink { label: "Consultations", href: "/#contact-experts" },
            NavLink { label: "Career Paths", href: "/#recommendations" },
        ],
    },
    NavItem {
        label: "Challenges",
        href: "/#challenges",
        children: &[
            NavLink { label: "Current Challenges", href: "/#challenges" },
            NavLink { label: "Upcoming Challenges", href: "/#challenges" },
            NavLink { label: "Success Stories", href: "/#stories" },
        ],
    },
    NavItem { label: "Community", href: "/#stories", children: &[] },
    NavItem { label: "Contact Us", href: "/#contact-experts", children: &[] },
];

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Interest Test",
        description: "Start with a tailored test that measures your career interests and personal strengths.",
    },
    Step {
        number: 2,
        title: "Personal Recommendations",
        description: "Receive career recommendations and learning paths built from your results.",
    },
    Step {
        number: 3,
        title: "Explore Opportunities",
        description: "Discover openings in the market and the skills you need to succeed.",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "5000+", label: "people have taken the test" },
    Stat { value: "98%", label: "satisfied with their results" },
    Stat { value: "200+", label: "career paths available" },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ahmed Mohammed",
        role: "University student",
        content: "The test pinned down my career path precisely, and now I'm studying the field I love.",
        rating: 5,
    },
    Testimonial {
        name: "Sara Ali",
        role: "Recent graduate",
        content: "The recommendations surprised me. I found fields I had never considered.",
        rating: 5,
    },
];

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "In-depth personal analysis",
        description: "A full picture of your personality and interests, based on established psychological models.",
    },
    Feature {
        title: "Uncover hidden skills",
        description: "Find talents you may not know you have.",
    },
    Feature {
        title: "Expert-backed advice",
        description: "Recommendations shaped by career guidance specialists.",
    },
    Feature {
        title: "Always current",
        description: "The jobs and skills database is refreshed regularly to track the market.",
    },
];

pub struct CareerPath {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        id: "graphic-design",
        title: "Graphic Design",
        description: "Creative? Start learning graphic design.",
        accent: Accent::Purple,
    },
    CareerPath {
        id: "software-dev",
        title: "Software Development",
        description: "If technology excites you, developers are in ever-growing demand.",
        accent: Accent::Blue,
    },
    CareerPath {
        id: "digital-marketing",
        title: "Digital Marketing",
        description: "Love marketing? Learn to run digital campaigns.",
        accent: Accent::Green,
    },
];

pub struct Story {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const SUCCESS_STORIES: &[Story] = &[
    Story {
        id: "sarah-story",
        name: "Sarah",
        title: "Web Developer",
        description: "Learned to code on the platform and landed her first web developer job.",
        accent: Accent::Blue,
    },
    Story {
        id: "ahmed-story",
        name: "Ahmed",
        title: "Campaign Manager",
        description: "Found his passion for digital marketing through the interactive tests and now runs a major ad campaign.",
        accent: Accent::Green,
    },
    Story {
        id: "layla-story",
        name: "Layla",
        title: "Graphic Designer",
        description: "Grew her design skills through our courses and now works with well-known brands.",
        accent: Accent::Purple,
    },
];

pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub start_date: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub participants: u32,
}

pub const UPCOMING_CHALLENGES: &[Challenge] = &[
    Challenge {
        id: "mobile-app-challenge",
        title: "Build a New Mobile App",
        description: "Build an app that solves a real problem in your community, judged by industry experts.",
        accent: Accent::Blue,
        start_date: "15 May 2025",
        duration: "3 weeks",
        difficulty: Difficulty::Intermediate,
        participants: 124,
    },
    Challenge {
        id: "marketing-campaign-challenge",
        title: "Launch a Winning Campaign",
        description: "Design a marketing campaign for a fictional product and get feedback from marketing leads.",
        accent: Accent::Green,
        start_date: "1 June 2025",
        duration: "2 weeks",
        difficulty: Difficulty::Beginner,
        participants: 98,
    },
    Challenge {
        id: "ai-solution-challenge",
        title: "AI Solutions for Education",
        description: "Use AI to tackle a challenge in education, alongside leading tech companies.",
        accent: Accent::Purple,
        start_date: "10 July 2025",
        duration: "4 weeks",
        difficulty: Difficulty::Advanced,
        participants: 76,
    },
    Challenge {
        id: "data-analysis-challenge",
        title: "Data-Driven Decisions",
        description: "Analyse a real dataset and present actionable strategic insight.",
        accent: Accent::Yellow,
        start_date: "25 May 2025",
        duration: "10 days",
        difficulty: Difficulty::Intermediate,
        participants: 85,
    },
];

pub const BENEFITS: &[Feature] = &[
    Feature {
        title: "Accredited certificates",
        description: "Earn certificates you can add to your CV.",
    },
    Feature {
        title: "Hands-on learning",
        description: "Solve the problems real companies face.",
    },
    Feature {
        title: "Hiring opportunities",
        description: "Meet companies looking for new talent.",
    },
];

pub struct Expert {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub specialization: &'static str,
    pub image_url: &'static str,
    pub availability: &'static str,
    pub response_time: &'static str,
}

pub const EXPERTS: &[Expert] = &[
    Expert {
        id: "expert-1",
        name: "Ahmed Al-Jasim",
        title: "Career Development Advisor",
        specialization: "Information Technology",
        image_url: "https://images.pexels.com/photos/1300402/pexels-photo-1300402.jpeg?auto=compress&w=320",
        availability: "Available now",
        response_time: "Replies within 24 hours",
    },
    Expert {
        id: "expert-2",
        name: "Sara Al-Ali",
        title: "HR Director",
        specialization: "Business Administration",
        image_url: "https://images.pexels.com/photos/4620842/pexels-photo-4620842.jpeg?auto=compress&w=320",
        availability: "Available now",
        response_time: "Replies within 12 hours",
    },
    Expert {
        id: "expert-3",
        name: "Mohammed Al-Saleh",
        title: "Strategy Consultant",
        specialization: "Entrepreneurship",
        image_url: "https://images.pexels.com/photos/8217880/pexels-photo-8217880.jpeg?auto=compress&w=320",
        availability: "Available now",
        response_time: "Replies within 48 hours",
    },
];

// Dashboard mock data

#[derive(Debug, PartialEq)]
pub struct Course {
    pub name: &'static str,
    pub url: &'static str,
    pub provider: &'static str,
    pub rating: f32,
    pub duration: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Career {
    pub id: u32,
    pub title: &'static str,
    pub match_pct: u32,
    pub description: &'static str,
    pub salary_min: u32,
    pub salary_max: u32,
    pub currency: &'static str,
    pub growth: u32,
    pub courses: &'static [Course],
    pub skills: &'static [&'static str],
}

pub const CAREERS: &[Career] = &[
    Career {
        id: 1,
        title: "Front-end Development",
        match_pct: 91,
        description: "Blends programming and creativity to build engaging, interactive user experiences.",
        salary_min: 60_000,
        salary_max: 95_000,
        currency: "SAR",
        growth: 22,
        courses: &[
            Course { name: "The Complete React Course", url: "#", provider: "Udemy", rating: 4.8, duration: "30 hours" },
            Course { name: "Advanced Front-end", url: "#", provider: "Frontend Mentor", rating: 4.6, duration: "20 hours" },
            Course { name: "Advanced CSS and Design Patterns", url: "#", provider: "Scrimba", rating: 4.9, duration: "15 hours" },
        ],
        skills: &["JavaScript", "React", "CSS/SASS", "Responsive Design", "UI/UX Principles"],
    },
    Career {
        id: 2,
        title: "UX Designer",
        match_pct: 76,
        description: "Designs smooth, appealing experiences with a focus on usability and user research.",
        salary_min: 55_000,
        salary_max: 90_000,
        currency: "SAR",
        growth: 18,
        courses: &[
            Course { name: "UX Design Foundations", url: "#", provider: "Interaction Design Foundation", rating: 4.7, duration: "25 hours" },
            Course { name: "Advanced User Research", url: "#", provider: "Nielsen Norman Group", rating: 4.9, duration: "20 hours" },
            Course { name: "Complete UI/UX Design", url: "#", provider: "Udemy", rating: 4.5, duration: "40 hours" },
        ],
        skills: &["User Research", "Wireframing", "Prototyping", "Usability Testing", "Figma"],
    },
    Career {
        id: 3,
        title: "Data Analyst",
        match_pct: 62,
        description: "Turns data into insight that drives strategic decisions and better business.",
        salary_min: 65_000,
        salary_max: 110_000,
        currency: "SAR",
        growth: 25,
        courses: &[
            Course { name: "Complete Data Science", url: "#", provider: "DataCamp", rating: 4.8, duration: "50 hours" },
            Course { name: "Data Analysis with Python", url: "#", provider: "Coursera", rating: 4.7, duration: "35 hours" },
            Course { name: "Analytics Dashboards", url: "#", provider: "Tableau", rating: 4.6, duration: "20 hours" },
        ],
        skills: &["Python", "SQL", "Data Visualization", "Statistical Analysis", "Machine Learning Basics"],
    },
];

pub struct JobPosting {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub salary: &'static str,
    pub posted: &'static str,
    pub logo: &'static str,
}

pub const JOBS: &[JobPosting] = &[
    JobPosting {
        id: 1,
        title: "Front-end Developer",
        company: "Future Tech",
        location: "Riyadh (remote)",
        kind: "Full time",
        salary: "80,000 - 95,000 SAR",
        posted: "2 days ago",
        logo: "FT",
    },
    JobPosting {
        id: 2,
        title: "UX/UI Designer",
        company: "Digital Creations",
        location: "Jeddah",
        kind: "Full time",
        salary: "75,000 - 85,000 SAR",
        posted: "3 days ago",
        logo: "DC",
    },
    JobPosting {
        id: 3,
        title: "React Developer",
        company: "Cloud Apps",
        location: "Dammam (flexible)",
        kind: "Full time",
        salary: "85,000 - 100,000 SAR",
        posted: "Today",
        logo: "CA",
    },
];

pub struct SkillTrend {
    pub name: &'static str,
    pub current: u32,
    pub previous: u32,
}

pub const SKILL_TRENDS: &[SkillTrend] = &[
    SkillTrend { name: "JavaScript", current: 85, previous: 80 },
    SkillTrend { name: "React", current: 90, previous: 75 },
    SkillTrend { name: "UI/UX", current: 70, previous: 60 },
    SkillTrend { name: "Data Analysis", current: 65, previous: 50 },
    SkillTrend { name: "Python", current: 60, previous: 45 },
];

pub struct LearningStep {
    pub id: u32,
    pub title: &'static str,
    pub duration: &'static str,
    pub completed: bool,
}

pub const LEARNING_PATH: &[LearningStep] = &[
    LearningStep { id: 1, title: "JavaScript Fundamentals", duration: "4 weeks", completed: true },
    LearningStep { id: 2, title: "Advanced React", duration: "6 weeks", completed: false },
    LearningStep { id: 3, title: "Capstone Project", duration: "3 weeks", completed: false },
    LearningStep { id: 4, title: "UI/UX Course", duration: "4 weeks", completed: false },
];

pub struct MarketSkill {
    pub name: &'static str,
    pub growth: u32,
    pub level: u32,
    pub accent: Accent,
    pub demand: &'static str,
}

pub const MARKET_SKILLS: &[MarketSkill] = &[
    MarketSkill { name: "JavaScript", growth: 15, level: 85, accent: Accent::Emerald, demand: "Very high" },
    MarketSkill { name: "Data Analysis", growth: 22, level: 78, accent: Accent::Blue, demand: "Rising" },
    MarketSkill { name: "UI/UX Design", growth: 18, level: 75, accent: Accent::Purple, demand: "High" },
    MarketSkill { name: "React", growth: 25, level: 90, accent: Accent::Amber, demand: "Very high" },
];

pub struct FutureSkill {
    pub name: &'static str,
    pub readiness: u32,
    pub timing: &'static str,
    pub impact: &'static str,
    pub companies: &'static [&'static str],
}

pub const FUTURE_SKILLS: &[FutureSkill] = &[
    FutureSkill {
        name: "AI and Machine Learning",
        readiness: 65,
        timing: "6-12 months",
        impact: "Transformative",
        companies: &["Google", "Microsoft", "Amazon"],
    },
    FutureSkill {
        name: "Web3 and Blockchain",
        readiness: 45,
        timing: "12-18 months",
        impact: "High",
        companies: &["Coinbase", "Binance", "Meta"],
    },
    FutureSkill {
        name: "AR/VR",
        readiness: 55,
        timing: "6-12 months",
        impact: "Medium",
        companies: &["Meta", "Apple", "Unity"],
    },
];

pub struct ScoredItem {
    pub icon: &'static str,
    pub text: &'static str,
    pub score: u32,
}

pub const STRENGTHS: &[ScoredItem] = &[
    ScoredItem { icon: "🎨", text: "Creative thinking", score: 95 },
    ScoredItem { icon: "🧮", text: "Logical reasoning", score: 90 },
    ScoredItem { icon: "🔍", text: "Attention to detail", score: 85 },
    ScoredItem { icon: "💡", text: "Problem solving", score: 88 },
];

pub const DEVELOPMENT_AREAS: &[ScoredItem] = &[
    ScoredItem { icon: "🗣️", text: "Public speaking", score: 60 },
    ScoredItem { icon: "⏱️", text: "Time management", score: 65 },
    ScoredItem { icon: "🤝", text: "Team leadership", score: 58 },
];

pub const OVERALL_PROGRESS: u32 = 85;

pub struct EventItem {
    pub id: u32,
    pub day: &'static str,
    pub month: &'static str,
    pub title: &'static str,
    pub time: &'static str,
    pub online: bool,
    pub spots: u32,
}

pub const EVENTS: &[EventItem] = &[
    EventItem { id: 1, day: "15", month: "Apr", title: "Building Apps with React", time: "2:00 - 4:00 PM", online: true, spots: 5 },
    EventItem { id: 2, day: "20", month: "Apr", title: "Careers in Data Science", time: "6:00 - 7:30 PM", online: false, spots: 12 },
    EventItem { id: 3, day: "28", month: "Apr", title: "Portfolio Review Clinic", time: "5:00 - 6:00 PM", online: true, spots: 3 },
];

pub struct NotificationItem {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
    pub time: &'static str,
}

pub const NOTIFICATIONS: &[NotificationItem] = &[
    NotificationItem { id: 1, icon: "📊", title: "Job market analysis updated", time: "3 hours ago" },
    NotificationItem { id: 2, icon: "🔔", title: "React workshop tomorrow", time: "5 hours ago" },
    NotificationItem { id: 3, icon: "💼", title: "New jobs matching your skills", time: "1 day ago" },
];

pub struct Activity {
    pub name: &'static str,
    pub hours: u32,
    pub percentage: u32,
    pub accent: Accent,
    pub icon: &'static str,
}

pub const WEEKLY_ACTIVITIES: &[Activity] = &[
    Activity { name: "Learn React", hours: 8, percentage: 40, accent: Accent::Gray, icon: "💻" },
    Activity { name: "Build a project", hours: 5, percentage: 25, accent: Accent::Blue, icon: "🚀" },
    Activity { name: "Study UI/UX", hours: 4, percentage: 20, accent: Accent::Purple, icon: "🎨" },
    Activity { name: "Networking", hours: 3, percentage: 15, accent: Accent::Amber, icon: "🤝" },
];

pub struct ProfileTile {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub accent: Accent,
}

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub traits: &'static [(&'static str, Accent)],
    pub tiles: &'static [ProfileTile],
}

pub const PROFILE: Profile = Profile {
    name: "Ayoub Mohammed",
    headline: "University student · Information Technology",
    traits: &[
        ("Creative", Accent::Indigo),
        ("Analytical", Accent::Purple),
        ("Active learner", Accent::Blue),
    ],
    tiles: &[
        ProfileTile {
            title: "Interests",
            items: &["Design", "Programming", "Analysis", "Creativity", "Game development"],
            accent: Accent::Emerald,
        },
        ProfileTile {
            title: "Skills",
            items: &["React", "CSS", "JavaScript", "Logical thinking", "Problem solving"],
            accent: Accent::Indigo,
        },
        ProfileTile {
            title: "Strengths",
            items: &["Creativity", "Communication", "Teamwork", "Fast learning"],
            accent: Accent::Blue,
        },
        ProfileTile {
            title: "Growth goals",
            items: &["Master React", "Learn data analysis", "Build leadership skills"],
            accent: Accent::Purple,
        },
    ],
};

pub struct Video {
    pub title: &'static str,
    pub channel: &'static str,
    pub duration: &'static str,
    pub accent: Accent,
}

pub const VIDEOS: &[Video] = &[
    Video {
        title: "Introduction to front-end development",
        channel: "Coding Academy",
        duration: "15:30",
        accent: Accent::Emerald,
    },
    Video {
        title: "React basics for beginners",
        channel: "World of Code",
        duration: "22:45",
        accent: Accent::Blue,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_where_they_key_selection() {
        let careers: HashSet<_> = CAREERS.iter().map(|c| c.id).collect();
        assert_eq!(careers.len(), CAREERS.len());
        let jobs: HashSet<_> = JOBS.iter().map(|j| j.id).collect();
        assert_eq!(jobs.len(), JOBS.len());
        let labels: HashSet<_> = NAV_ITEMS.iter().map(|n| n.label).collect();
        assert_eq!(labels.len(), NAV_ITEMS.len());
    }

    #[test]
    fn weekly_plan_adds_up() {
        let total: u32 = WEEKLY_ACTIVITIES.iter().map(|a| a.percentage).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn profile_has_the_four_summary_tiles() {
        let titles: Vec<_> = PROFILE.tiles.iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Interests", "Skills", "Strengths", "Growth goals"]);
        assert!(PROFILE.tiles.iter().all(|t| !t.items.is_empty()));
    }
}
