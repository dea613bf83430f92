//! Mock AI content generation.
//!
//! Pure functions from a free-text prompt to fixed-shape records. The
//! content is canned and the randomness cosmetic; nothing here touches the
//! store or performs real inference. Handlers add the artificial latency,
//! so these stay synchronous and trivially testable.

use chrono::{Duration, Utc};
use rand::Rng;
use serde::Serialize;

const COLOR_PALETTES: [[&str; 4]; 4] = [
    ["#7C5CFB", "#6C63FF", "#FF6B6B", "#4ECDC4"],
    ["#667eea", "#764ba2", "#f093fb", "#f5576c"],
    ["#4facfe", "#00f2fe", "#43e97b", "#38f9d7"],
    ["#fa709a", "#fee140", "#a8edea", "#fed6e3"],
];

const FONTS: [&str; 5] = ["Inter", "Poppins", "Roboto", "Open Sans", "Montserrat"];

const PLATFORMS: [&str; 5] = ["Twitter", "LinkedIn", "Instagram", "Facebook", "YouTube"];

/// One module of a generated course outline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineModule {
    pub title: String,
    pub lessons: Vec<String>,
}

/// A generated course outline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOutline {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub modules: Vec<OutlineModule>,
    pub difficulty: String,
    pub tags: Vec<String>,
}

/// One timed slot of a webinar agenda.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaSlot {
    pub time: String,
    pub topic: String,
}

/// A generated webinar agenda.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarAgenda {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub speakers: Vec<String>,
    pub agenda: Vec<AgendaSlot>,
    pub date: String,
    pub max_attendees: u32,
    pub price: f64,
}

/// Social template names keyed by network.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialTemplates {
    pub linkedin: String,
    pub instagram: String,
    pub twitter: String,
}

/// A generated branding kit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingKit {
    pub logo: String,
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
    pub tagline: String,
    pub logo_variations: Vec<String>,
    pub social_media_templates: SocialTemplates,
}

/// Reach/engagement estimates attached to an automation task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementEstimate {
    pub expected_reach: u32,
    pub expected_engagement: u32,
}

/// A generated social automation task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationTask {
    pub title: String,
    pub platform: String,
    pub content: String,
    pub scheduled_time: String,
    pub status: String,
    pub engagement: EngagementEstimate,
}

/// Projected engagement for a generated community post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEngagement {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

/// A generated community post draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPostDraft {
    pub content: String,
    pub hashtags: Vec<String>,
    pub category: String,
    pub engagement: PostEngagement,
}

/// One day of mock analytics metrics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    pub date: String,
    pub revenue: u32,
    pub students: u32,
    pub ideas: u32,
    pub engagement: u32,
}

/// Headline totals of the mock analytics report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOverview {
    pub total_revenue: u64,
    pub total_students: u64,
    pub total_ideas: u64,
    pub total_engagement: f64,
}

/// One row of the top-courses table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCourse {
    pub name: String,
    pub revenue: u64,
    pub students: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroup {
    pub range: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationShare {
    pub country: String,
    pub percentage: u8,
}

/// Audience breakdown tables.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_groups: Vec<AgeGroup>,
    pub locations: Vec<LocationShare>,
}

/// A generated 30-day analytics report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub overview: ReportOverview,
    pub daily_data: Vec<DailyMetrics>,
    pub top_courses: Vec<TopCourse>,
    pub demographics: Demographics,
}

fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Generate a five-module course outline for a topic.
pub fn course_outline(topic: &str) -> CourseOutline {
    let modules = vec![
        OutlineModule {
            title: format!("Introduction to {topic}"),
            lessons: vec![
                "Welcome and Overview".to_string(),
                "What You'll Learn".to_string(),
                "Prerequisites and Requirements".to_string(),
            ],
        },
        OutlineModule {
            title: "Core Concepts".to_string(),
            lessons: vec![
                "Understanding the Fundamentals".to_string(),
                "Key Principles and Best Practices".to_string(),
                "Common Pitfalls to Avoid".to_string(),
            ],
        },
        OutlineModule {
            title: "Practical Implementation".to_string(),
            lessons: vec![
                "Step-by-Step Guide".to_string(),
                "Real-World Examples".to_string(),
                "Hands-on Exercises".to_string(),
            ],
        },
        OutlineModule {
            title: "Advanced Topics".to_string(),
            lessons: vec![
                "Advanced Techniques".to_string(),
                "Optimization Strategies".to_string(),
                "Future Trends".to_string(),
            ],
        },
        OutlineModule {
            title: "Conclusion".to_string(),
            lessons: vec![
                "Summary and Key Takeaways".to_string(),
                "Next Steps".to_string(),
                "Resources and Further Learning".to_string(),
            ],
        },
    ];

    CourseOutline {
        title: format!("AI Course: {topic}"),
        description: format!(
            "A comprehensive course covering all aspects of {topic}, from basics to advanced concepts."
        ),
        duration: "4-6 hours".to_string(),
        modules,
        difficulty: "Beginner to Intermediate".to_string(),
        tags: vec![
            topic.to_lowercase(),
            "ai".to_string(),
            "learning".to_string(),
            "course".to_string(),
        ],
    }
}

/// Generate a webinar agenda scheduled a week out.
pub fn webinar_agenda(topic: &str) -> WebinarAgenda {
    WebinarAgenda {
        title: format!("Webinar: Mastering {topic}"),
        description: format!(
            "Join us for an interactive webinar where we'll dive deep into {topic} and answer your questions."
        ),
        duration: "60 minutes".to_string(),
        speakers: vec![
            "AI Expert".to_string(),
            "Industry Professional".to_string(),
        ],
        agenda: vec![
            AgendaSlot {
                time: "0-5 min".to_string(),
                topic: "Welcome and Introductions".to_string(),
            },
            AgendaSlot {
                time: "5-15 min".to_string(),
                topic: format!("Overview of {topic}"),
            },
            AgendaSlot {
                time: "15-35 min".to_string(),
                topic: "Deep Dive and Case Studies".to_string(),
            },
            AgendaSlot {
                time: "35-50 min".to_string(),
                topic: "Q&A Session".to_string(),
            },
            AgendaSlot {
                time: "50-60 min".to_string(),
                topic: "Wrap-up and Next Steps".to_string(),
            },
        ],
        date: (Utc::now() + Duration::days(7)).to_rfc3339(),
        max_attendees: 100,
        price: 49.99,
    }
}

/// Generate a branding kit with a randomly picked palette and font.
pub fn branding_kit(title: &str) -> BrandingKit {
    let mut rng = rand::thread_rng();
    let palette = COLOR_PALETTES[rng.gen_range(0..COLOR_PALETTES.len())];
    let font = FONTS[rng.gen_range(0..FONTS.len())];
    let base = slug(title);

    BrandingKit {
        logo: format!("{base}-logo.png"),
        colors: palette.iter().map(|c| c.to_string()).collect(),
        fonts: vec![font.to_string()],
        tagline: format!("Empowering {title} enthusiasts worldwide"),
        logo_variations: vec![
            format!("{base}-logo-horizontal.png"),
            format!("{base}-logo-vertical.png"),
            format!("{base}-logo-icon.png"),
        ],
        social_media_templates: SocialTemplates {
            linkedin: format!("{title} LinkedIn Post Template"),
            instagram: format!("{title} Instagram Story Template"),
            twitter: format!("{title} Twitter Header Template"),
        },
    }
}

/// Generate a scheduled-post automation task for tomorrow at 10:00 UTC.
pub fn automation_task(content: &str) -> AutomationTask {
    let mut rng = rand::thread_rng();
    let platform = PLATFORMS[rng.gen_range(0..PLATFORMS.len())];
    let preview: String = content.chars().take(30).collect();
    let tomorrow = Utc::now() + Duration::days(1);

    AutomationTask {
        title: format!("Schedule Post: {preview}..."),
        platform: platform.to_string(),
        content: content.to_string(),
        scheduled_time: format!("{}T10:00:00Z", tomorrow.format("%Y-%m-%d")),
        status: "scheduled".to_string(),
        engagement: EngagementEstimate {
            expected_reach: rng.gen_range(100..1100),
            expected_engagement: rng.gen_range(10..60),
        },
    }
}

/// Generate the top five idea suggestions for a keyword.
pub fn idea_suggestions(keyword: &str) -> Vec<String> {
    let mut suggestions = vec![
        format!("{keyword} for Beginners"),
        format!("Advanced {keyword} Techniques"),
        format!("{keyword} in 2024"),
        format!("Mastering {keyword}"),
        format!("{keyword} Best Practices"),
        format!("Common {keyword} Mistakes"),
        format!("{keyword} Case Studies"),
        format!("{keyword} Tools and Resources"),
    ];
    suggestions.truncate(5);
    suggestions
}

/// Generate a community post draft from one of the canned templates.
pub fn community_post(topic: &str) -> CommunityPostDraft {
    let templates = [
        format!("Just had an amazing idea about {topic}! What do you think?"),
        format!("Excited to share my thoughts on {topic}. Looking forward to your feedback!"),
        format!("Working on something related to {topic}. Anyone else interested in this topic?"),
        format!("New insights on {topic} that I wanted to share with the community."),
        format!("Curious about {topic}? Let's discuss and learn together!"),
    ];
    let mut rng = rand::thread_rng();
    let content = templates[rng.gen_range(0..templates.len())].clone();

    CommunityPostDraft {
        content,
        hashtags: vec![
            slug(topic).replace('-', ""),
            "ai".to_string(),
            "learning".to_string(),
            "community".to_string(),
        ],
        category: "idea".to_string(),
        engagement: PostEngagement {
            likes: rng.gen_range(0..50),
            comments: rng.gen_range(0..20),
            shares: rng.gen_range(0..10),
        },
    }
}

/// Generate the 30-day mock analytics report ending today.
pub fn analytics_report() -> AnalyticsReport {
    let mut rng = rand::thread_rng();
    let today = Utc::now();

    let daily_data = (0..30)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DailyMetrics {
                date: date.format("%Y-%m-%d").to_string(),
                revenue: rng.gen_range(100..1100),
                students: rng.gen_range(5..55),
                ideas: rng.gen_range(1..11),
                engagement: rng.gen_range(20..120),
            }
        })
        .collect();

    AnalyticsReport {
        overview: ReportOverview {
            total_revenue: 15420,
            total_students: 1247,
            total_ideas: 89,
            total_engagement: 89.2,
        },
        daily_data,
        top_courses: vec![
            TopCourse {
                name: "AI for Beginners".to_string(),
                revenue: 3240,
                students: 156,
            },
            TopCourse {
                name: "Advanced Machine Learning".to_string(),
                revenue: 2890,
                students: 98,
            },
            TopCourse {
                name: "Data Science Fundamentals".to_string(),
                revenue: 2150,
                students: 134,
            },
        ],
        demographics: Demographics {
            age_groups: vec![
                AgeGroup {
                    range: "18-24".to_string(),
                    percentage: 25,
                },
                AgeGroup {
                    range: "25-34".to_string(),
                    percentage: 40,
                },
                AgeGroup {
                    range: "35-44".to_string(),
                    percentage: 25,
                },
                AgeGroup {
                    range: "45+".to_string(),
                    percentage: 10,
                },
            ],
            locations: vec![
                LocationShare {
                    country: "United States".to_string(),
                    percentage: 35,
                },
                LocationShare {
                    country: "United Kingdom".to_string(),
                    percentage: 15,
                },
                LocationShare {
                    country: "Canada".to_string(),
                    percentage: 12,
                },
                LocationShare {
                    country: "Australia".to_string(),
                    percentage: 10,
                },
                LocationShare {
                    country: "Other".to_string(),
                    percentage: 28,
                },
            ],
        },
    }
}
