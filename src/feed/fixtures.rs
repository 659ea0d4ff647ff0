use chrono::{Duration, Utc};

use crate::feed::model::{Author, Comment, Post};

fn author(name: &str, role: &str) -> Author {
    Author {
        name: name.to_string(),
        avatar: format!("placeholder:{}", initials(name)),
        role: role.to_string(),
    }
}

/// First letter of the first two words, e.g. "Amara Osei" -> "AO".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Mock feed returned by the simulated backend.
pub fn mock_posts() -> Vec<Post> {
    let now = Utc::now();

    vec![
        Post {
            id: "post-1".to_string(),
            title: "Quarterly protocol review is open".to_string(),
            content: "The review window for active study protocols opens today. \
                      Please flag any amendments filed since the last cycle so the \
                      committee can triage them before the panel meets."
                .to_string(),
            author: author("Amara Osei", "Research Director"),
            created_at: now - Duration::hours(2),
            image: None,
            likes: 24,
            is_liked: false,
            comments: vec![Comment {
                id: "comment-1".to_string(),
                author: author("Jonas Lindqvist", "Researcher"),
                content: "Two amendments from the sleep cohort are coming this week."
                    .to_string(),
                created_at: now - Duration::minutes(45),
            }],
        },
        Post {
            id: "post-2".to_string(),
            title: "Consent form template updated".to_string(),
            content: "A revised participant consent template is now the default for \
                      new submissions. The data-retention section was rewritten in \
                      plain language."
                .to_string(),
            author: author("Priya Raman", "Compliance Officer"),
            created_at: now - Duration::days(1),
            image: Some("/assets/img/consent-template.svg".to_string()),
            likes: 12,
            is_liked: false,
            comments: vec![],
        },
        Post {
            id: "post-3".to_string(),
            title: "Site audit findings published".to_string(),
            content: "Findings from the spring site audits are available on the \
                      dashboard. No critical deviations were recorded; three minor \
                      documentation gaps have owners assigned."
                .to_string(),
            author: author("Daniel Achterberg", "Lead Auditor"),
            created_at: now - Duration::days(3),
            image: None,
            likes: 56,
            is_liked: true,
            comments: vec![
                Comment {
                    id: "comment-2".to_string(),
                    author: author("Amara Osei", "Research Director"),
                    content: "Thanks to every site coordinator for the quick turnaround."
                        .to_string(),
                    created_at: now - Duration::days(2),
                },
                Comment {
                    id: "comment-3".to_string(),
                    author: author("Mei Tanaka", "Researcher"),
                    content: "Are the documentation gaps tracked in the same register?"
                        .to_string(),
                    created_at: now - Duration::days(1),
                },
            ],
        },
    ]
}
