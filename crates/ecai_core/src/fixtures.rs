//! Placeholder data shipped until a real data source exists.

use crate::model::activity::Activity;
use crate::model::card::{CardId, Opportunity};
use crate::service::saved_service::SavedOpportunity;

fn card_id(value: &str) -> CardId {
    CardId::new(value).expect("fixture card ids are non-empty literals")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Opportunities in the swipe deck, in stacking order.
pub fn swipe_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: card_id("1"),
            title: "Environmental Club Leadership Position".to_string(),
            organization: "Green Future Initiative".to_string(),
            description: "Join our environmental club as a leadership team member. Help organize campus sustainability events, coordinate recycling programs, and lead environmental awareness campaigns.".to_string(),
            location: "Campus Center, Room 204".to_string(),
            time_commitment: "5-7 hours/week".to_string(),
            category: "Environmental".to_string(),
            participants: 45,
            deadline: "Due Feb 15".to_string(),
            tags: strings(&["Leadership", "Sustainability", "Event Planning", "Teamwork"]),
        },
        Opportunity {
            id: card_id("2"),
            title: "Student Government Representative".to_string(),
            organization: "University Student Government".to_string(),
            description: "Represent your fellow students as a class representative in the student government. Participate in policy discussions and advocate for student needs.".to_string(),
            location: "Student Union Building".to_string(),
            time_commitment: "6-8 hours/week".to_string(),
            category: "Government".to_string(),
            participants: 28,
            deadline: "Due Feb 28".to_string(),
            tags: strings(&["Leadership", "Public Speaking", "Policy", "Advocacy"]),
        },
        Opportunity {
            id: card_id("3"),
            title: "Campus Newspaper Editor".to_string(),
            organization: "The Daily Campus".to_string(),
            description: "Looking for passionate writers and editors to join our award-winning campus newspaper. Cover campus events and develop your journalism skills.".to_string(),
            location: "Media Center, 3rd Floor".to_string(),
            time_commitment: "8-10 hours/week".to_string(),
            category: "Media".to_string(),
            participants: 32,
            deadline: "Due Feb 20".to_string(),
            tags: strings(&["Writing", "Journalism", "Media", "Communication"]),
        },
        Opportunity {
            id: card_id("4"),
            title: "Peer Tutoring Program".to_string(),
            organization: "Academic Success Center".to_string(),
            description: "Share your knowledge and help fellow students succeed academically through one-on-one and group tutoring sessions.".to_string(),
            location: "Library Learning Commons".to_string(),
            time_commitment: "4-6 hours/week".to_string(),
            category: "Academic".to_string(),
            participants: 67,
            deadline: "Due Mar 1".to_string(),
            tags: strings(&["Teaching", "Academic Support", "Mentorship", "Communication"]),
        },
        Opportunity {
            id: card_id("5"),
            title: "Drama Club Production Team".to_string(),
            organization: "University Theater Department".to_string(),
            description: "Join our spring production as part of the technical crew. Learn stage design, lighting, sound, and costume design.".to_string(),
            location: "Fine Arts Building Theater".to_string(),
            time_commitment: "10-12 hours/week".to_string(),
            category: "Arts".to_string(),
            participants: 24,
            deadline: "Due Feb 10".to_string(),
            tags: strings(&["Theater", "Technical Skills", "Creativity", "Teamwork"]),
        },
    ]
}

/// Initial contents of the saved list. Ids never collide with the swipe deck.
pub fn saved_opportunities() -> Vec<SavedOpportunity> {
    vec![
        SavedOpportunity {
            id: card_id("saved-1"),
            title: "USA Biology Olympiad (USABO)".to_string(),
            kind: "Science/Math".to_string(),
            location: "Hybrid".to_string(),
            duration: "School Year".to_string(),
            description: "Nation's premier biology competition selecting top students for the International Biology Olympiad.".to_string(),
            application_link: "https://example.com/usabo".to_string(),
        },
        SavedOpportunity {
            id: card_id("saved-2"),
            title: "American Regions Mathematics League (ARML)".to_string(),
            kind: "Science/Math".to_string(),
            location: "In-Person".to_string(),
            duration: "School Year".to_string(),
            description: "National team-based math competition fostering collaboration among top high school math students.".to_string(),
            application_link: "https://example.com/arml".to_string(),
        },
        SavedOpportunity {
            id: card_id("saved-3"),
            title: "Environmental Leadership Program".to_string(),
            kind: "Environmental".to_string(),
            location: "Campus".to_string(),
            duration: "Semester".to_string(),
            description: "Develop environmental advocacy skills while leading campus sustainability initiatives.".to_string(),
            application_link: "https://example.com/environmental".to_string(),
        },
    ]
}

/// Initial tracked activities.
pub fn tracked_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".to_string(),
            name: "Future Business Leaders of America (FBLA)".to_string(),
            kind: "Business".to_string(),
            grades: strings(&["9", "10", "11", "12"]),
            hours_per_week: 10.0,
            weeks_per_year: 43,
            roles: "Treasurer (11)".to_string(),
            description: "Managed $2k+ in club assets; hosted 10+ fundraisers.".to_string(),
        },
        Activity {
            id: "2".to_string(),
            name: "High School Basketball Team".to_string(),
            kind: "Athletics-Jv-Varsity".to_string(),
            grades: strings(&["10", "11", "12"]),
            hours_per_week: 12.0,
            weeks_per_year: 35,
            roles: "Varsity Captain (12)".to_string(),
            description: "Started on Varsity all 4 years; named to the All-County team in 11th grade.".to_string(),
        },
        Activity {
            id: "3".to_string(),
            name: "National Honor Society".to_string(),
            kind: "Academic".to_string(),
            grades: strings(&["11", "12"]),
            hours_per_week: 3.0,
            weeks_per_year: 36,
            roles: "Member".to_string(),
            description: "Participated in community service projects and tutoring programs.".to_string(),
        },
    ]
}
