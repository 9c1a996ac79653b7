use super::{not_browsable, CatalogSource};
use crate::error::Result;
use crate::model::{Activity, ActivityKind, Catalog, CatalogItem, Category, Profile, ViewKind};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static HOME: Lazy<Catalog> = Lazy::new(|| Catalog {
    view: ViewKind::Home,
    categories: vec![
        Category::new("best-seller", "Best Seller"),
        Category::new("new", "New"),
        Category::new("sale", "Sale"),
    ],
    items: vec![
        CatalogItem::new(
            1,
            "Premium Wireless Headphones",
            "High-quality audio with noise cancellation and 30-hour battery life.",
            "best-seller",
            &["Noise Cancellation", "30h Battery", "Wireless"],
        )
        .with_detail("price", "$299")
        .with_detail("was", "$399")
        .with_detail("rating", "4.8")
        .with_detail("reviews", "124"),
        CatalogItem::new(
            2,
            "Smart Fitness Watch",
            "Track your health and fitness goals with advanced monitoring features.",
            "new",
            &["Heart Rate", "GPS", "Waterproof"],
        )
        .with_detail("price", "$199")
        .with_detail("was", "$249")
        .with_detail("rating", "4.6")
        .with_detail("reviews", "89"),
        CatalogItem::new(
            3,
            "Portable Power Bank",
            "Fast charging power bank with 20,000mAh capacity and multiple ports.",
            "sale",
            &["20,000mAh", "Fast Charge", "Multiple Ports"],
        )
        .with_detail("price", "$49")
        .with_detail("was", "$69")
        .with_detail("rating", "4.7")
        .with_detail("reviews", "256"),
    ],
});

static LIBRARY: Lazy<Catalog> = Lazy::new(|| {
    let categories = ["Interactive", "Layout", "Navigation", "Forms", "Data Display", "Overlay"]
        .iter()
        .map(|name| Category::new(*name, *name))
        .collect();
    let component = |id, title, description, category, tags: &[&str], downloads, stars| {
        CatalogItem::new(id, title, description, category, tags)
            .with_detail("downloads", downloads)
            .with_detail("stars", stars)
    };

    Catalog {
        view: ViewKind::Library,
        categories,
        items: vec![
            component(
                1,
                "Button Component",
                "Versatile button component with multiple variants and sizes",
                "Interactive",
                &["React", "TypeScript", "Accessible"],
                "12.5k",
                "4.9",
            ),
            component(
                2,
                "Card Component",
                "Flexible card container for displaying content with headers and footers",
                "Layout",
                &["Layout", "Container", "Responsive"],
                "8.2k",
                "4.8",
            ),
            component(
                3,
                "Navigation Menu",
                "Responsive navigation component with dropdown support",
                "Navigation",
                &["Navigation", "Dropdown", "Mobile"],
                "15.1k",
                "4.9",
            ),
            component(
                4,
                "Form Components",
                "Complete form component library with validation",
                "Forms",
                &["Forms", "Validation", "Input"],
                "9.7k",
                "4.7",
            ),
            component(
                5,
                "Data Table",
                "Advanced data table with sorting, filtering, and pagination",
                "Data Display",
                &["Table", "Data", "Sorting"],
                "11.3k",
                "4.8",
            ),
            component(
                6,
                "Modal Dialog",
                "Accessible modal dialog component with overlay",
                "Overlay",
                &["Modal", "Dialog", "Overlay"],
                "7.9k",
                "4.6",
            ),
        ],
    }
});

static DISCOVER: Lazy<Catalog> = Lazy::new(|| {
    let lesson = |id, title, description, category, tags: &[&str], rating, likes, duration| {
        CatalogItem::new(id, title, description, category, tags)
            .with_detail("rating", rating)
            .with_detail("likes", likes)
            .with_detail("duration", duration)
    };

    Catalog {
        view: ViewKind::Discover,
        categories: vec![
            Category::new("trending", "Trending"),
            Category::new("popular", "Popular"),
            Category::new("recent", "Recent"),
        ],
        items: vec![
            lesson(
                1,
                "Advanced React Patterns",
                "Deep dive into advanced React patterns and best practices for scalable applications.",
                "trending",
                &["React", "JavaScript", "Patterns"],
                "4.8",
                "234",
                "2h 30m",
            ),
            lesson(
                2,
                "UI/UX Design Principles",
                "Master the fundamentals of user interface and user experience design.",
                "popular",
                &["Design", "UI/UX", "Figma"],
                "4.9",
                "456",
                "3h 15m",
            ),
            lesson(
                3,
                "Modern CSS Techniques",
                "Explore modern CSS features including Grid, Flexbox, and CSS-in-JS solutions.",
                "recent",
                &["CSS", "Web Design", "Frontend"],
                "4.7",
                "189",
                "1h 45m",
            ),
            lesson(
                4,
                "Node.js Best Practices",
                "Build scalable backend applications with Node.js and Express.",
                "trending",
                &["Node.js", "Backend", "API"],
                "4.6",
                "312",
                "4h 20m",
            ),
            lesson(
                5,
                "TypeScript Fundamentals",
                "Learn TypeScript from basics to advanced concepts for better JavaScript development.",
                "popular",
                &["TypeScript", "JavaScript", "Programming"],
                "4.8",
                "278",
                "2h 50m",
            ),
            lesson(
                6,
                "GraphQL & Apollo",
                "Master GraphQL and Apollo Client for modern API development.",
                "recent",
                &["GraphQL", "Apollo", "API"],
                "4.5",
                "156",
                "3h 35m",
            ),
        ],
    }
});

static PLAYLISTS: Lazy<Catalog> = Lazy::new(|| {
    let playlist = |id, title, description, genre, tracks, duration| {
        CatalogItem::new(id, title, description, genre, &[])
            .with_detail("tracks", tracks)
            .with_detail("duration", duration)
    };

    Catalog {
        view: ViewKind::Playlists,
        categories: ["Ambient", "Electronic", "Indie", "Jazz", "Rock", "Lo-fi"]
            .iter()
            .map(|genre| Category::new(*genre, *genre))
            .collect(),
        items: vec![
            playlist(
                1,
                "Chill Vibes",
                "Perfect for relaxing after a long day",
                "Ambient",
                "24",
                "1h 32m",
            )
            .pre_liked(),
            playlist(
                2,
                "Workout Mix",
                "High energy tracks to keep you motivated",
                "Electronic",
                "18",
                "58m",
            ),
            playlist(
                3,
                "Indie Discoveries",
                "Fresh indie tracks from emerging artists",
                "Indie",
                "31",
                "2h 15m",
            )
            .pre_liked(),
            playlist(
                4,
                "Jazz Classics",
                "Timeless jazz standards and modern interpretations",
                "Jazz",
                "22",
                "1h 45m",
            ),
            playlist(5, "Road Trip", "Songs for the open road", "Rock", "27", "1h 58m")
                .pre_liked(),
            playlist(
                6,
                "Focus Flow",
                "Instrumental tracks for deep work",
                "Lo-fi",
                "15",
                "1h 12m",
            ),
        ],
    }
});

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

static PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    name: "Alex Johnson".to_string(),
    email: "alex.johnson@example.com".to_string(),
    avatar: "/api/placeholder/100/100".to_string(),
    plan: "Pro".to_string(),
    join_date: date(2023, 1, 15),
    last_login: date(2024, 1, 20),
    recent_activity: vec![
        Activity {
            action: "Profile updated".to_string(),
            when: "2 hours ago".to_string(),
            kind: ActivityKind::Update,
        },
        Activity {
            action: "Password changed".to_string(),
            when: "3 days ago".to_string(),
            kind: ActivityKind::Security,
        },
        Activity {
            action: "New device login".to_string(),
            when: "1 week ago".to_string(),
            kind: ActivityKind::Login,
        },
        Activity {
            action: "Plan upgraded to Pro".to_string(),
            when: "2 weeks ago".to_string(),
            kind: ActivityKind::Billing,
        },
    ],
});

/// The demo catalogs, compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinSource {
    fn catalog(&self, view: ViewKind) -> Result<Catalog> {
        let catalog = match view {
            ViewKind::Home => &*HOME,
            ViewKind::Library => &*LIBRARY,
            ViewKind::Discover => &*DISCOVER,
            ViewKind::Playlists => &*PLAYLISTS,
            ViewKind::Account => return Err(not_browsable(view)),
        };
        Ok(catalog.clone())
    }

    fn profile(&self) -> Result<Profile> {
        Ok(PROFILE.clone())
    }
}
