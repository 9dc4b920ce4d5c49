//! Built-in catalog compiled into the binary.
//!
//! Mirrors the launch content of the site: eight pillars, forty generated
//! guides spread round-robin over the pillars, three shop products and two
//! curated collections.

use super::types::{Catalog, Category, Collection, DigitalProduct, Language, Post, ProductKind};

/// Number of generated guides.
pub const POST_COUNT: usize = 40;

const PILLARS: [(&str, &str, &str, &str, &str, [&str; 4]); 8] = [
    (
        "money",
        "Money & Work",
        "money-work",
        "💰",
        "Expert advice on side hustles, saving, and career growth.",
        ["Side Hustles", "Saving", "Investment", "Careers"],
    ),
    (
        "tech",
        "Tech & AI",
        "tech-ai",
        "🤖",
        "Master the latest apps, AI tools, and troubleshooting guides.",
        ["Software", "Artificial Intelligence", "Hardware", "Mobile"],
    ),
    (
        "health",
        "Health & Wellness",
        "health-wellness",
        "🌱",
        "Practical habits for a balanced mind and body.",
        ["Mental Health", "Fitness", "Nutrition", "Sleep"],
    ),
    (
        "home",
        "Home & Lifestyle",
        "home-lifestyle",
        "🏠",
        "DIY organization and family life hacks.",
        ["Organization", "DIY", "Family", "Gardening"],
    ),
    (
        "travel",
        "Travel & Local",
        "travel-local",
        "✈️",
        "Unforgettable itineraries and travel gear reviews.",
        ["Itineraries", "Gear", "Budget Travel", "Solo Travel"],
    ),
    (
        "food",
        "Food & Cooking",
        "food-cooking",
        "🍳",
        "Recipes and essential guides for home cooks.",
        ["Recipes", "Kitchen Tools", "Meal Prep", "Baking"],
    ),
    (
        "learning",
        "Learning & Skills",
        "learning-skills",
        "📚",
        "Productivity tips and language learning resources.",
        ["Productivity", "Study Tips", "Languages", "Online Courses"],
    ),
    (
        "culture",
        "Entertainment & Culture",
        "entertainment-culture",
        "🎬",
        "Streaming picks, books, and creative hobbies.",
        ["Streaming", "Books", "Hobbies", "Movies"],
    ),
];

const BASE_TITLES: [&str; 8] = [
    "How to Start a Side Hustle in 2024",
    "10 Best Free AI Tools for Productivity",
    "Morning Routine Habits for Mental Clarity",
    "The Ultimate Guide to Minimalist Packing",
    "5 Easy Recipes for Busy Weeknights",
    "Mastering Python: A Beginners Path",
    "Best Budget Smartphones This Year",
    "Gardening Tips for Small Balconies",
];

const EXCERPT: &str = "A comprehensive guide exploring practical strategies to improve your daily life and achieve long-term success in this niche.";

const BODY: &str = r#"
## Introduction
In today's fast-paced world, finding the right balance between productivity and personal growth is essential. This guide dives deep into practical steps you can take today.

## Why This Matters
Understanding the core principles of this topic allows you to build a foundation for long-term mastery. Whether you are a beginner or looking to refine your skills, we've got you covered.

### Key Takeaways
1. Consistency is key to any successful habit.
2. Leverage tools that automate repetitive tasks.
3. Never stop learning from diverse sources.

## Detailed Breakdown
Lorum ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.

| Feature | Benefit |
|---------|---------|
| Speed   | Faster results |
| Cost    | High ROI |

> "The best way to predict the future is to create it." - Peter Drucker
"#;

/// Build the built-in catalog.
pub fn catalog() -> Catalog {
    let categories: Vec<Category> = PILLARS
        .iter()
        .map(|(id, name, slug, icon, description, subs)| Category {
            id: (*id).into(),
            name: (*name).into(),
            slug: (*slug).into(),
            icon: (*icon).into(),
            description: (*description).into(),
            subcategories: subs.iter().map(|s| (*s).into()).collect(),
        })
        .collect();

    let posts = (0..POST_COUNT).map(|i| post(i, &categories)).collect();

    Catalog {
        categories,
        posts,
        products: products(),
        collections: collections(),
    }
}

fn post(i: usize, categories: &[Category]) -> Post {
    let pillar = &categories[i % categories.len()];
    let title = if i > 8 {
        format!("{} (Part {})", BASE_TITLES[i % 8], i.div_ceil(8))
    } else {
        BASE_TITLES[i % 8].to_owned()
    };

    Post {
        id: format!("post-{i}"),
        title,
        slug: format!("post-slug-{i}"),
        excerpt: EXCERPT.into(),
        content: BODY.into(),
        cover_image: format!("https://picsum.photos/seed/{i}/800/600"),
        category: pillar.id.clone(),
        subcategory: pillar.subcategories[0].clone(),
        author: "Jordan Smith".into(),
        date: "2024-05-15".into(),
        updated_date: (i % 3 == 0).then(|| "2024-06-01".into()),
        reading_time: "8 min read".into(),
        tags: ["featured", "guide", "popular"]
            .into_iter()
            .map(String::from)
            .collect(),
        language: Language::En,
        is_premium: i % 10 == 0,
    }
}

fn products() -> Vec<DigitalProduct> {
    vec![
        DigitalProduct {
            id: "p1".into(),
            name: "2024 Side Hustle Planner".into(),
            description: "Complete PDF guide and tracking sheets.".into(),
            price: 19.99,
            image: "https://picsum.photos/seed/p1/400/400".into(),
            kind: ProductKind::Pdf,
        },
        DigitalProduct {
            id: "p2".into(),
            name: "Notion Life Operating System".into(),
            description: "Advanced template for your daily tasks.".into(),
            price: 49.00,
            image: "https://picsum.photos/seed/p2/400/400".into(),
            kind: ProductKind::Template,
        },
        DigitalProduct {
            id: "p3".into(),
            name: "Meal Prep Masterclass".into(),
            description: "Video bundle + recipe book.".into(),
            price: 29.99,
            image: "https://picsum.photos/seed/p3/400/400".into(),
            kind: ProductKind::Bundle,
        },
    ]
}

fn collections() -> Vec<Collection> {
    vec![
        Collection {
            id: "essentials".into(),
            title: "Reader Essentials".into(),
            slug: "reader-essentials".into(),
            description: "The guides new readers open first.".into(),
            posts: ["post-0", "post-1", "post-2", "post-4"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
        Collection {
            id: "premium".into(),
            title: "Premium Deep Dives".into(),
            slug: "premium-deep-dives".into(),
            description: "Long-form guides for members.".into(),
            posts: ["post-10", "post-20", "post-30"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
    ]
}
