//! Static page content: fixed, ordered tables the view renders directly.
//! The blog carousel takes its slide count from `BLOG_POSTS.len()`; the
//! controller never mutates any of these.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "JavaScript",
        proficiency: 90,
        description: "Proficient in modern JavaScript, including ES6+ features.",
    },
    Skill {
        name: "TypeScript",
        proficiency: 85,
        description: "Strong typing skills with TypeScript for large-scale applications.",
    },
    Skill {
        name: "React",
        proficiency: 95,
        description: "Expert in React, including hooks, context, and state management.",
    },
    Skill {
        name: "Node.js",
        proficiency: 88,
        description: "Experienced in server-side JavaScript with Node.js and Express.",
    },
    Skill {
        name: "MongoDB",
        proficiency: 80,
        description: "Skilled in NoSQL database design and operations with MongoDB.",
    },
    Skill {
        name: "PostgreSQL",
        proficiency: 75,
        description: "Proficient in relational database management with PostgreSQL.",
    },
    Skill {
        name: "GraphQL",
        proficiency: 70,
        description: "Experienced in designing and implementing GraphQL APIs.",
    },
    Skill {
        name: "Docker",
        proficiency: 65,
        description: "Familiar with containerization and deployment using Docker.",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "The Future of Web Development",
        date: "2024-03-15",
        excerpt: "Exploring upcoming trends and technologies in web development.",
    },
    BlogPost {
        title: "Mastering React Hooks",
        date: "2024-02-28",
        excerpt: "A deep dive into advanced React Hook patterns and best practices.",
    },
    BlogPost {
        title: "Building Scalable APIs with GraphQL",
        date: "2024-02-10",
        excerpt: "Learn how to design and implement efficient GraphQL APIs for your projects.",
    },
    BlogPost {
        title: "The Power of TypeScript in Large-Scale Applications",
        date: "2024-01-22",
        excerpt: "Discover how TypeScript can improve your development workflow and reduce bugs.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Project One",
        description: "A real-time collaboration tool with shared editing and presence.",
    },
    Project {
        title: "Project Two",
        description: "An e-commerce storefront with a headless CMS backend.",
    },
    Project {
        title: "Project Three",
        description: "A habit tracker with offline-first sync and streak analytics.",
    },
    Project {
        title: "Project Four",
        description: "A GraphQL gateway aggregating several legacy REST services.",
    },
    Project {
        title: "Project Five",
        description: "A data dashboard rendering live metrics from a streaming API.",
    },
    Project {
        title: "Project Six",
        description: "A progressive web app for discovering local events.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Custom web applications tailored to your specific needs, built with the latest technologies and best practices.",
    },
    Service {
        title: "Mobile App Development",
        description: "Cross-platform mobile applications that provide a seamless experience across iOS and Android devices.",
    },
    Service {
        title: "Backend Development",
        description: "Robust and scalable server-side solutions, APIs, and database management to power your applications.",
    },
];
