pub struct Project {
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: Option<&'static str>,
    pub video_url: Option<&'static str>,
}

pub struct TechCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Certificate {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub credential_link: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Game {
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub path: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "TaskFlow",
        description: &[
            "A robust full-stack task manager built on the MERN stack with JWT authentication",
            "Real-time progress tracking and workflow visualization with Recharts",
            "Secure file uploads backed by AWS S3 and Cloudinary",
        ],
        tech: &["React", "Node.js", "Express", "MongoDB", "TailwindCSS"],
        github: "https://github.com/DixitAbhinav/taskflow",
        live: Some("https://taskflow.example.dev"),
        video_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
    },
    Project {
        title: "InkPress",
        description: &[
            "A feature-rich blogging platform with a rich-text editor and OAuth login",
            "Scalable Golang backend using Gin and GORM over PostgreSQL",
            "RESTful APIs with bcrypt password encryption",
        ],
        tech: &["Golang", "Gin", "PostgreSQL", "React"],
        github: "https://github.com/DixitAbhinav/inkpress",
        live: None,
        video_url: Some("https://youtu.be/dQw4w9WgXcQ"),
    },
    Project {
        title: "MailPilot",
        description: &[
            "A responsive contact workflow with Nodemailer integration",
            "Optimized database architecture using Mongoose",
        ],
        tech: &["Node.js", "Express", "Mongoose"],
        github: "https://github.com/DixitAbhinav/mailpilot",
        live: None,
        video_url: None,
    },
];

pub const GAMES: &[Game] = &[
    Game {
        title: "Color Match",
        description: &[
            "Test your RGB Color Theory skills",
            "Match colors against the clock and track your Accuracy",
        ],
        tech: &["React", "Framer Motion"],
        path: "/games/color-match",
    },
    Game {
        title: "Reaction Time",
        description: &[
            "Challenge your Reaction Speed",
            "Progress Statistics after every round",
        ],
        tech: &["React", "TailwindCSS"],
        path: "/games/reaction-time",
    },
    Game {
        title: "Typing Race",
        description: &[
            "Improve your WPM and Accuracy on classic Passages",
            "Performance Metrics per session",
        ],
        tech: &["React"],
        path: "/games/typing-race",
    },
    Game {
        title: "Sliding Puzzle",
        description: &[
            "Classic Sliding Tile Puzzle",
            "Practice Spatial Reasoning and Logic",
        ],
        tech: &["React", "Framer Motion"],
        path: "/games/sliding-puzzle",
    },
];

pub const TECH_STACKS: &[TechCategory] = &[
    TechCategory {
        title: "Frontend",
        skills: &["React", "JavaScript", "TailwindCSS", "Framer Motion", "HTML", "CSS"],
    },
    TechCategory {
        title: "Backend & APIs",
        skills: &["Node.js", "Express", "Golang", "Gin", "RESTful APIs", "JWT"],
    },
    TechCategory {
        title: "Databases",
        skills: &["MongoDB", "PostgreSQL", "Mongoose", "GORM"],
    },
    TechCategory {
        title: "Cloud & Tools",
        skills: &["AWS S3", "Cloudinary", "Git", "Postman"],
    },
];

/// Category shown before the visitor picks one.
pub const DEFAULT_TECH_CATEGORY: &str = "Backend & APIs";

pub fn tech_category(title: &str) -> Option<&'static TechCategory> {
    TECH_STACKS.iter().find(|c| c.title == title)
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "cert1",
        title: "Building Web Applications in PHP",
        organization: "Coursera",
        date: "2024",
        credential_link: "https://coursera.org/share/d26705a726f4124fdb16b515e318e86e",
        skills: &["PHP", "Web Development", "Backend Development"],
    },
    Certificate {
        id: "cert2",
        title: "Static Routing Configuration Using Packet Tracer",
        organization: "Coursera",
        date: "2024",
        credential_link: "https://www.coursera.org/account/accomplishments/verify/S8ZZGCHZ8A6Z",
        skills: &["Networking", "Cisco", "Routing"],
    },
    Certificate {
        id: "cert3",
        title: "HTML, CSS, and Javascript for Web Developers",
        organization: "Coursera",
        date: "2024",
        credential_link: "https://coursera.org/share/548fdeed767b6b5293baebf5dd8a1291",
        skills: &["HTML", "CSS", "JavaScript", "Frontend Development"],
    },
    Certificate {
        id: "cert4",
        title: "Server side JavaScript with Node.js",
        organization: "Coursera",
        date: "2024",
        credential_link: "https://coursera.org/share/4059787bb2d30cb3e341afe2d85fecf9",
        skills: &["Node.js", "Express", "Server-side JavaScript"],
    },
    Certificate {
        id: "cert5",
        title: "Programming in C++: A Hands-on Introduction",
        organization: "Coursera",
        date: "2024",
        credential_link: "https://coursera.org/share/02c7ebd5a96c930a3fb3e97345d4359b",
        skills: &["C++", "Programming", "Object-Oriented Programming"],
    },
];

/// Certificates visible while the gallery is collapsed.
pub const COLLAPSED_CERTIFICATES: usize = 3;

pub fn displayed_certificates(expanded: bool) -> &'static [Certificate] {
    if expanded {
        CERTIFICATES
    } else {
        &CERTIFICATES[..COLLAPSED_CERTIFICATES.min(CERTIFICATES.len())]
    }
}
