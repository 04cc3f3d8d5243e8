//! Static portfolio content. Hand-authored, read-only, and never fetched.

use serde::Serialize;

use crate::state::ViewId;

pub const SECTION_SKILLS_LANGUAGES: &str = "skills-languages";
pub const SECTION_SKILLS_FRAMEWORKS: &str = "skills-frameworks";
pub const SECTION_SKILLS_CORE: &str = "skills-core";
pub const SECTION_SKILLS_CERTIFICATIONS: &str = "skills-certifications";
pub const SECTION_SKILLS_EDUCATION: &str = "skills-education";
pub const SECTION_PHILOSOPHY_PRINCIPLES: &str = "philosophy-principles";
pub const SECTION_PHILOSOPHY_JOURNEY: &str = "philosophy-journey";
pub const SECTION_ABOUT_INTERESTS: &str = "about-interests";
/// Linked from the overview but never laid out by the projects view.
pub const SECTION_PROJECTS_PERSONAL_CRAFT: &str = "personal-craft";

#[derive(Debug, Serialize)]
pub struct Portfolio {
    pub personal: Personal,
    pub stats: &'static [Stat],
    pub quick_links: &'static [QuickLink],
    pub journey: &'static [Chapter],
    pub interests: &'static [Interest],
    pub skills: Skills,
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub principles: &'static [Principle],
    pub reflections: &'static [Reflection],
    pub education: Education,
    pub certifications: &'static [Certification],
    pub publications: &'static [Publication],
    pub nullbyte_articles: &'static [Article],
}

#[derive(Debug, Serialize)]
pub struct Personal {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub taglines: &'static [&'static str],
    pub about: &'static str,
    pub philosophy: &'static str,
    pub nullbyte: &'static str,
}

/// Headline number on the overview; hovering shows its tooltip and
/// activating it navigates to `action_view`.
#[derive(Debug, Serialize)]
pub struct Stat {
    pub key: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub meta: &'static str,
    pub action_label: &'static str,
    pub action_view: ViewId,
}

#[derive(Debug, Serialize)]
pub struct QuickLink {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub url: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Chapter {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Interest {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Skills {
    pub languages: &'static [LanguageSkill],
    pub frameworks: &'static [Framework],
    pub core: &'static [CoreSkill],
    pub tools: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct LanguageSkill {
    pub name: &'static str,
    pub level: &'static str,
    pub years: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Framework {
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CoreSkill {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub modules: &'static [Module],
    pub impact: &'static [&'static str],
    pub tech: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Module {
    pub name: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub tech: &'static [&'static str],
    pub summary: &'static str,
    pub challenge: &'static str,
    pub approach: &'static str,
    pub impact: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Reflection {
    pub title: &'static str,
    pub content: &'static str,
    pub highlight: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub cgpa: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Publication {
    pub title: &'static str,
    pub authors: &'static str,
    pub journal: &'static str,
    pub volume: &'static str,
    pub year: &'static str,
    pub doi: Option<&'static str>,
    pub link: Option<&'static str>,
}

impl Publication {
    /// DOI resolver URL when there is one, else the direct link.
    pub fn url(&self) -> Option<String> {
        match (self.doi, self.link) {
            (Some(doi), _) => Some(format!("https://doi.org/{doi}")),
            (None, Some(link)) => Some(link.to_string()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub note: Option<&'static str>,
    pub link: &'static str,
}

pub static PORTFOLIO: Portfolio = Portfolio {
    personal: Personal {
        name: "Muhammad Ammar Khan",
        role: "Software Architect & Security Engineer",
        location: "Jhelum, Punjab, Pakistan",
        email: "m.shahzad.ms72@gmail.com",
        taglines: &[
            "Creating What Hasn't Been Built Before",
            "Software Architect & Security Engineer",
            "C++ Expert & Cryptography Specialist",
            "AI-Powered Innovation Engineer",
        ],
        about: "A lifelong journey of innovation and engineering excellence, from age 3 to industry leader. I blend low-level mastery (C++, Cryptography) with high-level architecture (.NET, AI) to solve problems others consider impossible.",
        philosophy: "I don't accept 'because that's how it's done' as an answer. True mastery shows in making complex things simple, not simple things complex. Each problem deserves a solution tailored to its unique constraints.",
        nullbyte: "https://creator.wonderhowto.com/h4ck3r_777/",
    },
    stats: &[
        Stat {
            key: "stat-experience",
            value: "5+ Years",
            caption: "Experience",
            title: "5+ Years Experience",
            description: "From teenage cybersecurity research to professional software architecture, spanning mobile, web, and enterprise systems.",
            meta: "Since 2019",
            action_label: "View experience",
            action_view: ViewId::Experience,
        },
        Stat {
            key: "stat-projects",
            value: "20+",
            caption: "Projects",
            title: "20+ Projects Delivered",
            description: "Enterprise systems, open source libraries, research simulations, and mobile applications across diverse domains.",
            meta: "Portfolio",
            action_label: "Explore projects",
            action_view: ViewId::Projects,
        },
        Stat {
            key: "stat-productivity",
            value: "200%",
            caption: "Productivity",
            title: "200% Productivity Boost",
            description: "Achieved through the Employee Monitoring Suite, a flagship system engineered solo with zero defects at launch.",
            meta: "Impact",
            action_label: "See how",
            action_view: ViewId::Projects,
        },
        Stat {
            key: "stat-cgpa",
            value: "3.73",
            caption: "CGPA",
            title: "3.73 / 4.0 CGPA",
            description: "BS Computer Science from University of the Punjab. Unofficial C++ TA from 2nd semester, first team to complete FYP and research simultaneously.",
            meta: "Academic",
            action_label: "View credentials",
            action_view: ViewId::Skills,
        },
    ],
    quick_links: &[
        QuickLink {
            id: "link-github",
            label: "GitHub",
            description: "View GitHub profile",
            keywords: &["github", "code", "repository", "source"],
            url: "https://github.com/TheMR-777",
        },
        QuickLink {
            id: "link-linkedin",
            label: "LinkedIn",
            description: "Connect on LinkedIn",
            keywords: &["linkedin", "professional", "network", "connect"],
            url: "https://www.linkedin.com/in/777-ammar",
        },
        QuickLink {
            id: "link-email",
            label: "Send Email",
            description: "m.shahzad.ms72@gmail.com",
            keywords: &["email", "mail", "contact", "message"],
            url: "mailto:m.shahzad.ms72@gmail.com",
        },
        QuickLink {
            id: "link-cv",
            label: "View CV Dataset",
            description: "Complete professional profile",
            keywords: &["cv", "resume", "dataset", "profile"],
            url: "https://github.com/TheMR-777/TheMR-777/blob/main/cv-dataset.md",
        },
    ],
    journey: &[
        Chapter {
            title: "The Genesis (Age 3-10)",
            period: "1994 - 2011",
            description: "My journey began at age 3, influenced by my uncle who ran a computer lab in Rawalpindi. When gifted a high-spec PC with Windows XP, limited access became my greatest teacher. I learned to troubleshoot independently, often finding myself more capable than local tech experts.",
        },
        Chapter {
            title: "The Awakening (Teenage Years)",
            period: "2017 - 2019",
            description: "Watching 'Inkeshaaf' on 24 News sparked my passion for ethical hacking. Over a year, I mastered Linux, Python, networking, and pioneered mobile-to-mobile penetration testing. My article became the second most-read on Null Byte (2018-2020).",
        },
        Chapter {
            title: "Academic Excellence (2019-2023)",
            period: "2019 - 2023",
            description: "At University of the Punjab, I achieved a 3.73 CGPA while going far beyond curriculum. Became an unofficial C++ teaching assistant in my second semester and was the first team to complete both FYP and research papers simultaneously.",
        },
        Chapter {
            title: "Professional Evolution (2023-Present)",
            period: "2023 - Present",
            description: "Selected immediately by ACE's CTO, I now serve as .NET Developer & Architecture Consultant, transforming enterprise systems. The defining achievement: devoting an entire year to the Employee Monitoring Suite.",
        },
    ],
    interests: &[
        Interest {
            name: "Astronomy",
            description: "Second-largest passion after computing. I study the cosmos to build intuition about black holes, stellar evolution, and cosmic structure.",
        },
        Interest {
            name: "Physics",
            description: "A late-blooming love that became a core lens. I reason about electromagnetism, chip fabrication, GPUs, and hardware architectures.",
        },
        Interest {
            name: "Psychology",
            description: "Nurtured by my psychologist mother. I study cognitive biases and social dynamics to design humane products and lead better teams.",
        },
    ],
    skills: Skills {
        languages: &[
            LanguageSkill {
                name: "C++",
                level: "Expert",
                years: "6+",
                note: "Modern C++23/26, Template Metaprogramming, STL",
            },
            LanguageSkill {
                name: "C# / .NET",
                level: "Advanced",
                years: "3+",
                note: ".NET 9, LINQ, Async/Await, Performance",
            },
            LanguageSkill {
                name: "Python",
                level: "Intermediate",
                years: "5+",
                note: "Scientific Computing, Automation, ML",
            },
            LanguageSkill {
                name: "TypeScript",
                level: "Intermediate",
                years: "2+",
                note: "Angular, Node.js, Modern ES6+",
            },
            LanguageSkill {
                name: "SQL",
                level: "Advanced",
                years: "4+",
                note: "Complex Queries, Optimization",
            },
            LanguageSkill {
                name: "Dart",
                level: "Proficient",
                years: "3+",
                note: "Flutter, State Management",
            },
        ],
        frameworks: &[
            Framework {
                name: ".NET Core / Blazor",
                category: "Backend",
            },
            Framework {
                name: "Angular 20",
                category: "Frontend",
            },
            Framework {
                name: "Flutter",
                category: "Mobile",
            },
            Framework {
                name: "AvaloniaUI / WPF",
                category: "Desktop",
            },
            Framework {
                name: "SignalR / gRPC",
                category: "Real-time",
            },
            Framework {
                name: "GraphQL",
                category: "API",
            },
        ],
        core: &[
            CoreSkill {
                name: "System Architecture",
                description: "Microservices, Event-Driven, Multi-tenant, DDD",
            },
            CoreSkill {
                name: "Cryptography",
                description: "AES-256, RSA-4096, ECC, Key Management",
            },
            CoreSkill {
                name: "Performance Engineering",
                description: "Optimization, Profiling, Low-latency systems",
            },
            CoreSkill {
                name: "Security Engineering",
                description: "Penetration Testing, Zero-Trust, Secure Design",
            },
            CoreSkill {
                name: "AI Integration",
                description: "Prompt Engineering, LLM Integration, Copilot workflows",
            },
        ],
        tools: &[
            "Docker",
            "Git",
            "Azure DevOps",
            "PostgreSQL",
            "Redis",
            "OpenSSL",
            "VS Code",
            "IntelliJ IDEA",
        ],
    },
    experience: &[
        Experience {
            company: "ACE Money Transfer",
            role: ".NET Developer & Architecture Consultant",
            period: "Jun 2023 - Present",
            location: "Remote/Hybrid",
            summary: "Transforming enterprise systems into multi-tenant SaaS platforms. Single-handedly engineered the Employee Monitoring Suite achieving 200% productivity boost with zero defects at launch.",
            highlights: &[
                "Architected Employee Monitoring Suite solo, zero defects at launch",
                "Designed 'ACE Password Vault' with multi-layered cryptography",
                "Led ERP Platform Engineering: Rules, Approvals, Rights, Notifications",
                "Integrated Mastercard, HBL, and PNB payment services",
            ],
            modules: &[
                Module {
                    name: "Composable Permissions",
                    description: "Tenant-aware, module-agnostic access control designed for integration across the entire ERP suite without modification.",
                    impact: "Eliminated redundant auth code across 5+ modules",
                },
                Module {
                    name: "Approvals Orchestration Engine",
                    description: "Generic plug-in workflow layer supporting approve/reject/escalate flows.",
                    impact: "Reduced approval implementation time by 80%",
                },
                Module {
                    name: "Notifications & Template Center",
                    description: "Multi-channel delivery (Email/In-App/Push/WhatsApp) with runtime-managed, localizable templates.",
                    impact: "Unified notification logic, 60% less code",
                },
                Module {
                    name: "Command Palette",
                    description: "Rights-compliant navigation with fuzzy search and score-based ranking.",
                    impact: "Improved navigation efficiency 3x",
                },
            ],
            impact: &[
                "200% productivity increase via Employee Monitoring Suite",
                "35% reduction in unauthorized breaks",
                "5+ major modules standardized on new platform",
            ],
            tech: &[".NET 9", "Blazor", "Angular", "GraphQL", "SignalR", "PostgreSQL"],
        },
        Experience {
            company: "MIMOS Berhad (Malaysia)",
            role: "Lead Developer & System Architect",
            period: "Dec 2024 - Jul 2025",
            location: "Remote",
            summary: "Built a UWB Indoor Positioning Simulation System as a solo project, eliminating the need for costly physical testing.",
            highlights: &[
                "First-principles simulation without physical hardware",
                "Real-time heatmap visualization with NumPy/SciPy",
                "Material-specific signal attenuation modeling",
            ],
            modules: &[
                Module {
                    name: "Simulation Engine",
                    description: "C# 13 and .NET 9 core modeling signal attenuation, reflection, and geometric constraints.",
                    impact: "Matched physical test results within 5% margin",
                },
                Module {
                    name: "Signal Processing Pipeline",
                    description: "Python 3.13 modules using NumPy/SciPy for computational geometry and heatmap generation.",
                    impact: "Real-time updates for large floorplans",
                },
            ],
            impact: &[
                "Eliminated need for initial physical site surveys",
                "Compressed deployment timeline from months to days",
            ],
            tech: &["C# 13", ".NET 9", "Python 3.13", "NumPy", "SciPy", "WPF"],
        },
        Experience {
            company: "TeqHolic",
            role: "Flutter Development Intern",
            period: "2023 (3 Months)",
            location: "Jhelum, Pakistan",
            summary: "Developed cross-platform mobile applications including social media and e-commerce platforms with real-time capabilities.",
            highlights: &[
                "Built Chirp: Twitter-like app with real-time updates",
                "Developed Sara Kuch: E-commerce with Shopify integration",
            ],
            modules: &[
                Module {
                    name: "Chirp",
                    description: "Social media application with real-time feeds, interactions, and notifications using Firebase.",
                    impact: "Full MVP in 6 weeks",
                },
                Module {
                    name: "Sara Kuch",
                    description: "E-commerce platform integrating Shopify REST API with cart, checkout, and order tracking.",
                    impact: "Complete e-commerce flow delivered",
                },
            ],
            impact: &["Delivered two full MVP applications in 3 months"],
            tech: &["Flutter", "Dart", "Firebase", "Shopify API", "Provider"],
        },
    ],
    projects: &[
        Project {
            title: "Employee Monitoring Suite",
            category: "Flagship / Enterprise",
            tech: &[".NET", "Blazor", "GraphQL", "ApexCharts", "Micro-ORM"],
            summary: "Company-wide monitoring system achieving 200% productivity boost with zero defects at launch.",
            challenge: "The company lacked visibility into remote work patterns. Existing solutions were either invasive, inaccurate, or lacked context-aware reporting.",
            approach: "Engineered a privacy-conscious, OS-level monitoring agent with a real-time Blazor dashboard and GraphQL data pipelines.",
            impact: &[
                "Zero defects at production launch",
                "200% productivity increase measured company-wide",
                "35% reduction in unauthorized breaks",
            ],
            link: None,
        },
        Project {
            title: "UWB Indoor Positioning Simulation",
            category: "Simulation / Research",
            tech: &["C# 13", ".NET 9", "Python", "NumPy", "SciPy", "WPF"],
            summary: "Simulation engine enabling UWB deployment planning without physical hardware.",
            challenge: "Deploying UWB anchors requires expensive physical testing, and mistakes in placement are costly to fix.",
            approach: "A hybrid engine: .NET for UI and geometry, Python for signal propagation modeling with material-specific attenuation.",
            impact: &[
                "Reduced deployment costs by approximately 60%",
                "Simulation accuracy within 5% of physical tests",
            ],
            link: None,
        },
        Project {
            title: "Enterprise ERP Platform",
            category: "SaaS / Architecture",
            tech: &[".NET 9", "TypeScript", "Angular", "SignalR", "PostgreSQL"],
            summary: "Multi-tenant platform with composable subsystems powering all business modules.",
            challenge: "Legacy tools were fragmented and single-tenant. Adding a module meant reinventing authentication, approvals, and logging.",
            approach: "A shared backbone of generic Approvals, Rules, Notifications, and Rights engines that business modules plug into.",
            impact: &[
                "Enabled rapid rollout of 5+ business modules",
                "90% reduction in module development time",
            ],
            link: None,
        },
        Project {
            title: "ACE Password Vault",
            category: "Security / Cryptography",
            tech: &["C++", ".NET", "OpenSSL", "AES-256", "RSA-4096"],
            summary: "Multi-layered encryption system with custom cryptographic protocols.",
            challenge: "Financial credentials required higher security than off-the-shelf password managers, with auditing and key rotation.",
            approach: "C++ inner loops over OpenSSL for raw cryptography, .NET outer layers for secure memory management and the interface.",
            impact: &[
                "Became critical company infrastructure",
                "Zero security incidents since deployment",
            ],
            link: None,
        },
        Project {
            title: "mr_crypt",
            category: "Open Source / Library",
            tech: &["C++23", "OpenSSL 3.0+", "Template Metaprogramming"],
            summary: "Range-like syntax for C++ cryptography reducing implementation time by 10x.",
            challenge: "OpenSSL's C API requires extensive boilerplate and manual memory management.",
            approach: "C++23 ranges and concepts for a fluent, type-safe API with compile-time checks.",
            impact: &[
                "10x reduction in implementation boilerplate",
                "Active open source maintenance",
            ],
            link: Some("https://github.com/TheMR-777"),
        },
        Project {
            title: "Costaz",
            category: "Academic / Education",
            tech: &["Flutter", "Google Sheets API", "Firebase"],
            summary: "Decentralized academic management system reducing manual data entry by 50%.",
            challenge: "Professors struggled with fragmented record-keeping, and unreliable connectivity ruled out cloud-only tools.",
            approach: "Offline-first design with Google accounts for auth and Google Sheets for familiar data handling.",
            impact: &[
                "50% reduction in manual data entry",
                "30% improvement in data accuracy",
            ],
            link: None,
        },
    ],
    principles: &[
        Principle {
            title: "Question the Status Quo",
            description: "I don't accept \"because that's how it's done.\" I question existing implementations and seek deeper understanding.",
        },
        Principle {
            title: "Simplicity as Sophistication",
            description: "True mastery shows in making complex things simple. I eliminate unnecessary complexity and find elegant paths.",
        },
        Principle {
            title: "Optimization Instinct",
            description: "I naturally spot inefficiencies, where small changes yield disproportionate gains.",
        },
        Principle {
            title: "Domain-Specific Solutions",
            description: "Each problem deserves a solution tailored to its unique constraints, not forced generic templates.",
        },
        Principle {
            title: "Continuous Betterment",
            description: "Making things genuinely better, not just different. Seeking meaningful improvements that create lasting value.",
        },
        Principle {
            title: "Philosophical Depth",
            description: "I think deeply about the \"why\" behind decisions. Understanding systems holistically, building intuition over recipes.",
        },
    ],
    reflections: &[
        Reflection {
            title: "The Journey Over the Goal",
            content: "Whether architecting a comprehensive system or refining a Fibonacci sequence, the experience is the same: an insatiable curiosity that drives me to discover one more micro-optimization.",
            highlight: "The destination is just a waypoint.",
        },
        Reflection {
            title: "The Beauty in Fundamentals",
            content: "I remember iterating on fundamental algorithms far longer than anyone would consider reasonable, because each iteration revealed something new.",
            highlight: "These aren't just technical wins; they're discoveries.",
        },
        Reflection {
            title: "Succeeding Within the Failures",
            content: "Sometimes the original goal remains out of reach, but along the way I stumble upon a technique or an insight I hadn't anticipated.",
            highlight: "Failure isn't an endpoint; it's a checkpoint.",
        },
    ],
    education: Education {
        degree: "BS (Honors) Computer Science",
        institution: "University of the Punjab, Jhelum Campus",
        period: "2019 - 2023",
        cgpa: "3.73 / 4.0",
        achievements: &[
            "Unofficial C++ teaching assistant from 2nd semester",
            "Deputy class representative during COVID-19",
            "First team to complete FYP and research simultaneously",
        ],
    },
    certifications: &[
        Certification {
            name: "Modern C++ Mastery with Game Development",
            issuer: "TheCherno",
            note: "Performance-focused engineering mentorship",
        },
        Certification {
            name: "Advanced Cryptography",
            issuer: "Christof Paar",
            note: "Deep cryptographic theory and implementation",
        },
        Certification {
            name: ".NET Basic to Advanced",
            issuer: "CodeWithMosh & Tim Corey",
            note: "Enterprise .NET development patterns",
        },
        Certification {
            name: "IELTS Academic",
            issuer: "British Council",
            note: "Band 7.5 (L:8.5, R:7.0, W:7.0, S:7.0)",
        },
    ],
    publications: &[
        Publication {
            title: "Identification of Paddy Disease Along Its Processing Time",
            authors: "Khan, S.N., Khan, S.U., Khan, M.A., Ansar, M.U., et al.",
            journal: "Quantum Journal of Social Sciences and Humanities",
            volume: "4(3), 72-80",
            year: "2023",
            doi: Some("10.55197/qjssh.v4i3.251"),
            link: None,
        },
        Publication {
            title: "Paddy Leaf Disease Symptoms Detection Through Artificial Neural Network",
            authors: "Khan, S.N., Khan, S.U., Ahmed, S., Khan, M.A., Khan, J.",
            journal: "Quantum Journal of Engineering, Science and Technology",
            volume: "4(4), 1-10",
            year: "2023",
            doi: None,
            link: Some("https://qjoest.com/index.php/qjoest/article/view/123/75"),
        },
    ],
    nullbyte_articles: &[
        Article {
            title: "Installing Metasploit Framework on Android - Part 1: Termux",
            note: Some("Most read 2018-2020"),
            link: "https://null-byte.wonderhowto.com/forum/to-install-metasploit-framework-android-part-1-termux-0186792/",
        },
        Article {
            title: "Hack Android Device with Termux - Part 2: Over WLAN Hotspot",
            note: None,
            link: "https://null-byte.wonderhowto.com/forum/to-hack-android-device-with-termux-android-part-2-over-wlan-hotspot-ultimate-guide-0187637/",
        },
        Article {
            title: "Hack Android Device with Termux - Part 1: Over Internet",
            note: None,
            link: "https://null-byte.wonderhowto.com/forum/to-hack-android-device-with-termux-android-part-1-over-internet-ultimate-guide-0187005/",
        },
    ],
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn quick_link_ids_are_unique() {
        let ids: HashSet<_> = PORTFOLIO.quick_links.iter().map(|link| link.id).collect();
        assert_eq!(ids.len(), PORTFOLIO.quick_links.len());
    }

    #[test]
    fn email_link_targets_contact_address() {
        let email = PORTFOLIO
            .quick_links
            .iter()
            .find(|link| link.id == "link-email")
            .expect("email link");
        assert_eq!(email.url, format!("mailto:{}", PORTFOLIO.personal.email));
    }

    #[test]
    fn publications_prefer_doi_links() {
        let urls: Vec<_> = PORTFOLIO.publications.iter().map(Publication::url).collect();
        assert_eq!(
            urls,
            vec![
                Some("https://doi.org/10.55197/qjssh.v4i3.251".to_string()),
                Some("https://qjoest.com/index.php/qjoest/article/view/123/75".to_string()),
            ]
        );
    }

    #[test]
    fn articles_are_null_byte_links() {
        assert_eq!(PORTFOLIO.nullbyte_articles.len(), 3);
        assert!(PORTFOLIO
            .nullbyte_articles
            .iter()
            .all(|article| article.link.starts_with("https://null-byte.wonderhowto.com/")));
    }
}
