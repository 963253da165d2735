/// Sample portfolio content
///
/// Hard-coded data tables backing every section of the home page. These
/// stand in for real project data until a backend exists; the view layer
/// treats them as read-only.

use super::data::{DesignItem, DtpService, Review, ServiceOffering, VideoItem, VideoSource, WebProject};

/// Design gallery filter chips, in display order. "All" disables the filter.
pub const DESIGN_CATEGORIES: [&str; 6] = [
    "All",
    "Branding",
    "Social Media",
    "Print Design",
    "Web Design",
    "Logo Design",
];

pub fn videos() -> Vec<VideoItem> {
    vec![
        VideoItem {
            id: "1",
            title: "Corporate Promotional Video",
            source: VideoSource::Hosted("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            description: "A high-quality corporate promotional video showcasing modern editing techniques.",
            reviews: vec![
                Review {
                    id: "1",
                    author: "John Doe",
                    rating: 5,
                    comment: "Excellent work! Very professional.",
                    date: "2024-01-15",
                },
                Review {
                    id: "2",
                    author: "Jane Smith",
                    rating: 4,
                    comment: "Great editing skills, loved the transitions.",
                    date: "2024-01-10",
                },
            ],
        },
        VideoItem {
            id: "2",
            title: "Event Highlight Reel",
            source: VideoSource::Hosted("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            description: "Dynamic event coverage with smooth transitions and color grading.",
            reviews: vec![Review {
                id: "3",
                author: "Mike Johnson",
                rating: 5,
                comment: "Captured the event perfectly!",
                date: "2024-01-12",
            }],
        },
        VideoItem {
            id: "3",
            title: "Product Showcase",
            source: VideoSource::LocalSample("sample-video.mp4"),
            description: "Creative product demonstration with professional lighting and effects.",
            reviews: vec![],
        },
        VideoItem {
            id: "4",
            title: "Social Media Content",
            source: VideoSource::Hosted("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            description: "Engaging social media videos optimized for various platforms.",
            reviews: vec![Review {
                id: "4",
                author: "Sarah Wilson",
                rating: 4,
                comment: "Perfect for social media!",
                date: "2024-01-08",
            }],
        },
    ]
}

pub fn designs() -> Vec<DesignItem> {
    vec![
        DesignItem {
            id: "1",
            title: "Brand Identity Design",
            category: "Branding",
            description: "Complete brand identity package including logo, colors, and typography.",
            reviews: vec![
                Review {
                    id: "1",
                    author: "Emily Davis",
                    rating: 5,
                    comment: "Amazing design work! Love the creativity.",
                    date: "2024-01-14",
                },
                Review {
                    id: "2",
                    author: "Robert Brown",
                    rating: 5,
                    comment: "Professional and modern approach.",
                    date: "2024-01-11",
                },
            ],
        },
        DesignItem {
            id: "2",
            title: "Social Media Graphics",
            category: "Social Media",
            description: "Eye-catching social media posts and story templates.",
            reviews: vec![Review {
                id: "3",
                author: "Lisa Garcia",
                rating: 4,
                comment: "Great for social media campaigns!",
                date: "2024-01-13",
            }],
        },
        DesignItem {
            id: "3",
            title: "Print Advertisement",
            category: "Print Design",
            description: "High-impact print advertisement with bold typography and colors.",
            reviews: vec![
                Review {
                    id: "4",
                    author: "David Miller",
                    rating: 5,
                    comment: "Outstanding print design quality.",
                    date: "2024-01-09",
                },
                Review {
                    id: "5",
                    author: "Anna Taylor",
                    rating: 4,
                    comment: "Very creative and professional.",
                    date: "2024-01-07",
                },
            ],
        },
        DesignItem {
            id: "4",
            title: "Website UI Design",
            category: "Web Design",
            description: "Modern and responsive website interface design.",
            reviews: vec![],
        },
        DesignItem {
            id: "5",
            title: "Logo Collection",
            category: "Logo Design",
            description: "Creative logo designs for various industries and brands.",
            reviews: vec![Review {
                id: "6",
                author: "Chris Wilson",
                rating: 5,
                comment: "Excellent logo concepts!",
                date: "2024-01-06",
            }],
        },
    ]
}

/// Designs matching the active category chip; "All" returns everything.
pub fn filter_designs<'a>(designs: &'a [DesignItem], category: &str) -> Vec<&'a DesignItem> {
    designs
        .iter()
        .filter(|design| category == "All" || design.category == category)
        .collect()
}

pub fn dtp_services() -> Vec<DtpService> {
    vec![
        DtpService {
            id: "1",
            title: "Brochure Design",
            description: "Professional tri-fold and bi-fold brochures for marketing campaigns",
            features: &["High-resolution print ready", "CMYK color format", "Multiple layout options"],
        },
        DtpService {
            id: "2",
            title: "Flyer Design",
            description: "Eye-catching flyers for events, promotions, and announcements",
            features: &["A4/A5 sizes available", "Creative layouts", "Print-optimized"],
        },
        DtpService {
            id: "3",
            title: "Business Cards",
            description: "Professional business card designs that make lasting impressions",
            features: &["Standard dimensions", "Premium finishes", "Double-sided options"],
        },
        DtpService {
            id: "4",
            title: "Catalog Design",
            description: "Product catalogs and company portfolios with professional layouts",
            features: &["Multi-page layouts", "Product showcase", "Brand consistency"],
        },
    ]
}

pub fn web_projects() -> Vec<WebProject> {
    vec![
        WebProject {
            id: "1",
            title: "E-commerce Website",
            description: "Modern responsive e-commerce platform with shopping cart functionality",
            technologies: &["React", "Node.js", "MongoDB", "Stripe"],
            category: "E-commerce",
        },
        WebProject {
            id: "2",
            title: "Corporate Website",
            description: "Professional corporate website with CMS integration and SEO optimization",
            technologies: &["WordPress", "PHP", "MySQL", "SEO"],
            category: "Corporate",
        },
        WebProject {
            id: "3",
            title: "Portfolio Website",
            description: "Creative portfolio showcase with smooth animations and responsive design",
            technologies: &["HTML5", "CSS3", "JavaScript", "GSAP"],
            category: "Portfolio",
        },
        WebProject {
            id: "4",
            title: "Landing Page",
            description: "High-converting landing page with optimized user experience and analytics",
            technologies: &["React", "Tailwind", "Analytics", "A/B Testing"],
            category: "Landing Page",
        },
    ]
}

pub fn service_offerings() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            title: "Video Editing",
            description: "I'm dedicated to produce high-quality content, stay updated with trends, \
                and collaborate with clients, consistently delivering impactful designs that \
                enhance brand identity and drive to success specific needs of our clients.",
            features: &["Professional Color Grading", "Smooth Transitions", "Audio Enhancement", "Motion Graphics"],
            link: "https://sundarportfoliovideo.my.canva.site/",
        },
        ServiceOffering {
            title: "Graphic Designer",
            description: "Creative and detail oriented graphic designer specializing in visually \
                compelling designs, including logo's, banner's, and branding materials. \
                Transforming ideas into impactful visuals that captivate to engage and we \
                encourage your feedback throughout the design process to ensure that we are \
                meeting your expectations.",
            features: &["Logo Design", "Brand Identity", "Print Materials", "Digital Graphics"],
            link: "https://drive.google.com/drive/folders/1OohGm-YrV0-q9_F1M4ZMxNS7pZ369AAC",
        },
        ServiceOffering {
            title: "Web Developer",
            description: "We use the latest web technologies and development tools to create \
                websites that are fast, secure, and scalable.",
            features: &["Responsive Design", "Modern Technologies", "Fast & Secure", "SEO Optimized"],
            link: "#",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_ids(ids: Vec<&str>) {
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len(), "duplicate ids in table");
    }

    #[test]
    fn test_tables_have_unique_ids() {
        assert_unique_ids(videos().iter().map(|v| v.id).collect());
        assert_unique_ids(designs().iter().map(|d| d.id).collect());
        assert_unique_ids(dtp_services().iter().map(|s| s.id).collect());
        assert_unique_ids(web_projects().iter().map(|p| p.id).collect());
    }

    #[test]
    fn test_every_design_category_is_a_known_chip() {
        for design in designs() {
            assert!(
                DESIGN_CATEGORIES.contains(&design.category),
                "{} has unknown category {}",
                design.title,
                design.category
            );
        }
    }

    #[test]
    fn test_filter_designs_by_category() {
        let all = designs();
        assert_eq!(filter_designs(&all, "All").len(), all.len());

        let branding = filter_designs(&all, "Branding");
        assert_eq!(branding.len(), 1);
        assert_eq!(branding[0].title, "Brand Identity Design");

        assert!(filter_designs(&all, "Photography").is_empty());
    }

    #[test]
    fn test_ratings_stay_in_star_range() {
        let reviews = designs()
            .into_iter()
            .flat_map(|d| d.reviews)
            .chain(videos().into_iter().flat_map(|v| v.reviews));
        for review in reviews {
            assert!((1..=5).contains(&review.rating));
        }
    }
}
