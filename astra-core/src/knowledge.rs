//! Static advisory knowledge base.
//!
//! Every classification table is an ordered `&'static` slice, not a map:
//! declaration order is the tie-break for first-match classification and the
//! emission order for multi-match topic detection. Lookups are total —
//! unknown keys fall back to documented defaults instead of erroring.

use crate::models::GradeLevel;

// ============================================================================
// Major categories
// ============================================================================

pub struct MajorCategory {
    pub keywords: &'static [&'static str],
    pub courses: &'static [&'static str],
    pub competitions: &'static [&'static str],
    pub research: &'static [&'static str],
    pub extracurriculars: &'static [&'static str],
    pub summer_programs: &'static [&'static str],
    pub skills: &'static [&'static str],
}

static CS: MajorCategory = MajorCategory {
    keywords: &[
        "computer science",
        "cs",
        "software",
        "programming",
        "coding",
        "ai",
        "machine learning",
        "artificial intelligence",
        "data science",
    ],
    courses: &[
        "AP Computer Science A (essential)",
        "AP Computer Science Principles",
        "AP Calculus BC",
        "AP Statistics",
        "Linear Algebra (if available)",
        "Data Structures & Algorithms (online/dual enrollment)",
    ],
    competitions: &[
        "USACO (USA Computing Olympiad) - Bronze to Platinum divisions",
        "Google Code Jam / Kick Start",
        "Meta Hacker Cup",
        "Codeforces / LeetCode competitive programming",
        "Kaggle competitions for data science",
        "Congressional App Challenge",
        "Hack Club events and hackathons",
    ],
    research: &[
        "Build original projects: apps, websites, games, or AI tools",
        "Contribute to open-source projects on GitHub",
        "Research with university professors in AI/ML",
        "Submit to ISEF/Regeneron with a CS project",
        "Develop a research paper for publication",
    ],
    extracurriculars: &[
        "Start or lead a coding club at school",
        "Mentor younger students in programming",
        "Create a tech startup or nonprofit",
        "Build apps that solve real community problems",
        "Participate in hackathons and win awards",
    ],
    summer_programs: &[
        "Google CSSI (Computer Science Summer Institute)",
        "MIT PRIMES / RSI (Research Science Institute)",
        "Stanford SIMR or COSMOS",
        "Carnegie Mellon's Summer Academy for Math and Science",
        "University research internships (cold email professors)",
    ],
    skills: &[
        "Python, Java, C++ (at least 2 languages)",
        "Web development (HTML/CSS/JS, React)",
        "Version control with Git/GitHub",
        "Problem-solving and algorithmic thinking",
        "Machine learning basics (TensorFlow, PyTorch)",
    ],
};

static ENGINEERING: MajorCategory = MajorCategory {
    keywords: &[
        "engineering",
        "mechanical",
        "electrical",
        "civil",
        "aerospace",
        "biomedical",
        "chemical",
        "robotics",
    ],
    courses: &[
        "AP Physics C: Mechanics & E&M",
        "AP Calculus BC",
        "AP Chemistry",
        "Engineering/Robotics electives",
        "CAD/3D modeling courses",
    ],
    competitions: &[
        "FIRST Robotics (FRC/FTC)",
        "Science Olympiad (engineering events)",
        "Physics Olympiad (F=ma, USAPhO)",
        "TSA (Technology Student Association)",
        "Rube Goldberg Machine Contest",
        "Model bridge building competitions",
    ],
    research: &[
        "University lab research in mechanical/electrical engineering",
        "Build functional prototypes solving real problems",
        "Patent a novel invention or design",
        "Submit to science fairs with engineering projects",
        "Publish research in engineering journals",
    ],
    extracurriculars: &[
        "Lead a FIRST Robotics team",
        "Engineering/STEM tutoring",
        "Build prosthetics for underserved communities",
        "Drone club, 3D printing club",
        "Community engineering projects",
    ],
    summer_programs: &[
        "MIT Women's Technology Program",
        "Stanford Engineering Academy",
        "Cooper Union Summer STEM",
        "Notre Dame iSURE",
        "Carnegie Mellon SAMS",
    ],
    skills: &[
        "CAD software (SolidWorks, AutoCAD, Fusion 360)",
        "3D printing and prototyping",
        "Arduino/Raspberry Pi programming",
        "Basic circuit design",
        "Technical documentation and design reports",
    ],
};

static PREMED: MajorCategory = MajorCategory {
    keywords: &[
        "medicine",
        "pre-med",
        "premed",
        "biology",
        "neuroscience",
        "public health",
        "healthcare",
        "doctor",
        "physician",
    ],
    courses: &[
        "AP Biology",
        "AP Chemistry",
        "AP Physics 1 & 2 (or C)",
        "AP Psychology",
        "Anatomy & Physiology",
        "Research Methods/Statistics",
    ],
    competitions: &[
        "Science Olympiad (biology/health events)",
        "HOSA - Future Health Professionals",
        "Biology Olympiad (USABO)",
        "Brain Bee (neuroscience)",
        "Health Career Connection essays",
    ],
    research: &[
        "Clinical shadowing (100+ hours)",
        "Biomedical research with university professors",
        "Hospital volunteer work",
        "Public health research projects",
        "ISEF projects in biology/medicine",
    ],
    extracurriculars: &[
        "Health-focused community service",
        "Medical mission trips (if available)",
        "Start a health education initiative",
        "Red Cross volunteering",
        "Peer health counseling",
    ],
    summer_programs: &[
        "NIH Summer Internship Program",
        "Stanford Institutes of Medicine Summer",
        "NSLC programs in medicine",
        "Local hospital volunteer programs",
        "University biomedical research REUs",
    ],
    skills: &[
        "Laboratory techniques",
        "Patient communication",
        "Medical terminology",
        "Research methodology",
        "Empathy and bedside manner",
    ],
};

static BUSINESS: MajorCategory = MajorCategory {
    keywords: &[
        "business",
        "economics",
        "finance",
        "marketing",
        "entrepreneurship",
        "management",
        "accounting",
    ],
    courses: &[
        "AP Economics (Micro & Macro)",
        "AP Statistics",
        "AP Calculus (AB or BC)",
        "Business/Entrepreneurship electives",
        "Accounting courses",
    ],
    competitions: &[
        "DECA (marketing, finance, hospitality)",
        "FBLA (Future Business Leaders)",
        "Economics Challenge (Fed Challenge)",
        "Diamond Challenge (entrepreneurship)",
        "Stock market simulations",
    ],
    research: &[
        "Start and run an actual business",
        "Economic research paper",
        "Market analysis projects",
        "Social entrepreneurship venture",
        "Business case competitions",
    ],
    extracurriculars: &[
        "Start a business or social enterprise",
        "Investment club leadership",
        "Junior Achievement programs",
        "Nonprofit management",
        "Event planning and management",
    ],
    summer_programs: &[
        "Wharton LBW/Moneyball Academy",
        "LaunchX (MIT entrepreneurship)",
        "NSLC Business & Entrepreneurship",
        "Summer business internships",
        "Yale Young Global Scholars",
    ],
    skills: &[
        "Financial modeling (Excel)",
        "Public speaking and pitching",
        "Market research",
        "Leadership and team management",
        "Networking and communication",
    ],
};

static HUMANITIES: MajorCategory = MajorCategory {
    keywords: &[
        "english",
        "history",
        "philosophy",
        "political science",
        "international relations",
        "sociology",
        "anthropology",
        "literature",
        "writing",
        "journalism",
    ],
    courses: &[
        "AP English Literature & Language",
        "AP US History / World History / European History",
        "AP Government & Politics",
        "AP Psychology",
        "Foreign languages (AP level)",
    ],
    competitions: &[
        "Speech and Debate (NFL/NSDA)",
        "Model UN",
        "Scholastic Art & Writing Awards",
        "Essay competitions (JFK Library, etc.)",
        "National History Day",
    ],
    research: &[
        "Original historical research with archives",
        "Political analysis and policy papers",
        "Publish articles in school/local newspapers",
        "Literary magazine editing",
        "Documentary filmmaking",
    ],
    extracurriculars: &[
        "Debate team captain/leadership",
        "Model UN secretary-general",
        "School newspaper editor-in-chief",
        "Literary magazine founder/editor",
        "Community advocacy campaigns",
    ],
    summer_programs: &[
        "Telluride Association Summer Program (TASP)",
        "Stanford Humanities Institute",
        "Oxbridge Academic Programs",
        "Georgetown summer programs",
        "Journalism/writing workshops",
    ],
    skills: &[
        "Research and analysis",
        "Academic writing",
        "Public speaking",
        "Critical thinking",
        "Foreign language proficiency",
    ],
};

static STEM_GENERAL: MajorCategory = MajorCategory {
    keywords: &["math", "mathematics", "physics", "chemistry", "science", "stem"],
    courses: &[
        "AP Calculus BC",
        "AP Physics C (both)",
        "AP Chemistry",
        "Multivariable Calculus / Linear Algebra",
        "AP Statistics",
    ],
    competitions: &[
        "AMC/AIME/USAMO (math)",
        "USAPhO (physics)",
        "USNCO (chemistry)",
        "Science Olympiad",
        "Putnam preparation",
    ],
    research: &[
        "Original research with university mentors",
        "Submit to ISEF/Regeneron",
        "Theoretical or experimental projects",
        "Mathematical proofs and papers",
        "Cross-disciplinary research",
    ],
    extracurriculars: &[
        "Math/Science tutoring",
        "Science Olympiad team leadership",
        "Math circle facilitation",
        "STEM outreach to underserved communities",
        "Science YouTube channel or blog",
    ],
    summer_programs: &[
        "RSI (Research Science Institute)",
        "PROMYS / Ross Mathematics Program",
        "SSP (Summer Science Program)",
        "Canada/USA Mathcamp",
        "MIT PRIMES",
    ],
    skills: &[
        "Advanced problem-solving",
        "Mathematical proof writing",
        "Lab techniques",
        "Scientific writing",
        "Programming for computation",
    ],
};

pub static MAJOR_CATEGORIES: &[(&str, &MajorCategory)] = &[
    ("cs", &CS),
    ("engineering", &ENGINEERING),
    ("premed", &PREMED),
    ("business", &BUSINESS),
    ("humanities", &HUMANITIES),
    ("stem_general", &STEM_GENERAL),
];

/// Category used when no major keyword matches.
pub const DEFAULT_MAJOR_CATEGORY: &str = "stem_general";

pub fn major_category(key: &str) -> &'static MajorCategory {
    MAJOR_CATEGORIES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, category)| *category)
        .unwrap_or(&STEM_GENERAL)
}

// ============================================================================
// Grade-level advice
// ============================================================================

pub struct GradeAdvice {
    pub priorities: &'static [&'static str],
    pub courses: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub timeline: &'static [&'static str],
}

static GRADE_9: GradeAdvice = GradeAdvice {
    priorities: &[
        "Focus on building strong academic foundations",
        "Explore 2-3 potential interest areas through clubs and activities",
        "Start developing core skills in your areas of interest",
        "Build relationships with teachers who can become mentors",
    ],
    courses: &[
        "Take honors-level courses in your strongest subjects",
        "Start a foreign language if you haven't already",
        "Consider taking Algebra II or Geometry (accelerated math track)",
        "Explore electives aligned with potential interests",
    ],
    activities: &[
        "Join 2-3 clubs to explore interests (don't overcommit yet)",
        "Start learning skills outside school (coding, music, art)",
        "Consider joining a sport or physical activity",
        "Begin community service in areas you care about",
    ],
    timeline: &[
        "Fall: Explore clubs and activities at school",
        "Winter: Settle into 2-3 consistent commitments",
        "Spring: Reflect on what you enjoyed most",
        "Summer: Take a class, start a project, or explore a new skill",
    ],
};

static GRADE_10: GradeAdvice = GradeAdvice {
    priorities: &[
        "Begin narrowing focus to 1-2 primary interest areas ('spike' development)",
        "Take leadership roles in activities you've committed to",
        "Start preparing for standardized tests (PSAT, SAT/ACT)",
        "Begin building a portfolio of work in your interest area",
    ],
    courses: &[
        "Start taking AP courses in your strongest subjects (2-3 APs)",
        "Continue accelerated math track (Pre-Calculus)",
        "Add subject-specific APs aligned with intended major",
        "Consider dual enrollment for advanced courses",
    ],
    activities: &[
        "Take on leadership roles (vice president, team captain)",
        "Start an independent project aligned with your interests",
        "Compete in regional/state-level competitions",
        "Build connections with mentors in your field",
    ],
    timeline: &[
        "Fall: Increase commitment to primary activities, take PSAT",
        "Winter: Begin SAT/ACT prep, work on independent projects",
        "Spring: Compete in competitions, seek summer opportunities",
        "Summer: Research program, internship, or intensive project",
    ],
};

static GRADE_11: GradeAdvice = GradeAdvice {
    priorities: &[
        "This is the most critical year for college admissions",
        "Maximize your spike with significant achievements",
        "Take most challenging course load",
        "Excel on standardized tests (SAT/ACT, AP exams)",
    ],
    courses: &[
        "Take 4-6 AP courses (focus on core + major-related)",
        "AP Calculus BC if STEM-focused",
        "Continue challenging course load across subjects",
        "Consider research methodology or advanced electives",
    ],
    activities: &[
        "Achieve top leadership positions (president, founder, captain)",
        "Win significant awards in competitions",
        "Complete or publish research",
        "Create tangible impact in your community",
    ],
    timeline: &[
        "Fall: SAT/ACT prep and first attempts, maximum activities",
        "Winter: Competition season, finalize research projects",
        "Spring: AP exams, final SAT/ACT attempts, college list research",
        "Summer: Prestigious program, internship, or capstone project",
    ],
};

static GRADE_12: GradeAdvice = GradeAdvice {
    priorities: &[
        "Focus on college applications (essays are crucial)",
        "Maintain strong grades (senior slump hurts)",
        "Continue leadership and activities through fall",
        "Demonstrate continued growth and commitment",
    ],
    courses: &[
        "Continue rigorous course load (don't drop down)",
        "Take APs in new areas to show intellectual breadth",
        "Consider college-level courses (dual enrollment)",
        "Maintain GPA above 3.9 unweighted",
    ],
    activities: &[
        "Complete any ongoing projects or research",
        "Maintain leadership roles through application season",
        "Win final awards and recognition",
        "Mentor younger students in your areas of expertise",
    ],
    timeline: &[
        "August-October: Complete Common App, early applications",
        "November: Submit early decision/action applications",
        "December-January: Regular decision applications",
        "Spring: Make final decision, senior capstone activities",
    ],
};

static GAP_YEAR: GradeAdvice = GradeAdvice {
    priorities: &[
        "Create meaningful experiences that strengthen your profile",
        "Address any weaknesses from high school",
        "Develop maturity and unique perspectives",
        "Build skills and experiences relevant to your goals",
    ],
    courses: &[
        "Consider community college courses in weak areas",
        "Take online courses from prestigious universities",
        "Learn new languages or technical skills",
        "Obtain relevant certifications",
    ],
    activities: &[
        "Internship or work experience in your field",
        "Significant volunteer or service project",
        "Travel with purpose (language immersion, cultural exchange)",
        "Start a business or major independent project",
    ],
    timeline: &[
        "Plan activities that build on your existing profile",
        "Document everything for updated applications",
        "Stay connected with recommenders",
        "Apply to schools during your gap year",
    ],
};

static TRANSFER: GradeAdvice = GradeAdvice {
    priorities: &[
        "Achieve the highest possible GPA at current institution",
        "Build relationships with professors for recommendations",
        "Continue meaningful extracurricular involvement",
        "Articulate clear, compelling reasons for transfer",
    ],
    courses: &[
        "Take the most rigorous courses available",
        "Focus on major-related prerequisites",
        "Achieve A's in all courses if possible",
        "Consider research opportunities with faculty",
    ],
    activities: &[
        "Get involved in campus organizations",
        "Take on leadership roles quickly",
        "Conduct research with professors",
        "Continue high school activities if relevant",
    ],
    timeline: &[
        "Fall: Research target schools, build relationships",
        "Winter: Request recommendations, draft essays",
        "Spring: Submit applications by deadlines",
        "Summer: Prepare for transition if admitted",
    ],
};

pub fn grade_advice(level: GradeLevel) -> &'static GradeAdvice {
    match level {
        GradeLevel::Grade9 => &GRADE_9,
        GradeLevel::Grade10 => &GRADE_10,
        GradeLevel::Grade11 => &GRADE_11,
        GradeLevel::Grade12 => &GRADE_12,
        GradeLevel::GapYear => &GAP_YEAR,
        GradeLevel::Transfer => &TRANSFER,
    }
}

// ============================================================================
// University tiers
// ============================================================================

pub struct UniversityTier {
    pub keywords: &'static [&'static str],
    pub expectations: &'static [&'static str],
    pub tips: &'static [&'static str],
}

static IVY_PLUS: UniversityTier = UniversityTier {
    keywords: &[
        "harvard",
        "yale",
        "princeton",
        "columbia",
        "upenn",
        "penn",
        "dartmouth",
        "cornell",
        "brown",
        "mit",
        "stanford",
        "caltech",
        "duke",
        "uchicago",
        "northwestern",
    ],
    expectations: &[
        "Near-perfect academics (top 1-5% of class, 4.0+ weighted GPA)",
        "Exceptional standardized test scores (1550+ SAT, 35+ ACT)",
        "National or international-level achievements in your area of focus",
        "Clear 'spike' that sets you apart from other applicants",
        "Genuine intellectual curiosity demonstrated through projects",
        "Leadership with measurable impact, not just titles",
        "Compelling personal story that shines through essays",
    ],
    tips: &[
        "Apply Early Decision/Action to maximize chances",
        "Visit campus if possible and engage with current students",
        "Research specific programs, professors, or opportunities at each school",
        "Essays must be exceptional - start early and revise many times",
        "Demonstrate 'fit' by showing you've researched what makes each school unique",
    ],
};

static TOP30: UniversityTier = UniversityTier {
    keywords: &[
        "vanderbilt",
        "notre dame",
        "washu",
        "emory",
        "georgetown",
        "berkeley",
        "ucla",
        "usc",
        "michigan",
        "virginia",
        "cmu",
        "carnegie mellon",
        "nyu",
        "tufts",
        "boston college",
    ],
    expectations: &[
        "Strong academics (top 5-10% of class, 3.8+ GPA)",
        "High test scores (1450+ SAT, 32+ ACT)",
        "Regional or state-level achievements",
        "Consistent involvement and growth in activities",
        "Clear passion and direction in applications",
        "Good but not necessarily exceptional essays",
    ],
    tips: &[
        "Apply to a balanced list of reach, match, and safety schools",
        "Highlight unique experiences or perspectives",
        "Show demonstrated interest through visits, interviews, webinars",
        "Strong letters of recommendation are crucial",
        "Consider school-specific scholarships and honors programs",
    ],
};

static CANADIAN_TOP: UniversityTier = UniversityTier {
    keywords: &[
        "waterloo",
        "uwaterloo",
        "uoft",
        "toronto",
        "mcgill",
        "ubc",
        "queens",
        "western",
    ],
    expectations: &[
        "Strong academics (90%+ average for competitive programs)",
        "For Waterloo: exceptional math/CS skills and contest results",
        "Strong AIF (Admission Information Form) for Waterloo",
        "Subject-specific requirements vary by program",
        "Extracurriculars valued but less emphasized than US schools",
    ],
    tips: &[
        "For Waterloo CS/Engineering: Euclid, CCC, and CEMC contests are crucial",
        "Complete the AIF thoughtfully for Waterloo applications",
        "UofT and McGill focus heavily on grades",
        "Apply early as rolling/early admissions can help",
        "Consider co-op programs for career preparation",
    ],
};

pub static UNIVERSITY_TIERS: &[(&str, &UniversityTier)] = &[
    ("ivy_plus", &IVY_PLUS),
    ("top30", &TOP30),
    ("canadian_top", &CANADIAN_TOP),
];

/// Tier used when no university keyword matches.
pub const DEFAULT_UNIVERSITY_TIER: &str = "top30";

pub fn university_tier(key: &str) -> &'static UniversityTier {
    UNIVERSITY_TIERS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, tier)| *tier)
        .unwrap_or(&TOP30)
}

// ============================================================================
// Essay topics
// ============================================================================

pub struct EssayTopics {
    pub personal_statement: &'static [&'static str],
    pub supplemental_strategies: &'static [&'static str],
    pub common_mistakes: &'static [&'static str],
}

pub static ESSAY_TOPICS: EssayTopics = EssayTopics {
    personal_statement: &[
        "A challenge that shaped who you are today",
        "An intellectual passion that drives your curiosity",
        "A moment that changed your perspective",
        "Your unique background, identity, or experience",
        "A community you belong to and how you contribute",
    ],
    supplemental_strategies: &[
        "'Why This School': Research specific programs, professors, clubs, and traditions",
        "'Why This Major': Connect your experiences to your academic interests",
        "Activity descriptions: Use active verbs and quantify impact",
        "Short answers: Be concise but memorable",
        "Additional information: Explain any weaknesses without making excuses",
    ],
    common_mistakes: &[
        "Writing what you think admissions wants to hear",
        "Listing accomplishments instead of telling a story",
        "Being too generic or cliche",
        "Not showing self-reflection and growth",
        "Poor editing and proofreading",
    ],
};

// ============================================================================
// Strengths and weaknesses
// ============================================================================

pub static STRENGTH_KEYWORDS: &[(&str, &[&str])] = &[
    ("leadership", &["leader", "president", "captain", "founder"]),
    ("academic", &["grade", "gpa", "academic", "class rank"]),
    ("creative", &["creative", "art", "music", "design", "writing"]),
    ("athletic", &["sport", "athletic", "varsity", "team"]),
    ("service", &["service", "volunteer", "community", "nonprofit"]),
];

/// Category assumed when no strength keyword matches.
pub const DEFAULT_STRENGTH_CATEGORY: &str = "academic";

pub static STRENGTHS_GUIDANCE: &[(&str, &[&str])] = &[
    (
        "leadership",
        &[
            "Take on higher-level positions (regional, state, national)",
            "Mentor other leaders and build sustainable organizations",
            "Document your impact with numbers and testimonials",
            "Expand leadership to new areas while maintaining depth",
        ],
    ),
    (
        "academic",
        &[
            "Pursue highest-level competitions (national/international)",
            "Seek research opportunities with mentors",
            "Publish or present your work",
            "Tutor or teach others to demonstrate mastery",
        ],
    ),
    (
        "creative",
        &[
            "Build a portfolio showcasing your best work",
            "Enter prestigious competitions and exhibitions",
            "Connect creativity to your intended field of study",
            "Create projects that solve real problems",
        ],
    ),
    (
        "athletic",
        &[
            "Document achievements and statistics",
            "Highlight teamwork and leadership aspects",
            "Connect athletic discipline to other areas of life",
            "Consider recruitment if at competitive level",
        ],
    ),
    (
        "service",
        &[
            "Scale your impact (more people, larger area)",
            "Take on leadership in service organizations",
            "Connect service to your intended major or career",
            "Document measurable impact and outcomes",
        ],
    ),
];

pub static WEAKNESS_KEYWORDS: &[(&str, &[&str])] = &[
    ("grades", &["grade", "gpa", "academic"]),
    ("testing", &["sat", "act", "test", "score"]),
    ("extracurriculars", &["extracurricular", "activity", "club"]),
    ("essays", &["essay", "writing", "write"]),
    ("recommendations", &["recommendation", "teacher", "relationship"]),
];

pub static WEAKNESSES_GUIDANCE: &[(&str, &[&str])] = &[
    (
        "grades",
        &[
            "Focus on improving trends (upward trajectory matters)",
            "Take on challenging courses to show capability",
            "Get tutoring or extra help in weak subjects",
            "Explain circumstances in applications if relevant",
        ],
    ),
    (
        "testing",
        &[
            "Consider test-optional schools if appropriate",
            "Take extensive prep courses and practice tests",
            "Try both SAT and ACT to find your strength",
            "Retake tests strategically (2-3 attempts maximum)",
        ],
    ),
    (
        "extracurriculars",
        &[
            "It's not too late to start something meaningful",
            "Focus on depth over breadth in remaining time",
            "Create independent projects in your interest area",
            "Quality of involvement matters more than quantity",
        ],
    ),
    (
        "essays",
        &[
            "Start writing early and revise extensively",
            "Get feedback from teachers, counselors, and peers",
            "Read successful essay examples",
            "Work with an essay coach if needed",
        ],
    ),
    (
        "recommendations",
        &[
            "Build relationships with 2-3 teachers now",
            "Participate actively in classes",
            "Attend office hours and ask thoughtful questions",
            "Provide recommenders with detailed information about yourself",
        ],
    ),
];

pub fn strengths_guidance(category: &str) -> &'static [&'static str] {
    STRENGTHS_GUIDANCE
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, guidance)| *guidance)
        .unwrap_or(&[])
}

pub fn weaknesses_guidance(category: &str) -> &'static [&'static str] {
    WEAKNESSES_GUIDANCE
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, guidance)| *guidance)
        .unwrap_or(&[])
}

// ============================================================================
// Conversation topics
// ============================================================================

// The `interview` topic is detected but has no dedicated generator; it falls
// through to the general response.
pub static TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "courses",
        &["course", "class", "ap", "ib", "schedule", "curriculum", "subject"],
    ),
    (
        "extracurriculars",
        &[
            "extracurricular",
            "activity",
            "activities",
            "club",
            "sport",
            "volunteer",
            "leadership",
        ],
    ),
    (
        "research",
        &["research", "project", "paper", "publish", "professor", "lab"],
    ),
    (
        "competitions",
        &["competition", "olympiad", "contest", "award", "usaco", "amc", "usamo"],
    ),
    (
        "essays",
        &["essay", "personal statement", "supplemental", "writing", "common app"],
    ),
    ("summer", &["summer", "program", "internship", "camp"]),
    ("timeline", &["timeline", "plan", "schedule", "when", "deadline"]),
    ("testing", &["sat", "act", "test", "score", "standardized"]),
    (
        "recommendation",
        &["recommendation", "letter", "rec", "teacher", "counselor"],
    ),
    ("interview", &["interview", "alumni", "tips"]),
    ("spike", &["spike", "unique", "stand out", "special", "differentiate"]),
    ("waterloo", &["waterloo", "aif", "ccc", "euclid", "cemc"]),
];

/// Topic used when a message matches nothing in `TOPIC_KEYWORDS`.
pub const DEFAULT_TOPIC: &str = "general";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_are_registered_entries() {
        assert!(MAJOR_CATEGORIES
            .iter()
            .any(|(name, _)| *name == DEFAULT_MAJOR_CATEGORY));
        assert!(UNIVERSITY_TIERS
            .iter()
            .any(|(name, _)| *name == DEFAULT_UNIVERSITY_TIER));
        assert!(STRENGTH_KEYWORDS
            .iter()
            .any(|(name, _)| *name == DEFAULT_STRENGTH_CATEGORY));
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        assert_eq!(
            major_category("underwater basket weaving").courses,
            major_category(DEFAULT_MAJOR_CATEGORY).courses
        );
        assert_eq!(
            university_tier("nowhere").expectations,
            university_tier(DEFAULT_UNIVERSITY_TIER).expectations
        );
        assert!(strengths_guidance("nope").is_empty());
        assert!(weaknesses_guidance("nope").is_empty());
    }

    #[test]
    fn every_guidance_category_has_keywords() {
        for (category, _) in STRENGTHS_GUIDANCE {
            assert!(
                STRENGTH_KEYWORDS.iter().any(|(name, _)| name == category),
                "strength category {category} has no keyword entry"
            );
        }
        for (category, _) in WEAKNESSES_GUIDANCE {
            assert!(
                WEAKNESS_KEYWORDS.iter().any(|(name, _)| name == category),
                "weakness category {category} has no keyword entry"
            );
        }
    }
}
