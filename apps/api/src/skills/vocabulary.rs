//! Static job-profile catalog and the skill vocabularies derived from it.
//!
//! Everything here is read-only for the life of the process.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::Serialize;

/// A named role with its job-description narrative and required skills, in display order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobProfile {
    pub role: &'static str,
    pub jd: &'static str,
    pub skills: &'static [&'static str],
}

pub static JOB_PROFILES: &[JobProfile] = &[
    JobProfile {
        role: "Software Engineer",
        jd: "We are looking for a Software Engineer responsible for designing, developing,\n\
             and maintaining high-quality applications. You will work with cross-functional teams,\n\
             write clean and scalable code, perform code reviews, and contribute to the full SDLC.",
        skills: &[
            "Python", "Java", "C++", "Data Structures", "Algorithms",
            "Object Oriented Programming", "Git", "REST APIs", "SQL", "Unit Testing", "Agile",
            "Debugging",
        ],
    },
    JobProfile {
        role: "Full Stack Developer",
        jd: "As a Full Stack Developer you will build end-to-end web applications,\n\
             work on both frontend and backend, integrate APIs, and ensure good performance and security.",
        skills: &[
            "HTML", "CSS", "JavaScript", "React", "Node.js", "Express", "REST APIs", "MongoDB",
            "SQL", "Git", "Responsive Design", "Authentication",
        ],
    },
    JobProfile {
        role: "Frontend Developer",
        jd: "We need a Frontend Developer to create responsive, user-friendly interfaces,\n\
             optimize web pages for speed, and collaborate with designers and backend engineers.",
        skills: &[
            "HTML", "CSS", "JavaScript", "React", "Redux", "Responsive Design",
            "Cross-Browser Compatibility", "Figma", "UI Development",
        ],
    },
    JobProfile {
        role: "Backend Developer",
        jd: "Backend Developer will design scalable APIs, manage databases,\n\
             implement business logic, and ensure performance and security on the server side.",
        skills: &[
            "Python", "Django", "Flask", "Node.js", "REST APIs", "SQL", "PostgreSQL", "MySQL",
            "Database Design", "Authentication", "Docker",
        ],
    },
    JobProfile {
        role: "Data Scientist",
        jd: "Data Scientist will build models, analyze large datasets,\n\
             generate insights, and help business stakeholders make data-driven decisions.",
        skills: &[
            "Python", "R", "Statistics", "Machine Learning", "Pandas", "NumPy", "Scikit-learn",
            "Data Visualization", "SQL", "Feature Engineering",
        ],
    },
    JobProfile {
        role: "Data Analyst",
        jd: "Data Analyst will clean and analyze data, build dashboards,\n\
             prepare reports, and support decision-making with data insights.",
        skills: &[
            "Excel", "SQL", "Power BI", "Tableau", "Data Cleaning", "Data Visualization",
            "Reporting", "Pivot Tables", "Basic Statistics",
        ],
    },
    JobProfile {
        role: "Machine Learning Engineer",
        jd: "ML Engineer will design, build, and deploy machine learning models into production,\n\
             optimize performance, and collaborate with data scientists and engineers.",
        skills: &[
            "Python", "Scikit-learn", "TensorFlow", "PyTorch", "Machine Learning",
            "Model Deployment", "MLOps", "Docker", "APIs", "Data Pipelines",
        ],
    },
    JobProfile {
        role: "DevOps Engineer",
        jd: "DevOps Engineer will manage CI/CD pipelines, automate deployments,\n\
             monitor systems, and ensure reliability and scalability of infrastructure.",
        skills: &[
            "Linux", "Bash", "CI/CD", "Jenkins", "Docker", "Kubernetes", "AWS", "Azure",
            "Monitoring", "Git", "Terraform",
        ],
    },
    JobProfile {
        role: "Cloud Engineer",
        jd: "Cloud Engineer will design, deploy, and manage cloud infrastructure,\n\
             ensure security and cost optimization, and support development teams.",
        skills: &[
            "AWS", "Azure", "GCP", "Virtual Machines", "VPC", "Cloud Security", "IAM", "Docker",
            "Kubernetes", "Networking", "Monitoring",
        ],
    },
    JobProfile {
        role: "Product Manager",
        jd: "Product Manager will own product roadmap, gather requirements,\n\
             work with cross-functional teams, and ensure successful product delivery and adoption.",
        skills: &[
            "Product Roadmap", "User Stories", "Stakeholder Management", "Market Research",
            "Wireframing", "Analytics", "Agile", "Prioritization",
        ],
    },
    JobProfile {
        role: "Project Manager",
        jd: "Project Manager will plan, execute, and close projects,\n\
             manage timelines, resources, risks, and communicate with stakeholders.",
        skills: &[
            "Project Planning", "Scheduling", "Risk Management", "Stakeholder Management",
            "MS Project", "JIRA", "Agile", "Scrum", "Communication",
        ],
    },
    JobProfile {
        role: "Business Analyst",
        jd: "Business Analyst will gather requirements, map processes,\n\
             analyze business problems, and propose data-driven solutions.",
        skills: &[
            "Requirements Gathering", "Process Mapping", "SQL", "Documentation",
            "Stakeholder Communication", "UML", "User Stories", "Gap Analysis",
        ],
    },
    JobProfile {
        role: "Sales Executive",
        jd: "Sales Executive will identify leads, pitch products,\n\
             follow up with clients, and close deals to achieve revenue targets.",
        skills: &[
            "Lead Generation", "Cold Calling", "Negotiation", "CRM", "Customer Relationship",
            "Sales Pitch", "Objection Handling", "Closing Deals", "Communication",
        ],
    },
    JobProfile {
        role: "Sales Manager",
        jd: "Sales Manager will manage sales team, define targets, monitor performance,\n\
             and drive strategies to increase revenue and market share.",
        skills: &[
            "Sales Strategy", "Team Management", "Pipeline Management", "CRM", "Forecasting",
            "Negotiation", "Target Setting", "Coaching", "Reporting",
        ],
    },
    JobProfile {
        role: "Inside Sales Representative",
        jd: "Inside Sales Representative will handle inbound and outbound calls,\n\
             qualify leads, nurture prospects, and schedule demos/meetings.",
        skills: &[
            "CRM", "Cold Calling", "Lead Qualification", "Email Outreach", "Communication",
            "Objection Handling", "Follow-ups",
        ],
    },
    JobProfile {
        role: "Digital Marketing Specialist",
        jd: "Digital Marketing Specialist will plan and execute online campaigns,\n\
             optimize SEO/SEM, manage social media, and track performance metrics.",
        skills: &[
            "SEO", "SEM", "Google Ads", "Facebook Ads", "Content Marketing", "Email Marketing",
            "Google Analytics", "Social Media Management",
        ],
    },
    JobProfile {
        role: "HR Manager",
        jd: "HR Manager will handle recruitment, employee engagement, performance management,\n\
             and ensure HR policies and compliance.",
        skills: &[
            "Recruitment", "Interviewing", "Onboarding", "Performance Management",
            "Employee Engagement", "HR Policies", "Conflict Resolution",
        ],
    },
    JobProfile {
        role: "UI/UX Designer",
        jd: "UI/UX Designer will create user-centered designs, wireframes, prototypes,\n\
             and collaborate with engineers to implement intuitive interfaces.",
        skills: &[
            "Figma", "Wireframing", "Prototyping", "User Research", "Usability Testing",
            "UI Design", "Design Systems",
        ],
    },
    JobProfile {
        role: "QA Engineer",
        jd: "QA Engineer will design and execute test plans, write test cases,\n\
             and ensure product quality through manual and automated testing.",
        skills: &[
            "Test Cases", "Test Planning", "Manual Testing", "Automation Testing", "Selenium",
            "Bug Tracking", "JIRA", "Regression Testing",
        ],
    },
    JobProfile {
        role: "Customer Support Specialist",
        jd: "Customer Support Specialist will resolve customer queries, troubleshoot issues,\n\
             and ensure high customer satisfaction through timely support.",
        skills: &[
            "Customer Support", "Ticketing Systems", "Communication", "Problem Solving",
            "Email Support", "Chat Support", "Phone Support",
        ],
    },
    JobProfile {
        role: "Financial Analyst",
        jd: "Financial Analyst will analyze financial data, create reports,\n\
             build models, and support budgeting and forecasting.",
        skills: &[
            "Financial Modeling", "Excel", "Forecasting", "Budgeting", "Reporting", "Power BI",
            "Variance Analysis",
        ],
    },
];

/// Lowercase keyword list used to detect skills inside free-form job descriptions.
pub static GENERAL_KEYWORDS: &[&str] = &[
    "python", "sql", "excel", "power bi", "tableau", "pandas", "numpy", "machine learning",
    "deep learning", "tensorflow", "pytorch", "data analysis", "statistics", "r", "matlab",
    "html", "css", "javascript", "react", "node.js", "java", "c++", "c#", "django", "flask",
    "aws", "azure", "git",
];

/// Union of every profile's skills, deduplicated and sorted. This is the
/// universe used to list "skills detected in this resume".
pub static ALL_SKILLS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    JOB_PROFILES
        .iter()
        .flat_map(|p| p.skills.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
});

/// Looks up a profile by exact role name.
pub fn find_profile(role: &str) -> Option<&'static JobProfile> {
    JOB_PROFILES.iter().find(|p| p.role == role)
}
