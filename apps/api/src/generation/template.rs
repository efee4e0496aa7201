//! Tailored resume template: a role-specific plain-text skeleton the candidate
//! can fill in. The wording of the summary and experience blocks depends on
//! the role category inferred from the job title.

/// Broad family of a job title; selects the template wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCategory {
    Tech,
    Data,
    Sales,
    PmBa,
    Design,
    Support,
    Finance,
    Hr,
    Generic,
}

/// Checked in order; the first category with a keyword contained in the title wins.
const CATEGORY_KEYWORDS: &[(RoleCategory, &[&str])] = &[
    (
        RoleCategory::Sales,
        &["sales", "business development", "account manager"],
    ),
    (
        RoleCategory::Data,
        &["data scientist", "data analyst", "ml", "machine learning", "ai"],
    ),
    (
        RoleCategory::Tech,
        &[
            "developer", "engineer", "devops", "cloud", "software", "frontend", "backend",
            "full stack",
        ],
    ),
    (
        RoleCategory::PmBa,
        &["product manager", "project manager", "scrum", "business analyst"],
    ),
    (RoleCategory::Design, &["ui/ux", "ux", "designer"]),
    (
        RoleCategory::Support,
        &["support", "customer success", "helpdesk"],
    ),
    (
        RoleCategory::Finance,
        &["finance", "financial", "accountant"],
    ),
    (
        RoleCategory::Hr,
        &["hr", "human resources", "talent acquisition"],
    ),
];

/// Maps a job title to a template category by substring keywords.
pub fn categorize_role(job_title: &str) -> RoleCategory {
    let title = job_title.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(RoleCategory::Generic)
}

/// Inputs for a tailored template.
#[derive(Debug, Clone)]
pub struct TemplateRequest<'a> {
    pub job_title: &'a str,
    pub candidate_name: Option<&'a str>,
    pub matched_skills: &'a [String],
    pub missing_skills: &'a [String],
    pub jd_text: &'a str,
}

/// Builds the full template text.
pub fn build_template(req: &TemplateRequest<'_>) -> String {
    let job_title = req.job_title;
    let name_display = req
        .candidate_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("Your Name");

    let all_skills: Vec<&str> = req
        .matched_skills
        .iter()
        .chain(req.missing_skills)
        .map(String::as_str)
        .collect();
    let skills_line = if all_skills.is_empty() {
        format!("{job_title} core skills")
    } else {
        all_skills.join(", ")
    };

    let category = categorize_role(job_title);
    let headline = summary_headline(job_title, req.jd_text);
    let summary = format!("SUMMARY\n{headline}\n{}", summary_body(category));
    let experience = experience_block(category, job_title, &skills_line);

    format!(
        "{name_display}
{job_title}
City, Country • Phone • Email • LinkedIn / Portfolio

{summary}

KEY SKILLS
• {skills_line}

{experience}

PROJECTS
Project Name | Tech/Tools used
• Short description of the project objective and your role.
• Mention specific responsibilities and impact (e.g., metrics improved).

Project Name | Academic / Personal Project
• Describe the problem you solved or value you created.
• Add responsibilities and impact relevant to {job_title}.

EDUCATION
Degree Name (e.g., B.Tech in CSE / BBA / MBA / etc.)
College / University Name | Location | Graduation Year
• Include CGPA / Percentage (if strong and relevant).
• Add coursework relevant to {job_title}.

CERTIFICATIONS & TRAINING
• Certification or Course Name – Platform / Institution – Year
• Short workshops or online courses relevant to this role.

ACHIEVEMENTS
• Awards, recognitions, or performance-based achievements.
• Competitions, hackathons, sales awards, or other highlights.

EXTRACURRICULAR / LEADERSHIP (Optional)
• Leadership roles, volunteering, or organizing activities.

REFERENCES
Available on request."
    )
}

/// Opening line of the summary: the JD's first line, else a category default.
pub fn summary_headline(job_title: &str, jd_text: &str) -> String {
    jd_headline(jd_text)
        .unwrap_or_else(|| default_headline(categorize_role(job_title), job_title))
}

/// First non-blank JD line, when it is long enough to read as a sentence.
fn jd_headline(jd_text: &str) -> Option<String> {
    jd_text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .filter(|l| l.chars().count() > 10)
        .map(String::from)
}

fn default_headline(category: RoleCategory, job_title: &str) -> String {
    match category {
        RoleCategory::Tech => format!(
            "{job_title} with strong fundamentals in software engineering and problem solving."
        ),
        RoleCategory::Data => {
            format!("{job_title} with a strong focus on turning data into actionable insights.")
        }
        RoleCategory::Sales => format!(
            "Results-driven {job_title} with a strong track record in lead generation and deal closure."
        ),
        RoleCategory::PmBa => format!(
            "{job_title} with experience in requirements gathering, stakeholder communication, and delivery."
        ),
        RoleCategory::Design => format!(
            "Creative {job_title} focused on crafting intuitive and visually appealing user experiences."
        ),
        RoleCategory::Support => format!(
            "{job_title} focused on delivering excellent customer experiences and efficient issue resolution."
        ),
        RoleCategory::Finance => format!(
            "{job_title} with experience in financial analysis, reporting, and forecasting."
        ),
        RoleCategory::Hr => format!(
            "{job_title} experienced in recruitment, onboarding, and employee engagement."
        ),
        RoleCategory::Generic => format!(
            "{job_title} with a strong focus on delivering measurable outcomes and supporting business goals."
        ),
    }
}

fn summary_body(category: RoleCategory) -> &'static str {
    match category {
        RoleCategory::Tech => "Experienced in building, testing, and maintaining reliable applications and services.\n\
            Comfortable working with modern development practices, version control, and agile teams.",
        RoleCategory::Data => "Hands-on experience in data cleaning, analysis, visualization, and building predictive models.\n\
            Comfortable working with large datasets and communicating findings to stakeholders.",
        RoleCategory::Sales => "Proven ability to build relationships, understand customer needs, and exceed revenue targets.\n\
            Skilled in managing pipelines, handling objections, and closing deals.",
        RoleCategory::PmBa => "Skilled in translating business needs into clear user stories and collaborating with cross-functional teams.\n\
            Comfortable managing scope, priorities, and timelines in dynamic environments.",
        RoleCategory::Design => "Experienced in user research, wireframing, prototyping, and design handoff to engineering teams.\n\
            Comfortable iterating based on feedback and usability testing.",
        RoleCategory::Support => "Experienced in handling tickets, calls, and chats while maintaining high satisfaction scores.\n\
            Strong communication, patience, and problem-solving skills.",
        RoleCategory::Finance => "Strong analytical skills, attention to detail, and ability to present insights clearly.\n\
            Familiar with budgeting, variance analysis, and management reports.",
        RoleCategory::Hr => "Strong interpersonal skills and understanding of HR processes and policies.\n\
            Comfortable partnering with leadership and employees to support people initiatives.",
        RoleCategory::Generic => "Skilled in collaborating with cross-functional teams, learning quickly, and adapting to new tools and domains.",
    }
}

fn experience_block(category: RoleCategory, job_title: &str, skills_line: &str) -> String {
    let current = format!("PROFESSIONAL EXPERIENCE\nCompany Name | {job_title} | Location | MM/YYYY – Present");
    let (current_bullets, previous_role, previous_bullets): (Vec<String>, &str, &[&str]) =
        match category {
            RoleCategory::Tech => (
                vec![
                    "Design, develop, and maintain applications following clean code and best practices.".into(),
                    "Collaborate with cross-functional teams to deliver features from concept to production.".into(),
                    "Debug, profile, and optimize code to improve performance and reliability.".into(),
                    format!("Use tools and technologies related to: {skills_line}."),
                ],
                "Software Developer / Intern",
                &[
                    "Worked on modules or features that contributed directly to business outcomes.",
                    "Wrote maintainable, testable code and participated in code reviews.",
                    "Integrated APIs, databases, or cloud services as required by the project.",
                ],
            ),
            RoleCategory::Data => (
                vec![
                    "Collect, clean, and prepare datasets for analysis and modeling.".into(),
                    "Build dashboards/reports that track key business or product metrics.".into(),
                    "Apply statistical and machine learning techniques to solve business problems.".into(),
                    format!("Use tools and technologies related to: {skills_line}."),
                ],
                "Data Analyst / Intern",
                &[
                    "Assisted in data exploration and visualization for regular reporting.",
                    "Helped stakeholders interpret data and supported decision making.",
                ],
            ),
            RoleCategory::Sales => (
                vec![
                    "Own and manage a sales pipeline from prospecting to closing.".into(),
                    "Conduct product demos, presentations, and negotiations with prospects.".into(),
                    "Consistently achieve or exceed monthly/quarterly sales targets.".into(),
                    "Maintain accurate records in CRM and follow up with clients proactively.".into(),
                ],
                "Sales Executive / Inside Sales",
                &[
                    "Generated leads via cold calling, email outreach, and social channels.",
                    "Qualified prospects based on fit, budget, authority, and timeline.",
                    "Supported senior sales staff with proposals and follow-ups.",
                ],
            ),
            RoleCategory::PmBa => (
                vec![
                    "Gather and document business requirements and user needs.".into(),
                    "Define user stories, acceptance criteria, and maintain product backlog.".into(),
                    "Collaborate with engineering, design, and stakeholders to deliver features.".into(),
                    "Track progress, risks, and communicate status transparently.".into(),
                ],
                "Business Analyst / Project Coordinator",
                &[
                    "Analyzed processes and identified gaps and opportunities for improvement.",
                    "Supported project planning, tracking, and reporting activities.",
                ],
            ),
            RoleCategory::Design => (
                vec![
                    "Design user interfaces for web/mobile in collaboration with product and engineering.".into(),
                    "Conduct or review user research and usability tests to validate design decisions.".into(),
                    "Create wireframes, prototypes, and design specs using tools like Figma/Sketch.".into(),
                    "Maintain and contribute to design systems and component libraries.".into(),
                ],
                "UI/UX Designer / Intern",
                &[
                    "Assisted in designing features and flows for digital products.",
                    "Created visual assets and helped maintain consistent branding.",
                ],
            ),
            RoleCategory::Support => (
                vec![
                    "Respond to customer queries via phone, email, or chat within defined SLAs.".into(),
                    "Troubleshoot issues, coordinate with internal teams, and ensure resolution.".into(),
                    "Maintain detailed case notes and contribute to knowledge base articles.".into(),
                    "Track and report recurring issues or feedback patterns.".into(),
                ],
                "Customer Support / Service Desk",
                &[
                    "Handled first-level support, escalating complex issues as needed.",
                    "Assisted in onboarding new users and explaining product features.",
                ],
            ),
            RoleCategory::Finance => (
                vec![
                    "Analyze financial statements, KPIs, and trends to support decision making.".into(),
                    "Assist in preparing budgets, forecasts, and monthly/quarterly reports.".into(),
                    "Build and maintain financial models in Excel / BI tools.".into(),
                    "Work closely with business teams to track spend and performance.".into(),
                ],
                "Financial Analyst / Intern",
                &[
                    "Supported financial planning and analysis activities.",
                    "Prepared basic reports and reconciliations under supervision.",
                ],
            ),
            RoleCategory::Hr => (
                vec![
                    "Manage end-to-end recruitment for assigned roles (JD, sourcing, screening, offers).".into(),
                    "Coordinate onboarding, induction, and documentation for new hires.".into(),
                    "Support performance management, feedback cycles, and HR operations.".into(),
                ],
                "HR Executive / Recruiter",
                &[
                    "Assisted in scheduling interviews, background checks, and HR documentation.",
                    "Helped organize employee engagement activities and events.",
                ],
            ),
            RoleCategory::Generic => {
                return format!(
                    "{current}\n\
                     • Describe your main responsibilities and how they relate to {job_title}.\n\
                     • Highlight 2–4 achievements with measurable impact (revenue, efficiency, satisfaction).\n\
                     • Mention important tools, systems, or methods you use.\n\
                     \n\
                     Previous Company | Previous Role | Location | MM/YYYY – MM/YYYY\n\
                     • Add relevant experience that supports your transition or growth in {job_title}."
                );
            }
        };

    let mut block = current;
    for bullet in &current_bullets {
        block.push_str(&format!("\n• {bullet}"));
    }
    block.push_str(&format!(
        "\n\nPrevious Company | {previous_role} | Location | MM/YYYY – MM/YYYY"
    ));
    for bullet in previous_bullets {
        block.push_str(&format!("\n• {bullet}"));
    }
    block
}

/// Suggested filename for a downloaded template.
/// Anything but ASCII alphanumerics, `_`, `-` and `.` becomes `_`, so the
/// name is safe inside a quoted `Content-Disposition` parameter.
pub fn template_filename(candidate_name: Option<&str>, job_title: &str) -> String {
    let base: String = candidate_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| job_title.trim())
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let base = if base.is_empty() { "resume".to_string() } else { base };
    format!("{base}_resume_template.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(
        job_title: &'a str,
        name: Option<&'a str>,
        matched: &'a [String],
        missing: &'a [String],
        jd: &'a str,
    ) -> TemplateRequest<'a> {
        TemplateRequest {
            job_title,
            candidate_name: name,
            matched_skills: matched,
            missing_skills: missing,
            jd_text: jd,
        }
    }

    #[test]
    fn test_categorize_role_order() {
        assert_eq!(categorize_role("Sales Manager"), RoleCategory::Sales);
        assert_eq!(categorize_role("Data Scientist"), RoleCategory::Data);
        // "machine learning" is checked before "engineer"
        assert_eq!(categorize_role("Machine Learning Engineer"), RoleCategory::Data);
        assert_eq!(categorize_role("DevOps Engineer"), RoleCategory::Tech);
        assert_eq!(categorize_role("Project Manager"), RoleCategory::PmBa);
        assert_eq!(categorize_role("UI/UX Designer"), RoleCategory::Design);
        assert_eq!(categorize_role("Customer Support Specialist"), RoleCategory::Support);
        assert_eq!(categorize_role("Financial Analyst"), RoleCategory::Finance);
        assert_eq!(categorize_role("HR Manager"), RoleCategory::Hr);
        assert_eq!(categorize_role("Barista"), RoleCategory::Generic);
    }

    #[test]
    fn test_template_uses_jd_first_line_and_skills() {
        let matched = vec!["Python".to_string(), "Git".to_string()];
        let missing = vec!["Algorithms".to_string()];
        let text = build_template(&request(
            "Software Engineer",
            Some("Jane Doe"),
            &matched,
            &missing,
            "\n  We build reliable payment systems at scale.\nSecond line.",
        ));
        assert!(text.starts_with("Jane Doe\nSoftware Engineer\n"));
        assert!(text.contains("SUMMARY\nWe build reliable payment systems at scale.\n"));
        assert!(text.contains("KEY SKILLS\n• Python, Git, Algorithms"));
        assert!(text.contains("Use tools and technologies related to: Python, Git, Algorithms."));
        assert!(text.contains("Previous Company | Software Developer / Intern"));
        assert!(text.ends_with("REFERENCES\nAvailable on request."));
    }

    #[test]
    fn test_template_defaults_without_name_skills_or_jd() {
        let text = build_template(&request("Barista", None, &[], &[], "short"));
        assert!(text.starts_with("Your Name\nBarista\n"));
        assert!(text.contains(
            "SUMMARY\nBarista with a strong focus on delivering measurable outcomes and supporting business goals."
        ));
        assert!(text.contains("• Barista core skills"));
        assert!(text.contains("Previous Company | Previous Role"));
    }

    #[test]
    fn test_template_filename() {
        assert_eq!(
            template_filename(Some("Jane Doe"), "Data Analyst"),
            "Jane_Doe_resume_template.txt"
        );
        assert_eq!(
            template_filename(None, "Data Analyst"),
            "Data_Analyst_resume_template.txt"
        );
        assert_eq!(template_filename(Some(""), ""), "resume_resume_template.txt");
    }

    #[test]
    fn test_template_filename_replaces_header_unsafe_characters() {
        assert_eq!(
            template_filename(Some("Jane\nDoe"), "Data Analyst"),
            "Jane_Doe_resume_template.txt"
        );
        assert_eq!(
            template_filename(Some("x\"; filename=evil.exe"), "Data Analyst"),
            "x___filename_evil.exe_resume_template.txt"
        );
        assert_eq!(
            template_filename(Some("José O'Neil"), "QA"),
            "Jos__O_Neil_resume_template.txt"
        );
    }
}
