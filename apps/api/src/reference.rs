//! The reference resume every upload is compared against. Embedded at build
//! time; process-wide constant, never mutated.

pub const STANDARD_RESUME: &str = r#"
John Doe
Software Engineer
john.doe@email.com | (123) 456-7890 | linkedin.com/in/johndoe

PROFESSIONAL SUMMARY
Results-driven Software Engineer with 5+ years of experience designing, building,
and operating scalable web applications in fast-moving product teams. Proficient
in JavaScript, TypeScript, React, Node.js, and cloud technologies, with a strong
focus on distributed systems, API design, and developer experience. Passionate
about creating user-friendly solutions, mentoring other engineers, and optimizing
application performance from the browser to the database.

TECHNICAL SKILLS
- Programming Languages: JavaScript, TypeScript, Python, Java, SQL
- Frontend: React, Angular, Vue.js, HTML5, CSS3, Tailwind CSS
- Backend: Node.js, Express.js, Django, Spring Boot, GraphQL, REST APIs
- Databases: MongoDB, PostgreSQL, MySQL, Redis, Elasticsearch
- Cloud and Infrastructure: AWS, Google Cloud, Azure, Docker, Kubernetes, Terraform
- Tools and Practices: Git, Jenkins, JIRA, CI/CD, Agile Methodologies, Code Review

PROFESSIONAL EXPERIENCE
Senior Software Engineer | Tech Corp Inc. | 2021 - Present
- Led development of a microservices architecture serving 1M+ monthly active users
- Improved application performance by 40% through profiling and query optimization
- Mentored four junior developers and conducted regular design and code reviews
- Implemented CI/CD pipelines reducing deployment time by 60% across twelve services
- Drove adoption of infrastructure as code, cutting environment setup from days to hours

Software Engineer | StartupXYZ | 2019 - 2021
- Developed responsive web applications using React, Node.js, and PostgreSQL
- Collaborated with cross-functional teams to deliver customer-facing features on time
- Integrated third-party APIs and payment gateways processing 2M dollars in annual volume
- Participated in agile development processes, sprint planning, and retrospectives
- Reduced page load times by 35% by introducing code splitting and response caching
- Built automated test suites raising coverage from 40% to 85% across the main services
- Implemented structured logging and monitoring dashboards used by the whole engineering team

EDUCATION
Bachelor of Science in Computer Science
University of Technology | 2015 - 2019
GPA: 3.8/4.0
Relevant coursework: Data Structures, Algorithms, Operating Systems, Distributed
Systems, Database Design, Computer Networks, Software Engineering Principles

CERTIFICATIONS
- AWS Certified Developer Associate (2022)
- Google Cloud Professional Developer (2021)
- Certified Kubernetes Application Developer (2023)
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::word_count;
    use crate::analysis::sections::missing_sections;

    /// The advisory rules must all pass for the reference itself: length in
    /// bounds, every canonical section present, achievement markers present.
    #[test]
    fn test_reference_is_within_length_bounds() {
        let words = word_count(STANDARD_RESUME);
        assert!(
            (300..=1000).contains(&words),
            "reference word count was {words}"
        );
    }

    #[test]
    fn test_reference_has_all_sections() {
        assert!(missing_sections(STANDARD_RESUME).is_empty());
    }

    #[test]
    fn test_reference_has_achievement_markers() {
        assert!(STANDARD_RESUME.contains("40%"));
    }
}
