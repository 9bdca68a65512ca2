//! Bundled demo data used on first start and by reset-to-demo.

use super::profile::{EducationEntry, SharedProfile};
use super::role::{Project, RoleVariant, SkillCategory};

/// Identifier of the first demo role.
pub const DEMO_ACTIVE_ROLE_ID: &str = "role_1";

pub fn demo_shared_profile() -> SharedProfile {
    SharedProfile {
        name: "Alex Morgan".to_string(),
        email: "alex.morgan@example.com".to_string(),
        phone: "555-0142".to_string(),
        github: "github.com/alexmorgan".to_string(),
        linkedin: "linkedin.com/in/alex-morgan".to_string(),
        education: vec![
            education(
                "edu1",
                "Northfield Institute of Technology",
                "Post Graduate Diploma in Big Data Analytics",
                "Sep 2024 - Feb 2025",
                "Grade: A",
            ),
            education(
                "edu2",
                "Riverside College of Engineering",
                "B.E. in Electronics and Telecommunication",
                "Oct 2020 - May 2024",
                "CGPA: 7.2",
            ),
            education(
                "edu3",
                "Lakeview Senior School",
                "Higher Secondary",
                "May 2020",
                "Per: 81.50%",
            ),
        ],
    }
}

pub fn demo_roles() -> Vec<RoleVariant> {
    vec![RoleVariant {
        id: DEMO_ACTIVE_ROLE_ID.to_string(),
        role_name: "Data Analyst".to_string(),
        summary: "Engineering graduate with additional training in big data analytics. \
                  Experienced with data analysis, visualisation and scalable data processing \
                  using Python, SQL, Excel, Power BI and PySpark."
            .to_string(),
        skills: vec![
            skill("skillcat1", "Languages", "Python, Java, SQL, HTML, CSS"),
            skill(
                "skillcat2",
                "Technologies & Tools",
                "Hadoop, Spark, PySpark, Git, VSCode, Anaconda",
            ),
            skill(
                "skillcat3",
                "Machine Learning",
                "PyTorch, TensorFlow, Scikit-learn, Pandas, NumPy",
            ),
            skill("skillcat4", "Databases", "MySQL, MongoDB"),
            skill(
                "skillcat5",
                "Visualisation",
                "Tableau, Power BI, MS Excel, Matplotlib, Seaborn",
            ),
        ],
        projects: vec![
            Project {
                id: "proj_1".to_string(),
                name: "Accessible Text-to-Speech Reader".to_string(),
                description: "Voice-enabled application that extracts text from documents, \
                              images and URLs and converts it into speech, with translation \
                              and summarisation."
                    .to_string(),
                technologies: "Python, gTTS, NLP, Streamlit".to_string(),
            },
            Project {
                id: "proj_2".to_string(),
                name: "Sentiment Analysis Pipeline".to_string(),
                description: "Classifies social media posts as positive, negative or neutral, \
                              using Hadoop for storage and PySpark for distributed processing."
                    .to_string(),
                technologies: "PySpark, Hadoop, Python".to_string(),
            },
            Project {
                id: "proj_3".to_string(),
                name: "Library Management System".to_string(),
                description: "Java library system with NFC-based borrowing and SQL-driven \
                              inventory analytics."
                    .to_string(),
                technologies: "Java, MySQL, JDBC".to_string(),
            },
        ],
        certifications: vec![
            "Python for Data Science".to_string(),
            "MySQL Fundamentals".to_string(),
        ],
        hobbies: "Coding, Swimming, Reading".to_string(),
    }]
}

fn education(id: &str, school: &str, degree: &str, date_range: &str, details: &str) -> EducationEntry {
    EducationEntry {
        id: id.to_string(),
        school: school.to_string(),
        degree: degree.to_string(),
        date_range: date_range.to_string(),
        details: details.to_string(),
    }
}

fn skill(id: &str, category: &str, list: &str) -> SkillCategory {
    SkillCategory {
        id: id.to_string(),
        category: category.to_string(),
        list: list.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{demo_roles, demo_shared_profile, DEMO_ACTIVE_ROLE_ID};
    use std::collections::HashSet;

    #[test]
    fn first_demo_role_matches_active_id() {
        assert_eq!(demo_roles()[0].id, DEMO_ACTIVE_ROLE_ID);
    }

    #[test]
    fn demo_list_items_have_unique_ids() {
        let role = &demo_roles()[0];
        let skill_ids: HashSet<_> = role.skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(skill_ids.len(), role.skills.len());
        let project_ids: HashSet<_> = role.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(project_ids.len(), role.projects.len());
        let profile = demo_shared_profile();
        let edu_ids: HashSet<_> = profile.education.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(edu_ids.len(), profile.education.len());
    }
}
