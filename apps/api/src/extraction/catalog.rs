//! Static catalog of recognised skill phrases.

use std::collections::BTreeSet;

use lazy_static::lazy_static;

/// Lowercase skill phrases matched against lowercased resume text.
/// Duplicates in this list collapse in [`SKILL_CATALOG`].
pub(crate) const SKILL_PHRASES: &[&str] = &[
    "python",
    "java",
    "sql",
    "pandas",
    "numpy",
    "machine learning",
    "data analysis",
    "tensorflow",
    "keras",
    "power bi",
    "communication",
    "excel",
    "tableau",
    "html",
    "css",
    "c++",
    "javascript",
    "flask",
    "django",
    "data structures",
    "algorithms",
    "artificial intelligence",
    "deep learning",
    "computer vision",
    "natural language processing",
    "big data",
    "cloud computing",
    "cybersecurity",
    "blockchain",
    "software engineering",
    "web development",
    "mobile app development",
    "database management",
    "version control (git, github)",
    "operating systems",
    "networking",
    "api development",
    "devops",
    "agile methodologies",
    "system design",
    "embedded systems",
    "iot",
    "quantum computing",
    "bioinformatics",
    "cryptography",
    "parallel computing",
    "distributed systems",
    "virtual reality",
    "augmented reality",
    "game development",
    "computer graphics",
    "computational mathematics",
    "digital signal processing",
    "edge computing",
    "cloud security",
    "penetration testing",
    "ethical hacking",
    "data mining",
    "predictive analytics",
    "software testing",
    "unit testing",
    "debugging",
    "technical documentation",
    "ui/ux design",
    "human-computer interaction",
    "computer architecture",
    "compiler design",
    "operating system security",
    "wireless networks",
    "network security",
    "data governance",
    "data warehousing",
    "data visualization",
    "statistical analysis",
    "reinforcement learning",
    "explainable ai",
    "generative ai",
    "software development life cycle (sdlc)",
    "microservices architecture",
    "containerization (docker, kubernetes)",
    "cloud platforms (aws, azure, gcp)",
    "edge ai",
    "quantum cryptography",
    "high-performance computing",
    "automated testing",
    "software quality assurance",
    "concurrency",
    "multithreading",
    "functional programming",
    "object-oriented programming",
    "event-driven programming",
    "graph theory",
    "computational biology",
    "computational chemistry",
    "computational physics",
    "mathematical modeling",
    "simulation",
    "robotics",
    "speech recognition",
    "computer-aided design (cad)",
    "digital forensics",
    "cyber law",
    "data ethics",
    "ai ethics",
    "algorithmic bias",
    "digital twins",
    "cloud native development",
    "serverless computing",
    "edge networking",
    "5g technology",
    "smart contracts",
    "nft development",
    "metaverse development",
    "virtual economy",
    "digital transformation",
    "business intelligence",
    "data lakes",
    "data pipelines",
    "data engineering",
    "data science",
    "knowledge graphs",
    "semantic web",
    "ontology engineering",
    "computational linguistics",
    "cognitive computing",
    "ai-driven automation",
    "explainable machine learning",
    "ai model optimization",
    "federated learning",
    "privacy-preserving ai",
    "zero trust security",
    "secure software development",
    "threat intelligence",
    "incident response",
    "cyber risk management",
    "cloud-native security",
    "ai-powered cybersecurity",
    "digital identity management",
    "biometric security",
    "quantum machine learning",
    "ai for healthcare",
    "ai for finance",
    "ai for education",
    "ai for manufacturing",
    "ai for retail",
    "ai for smart cities",
    "ai for autonomous vehicles",
    "ai for space exploration",
    "ai for climate science",
    "ai for drug discovery",
    "ai for personalized medicine",
    "ai for agriculture",
    "ai for supply chain optimization",
    "ai for logistics",
    "ai for energy management",
    "ai for sustainability",
    "ai for environmental science",
    "ai for wildlife conservation",
    "ai for oceanography",
    "ai for astronomy",
    "ai for astrobiology",
    "ai for exoplanet research",
    "ai for cosmology",
    "ai for theoretical physics",
    "ai for particle physics",
    "ai for nuclear engineering",
    "ai for fusion energy",
    "ai for renewable energy",
    "ai for carbon capture",
    "ai for green building",
    "ai for circular economy",
    "ai for waste management",
    "ai for environmental policy",
    "ai for climate advocacy",
    "ai for eco-tourism",
    "ai for nature conservation",
    "ai for marine conservation",
    "ai for hydrology",
    "ai for geology",
    "ai for paleontology",
    "ai for archaeological excavation",
    "ai for cultural heritage preservation",
    "business analysis",
    "project management",
    "strategic planning",
    "leadership",
    "digital marketing",
    "seo",
    "content marketing",
    "social media marketing",
    "public speaking",
    "editing",
    "persuasion",
    "copywriting",
    "critical thinking",
    "decision-making",
    "research",
    "graphic design",
    "web design",
    "storytelling",
    "typography",
    "photography",
    "sales strategy",
    "negotiation",
    "customer relationship management",
    "financial analysis",
    "human resources",
    "talent acquisition",
    "employee training",
    "supply chain management",
    "risk management",
    "accounting",
    "legal research",
    "public relations",
    "event planning",
    "market research",
    "brand management",
    "advertising",
    "e-commerce",
    "product management",
    "networking",
    "technical support",
    "creative writing",
    "journalism",
    "translation",
    "video production",
    "audio editing",
    "motion graphics",
    "illustration",
    "animation",
    "customer service",
    "conflict resolution",
    "teamwork",
    "time management",
    "adaptability",
    "emotional intelligence",
    "problem-solving",
    "entrepreneurship",
    "business development",
    "competitive analysis",
    "investor relations",
    "corporate communications",
    "legal compliance",
    "regulatory affairs",
    "healthcare management",
    "medical research",
    "pharmaceutical sales",
    "biotechnology",
    "environmental science",
    "sustainability",
    "renewable energy",
    "mechanical engineering",
    "electrical engineering",
    "civil engineering",
    "construction management",
    "real estate",
    "hospitality management",
    "tourism",
    "retail management",
    "fashion design",
    "interior design",
    "architecture",
    "teaching",
    "curriculum development",
    "instructional design",
    "e-learning",
    "corporate training",
    "coaching",
    "mentoring",
    "career counseling",
    "psychology",
    "counseling",
    "therapy",
    "mental health",
    "business management",
];

lazy_static! {
    /// Process-wide, read-only skill set built once on first use.
    pub static ref SKILL_CATALOG: BTreeSet<&'static str> = SKILL_PHRASES.iter().copied().collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_phrases_are_lowercase() {
        for phrase in SKILL_CATALOG.iter() {
            assert_eq!(*phrase, phrase.to_lowercase(), "phrase {phrase:?} is not lowercase");
        }
    }

    #[test]
    fn test_catalog_deduplicates_repeated_phrases() {
        let networking = SKILL_PHRASES.iter().filter(|p| **p == "networking").count();
        assert_eq!(networking, 2);
        assert!(SKILL_CATALOG.contains("networking"));
        assert!(SKILL_CATALOG.len() < SKILL_PHRASES.len());
    }

    #[test]
    fn test_catalog_contains_core_languages() {
        for phrase in ["python", "java", "javascript", "c++", "sql"] {
            assert!(SKILL_CATALOG.contains(phrase), "missing {phrase}");
        }
    }
}
