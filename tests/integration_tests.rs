//! Integration tests for the candidate shortlister

use candidate_shortlister::config::{Config, OutputFormat};
use candidate_shortlister::error::ShortlistError;
use candidate_shortlister::input::corpus::CorpusLoader;
use candidate_shortlister::input::manager::InputManager;
use candidate_shortlister::input::roles::RoleBatch;
use candidate_shortlister::output::formatter::{save_report_to_file, ReportGenerator};
use candidate_shortlister::output::report::ShortlistReport;
use candidate_shortlister::processing::document::{Document, JobRequirement};
use candidate_shortlister::processing::shortlist::{
    CategoryFilter, RoleOutcome, ShortlistEngine, ShortlistOptions, ShortlistWarning,
};
use candidate_shortlister::processing::skill_extractor::SkillExtractor;
use candidate_shortlister::processing::text_processor::TextProcessor;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn engine_from(records: &[(&str, &str, &str)]) -> ShortlistEngine {
    let processor = Arc::new(TextProcessor::new());
    let extractor = Arc::new(SkillExtractor::new().unwrap());
    let corpus = records
        .iter()
        .map(|(id, category, text)| Document::analyze(*id, *category, *text, &processor, &extractor))
        .collect();
    ShortlistEngine::new(processor, extractor, corpus)
}

fn fixture_engine() -> ShortlistEngine {
    let processor = Arc::new(TextProcessor::new());
    let extractor = Arc::new(SkillExtractor::new().unwrap());
    let documents = CorpusLoader::default()
        .load(Path::new("tests/fixtures/sample_resumes.csv"), &processor, &extractor)
        .unwrap();
    ShortlistEngine::new(processor, extractor, documents)
}

fn skills(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_python_sql_shortlist() {
    let engine = engine_from(&[
        ("1", "IT", "Experienced Python developer with SQL and AWS skills"),
        ("2", "DESIGN", "Graphic designer skilled in Photoshop"),
    ]);

    let outcomes = engine.shortlist_batch(
        &[JobRequirement::new("Role 1", "Looking for a Python and SQL developer")],
        &ShortlistOptions::default(),
    );
    assert_eq!(outcomes.len(), 1);

    let RoleOutcome::Shortlisted(shortlist) = &outcomes[0] else {
        panic!("expected a shortlist");
    };
    assert_eq!(shortlist.required_skills, skills(&["python", "sql"]));
    assert_eq!(shortlist.candidates.len(), 2);

    let first = &shortlist.candidates[0];
    let second = &shortlist.candidates[1];
    assert_eq!(first.document.id, "1");
    assert_eq!(second.document.id, "2");
    assert!(first.score > second.score);
    assert!(first.missing_skills.is_empty());
    assert_eq!(first.matched_skills, skills(&["python", "sql"]));
    assert_eq!(second.missing_skills, skills(&["python", "sql"]));
}

#[test]
fn test_blank_requirement_is_excluded() {
    let engine = fixture_engine();
    let outcomes = engine.shortlist_batch(
        &[
            JobRequirement::new("Blank", "   \n\t"),
            JobRequirement::new("Data Engineer", "Python and SQL on AWS"),
        ],
        &ShortlistOptions::default(),
    );

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].title(), "Data Engineer");
}

#[tokio::test]
async fn test_empty_category_warns_without_aborting_batch() {
    let engine = fixture_engine();
    let requirements = vec![
        JobRequirement::new("Pilot", "Flight hours").with_category("AVIATION"),
        JobRequirement::new("Dev", "Java Docker Kubernetes").with_category("INFORMATION-TECHNOLOGY"),
        JobRequirement::new("Anyone", "SQL"),
    ];
    let options = ShortlistOptions {
        category: CategoryFilter::All,
        top_n: 3,
    };

    let outcomes = engine.shortlist_batch(&requirements, &options);
    assert_eq!(outcomes.len(), 3);

    match &outcomes[0] {
        RoleOutcome::Skipped { title, warning } => {
            assert_eq!(title, "Pilot");
            assert_eq!(warning.to_string(), "No candidates found in category: AVIATION");
            assert!(matches!(warning, ShortlistWarning::NoCandidates { .. }));
        }
        other => panic!("expected a skipped role, got {:?}", other),
    }

    let RoleOutcome::Shortlisted(dev) = &outcomes[1] else {
        panic!("expected a shortlist for Dev");
    };
    assert_eq!(dev.category, CategoryFilter::Only("INFORMATION-TECHNOLOGY".to_string()));
    assert_eq!(dev.candidates_considered, 2);
    assert_eq!(dev.candidates[0].document.id, "1002");

    let RoleOutcome::Shortlisted(anyone) = &outcomes[2] else {
        panic!("expected a shortlist for Anyone");
    };
    assert_eq!(anyone.category, CategoryFilter::All);
    assert_eq!(anyone.candidates_considered, 5);

    let concurrent = engine
        .shortlist_batch_concurrent(&requirements, &options)
        .await
        .unwrap();
    assert_eq!(concurrent, outcomes);
}

#[test]
fn test_role_category_overrides_global_filter() {
    let engine = fixture_engine();
    let options = ShortlistOptions {
        category: CategoryFilter::Only("DESIGNER".to_string()),
        top_n: 5,
    };

    let outcomes = engine.shortlist_batch(
        &[
            JobRequirement::new("Analyst", "Excel Tableau SQL").with_category("FINANCE"),
            JobRequirement::new("Designer", "Photoshop"),
        ],
        &options,
    );

    let RoleOutcome::Shortlisted(analyst) = &outcomes[0] else {
        panic!("expected a shortlist for Analyst");
    };
    assert!(analyst.candidates.iter().all(|c| c.document.category == "FINANCE"));
    assert_eq!(analyst.candidates_considered, 2);

    let RoleOutcome::Shortlisted(designer) = &outcomes[1] else {
        panic!("expected a shortlist for Designer");
    };
    assert_eq!(designer.candidates_considered, 1);
    assert_eq!(designer.candidates[0].document.id, "1003");
}

#[tokio::test]
async fn test_concurrent_batch_matches_sequential_order() {
    let engine = fixture_engine();
    let requirements = vec![
        JobRequirement::new("Designer", "Photoshop creativity designer"),
        JobRequirement::new("Empty", ""),
        JobRequirement::new("Analyst", "Excel Tableau SQL reporting"),
        JobRequirement::new("Engineer", "Python Spark AWS pipelines"),
    ];
    let options = ShortlistOptions {
        category: CategoryFilter::All,
        top_n: 2,
    };

    let sequential = engine.shortlist_batch(&requirements, &options);
    let concurrent = engine
        .shortlist_batch_concurrent(&requirements, &options)
        .await
        .unwrap();

    let titles: Vec<&str> = concurrent.iter().map(|o| o.title()).collect();
    assert_eq!(titles, vec!["Designer", "Analyst", "Engineer"]);
    assert_eq!(sequential, concurrent);
}

#[test]
fn test_missing_corpus_is_fatal() {
    let processor = TextProcessor::new();
    let extractor = SkillExtractor::new().unwrap();
    let result = CorpusLoader::default().load(Path::new("tests/fixtures/missing.csv"), &processor, &extractor);

    match result {
        Err(ShortlistError::CorpusNotFound(path)) => assert!(path.ends_with("missing.csv")),
        other => panic!("expected CorpusNotFound, got {:?}", other.map(|docs| docs.len())),
    }
}

#[test]
fn test_corpus_row_without_text_never_ranks_above_matches() {
    let engine = fixture_engine();
    let outcome = engine.shortlist(
        &JobRequirement::new("Analyst", "Excel and Tableau analyst"),
        &ShortlistOptions {
            category: CategoryFilter::Only("FINANCE".to_string()),
            top_n: 10,
        },
    );
    let RoleOutcome::Shortlisted(shortlist) = outcome else {
        panic!("expected a shortlist");
    };
    assert_eq!(shortlist.candidates[0].document.id, "1004");
    assert_eq!(shortlist.candidates[1].document.id, "1005");
    assert_eq!(shortlist.candidates[1].score, 0.0);
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    assert!(text.contains("Senior Data Engineer"));
    assert!(text.contains("Python and SQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.md"))
        .await
        .unwrap();

    assert!(text.contains("Backend Developer"));
    assert!(text.contains("Docker and Kubernetes"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_job.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.md"))
        .await
        .unwrap();
    assert!(!text.is_empty());
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(ShortlistError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_job_file_requirement_skills() {
    let mut manager = InputManager::new();
    let requirement = manager
        .load_requirement(Path::new("tests/fixtures/sample_job.md"))
        .await
        .unwrap();
    assert_eq!(requirement.title, "sample_job");

    let engine = fixture_engine();
    let analyzed = requirement.analyze(engine.text_processor(), engine.skill_extractor());
    for skill in ["java", "docker", "kubernetes", "git", "problem solving"] {
        assert!(analyzed.skills.contains(skill), "missing {}", skill);
    }
}

#[test]
fn test_roles_file_batch() {
    let requirements = RoleBatch::from_file(Path::new("tests/fixtures/roles.toml"))
        .unwrap()
        .into_requirements(1);
    assert_eq!(requirements.len(), 3);
    assert_eq!(requirements[0].title, "Data Analyst");
    assert_eq!(requirements[1].title, "Role 2");
    assert_eq!(requirements[0].category.as_deref(), Some("FINANCE"));

    let engine = fixture_engine();
    let outcomes = engine.shortlist_batch(&requirements, &ShortlistOptions::default());
    let titles: Vec<&str> = outcomes.iter().map(|o| o.title()).collect();
    assert_eq!(titles, vec!["Data Analyst", "Role 2"]);

    let RoleOutcome::Shortlisted(designer) = &outcomes[1] else {
        panic!("expected a shortlist");
    };
    assert_eq!(designer.candidates[0].document.id, "1003");
    assert_eq!(designer.candidates_considered, 5);

    let RoleOutcome::Shortlisted(analyst) = &outcomes[0] else {
        panic!("expected a shortlist");
    };
    assert_eq!(analyst.category, CategoryFilter::Only("FINANCE".to_string()));
    assert!(analyst.candidates.iter().all(|c| c.document.category == "FINANCE"));
}

#[test]
fn test_report_rendering_and_save() {
    let engine = fixture_engine();
    let options = ShortlistOptions {
        category: CategoryFilter::All,
        top_n: 2,
    };
    let outcomes = engine.shortlist_batch(
        &[JobRequirement::new("Data Engineer", "Python SQL AWS Spark")],
        &options,
    );
    let report = ShortlistReport::build(&outcomes, &options, engine.corpus().len(), 40);
    assert_eq!(report.corpus_size, 5);
    assert_eq!(report.total_candidates(), 2);
    assert_eq!(report.roles[0].candidates[0].id, "1001");

    let generator = ReportGenerator::new();
    let csv = generator.generate_report(&report, &OutputFormat::Csv).unwrap();
    assert!(csv.starts_with("role,rank,id,category,similarity_score"));
    assert_eq!(csv.lines().count(), 3);

    let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
    let parsed: ShortlistReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.roles[0].title, "Data Engineer");

    let dir = tempdir().unwrap();
    let path = dir.path().join("ranked_candidates.csv");
    save_report_to_file(&csv, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), csv);
}

#[test]
fn test_config_drives_corpus_columns() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("people.csv");
    std::fs::write(&csv_path, "key,text,label\nA,Rust and Python engineer,ENG\nB,Recruiter,HR\n").unwrap();

    let mut config = Config::default();
    config.corpus.path = csv_path.clone();
    config.corpus.id_column = "key".to_string();
    config.corpus.category_column = "label".to_string();
    config.corpus.text_column = "text".to_string();

    let config_path = dir.path().join("config.toml");
    config.save_to(&config_path).unwrap();
    let loaded = Config::load_or_init(&config_path).unwrap();

    let processor = TextProcessor::new();
    let extractor = SkillExtractor::new().unwrap();
    let documents = CorpusLoader::from_config(&loaded.corpus)
        .load(&loaded.corpus.path, &processor, &extractor)
        .unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id, "A");
    assert_eq!(documents[0].category, "ENG");
    assert!(documents[0].skills.contains("python"));
}
