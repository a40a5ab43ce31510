//! Candidate shortlister: rank resumes against job descriptions

use candidate_shortlister::cli::{self, Cli, Commands, ConfigAction};
use candidate_shortlister::config::{Config, OutputFormat};
use candidate_shortlister::error::{Result, ShortlistError};
use candidate_shortlister::input::corpus::{category_counts, CorpusLoader};
use candidate_shortlister::input::manager::InputManager;
use candidate_shortlister::input::roles::{default_requirement, RoleBatch};
use candidate_shortlister::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use candidate_shortlister::output::report::ShortlistReport;
use candidate_shortlister::processing::document::JobRequirement;
use candidate_shortlister::processing::shortlist::{CategoryFilter, ShortlistEngine, ShortlistOptions};
use candidate_shortlister::processing::skill_extractor::SkillExtractor;
use candidate_shortlister::processing::text_processor::TextProcessor;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = match &cli.config {
        Some(path) => Config::load_or_init(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Rank {
            corpus,
            job,
            text,
            roles,
            category,
            top,
            max_features,
            output,
            save,
            detailed,
            parallel,
        } => {
            if let Some(corpus) = corpus {
                config.corpus.path = corpus;
            }
            if let Some(category) = category {
                config.ranking.category = category;
            }
            if let Some(top) = top {
                config.ranking.top_n = cli::validate_positive("--top", top).map_err(ShortlistError::InvalidInput)?;
            }
            if let Some(max_features) = max_features {
                config.ranking.max_features =
                    cli::validate_positive("--max-features", max_features).map_err(ShortlistError::InvalidInput)?;
            }
            if let Some(output) = output {
                config.output.format = cli::parse_output_format(&output).map_err(ShortlistError::InvalidInput)?;
            }
            config.output.detailed |= detailed;
            config.ranking.parallel |= parallel;

            let requirements = collect_requirements(&job, text, roles.as_deref()).await?;
            let engine = build_engine(&config)?;

            let options = ShortlistOptions {
                category: CategoryFilter::from_option(config.category_filter()),
                top_n: config.ranking.top_n,
            };

            let outcomes = if config.ranking.parallel {
                engine.shortlist_batch_concurrent(&requirements, &options).await?
            } else {
                engine.shortlist_batch(&requirements, &options)
            };

            if outcomes.is_empty() {
                return Err(ShortlistError::InvalidInput(
                    "Please enter at least one job description".to_string(),
                ));
            }

            let report = ShortlistReport::build(
                &outcomes,
                &options,
                engine.corpus().len(),
                config.output.snippet_chars,
            );
            let generator = ReportGenerator::with_options(config.output.color_output, config.output.detailed);
            let rendered = generator.generate_report(&report, &config.output.format)?;

            match save {
                Some(mut path) => {
                    if path.is_dir() {
                        path = path.join(suggest_filename(&config.output.format, true));
                    }
                    // Files never carry ANSI colour codes
                    let content = if config.output.format == OutputFormat::Console {
                        ReportGenerator::with_options(false, config.output.detailed)
                            .generate_report(&report, &config.output.format)?
                    } else {
                        rendered
                    };
                    save_report_to_file(&content, &path)?;
                    println!("Ranked list saved to '{}'.", path.display());
                }
                None => println!("{}", rendered),
            }

            info!(
                "Shortlisted {} candidate(s) across {} role(s)",
                report.total_candidates(),
                report.roles.len()
            );
        }

        Commands::Categories { corpus } => {
            if let Some(corpus) = corpus {
                config.corpus.path = corpus;
            }
            let loader = CorpusLoader::from_config(&config.corpus);
            let records = loader.read_records(&config.corpus.path)?;
            let extractor = SkillExtractor::with_custom_skills(&config.skills.extra)?;
            let processor = TextProcessor::with_vocabulary(extractor.vocabulary());
            let documents = loader.build_corpus(records, &processor, &extractor);

            println!("Categories in {} ({} resumes)\n", config.corpus.path.display(), documents.len());
            for (category, count) in category_counts(&documents) {
                println!("  • {:<30} {}", category, count);
            }
        }

        Commands::Skills => {
            let extractor = SkillExtractor::with_custom_skills(&config.skills.extra)?;
            let vocabulary = extractor.vocabulary();

            println!("Skill vocabulary ({} skills)\n", vocabulary.len());
            println!("Technical:");
            for skill in vocabulary.technical() {
                println!("  • {}", skill);
            }
            println!("\nSoft:");
            for skill in vocabulary.soft() {
                println!("  • {}", skill);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration ({})\n", config_path.display());
                println!("Corpus: {}", config.corpus.path.display());
                println!(
                    "Columns: id={}, category={}, text={}",
                    config.corpus.id_column, config.corpus.category_column, config.corpus.text_column
                );
                println!("Candidates per role: {}", config.ranking.top_n);
                println!("Vocabulary cap: {}", config.ranking.max_features);
                println!("Category filter: {}", config.category_filter().unwrap_or("All"));
                println!("Parallel: {}", config.ranking.parallel);
                println!("Extra skills: {}", config.skills.extra.len());
                println!("Output format: {:?}", config.output.format);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}

/// Requirements from files, inline text and a roles file, in that order
async fn collect_requirements(
    jobs: &[PathBuf],
    texts: Vec<String>,
    roles: Option<&std::path::Path>,
) -> Result<Vec<JobRequirement>> {
    let mut requirements = Vec::new();

    let mut input_manager = InputManager::new();
    for path in jobs {
        requirements.push(input_manager.load_requirement(path).await?);
    }

    for description in texts {
        let title = format!("Role {}", requirements.len() + 1);
        requirements.push(JobRequirement::new(title, description));
    }

    if let Some(path) = roles {
        let batch = RoleBatch::from_file(path)?;
        let first_index = requirements.len() + 1;
        requirements.extend(batch.into_requirements(first_index));
    }

    if requirements.is_empty() {
        warn!("No job description supplied; using the default Data Scientist description");
        requirements.push(default_requirement());
    }

    Ok(requirements)
}

fn build_engine(config: &Config) -> Result<ShortlistEngine> {
    let extractor = Arc::new(SkillExtractor::with_custom_skills(&config.skills.extra)?);
    let processor = Arc::new(TextProcessor::with_vocabulary(extractor.vocabulary()));

    let loader = CorpusLoader::from_config(&config.corpus).with_progress(true);
    let documents = loader.load(&config.corpus.path, &processor, &extractor)?;

    Ok(ShortlistEngine::new(processor, extractor, documents).with_max_features(config.ranking.max_features))
}
