use chrono::{DateTime, Utc};
use clap::Parser;
use memorize::application::{
    AddWordOptions, AddWordService, ConfigService, InitService, LessonService, ListTagsService,
    ListWordsService, ReviewService,
};
use memorize::cli::{format_due_list, format_tag_list, format_word_list, Cli, Commands};
use memorize::domain::TagSet;
use memorize::error::MemorizeError;
use memorize::infrastructure::FileRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_tag_filter(tags: Option<String>) -> Result<TagSet, MemorizeError> {
    match tags {
        Some(blob) => TagSet::parse(&blob),
        None => Ok(TagSet::default()),
    }
}

fn parse_at(at: Option<String>) -> Result<Option<DateTime<Utc>>, MemorizeError> {
    match at {
        Some(text) => {
            let parsed = DateTime::parse_from_rfc3339(&text).map_err(|e| {
                MemorizeError::Config(format!("Invalid --at timestamp '{}': {}", text, e))
            })?;
            Ok(Some(parsed.with_timezone(&Utc)))
        }
        None => Ok(None),
    }
}

fn run(cli: Cli) -> Result<(), MemorizeError> {
    match cli.command {
        Commands::Init { path } => InitService::execute(&path),
        Commands::Add {
            value,
            kind,
            tags,
            translations,
            comment,
            id,
        } => {
            let repo = FileRepository::discover()?;
            let service = AddWordService::new(repo);
            let id = service.execute(&AddWordOptions {
                value: value.clone(),
                kind,
                tags,
                translations,
                comment,
                id,
            })?;
            println!("Added \"{}\" with id {}", value, id);
            Ok(())
        }
        Commands::List { tags } => {
            let repo = FileRepository::discover()?;
            let filter = parse_tag_filter(tags)?;
            let words = ListWordsService::new(repo).execute(&filter)?;
            print!("{}", ensure_newline(format_word_list(&words)));
            Ok(())
        }
        Commands::Due { tags, at } => {
            let repo = FileRepository::discover()?;
            let filter = parse_tag_filter(tags)?;
            let at = parse_at(at)?;
            let facts = LessonService::new(repo).execute(at, &filter)?;
            print!("{}", ensure_newline(format_due_list(&facts)));
            Ok(())
        }
        Commands::Rate {
            id,
            rating,
            meaning,
        } => {
            let repo = FileRepository::discover()?;
            let outcome = ReviewService::new(repo).execute(id, meaning, rating)?;
            println!(
                "Planned next practice in {:.1} days ({})",
                outcome.delay_days,
                outcome.next_practice.format("%Y-%m-%d %H:%M:%S")
            );
            Ok(())
        }
        Commands::Tags => {
            let repo = FileRepository::discover()?;
            let tags = ListTagsService::new(repo).execute()?;
            print!("{}", ensure_newline(format_tag_list(&tags)));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("database = {}", config.database);
                println!("default_tags = {}", config.default_tags);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: memorize config [--list | <key> [<value>]]");
                println!("Valid keys: database, default_tags, created");
                Ok(())
            }
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
