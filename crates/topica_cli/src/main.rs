//! Catalog browsing probe.
//!
//! # Responsibility
//! - Exercise the full load -> filter -> highlight pipeline end to end.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use topica_core::{
    filter_topics, highlight_spans, load_catalog, CategoryFilter, FilterParams, SubtopicNarrowing,
};

const USAGE: &str = "usage: topica_cli <catalog.json> [--category NAME] [--query TEXT] [--narrow]";

struct CliConfig {
    path: String,
    params: FilterParams,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let catalog = match load_catalog(&config.path) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("catalog unavailable: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stats = catalog.stats();
    println!("topica_core version={}", topica_core::core_version());
    println!(
        "topics={} sub_topics={} categories={} tags={}",
        stats.topics, stats.sub_topics, stats.categories, stats.tags
    );

    let views = filter_topics(&catalog, &config.params);
    if views.is_empty() {
        println!("no topics found matching the current filters");
        return ExitCode::SUCCESS;
    }

    for view in &views {
        println!("{}", mark(&view.topic.name, &config.params.query));
        for sub in &view.sub_topics {
            let mut line = format!("  - {}", mark(&sub.title, &config.params.query));
            if let Some(url) = sub.action_url() {
                line.push_str(&format!(" <{url}>"));
            }
            if !sub.tags.is_empty() {
                let tags = sub
                    .tags
                    .iter()
                    .map(|tag| mark(&tag.label, &config.params.query))
                    .collect::<Vec<_>>()
                    .join(", ");
                line.push_str(&format!(" [{tags}]"));
            }
            println!("{line}");
        }
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Option<CliConfig> {
    let mut path = None;
    let mut params = FilterParams::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--category" => params.category = CategoryFilter::parse(iter.next()?),
            "--query" => params.query = iter.next()?.clone(),
            "--narrow" => params.narrowing = SubtopicNarrowing::MatchesOnly,
            other if path.is_none() && !other.starts_with("--") => {
                path = Some(other.to_string());
            }
            _ => return None,
        }
    }

    Some(CliConfig {
        path: path?,
        params,
    })
}

/// Renders highlight spans as `[` `]` markers around each match.
fn mark(text: &str, query: &str) -> String {
    let spans = highlight_spans(text, query);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + spans.len() * 2);
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push('[');
        out.push_str(&text[span.start..span.end]);
        out.push(']');
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
