use super::*;
use crate::analyze::{analyze_product, render_text, resolve_queries, QueryReport};
use trendtrackr_sentiment::sources::PayloadSource;
use trendtrackr_sentiment::{histogram, run, Label, SentimentError, TextItem};

#[test]
fn parses_score_command() {
    let cli = Cli::try_parse_from(["trendtrackr", "score", "I love this"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Score { ref text } if text == "I love this"));
}

#[test]
fn score_requires_text() {
    assert!(Cli::try_parse_from(["trendtrackr", "score"]).is_err());
}

#[test]
fn missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["trendtrackr"]).is_err());
}

#[test]
fn analyze_defaults() {
    let cli = Cli::try_parse_from(["trendtrackr", "analyze"]).expect("expected valid cli args");
    match cli.command {
        Commands::Analyze {
            kind,
            input,
            queries,
            provider,
            format,
        } => {
            assert_eq!(kind, KindArg::News);
            assert!(input.is_none());
            assert!(queries.is_empty());
            assert!(provider.is_none());
            assert_eq!(format, OutputFormat::Text);
        }
        other => panic!("expected analyze, got {other:?}"),
    }
}

#[test]
fn analyze_collects_repeated_queries() {
    let cli = Cli::try_parse_from([
        "trendtrackr",
        "analyze",
        "--query",
        "AWS",
        "--query",
        "Azure",
        "--input",
        "/tmp/payloads",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Commands::Analyze { queries, input, .. } => {
            assert_eq!(queries, vec!["AWS".to_string(), "Azure".to_string()]);
            assert_eq!(input, Some(PathBuf::from("/tmp/payloads")));
        }
        other => panic!("expected analyze, got {other:?}"),
    }
}

#[test]
fn analyze_provider_conflicts_with_query() {
    let result = Cli::try_parse_from([
        "trendtrackr",
        "analyze",
        "--provider",
        "AWS",
        "--query",
        "Azure",
    ]);
    assert!(result.is_err());
}

#[test]
fn analyze_parses_kind_and_format() {
    let cli = Cli::try_parse_from([
        "trendtrackr",
        "analyze",
        "--kind",
        "g2",
        "--format",
        "json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Analyze {
            kind: KindArg::G2,
            format: OutputFormat::Json,
            ..
        }
    ));
}

#[test]
fn analyze_rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["trendtrackr", "analyze", "--kind", "reddit"]).is_err());
}

#[test]
fn kind_arg_maps_to_payload_kind() {
    assert_eq!(PayloadKind::from(KindArg::News), PayloadKind::News);
    assert_eq!(PayloadKind::from(KindArg::Amazon), PayloadKind::AmazonProduct);
    assert_eq!(PayloadKind::from(KindArg::G2), PayloadKind::G2Vendors);
}

#[test]
fn parses_providers_command() {
    let cli = Cli::try_parse_from(["trendtrackr", "providers"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Providers));
}

#[test]
fn resolve_queries_defaults_to_general() {
    let queries = resolve_queries(Vec::new(), None).unwrap();
    assert_eq!(queries, vec![String::new()]);
}

#[test]
fn resolve_queries_keeps_explicit_queries() {
    let queries = resolve_queries(vec!["AWS".into(), "Fastly".into()], None).unwrap();
    assert_eq!(queries, vec!["AWS".to_string(), "Fastly".to_string()]);
}

#[test]
fn resolve_queries_uses_provider_preset() {
    let queries = resolve_queries(Vec::new(), Some("google cloud")).unwrap();
    assert_eq!(queries, vec!["Google Cloud".to_string()]);
}

#[test]
fn resolve_queries_rejects_unknown_provider() {
    let err = resolve_queries(Vec::new(), Some("Oracle")).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("unknown provider 'Oracle'"), "{message}");
    assert!(message.contains("Cloudflare"), "{message}");
}

fn report(query: &str, items: Vec<TextItem>) -> QueryReport {
    let batch = run(items);
    let histogram = histogram(&batch.items, 4);
    QueryReport {
        query: query.to_string(),
        source: "newsapi",
        title: None,
        batch,
        histogram,
    }
}

#[test]
fn render_text_reports_no_items() {
    let mut out = String::new();
    render_text(&report("", Vec::new()), &mut out).unwrap();
    assert!(out.starts_with("Query: (general) [newsapi]"), "{out}");
    assert!(out.contains("No items found."), "{out}");
    assert!(!out.contains("Items:"), "{out}");
}

#[test]
fn render_text_lists_summary_days_and_items() {
    let items = vec![
        TextItem::new("I love this").with_published_at("2024-03-01T08:00:00Z"),
        TextItem::new("I hate this").with_published_at("2024-03-02T08:00:00Z"),
        TextItem::new("This is a table").with_published_at("2024-03-02T09:00:00Z"),
    ];
    let mut out = String::new();
    render_text(&report("AWS", items), &mut out).unwrap();

    assert!(out.starts_with("Query: AWS [newsapi]"), "{out}");
    assert!(out.contains("Total: 3"), "{out}");
    assert!(out.contains("Positive 1 | Negative 1 | Neutral 1"), "{out}");
    assert!(out.contains("By day:"), "{out}");
    assert!(out.contains("2024-03-01"), "{out}");
    assert!(out.contains("2024-03-02"), "{out}");
    assert!(out.contains("I love this"), "{out}");
    assert!(!out.contains("unparseable"), "{out}");
}

#[test]
fn render_text_notes_unparseable_timestamps() {
    let items = vec![TextItem::new("I love this").with_published_at("yesterday-ish")];
    let mut out = String::new();
    render_text(&report("AWS", items), &mut out).unwrap();
    assert!(out.contains("Skipped 1 unparseable timestamps."), "{out}");
    assert!(!out.contains("By day:"), "{out}");
}

#[test]
fn render_text_truncates_long_items() {
    let long = "great ".repeat(40);
    let mut out = String::new();
    render_text(&report("AWS", vec![TextItem::new(long.trim())]), &mut out).unwrap();
    let item_line = out
        .lines()
        .find(|line| line.contains("great great"))
        .expect("item line");
    assert!(item_line.ends_with("..."), "{item_line}");
}

#[test]
fn analyze_product_scores_title_and_reviews_from_one_payload() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("b0watch.json"),
        r#"{
            "product_title": "Great Fitness Tracker Watch",
            "reviews": [
                {"review_text": "I love this watch"},
                {"review_text": "Battery died after a day"}
            ]
        }"#,
    )
    .expect("write payload");
    let source = PayloadSource::new(PayloadKind::AmazonProduct, dir.path());

    let (title, batch) = analyze_product(&source, "B0WATCH").expect("product analysed");

    let title = title.expect("title scored");
    assert_eq!(title.text, "Great Fitness Tracker Watch");
    assert_eq!(title.label, Label::Positive);
    assert_eq!(batch.summary.count, 2);
    assert_eq!(batch.items[1].label, Label::Negative);
}

#[test]
fn analyze_product_reports_missing_payload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = PayloadSource::new(PayloadKind::AmazonProduct, dir.path());

    let err = analyze_product(&source, "B0MISSING").unwrap_err();
    assert!(matches!(err, SentimentError::NoItems(_)), "{err}");
}
