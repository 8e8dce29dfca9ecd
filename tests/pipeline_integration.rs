use sentstat::pipeline::TextPipeline;
use sentstat::reader::{self, FileTextSource};
use sentstat::report::ReportMode;
use sentstat::sentence::clean_sentence;
use sentstat::sink::{report_path_for, FileReportSink};
use sentstat::{AppConfig, Sentence, SentenceSegmenter, StatsCalculator};

#[path = "integration/fixtures/mod.rs"]
mod fixtures;
use fixtures::*;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{assert_golden_file, TestFixture};

fn sentence_texts(text: &str) -> Vec<String> {
    let segmenter = SentenceSegmenter::with_default_rules().expect("Segmenter creation should succeed");
    segmenter.parse(text).iter().map(|s| s.raw().to_string()).collect()
}

/// Mixed scripts: comma runs and whitespace runs collapse, punctuation stays
#[tokio::test]
async fn test_pipeline_mixed_text() {
    let fixture = TestFixture::new();
    let file_path = fixture.create_text_file("mixed.txt", MIXED_TEXT);

    let content = reader::read_file_async(&file_path).await;
    assert_eq!(content, MIXED_TEXT);

    let pipeline = TextPipeline::with_default_config().expect("Pipeline creation should succeed");
    let analysis = pipeline.analyze(&content);

    let raw: Vec<&str> = analysis.sentences.iter().map(|s| s.raw()).collect();
    assert_eq!(raw, MIXED_SENTENCES);

    let words: Vec<&str> = analysis
        .sentences
        .iter()
        .flat_map(|s| s.words())
        .map(|w| w.as_str())
        .collect();
    assert_eq!(words, MIXED_WORDS);
    assert_eq!(analysis.stats.word_count(), MIXED_WORDS.len());
    assert_eq!(analysis.stats.unique_word_count(), MIXED_WORDS.len());
}

/// Blank input gives no sentences and all-zero statistics
#[test]
fn test_pipeline_blank_text() {
    let pipeline = TextPipeline::with_default_config().unwrap();

    for text in ["", "   ", "\n\t\n"] {
        let analysis = pipeline.analyze(text);
        assert!(analysis.sentences.is_empty(), "input {text:?}");
        assert_eq!(analysis.stats.word_count(), 0);
        assert_eq!(analysis.stats.char_count(), 0);
        assert_eq!(analysis.stats.unique_word_count(), 0);
        assert_eq!(analysis.stats.memory_used(), 0);
    }

    let report = pipeline.render(&pipeline.analyze(""), ReportMode::Summary);
    assert!(report.contains("   No word data"));
}

#[test]
fn test_pipeline_counting_text() {
    let pipeline = TextPipeline::with_default_config().unwrap();
    let analysis = pipeline.analyze(COUNTING_TEXT);

    assert_eq!(analysis.sentences.len(), 1);
    assert_eq!(analysis.stats.word_count(), 6);
    assert_eq!(analysis.stats.unique_word_count(), 3);
    assert_eq!(analysis.stats.frequency("One"), 1);
    assert_eq!(analysis.stats.frequency("Two"), 2);
    assert_eq!(analysis.stats.frequency("Three"), 3);
    assert_eq!(analysis.stats.char_count(), 24);
    assert_eq!(analysis.stats.memory_used(), 58);
}

#[test]
fn test_pipeline_joiners_kept_between_letters() {
    let pipeline = TextPipeline::with_default_config().unwrap();
    let analysis = pipeline.analyze(JOINER_TEXT);

    let words: Vec<&str> = analysis.sentences[0].words().iter().map(|w| w.as_str()).collect();
    assert_eq!(words, vec!["Well-known", "It's", "Here"]);
}

/// Summary report for a known input matches the expected layout exactly
#[test]
fn test_pipeline_summary_golden() {
    let pipeline = TextPipeline::with_default_config().unwrap();
    let report = pipeline.render(&pipeline.analyze(COUNTING_TEXT), ReportMode::Summary);

    assert_golden_file(&report, COUNTING_SUMMARY_EXPECTED, "Counting text summary");
}

#[test]
fn test_pipeline_document_text() {
    assert_eq!(
        sentence_texts(DOCUMENT_TEXT),
        vec![
            "The quick brown fox jumps.",
            "The lazy dog sleeps!",
            "Does the fox care?",
            "No, the fox does not...",
            "It runs away",
        ]
    );

    let pipeline = TextPipeline::with_default_config().unwrap();
    let analysis = pipeline.analyze(DOCUMENT_TEXT);
    assert_eq!(analysis.stats.word_count(), 21);
    assert_eq!(analysis.stats.frequency("The"), 4);
    assert_eq!(analysis.stats.frequency("Fox"), 3);

    let full = pipeline.render(&analysis, ReportMode::Full);
    assert!(full.contains("   • Sentences: 5"));
    assert!(full.contains("   • Average sentence length: 4.2 words"));
    assert!(full.contains("NORMALIZED TEXT:"));
    assert!(full.contains("   No The Fox Does Not"));

    let markdown = pipeline.render(&analysis, ReportMode::Markdown);
    assert!(markdown.contains("| 1 | `The` | 4 |"));
    assert!(markdown.contains("| 2 | `Fox` | 3 |"));
    assert!(markdown.contains("5. It runs away"));
}

/// Invariants that hold for any input
#[test]
fn test_pipeline_invariants() {
    let segmenter = SentenceSegmenter::with_default_rules().unwrap();
    let calculator = StatsCalculator::default();

    for text in PROPERTY_INPUTS {
        let sentences = segmenter.parse(text);
        let stats = calculator.calculate(&sentences);

        for sentence in &sentences {
            assert!(!sentence.raw().is_empty(), "empty sentence from {text:?}");
            assert_eq!(clean_sentence(sentence.raw()), sentence.raw(), "uncleaned sentence from {text:?}");
            for word in sentence.words() {
                assert!(!word.as_str().trim().is_empty(), "blank word from {text:?}");
            }
        }

        let total: usize = stats.word_meeting_rate().values().sum();
        assert_eq!(total, stats.word_count(), "frequency sum for {text:?}");
        assert_eq!(stats.unique_word_count(), stats.word_meeting_rate().len());
        assert!(stats.unique_word_count() <= stats.word_count());

        let chars: usize = stats
            .word_meeting_rate()
            .iter()
            .map(|(word, count)| word.chars().count() * count)
            .sum();
        assert_eq!(chars, stats.char_count(), "char count for {text:?}");
        // memory covers the raw sentence text, separators included
        let raw_chars: usize = sentences.iter().map(Sentence::char_len).sum();
        assert_eq!(stats.memory_used(), raw_chars * 2, "memory for {text:?}");
        assert!(stats.memory_used() >= stats.char_count() * 2);
    }
}

#[test]
fn test_pipeline_configured_bytes_per_char() {
    let config = AppConfig::from_toml_str("[analysis]\nbytes_per_char = 4\n").unwrap();
    let pipeline = TextPipeline::new(&config).unwrap();

    let analysis = pipeline.analyze("abcdefghij");
    assert_eq!(analysis.stats.char_count(), 10);
    assert_eq!(analysis.stats.memory_used(), 40);
}

/// File in, saved report next to it out
#[tokio::test]
async fn test_pipeline_file_to_saved_report() {
    let fixture = TestFixture::new();
    let file_path = fixture.create_text_file("books/document.txt", DOCUMENT_TEXT);
    let destination = report_path_for(&file_path, ReportMode::Markdown);
    assert_eq!(destination, fixture.path("books/document_report.md"));

    let pipeline = TextPipeline::with_default_config().unwrap();
    let mut source = FileTextSource::default();
    let output = pipeline
        .run(
            &mut source,
            file_path.to_str().unwrap(),
            ReportMode::Markdown,
            &FileReportSink::new(),
            Some(&destination),
        )
        .await
        .expect("Pipeline run should succeed");

    assert_eq!(output.run_stats.status, "success");
    assert_eq!(output.run_stats.sentences_detected, 5);
    assert_eq!(output.run_stats.chars_processed, DOCUMENT_TEXT.chars().count() as u64);

    let saved = fixture.read(&destination);
    assert!(saved.starts_with("# Text Analysis\n"));
    assert!(saved.ends_with('\n'));
    assert_eq!(saved.trim_end_matches('\n'), output.report);
}

#[tokio::test]
async fn test_pipeline_large_text() {
    let fixture = TestFixture::new();
    let file_path = fixture.create_text_file("large.txt", &generate_large_text());

    let content = reader::read_file_async(&file_path).await;
    let pipeline = TextPipeline::with_default_config().unwrap();
    let analysis = pipeline.analyze(&content);

    assert_eq!(analysis.sentences.len(), 500);
    assert_eq!(analysis.stats.word_count(), 2500);
    assert_eq!(analysis.stats.frequency("This"), 500);
    assert_eq!(analysis.stats.frequency("Sentence"), 500);
    assert_eq!(analysis.sentences[41].raw(), "This is sentence number 42.");
}
