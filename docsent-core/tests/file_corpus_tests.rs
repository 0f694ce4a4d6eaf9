//! End-to-end iteration over on-disk corpora

use docsent_core::{
    AnnotatedSentenceIterator, CollapseWhitespace, DocsentConfig, IteratorState, ReaderConfig,
    SentenceIterator,
};
use std::fs;
use tempfile::TempDir;

fn write_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("01-intro.txt"),
        "Dr. Smith went to the store. He bought some milk and eggs.",
    )
    .unwrap();
    fs::write(dir.path().join("02-empty.txt"), "\n\n   \n").unwrap();
    fs::create_dir(dir.path().join("03-chapter")).unwrap();
    fs::write(
        dir.path().join("03-chapter").join("part.txt"),
        "Chapter One\n\nIt was a dark night. \"Who's there?\" she asked.",
    )
    .unwrap();
    fs::write(
        dir.path().join("04-japanese.txt"),
        "これはテストです。本当ですか？",
    )
    .unwrap();
    fs::write(dir.path().join("notes.md"), "Ignored by the txt filter.").unwrap();
    dir
}

#[test]
fn test_create_with_path_reads_whole_tree() {
    let dir = write_corpus();
    let iter = AnnotatedSentenceIterator::create_with_path(dir.path()).unwrap();

    let sentences: Vec<String> = iter.sentences().map(|s| s.unwrap()).collect();
    assert_eq!(
        sentences,
        vec![
            "Dr. Smith went to the store.",
            "He bought some milk and eggs.",
            "Chapter One",
            "It was a dark night.",
            "\"Who's there?\"",
            "she asked.",
            "これはテストです。",
            "本当ですか？",
            "Ignored by the txt filter.",
        ]
    );
}

#[test]
fn test_config_pattern_filters_files() {
    let dir = write_corpus();
    let config = DocsentConfig {
        reader: ReaderConfig {
            pattern: Some("*.txt".to_string()),
            ..ReaderConfig::default()
        },
        ..DocsentConfig::default()
    };
    let iter = AnnotatedSentenceIterator::create_with_config(dir.path(), &config).unwrap();

    let sentences: Vec<String> = iter.sentences().map(|s| s.unwrap()).collect();
    assert_eq!(sentences.len(), 8);
    assert!(!sentences.iter().any(|s| s.contains("Ignored")));
}

#[test]
fn test_single_file_source() {
    let dir = write_corpus();
    let iter =
        AnnotatedSentenceIterator::create_with_path(dir.path().join("04-japanese.txt")).unwrap();

    assert!(iter.has_next());
    assert_eq!(iter.next_sentence().unwrap().as_deref(), Some("これはテストです。"));
    assert!(iter.has_next());
    assert_eq!(iter.next_sentence().unwrap().as_deref(), Some("本当ですか？"));
    assert!(!iter.has_next());
    assert_eq!(iter.next_sentence().unwrap(), None);
}

#[test]
fn test_undecodable_file_yields_placeholder() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "Readable first.").unwrap();
    fs::write(dir.path().join("b.txt"), b"Broken \xff\xfe bytes.").unwrap();
    fs::write(dir.path().join("c.txt"), "Readable last.").unwrap();

    let iter = AnnotatedSentenceIterator::create_with_path(dir.path()).unwrap();
    let mut results = Vec::new();
    while let Some(sentence) = iter.next_sentence().unwrap() {
        results.push(sentence);
    }

    assert_eq!(results, vec!["Readable first.", "", "Readable last."]);
}

#[test]
fn test_reset_sees_new_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "Only one.").unwrap();

    let iter = AnnotatedSentenceIterator::builder()
        .path(dir.path())
        .pre_processor(CollapseWhitespace)
        .build()
        .unwrap();
    assert_eq!(iter.sentences().count(), 1);
    assert_eq!(iter.state(), IteratorState::Exhausted);

    fs::write(dir.path().join("b.txt"), "Added later.\nSpans   lines.").unwrap();
    iter.reset().unwrap();

    let sentences: Vec<String> = iter.sentences().map(|s| s.unwrap()).collect();
    assert_eq!(sentences, vec!["Only one.", "Added later.", "Spans lines."]);
}

#[test]
fn test_reset_fails_when_root_disappears() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("corpus");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "Here. Gone soon.").unwrap();

    let iter = AnnotatedSentenceIterator::create_with_path(&root).unwrap();
    assert_eq!(iter.next_sentence().unwrap().as_deref(), Some("Here."));

    fs::remove_dir_all(&root).unwrap();
    assert!(iter.reset().is_err());
    assert_eq!(iter.next_sentence().unwrap().as_deref(), Some("Gone soon."));
}

#[cfg(unix)]
#[test]
fn test_link_back_to_root_reads_each_document_once() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "One. Two.").unwrap();
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

    let iter = AnnotatedSentenceIterator::create_with_path(dir.path()).unwrap();
    assert_eq!(iter.sentences().count(), 2);
}
