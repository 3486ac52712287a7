use classlabel::{Color, Label, LabelStore, LabelStoreBuilder, StandardLabel, ValidationErrorKind};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

// --- TESTS RESOLVING ---
#[test]
fn test_resolve_sets_fields() {
    let store = LabelStore::new();
    let grey = Color::rgb(180, 180, 180);
    let label = store.resolve("Parent:Child", Some(grey)).unwrap();

    assert_eq!(label.name(), "Child");
    assert_eq!(label.to_string(), "Parent: Child");
    assert_eq!(label.color(), Some(grey));
    assert_eq!(label.chain(), ["Parent", "Child"]);
    assert_eq!(label.parent().unwrap().name(), "Parent");
    assert_eq!(label.parent().unwrap().color(), None);
}

#[test]
fn test_resolve_from_segments() {
    let store = LabelStore::new();
    let from_array = store.resolve(&["First", "Second", "Third"], None).unwrap();
    let from_vec = store
        .resolve(&vec!["First".to_string(), "Second".to_string(), "Third".to_string()], None)
        .unwrap();
    let from_text = store.resolve("First: Second: Third", None).unwrap();

    assert_eq!(from_array.name(), "Third");
    assert_eq!(from_array.to_string(), "First: Second: Third");
    assert_eq!(from_array, from_vec);
    assert_eq!(from_array, from_text);
}

#[test]
fn test_whitespace_variants_are_same_instance() {
    let store = LabelStore::new();
    let expected = store.resolve("My:Class", Some(Color::CYAN)).unwrap();
    for text in ["My: Class", "My:\tClass", "My:     Class", " My:Class "] {
        let label = store.resolve(text, Some(Color::RED)).unwrap();
        assert!(label.same_as(&expected), "input {text:?}");
        assert_eq!(label.to_string(), "My: Class");
        assert_eq!(label.parent().unwrap().name(), "My");
    }
}

#[test]
fn test_trailing_whitespace_segments_are_same_instance() {
    let store = LabelStore::new();
    let first = store.resolve(&["Something", "else "], None).unwrap();
    let second = store.resolve(&["Something", "else "], None).unwrap();
    assert!(first.same_as(&second));

    let third = store.resolve(&["Something", "else ", " entirely"], None).unwrap();
    let fourth = store.resolve(&[" Something", " else ", "\tentirely"], None).unwrap();
    assert!(third.same_as(&fourth));
    assert_eq!(third.parent(), Some(&first));
}

#[test]
fn test_common_prefix_shares_parent() {
    let store = LabelStore::new();
    let positive = store.resolve("Tumor: Positive", None).unwrap();
    let negative = store.resolve("Tumor: Negative", None).unwrap();
    assert!(positive.parent().unwrap().same_as(negative.parent().unwrap()));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_first_color_wins() {
    let store = LabelStore::new();
    let first = store.resolve("Stroma", Some(Color::GREEN)).unwrap();
    let second = store.resolve("Stroma", Some(Color::RED)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.color(), Some(Color::GREEN));
    assert_eq!(second.color(), Some(Color::GREEN));
}

// --- TESTS UNCLASSIFIED ---
#[test]
fn test_absent_and_empty_are_unclassified() {
    let store = LabelStore::new();
    let unclassified = store.unclassified().clone();
    assert_eq!(store.resolve(None::<&str>, Some(Color::CYAN)).unwrap(), unclassified);
    assert_eq!(store.resolve("", Some(Color::CYAN)).unwrap(), unclassified);
    assert_eq!(store.resolve(unclassified.name(), None).unwrap(), unclassified);
    assert_eq!(store.resolve(unclassified.to_string().as_str(), Some(Color::RED)).unwrap(), unclassified);
    assert_eq!(store.find(" Unclassified ").unwrap(), Some(unclassified.clone()));
    assert_eq!(unclassified.base(), &unclassified);
    assert_eq!(unclassified.to_string(), "Unclassified");
    assert!(unclassified.is_unclassified());
    assert_eq!(unclassified.color(), None);
    assert!(store.is_empty());
}

// --- TESTS INVALID INPUT ---
#[test]
fn test_invalid_input_creates_nothing() {
    let store = LabelStore::new();
    for text in [":\n", "My::Invalid\nClass", ": :", ":\n:"] {
        assert!(store.resolve(text, Some(Color::CYAN)).is_err(), "input {text:?}");
    }
    assert!(store.is_empty());
}

#[test]
fn test_empty_parent_rejected() {
    let store = LabelStore::new();
    let err = store.resolve(":Child", Some(Color::WHITE)).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::EmptySegment);
    let err = store.resolve(&["", "Child"], None).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::EmptySegment);
    let err = store.resolve("Class with\nnew line", Some(Color::RED)).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidCharacter);
    assert!(store.is_empty());
}

#[test]
fn test_separator_in_segment_never_creates_flat_label() {
    let store = LabelStore::new();
    let err = store.resolve(&["a:b"], None).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidCharacter);
    assert!(store.is_empty());

    let nested = store.resolve("a:b", None).unwrap();
    assert_eq!(nested.chain(), ["a", "b"]);
    assert_eq!(nested.to_string(), "a: b");
    assert_eq!(store.labels().iter().filter(|l| l.name().contains(':')).count(), 0);
}

// --- TESTS LOOKUP ---
#[test]
fn test_find_does_not_create() {
    let store = LabelStore::new();
    assert_eq!(store.find("Tumor: 1+").unwrap(), None);
    assert!(store.is_empty());

    let label = store.resolve("Tumor: 1+", None).unwrap();
    assert_eq!(store.find(" Tumor:1+").unwrap(), Some(label));
    assert_eq!(store.find("").unwrap(), Some(store.unclassified().clone()));
    assert!(store.find("::").is_err());
}

#[test]
fn test_labels_sorted_snapshot() {
    let store = LabelStore::new();
    store.resolve("Tumor: Positive", None).unwrap();
    store.resolve("Stroma", None).unwrap();
    let names: Vec<String> = store.labels().iter().map(Label::to_string).collect();
    assert_eq!(names, ["Stroma", "Tumor", "Tumor: Positive"]);
}

#[test]
fn test_canonicalize_foreign_label() {
    let store = LabelStore::new();
    let other = LabelStore::new();
    let foreign = other.resolve("Immune cells: CD8", Some(Color::MAGENTA)).unwrap();

    assert!(!store.contains(&foreign));
    let local = store.canonicalize(&foreign);
    assert_ne!(local, foreign);
    assert!(store.contains(&local));
    assert_eq!(local.to_string(), foreign.to_string());
    assert_eq!(local.color(), Some(Color::MAGENTA));
    assert_eq!(store.canonicalize(&local), local);
    assert_eq!(store.canonicalize(other.unclassified()), *store.unclassified());
}

#[test]
fn test_display_lists_labels() {
    let store = LabelStore::new();
    store.resolve("Stroma", Some(Color::rgb(150, 200, 150))).unwrap();
    let text = store.to_string();
    assert!(text.starts_with("LabelStore (1 labels):"));
    assert!(text.contains("Stroma [#96C896]"));
}

// --- TESTS STANDARD LABELS ---
#[test]
fn test_standard_labels() {
    let store = LabelStoreBuilder::new().with_standard_labels().build();
    assert_eq!(store.len(), StandardLabel::ALL.len());

    assert_eq!(store.standard(StandardLabel::Ignore).name(), "Ignore*");
    assert_eq!(store.standard(StandardLabel::ImageRoot).name(), "Image");
    assert_eq!(store.standard(StandardLabel::ImmuneCells).name(), "Immune cells");
    assert_eq!(store.standard(StandardLabel::Necrosis).name(), "Necrosis");
    assert_eq!(store.standard(StandardLabel::Negative).name(), "Negative");
    assert_eq!(store.standard(StandardLabel::Other).name(), "Other");
    assert_eq!(store.standard(StandardLabel::Positive).name(), "Positive");
    assert_eq!(store.standard(StandardLabel::Region).name(), "Region*");
    assert_eq!(store.standard(StandardLabel::Stroma).name(), "Stroma");

    let tumor = store.standard(StandardLabel::Tumor);
    assert_eq!(tumor.color(), Some(StandardLabel::Tumor.color()));
    assert_eq!(store.resolve("Tumor", Some(Color::BLUE)).unwrap(), tumor);
    assert!(store.standard(StandardLabel::Region).is_ignored());
    assert_eq!(store.len(), StandardLabel::ALL.len());
}

// --- TESTS CONCURRENCY ---
#[test]
fn test_concurrent_create_single_instance() {
    let store = LabelStore::new();
    let chain = ["Some class", "Another"];

    let all: Vec<Label> = thread::scope(|scope| {
        let handles: Vec<_> = (0..1000)
            .map(|_| scope.spawn(|| store.resolve(&chain, None).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let target = store.resolve(&chain, None).unwrap();
    for label in &all {
        assert!(label.same_as(&target));
    }
    let distinct: HashSet<Label> = all.into_iter().collect();
    assert_eq!(distinct.len(), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_concurrent_create_shared_store() {
    let store = Arc::new(LabelStore::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..50)
                    .map(|i| store.resolve(format!("Class {}: Sub {}", i % 10, t % 2).as_str(), None).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen: HashSet<Label> = HashSet::new();
    for handle in handles {
        seen.extend(handle.join().unwrap());
    }
    // 10 classes × 2 subclasses
    assert_eq!(seen.len(), 20);
    assert_eq!(store.len(), 30);
}

#[test]
fn test_concurrent_create_first_color_wins() {
    let store = LabelStore::new();
    let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::CYAN, Color::MAGENTA];

    let all: Vec<Label> = thread::scope(|scope| {
        let handles: Vec<_> = (0..200)
            .map(|i| {
                let store = &store;
                let color = colors[i % colors.len()];
                scope.spawn(move || store.resolve("Tumor: Margin", Some(color)).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winner = all[0].color();
    assert!(winner.is_some_and(|color| colors.contains(&color)));
    for label in &all {
        assert!(label.same_as(&all[0]));
        assert_eq!(label.color(), winner);
    }
    assert_eq!(store.resolve("Tumor: Margin", Some(Color::WHITE)).unwrap().color(), winner);
}
