use std::io::Write;

use tempfile::NamedTempFile;
use word_ladder::{load_dictionary, Dictionary, DictionaryError};

#[test]
fn test_from_text_normalizes_entries() {
    let dictionary = Dictionary::from_text("  CaT \nDOG\ncat\n");
    assert_eq!(dictionary.len(), 2);
    assert!(dictionary.contains("cat"));
    assert!(dictionary.contains("dog"));
}

#[test]
fn test_from_text_skips_unusable_lines() {
    let dictionary = Dictionary::from_text("cat\n\ndon't\nhello123\nnaïve\n42\n");
    assert_eq!(dictionary.len(), 1);
    assert!(dictionary.contains("cat"));
}

#[test]
fn test_contains_is_case_sensitive() {
    let dictionary = Dictionary::from_text("cat\n");
    assert!(dictionary.contains("cat"));
    assert!(!dictionary.contains("CAT"));
    assert!(!dictionary.contains("Cat"));
}

#[test]
fn test_absent_word_is_simply_false() {
    let dictionary = Dictionary::from_text("cat\n");
    assert!(!dictionary.contains("dog"));
    assert!(!dictionary.contains(""));
}

#[test]
fn test_empty_dictionary() {
    let dictionary = Dictionary::from_text("");
    assert!(dictionary.is_empty());
    assert_eq!(dictionary.len(), 0);
    assert!(!dictionary.contains("cat"));
}

#[test]
fn test_words_of_length_filters_one_class() {
    let dictionary = Dictionary::from_text("cat\ndog\nstone\nat\n");

    let mut threes: Vec<&str> = dictionary.words_of_length(3).collect();
    threes.sort_unstable();
    assert_eq!(threes, vec!["cat", "dog"]);
    assert_eq!(dictionary.words_of_length(7).count(), 0);
}

#[test]
fn test_iter_covers_every_word() {
    let dictionary = Dictionary::from_text("cat\ndog\n");

    let mut words: Vec<&str> = dictionary.iter().collect();
    words.sort_unstable();
    assert_eq!(words, vec!["cat", "dog"]);
}

#[test]
fn test_from_file_loads_word_list() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"cat\ncot\nDOG\n").unwrap();

    let dictionary = Dictionary::from_file(file.path()).unwrap();
    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains("dog"));
}

#[test]
fn test_from_file_missing_path_is_io_error() {
    let err = Dictionary::from_file("/no/such/word-list.txt").unwrap_err();
    assert!(matches!(err, DictionaryError::Io(_)));
}

#[test]
fn test_from_file_rejects_word_free_files() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"123\n!!!\n\n").unwrap();

    let err = Dictionary::from_file(file.path()).unwrap_err();
    assert!(matches!(err, DictionaryError::Empty));
    assert_eq!(err.to_string(), "word list contains no usable words");
}

#[test]
fn test_embedded_dictionary() {
    let dictionary = load_dictionary();
    assert!(!dictionary.is_empty());
    assert!(dictionary.contains("cat"));
    assert!(dictionary.contains("dog"));

    for word in dictionary.iter() {
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "unnormalized word: {}",
            word
        );
    }
}
