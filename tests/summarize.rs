use notesum::frequency::{is_english_stopword, tokenize};
use notesum::{segment, summarize, Length, Method, Summarizer};

const LECTURE: &str = "The cell is the basic unit of life in every living organism. \
    Cells contain organelles that perform specific functions for the cell. \
    The nucleus stores the genetic material of the cell as DNA. \
    Mitochondria produce energy for the cell through cellular respiration. \
    Ribosomes build proteins. \
    The cell membrane controls what enters and leaves the cell. \
    Plant cells also have a cell wall and chloroplasts for photosynthesis. \
    Animal cells lack a cell wall. \
    Cell division allows organisms to grow and repair damaged tissue over time. \
    Mitosis produces two identical daughter cells from one parent cell. \
    Meiosis produces gametes with half the number of chromosomes. \
    Errors in cell division can lead to diseases such as cancer.";

const PHOTOSYNTHESIS: &str = "Photosynthesis converts light energy into chemical energy. \
    Plants use chlorophyll to absorb light. This process occurs in chloroplasts. \
    Oxygen is released as a byproduct.";

#[test]
fn test_photosynthesis_scenario() {
    let summary = summarize(PHOTOSYNTHESIS, Method::Extractive, Length::Short);
    let kept = segment(&summary);
    assert_eq!(kept.len(), 2);
    assert!(summary.ends_with('.'));
    assert!(summary.contains(". "));
    assert_eq!(kept[0].text, "Photosynthesis converts light energy into chemical energy");
    assert_eq!(kept[1].text, "Plants use chlorophyll to absorb light");
}

#[test]
fn test_extractive_sentence_counts_match_targets() {
    let total = segment(LECTURE).len();
    assert_eq!(total, 12);

    for length in Length::ALL {
        let summary = summarize(LECTURE, Method::Extractive, length);
        let kept = segment(&summary);
        assert_eq!(kept.len(), length.target_sentences(total), "{}", length);

        // kept sentences appear in the same relative order as in the notes
        let originals: Vec<String> = segment(LECTURE).into_iter().map(|s| s.text).collect();
        let positions: Vec<usize> = kept
            .iter()
            .map(|s| originals.iter().position(|o| *o == s.text).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_bullet_points_shape() {
    let summary = summarize(LECTURE, Method::BulletPoints, Length::Medium);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 8);
    for line in lines {
        let body = line.strip_prefix("• ").unwrap();
        assert!(body.chars().count() <= 80);
    }

    let few = summarize("One idea. Another idea.", Method::BulletPoints, Length::Medium);
    assert_eq!(few.lines().count(), 2);
}

#[test]
fn test_key_terms_exclude_stopwords_and_short_tokens() {
    let summary = summarize(LECTURE, Method::KeyTerms, Length::Medium);
    let (terms, context) = summary
        .split_once("\nKEY CONCEPTS IN CONTEXT:\n\n")
        .unwrap();

    let listed: Vec<String> = terms
        .lines()
        .filter_map(|l| l.strip_prefix("• "))
        .map(|l| l.split(" (mentioned").next().unwrap().to_lowercase())
        .collect();
    assert!(!listed.is_empty() && listed.len() <= 15);
    assert_eq!(listed[0], "cell");
    for term in &listed {
        assert!(term.chars().count() > 2);
        assert!(!is_english_stopword(term));
    }

    let entries: Vec<&str> = context.lines().filter(|l| !l.is_empty()).collect();
    assert!(entries.len() <= 5);
    for (entry, term) in entries.iter().zip(&listed) {
        assert!(entry.to_lowercase().contains(term.as_str()));
    }
}

#[test]
fn test_repeated_requests_are_identical() {
    let summarizer = Summarizer::default();
    for method in Method::ALL {
        let first = summarizer.summarize(LECTURE, method, Length::Short);
        let second = summarizer.summarize(LECTURE, method, Length::Short);
        assert_eq!(first, second);
    }
}

#[test]
fn test_tokenize_matches_word_runs() {
    assert_eq!(tokenize("cat, dog! cat?"), vec!["cat", "dog", "cat"]);
}
