//! End-to-end tests for the dump-to-wordlist extraction pipeline.

use std::io::Cursor;

use wordmill::prelude::*;

/// Build one dump record in the shape the parser expects.
fn page(title: &str, text: &str) -> String {
    format!(
        "<page>\n  <title>{title}</title>\n  <revision>\n    <text xml:space=\"preserve\">{text}</text>\n  </revision>\n</page>"
    )
}

fn plural_of(base: &str) -> String {
    format!("==English== {{{{plural of|{base}|lang=en|nodot=1}}}}")
}

fn run_pipeline(input: &str, config: ExtractConfig) -> Result<(Vec<String>, ExtractStats)> {
    let mut out = Vec::new();
    let stats = Extractor::new(config).run(Cursor::new(input.as_bytes().to_vec()), &mut out)?;
    let words = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    Ok((words, stats))
}

#[test]
fn test_base_and_plural_are_both_emitted() -> Result<()> {
    let input = page("run", "==English== a footrace") + &page("ran", &plural_of("run"));
    let (words, stats) = run_pipeline(&input, ExtractConfig::default())?;

    assert_eq!(words, vec!["ran", "run"]);
    assert_eq!(stats.words_total, 2);
    assert_eq!(stats.words_emitted, 2);
    Ok(())
}

#[test]
fn test_unsatisfied_dependency_is_excluded() -> Result<()> {
    // 'bar' never appears as its own record, so 'foo' has no valid support.
    let input = page("foo", &plural_of("bar")) + &page("run", "==English== a footrace");
    let (words, _) = run_pipeline(&input, ExtractConfig::default())?;

    assert_eq!(words, vec!["run"]);
    Ok(())
}

#[test]
fn test_duplicate_records_merge_dependency_sets() -> Result<()> {
    // The same title observed twice with different dependencies; neither
    // dependency exists, so the merged entry must be invalid. With a third
    // observation whose dependency does exist, it must become valid.
    let input = page("bar", &plural_of("x")) + &page("bar", &plural_of("y"));
    let (words, stats) = run_pipeline(&input, ExtractConfig::default())?;
    assert!(words.is_empty());
    assert_eq!(stats.words_total, 1);

    let input = page("bar", &plural_of("x"))
        + &page("bar", &plural_of("y"))
        + &page("yes", "==English== an affirmation")
        + &page("bar", &plural_of("yes"));
    let (words, stats) = run_pipeline(&input, ExtractConfig::default())?;
    assert_eq!(words, vec!["bar", "yes"]);
    assert_eq!(stats.words_total, 2);
    Ok(())
}

#[test]
fn test_mixed_case_title_dropped_by_default() -> Result<()> {
    let input = page("Dog", "==English== a dog") + &page("cat", "==English== a cat");
    let (words, stats) = run_pipeline(&input, ExtractConfig::default())?;

    assert_eq!(words, vec!["cat"]);
    assert_eq!(stats.words_total, 1);
    Ok(())
}

#[test]
fn test_mixed_case_title_folded_when_allowed() -> Result<()> {
    let input = page("Dog", "==English== a dog") + &page("dog", "==English== a dog");
    let config = ExtractConfig {
        mixed_case: true,
        ..ExtractConfig::default()
    };
    let (words, stats) = run_pipeline(&input, config)?;

    // Both observations fold onto one identity.
    assert_eq!(words, vec!["dog"]);
    assert_eq!(stats.words_total, 1);
    Ok(())
}

#[test]
fn test_length_window_is_inclusive() -> Result<()> {
    let input = page("ab", "==English== two")
        + &page("abc", "==English== three")
        + &page("abcdefg", "==English== seven")
        + &page("abcdefgh", "==English== eight");
    let config = ExtractConfig {
        min_len: 3,
        max_len: 7,
        ..ExtractConfig::default()
    };
    let (words, _) = run_pipeline(&input, config)?;

    assert_eq!(words, vec!["abc", "abcdefg"]);
    Ok(())
}

#[test]
fn test_dependency_chain_through_plurals() -> Result<()> {
    // spices -> spice -> spouse, as seen in real dumps.
    let input = page("spouse", "==English== a partner")
        + &page("spice", &plural_of("spouse"))
        + &page("spices", &plural_of("spice"));
    let config = ExtractConfig {
        min_len: 3,
        max_len: 0,
        workers: Some(2),
        ..ExtractConfig::default()
    };
    let (words, _) = run_pipeline(&input, config)?;

    assert_eq!(words, vec!["spice", "spices", "spouse"]);
    Ok(())
}

#[test]
fn test_cycle_resolves_valid_by_default() -> Result<()> {
    let input = page("aye", &plural_of("nay")) + &page("nay", &plural_of("aye"));
    let (words, _) = run_pipeline(&input, ExtractConfig::default())?;
    assert_eq!(words, vec!["aye", "nay"]);
    Ok(())
}

#[test]
fn test_cycle_rejected_under_strict_policy() -> Result<()> {
    let input = page("aye", &plural_of("nay")) + &page("nay", &plural_of("aye"));
    let config = ExtractConfig {
        cycle_policy: CyclePolicy::Reject,
        ..ExtractConfig::default()
    };
    let (words, _) = run_pipeline(&input, config)?;
    assert!(words.is_empty());
    Ok(())
}

#[test]
fn test_supported_cycle_accepted_under_strict_policy() -> Result<()> {
    // 'aye' and 'nay' depend on each other, but 'nay' also has a real
    // base form, so the whole cycle has independent support. Repeat: the
    // outcome must not depend on table hash order or worker interleaving.
    let input = page("yes", "==English== an affirmation")
        + &page("aye", &plural_of("nay"))
        + &page("nay", &plural_of("aye"))
        + &page("nay", &plural_of("yes"));
    for _ in 0..25 {
        let config = ExtractConfig {
            cycle_policy: CyclePolicy::Reject,
            ..ExtractConfig::default()
        };
        let (words, _) = run_pipeline(&input, config)?;
        assert_eq!(words, vec!["aye", "nay", "yes"]);
    }
    Ok(())
}

#[test]
fn test_incomplete_trailing_record_is_dropped() -> Result<()> {
    let input = page("run", "==English== a footrace")
        + "<page><title>cut</title><revision><text>==English== truncated";
    let (words, stats) = run_pipeline(&input, ExtractConfig::default())?;

    assert_eq!(words, vec!["run"]);
    assert_eq!(stats.words_total, 1);
    Ok(())
}

#[test]
fn test_many_records_across_many_small_chunks() -> Result<()> {
    // Force lots of chunks and worker handoffs, then check the output is
    // the full sorted, deduplicated set.
    let mut input = String::new();
    let mut expected = Vec::new();
    for a in b'a'..=b'z' {
        for b in b'a'..=b'z' {
            let word = format!("w{}{}", a as char, b as char);
            input.push_str(&page(&word, "==English== generated"));
            expected.push(word);
        }
    }
    expected.sort();

    let config = ExtractConfig {
        read_size: 256,
        workers: Some(4),
        queue_capacity: Some(2),
        ..ExtractConfig::default()
    };
    let (words, stats) = run_pipeline(&input, config)?;

    assert_eq!(words, expected);
    assert_eq!(stats.words_total, 676);
    assert!(stats.chunks > 1);
    Ok(())
}
