// This is actually defined at `crate::loader::tests_for_loader`

use super::*;
use crate::Symbol;

fn lines(text: &str) -> Vec<(String, Vec<String>)> {
    productions(text)
        .map(|p| (p.lhs().to_string(), p.rhs().iter().map(Symbol::to_string).collect()))
        .collect()
}

fn owned(lhs: &str, rhs: &[&str]) -> (String, Vec<String>) {
    (lhs.to_string(), rhs.iter().map(|s| s.to_string()).collect())
}

#[test]
fn one_production_per_line() {
    assert_eq!(lines("S a S b\nS"), vec![owned("S", &["a", "S", "b"]), owned("S", &[])]);
}

#[test]
fn blank_lines_and_padding() {
    let text = "\n\n   S   A\tb  \n \t \nA x\n\n";
    assert_eq!(lines(text), vec![owned("S", &["A", "b"]), owned("A", &["x"])]);
}

#[test]
fn line_terminators() {
    let text = "S A\r\nA x\rA y\u{0B}A z\u{0C}A w\u{85}A v\u{2028}A u\u{2029}A";
    let lhs: Vec<String> = lines(text).into_iter().map(|(lhs, _)| lhs).collect();
    assert_eq!(lhs, ["S", "A", "A", "A", "A", "A", "A", "A"]);
    assert_eq!(lines("S a\r\n\r\nS b"), vec![owned("S", &["a"]), owned("S", &["b"])]);
}

#[test]
fn unicode_spaces_are_symbol_text() {
    assert_eq!(lines("S a\u{A0}b"), vec![owned("S", &["a\u{A0}b"])]);
    assert_eq!(lines("\u{3000}S a\u{2003}"), vec![owned("\u{3000}S", &["a\u{2003}"])]);
    // control characters pad a line but do not split it
    assert_eq!(lines("\u{1}S a\u{1F}"), vec![owned("S", &["a"])]);
    assert_eq!(lines("S a\u{1}b"), vec![owned("S", &["a\u{1}b"])]);
}

#[test]
fn symbols_are_literal() {
    // no comments, no escapes
    assert_eq!(lines("# -> \\n 'x'"), vec![owned("#", &["->", "\\n", "'x'"])]);
}

#[test]
fn empty_text() {
    assert_eq!(Grammar::parse(""), Err(GrammarError::NoProductions));
    assert_eq!(Grammar::parse(" \n\t\r\n  "), Err(GrammarError::NoProductions));
}

#[test]
fn from_str() {
    let g: Grammar = "S A\nA x".parse().unwrap();
    assert_eq!(g.start().as_str(), "S");
    assert!(g.recognizes(&["x"]));
    assert!("\n".parse::<Grammar>().is_err());
}

#[test]
fn from_path() -> Result<(), LoadError> {
    let file = temp_file::with_contents(b"E E PLUS T\nE T\nT id\n");
    let g = Grammar::from_path(file.path())?;
    assert_eq!(g.productions().len(), 3);
    assert!(g.recognizes(&["id", "PLUS", "id"]));
    Ok(())
}

#[test]
fn from_path_blank_file() {
    let file = temp_file::with_contents(b"\n\n");
    match Grammar::from_path(file.path()) {
        Err(LoadError::Grammar(GrammarError::NoProductions)) => {}
        other => panic!("expected an invalid grammar, got {:?}", other),
    }
}

#[test]
fn from_path_missing_file() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("missing.grammar");
    match Grammar::from_path(&path) {
        Err(err @ LoadError::Io(_)) => {
            assert!(err.to_string().contains("missing.grammar"), "{err}");
        }
        other => panic!("expected an io error, got {:?}", other),
    }
}
