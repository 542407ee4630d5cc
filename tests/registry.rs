use codeprint_cli::lang::LanguageRegistry;
use codeprint_cli::lang::errors::LangError;

#[test]
fn python_maps_to_py() {
    let registry = LanguageRegistry::new();
    assert_eq!(registry.suffixes_for("python").unwrap(), [".py"]);
}

#[test]
fn unknown_code_fails() {
    let registry = LanguageRegistry::new();
    assert!(matches!(
        registry.suffixes_for("nonexistent"),
        Err(LangError::UnknownLanguage(_))
    ));
}

#[test]
fn representative_table_rows() {
    let registry = LanguageRegistry::new();
    let cases: &[(&str, &[&str])] = &[
        ("c", &[".h", ".c", ".cc"]),
        ("cpp", &[".h", ".cpp", ".cxx"]),
        ("java", &[".java", ".jsp", ".jspx", ".wss", ".do", ".action"]),
        ("python", &[".py"]),
        ("jupyter", &[".ipynb"]),
        ("ruby", &[".rb", ".rhtml"]),
        ("rails", &[".erb", ".rjs"]),
        ("html", &[".htm", ".html", ".xhtml", ".jhtml"]),
        ("xml", &[".xml", ".rss", ".svg"]),
    ];
    for (code, suffixes) in cases {
        assert_eq!(registry.suffixes_for(code).unwrap(), *suffixes, "{code}");
    }
}

#[test]
fn suffix_match_is_case_insensitive() {
    let registry = LanguageRegistry::new();
    let entry = registry.entry("python").unwrap();
    assert!(entry.matches("script.py"));
    assert!(entry.matches("SCRIPT.PY"));
    assert!(entry.matches("Script.Py"));
    assert!(!entry.matches("script.pyc"));
    assert!(!entry.matches("notes.txt"));
}

#[test]
fn match_is_suffix_not_full_name() {
    let registry = LanguageRegistry::new();
    let entry = registry.entry("c").unwrap();
    // ".cc" matches as a tail even with no dot-separated stem boundary.
    assert!(entry.matches("main.cc"));
    assert!(entry.matches("weird.tar.c"));
    assert!(!entry.matches("main.cpp"));
}

#[test]
fn every_entry_has_a_name_and_suffixes() {
    let registry = LanguageRegistry::new();
    assert_eq!(registry.len(), 38);
    for (code, entry) in registry.iter() {
        assert!(!code.is_empty());
        assert!(!entry.name.is_empty(), "{code} has no display name");
        assert!(!entry.suffixes.is_empty(), "{code} has no suffixes");
    }
}
