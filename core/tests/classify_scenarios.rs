//! End-to-end tagging scenarios against the built-in catalogue.

use snippets::classify::Classifier;
use snippets::{classify, NewSnippet};
use std::collections::BTreeSet;

fn set(labels: &[&'static str]) -> BTreeSet<&'static str> {
    labels.iter().copied().collect()
}

#[test]
fn test_counting_loop_with_logging() {
    let tags = classify("for (let i = 0; i < arr.length; i++) { console.log(i); }");
    assert!(tags.is_superset(&set(&["loop", "debugging"])));
}

#[test]
fn test_async_fetch() {
    let tags =
        classify("async function get() { const res = await fetch('/x'); return res.json(); }");
    assert!(tags.is_superset(&set(&["async", "api"])));
}

#[test]
fn test_try_catch_with_console_error() {
    let tags = classify("try { risky(); } catch (e) { console.error(e); }");
    assert!(tags.is_superset(&set(&["error-handling", "debugging"])));
}

#[test]
fn test_map_is_loop_and_array_operation() {
    let tags = classify("const mapped = items.map(x => x * 2);");
    assert!(tags.is_superset(&set(&["loop", "array-operations"])));
}

#[test]
fn test_identifier_containing_keyword() {
    assert!(classify("const mapping = {};").is_empty());
}

#[test]
fn test_react_hooks() {
    assert_eq!(
        classify("useState(0); useReducer(fn, init);"),
        set(&["state-management"])
    );
}

#[test]
fn test_every_label_reachable() {
    let text = r#"
        for (const el of els) { el.innerHTML = ''; }
        axios.get('/x').then(r => r.data.filter(Boolean));
        try { setState(1) } catch (err) { debugger; }
    "#;
    let all: BTreeSet<&str> = Classifier::builtin()
        .rules()
        .iter()
        .map(|r| r.label())
        .collect();
    assert_eq!(classify(text), all);
}

#[test]
fn test_reclassification_union_is_idempotent() {
    let text = "document.getElementById('a').appendChild(node); await p;";
    let once = classify(text);
    let twice: BTreeSet<&str> = once.union(&classify(text)).copied().collect();
    assert_eq!(once, twice);
}

#[test]
fn test_pathological_input_terminates() {
    let text = "(".repeat(100_000) + &"a".repeat(100_000) + " do    while";
    assert!(classify(&text).contains("loop"));
}

#[test]
fn test_create_payload_merges_user_and_detected_tags() {
    let snippet = NewSnippet::from_json(
        r#"{
            "title": "Debounced search",
            "code": "const [q, setQ] = useState(''); useEffect(() => { fetch(url) }, [q]);",
            "language": "typescript",
            "description": "Search box",
            "tags": ["react", "api"]
        }"#,
    )
    .unwrap();

    let tags = snippet.resolve_tags(Classifier::builtin());
    let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["api", "react", "state-management"]);
}
