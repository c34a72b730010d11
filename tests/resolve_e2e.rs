use std::io::Write;
use std::sync::Arc;

use authorgraph::{
    AuthorName, CachedLookup, Diagnostic, FnLookup, InMemoryDirectory, LookupFailure, MemorySink,
    NameResolver, Person, ResolveError, ResolvedIdentity, ResolverConfig, TieBreakPolicy,
};

fn datatracker() -> InMemoryDirectory {
    InMemoryDirectory::from_people(vec![
        Person::new(100, "Dr. Jane Smith").with_affiliation("University of Glasgow"),
        Person::new(101, "Dr. Amy Lee"),
        Person::new(102, "Alice Lee"),
        Person::new(103, "Bob Lee"),
        Person::new(104, "Jon Postel").with_affiliation("ISI"),
    ])
    .unwrap()
}

#[test]
fn every_name_resolves_to_exactly_one_identity() {
    let sink = MemorySink::new();
    let resolver =
        NameResolver::with_config(datatracker(), &sink, ResolverConfig::default()).unwrap();

    for raw in ["J. Smith", "A. Lee", "B. Lee", "J. Postel", "Z. Xu", "Q"] {
        let identity = resolver.resolve_str(raw, "RFC0001").unwrap();
        assert!(!identity.display_name().is_empty());
    }

    let kinds: Vec<&str> = sink
        .snapshot()
        .iter()
        .map(|r| match r.diagnostic {
            Diagnostic::MissingAuthor { .. } => "missing",
            Diagnostic::AmbiguousAuthor { .. } => "ambiguous",
            Diagnostic::InvalidAuthor { .. } => "invalid",
        })
        .collect();
    assert_eq!(kinds, vec!["ambiguous", "missing", "missing"]);
}

#[test]
fn honorific_directory_name_matches_plain_author() {
    let resolver = NameResolver::with_config(datatracker(), MemorySink::new(), ResolverConfig::default())
        .unwrap();
    let identity = resolver.resolve_str("J Smith", "RFC0002").unwrap();
    let person = identity.person().unwrap();
    assert_eq!(person.id.get(), 100);
    assert_eq!(identity.affiliation(), Some("University of Glasgow"));
}

#[test]
fn no_match_is_synthetic_and_stable() {
    let sink = MemorySink::new();
    let resolver =
        NameResolver::with_config(datatracker(), &sink, ResolverConfig::default()).unwrap();
    let name = AuthorName::parse("Z Xu").unwrap();

    let first = resolver.resolve(&name, "RFC0003").unwrap();
    let second = resolver.resolve(&name, "RFC0004").unwrap();

    let ResolvedIdentity::Synthetic(synthetic) = &first else {
        panic!("expected synthetic identity");
    };
    assert_eq!(synthetic.display_name, "Z Xu");
    assert_eq!(first, second);

    let documents: Vec<String> = sink
        .snapshot()
        .iter()
        .map(|r| r.diagnostic.document().to_string())
        .collect();
    assert_eq!(documents, vec!["RFC0003", "RFC0004"]);
}

#[test]
fn ambiguous_match_stays_within_matching_candidates() {
    let resolver = NameResolver::with_config(datatracker(), MemorySink::new(), ResolverConfig::default())
        .unwrap();
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..200 {
        let identity = resolver.resolve_str("A Lee", "RFC2119").unwrap();
        seen.insert(identity.person().unwrap().id.get());
    }
    assert!(seen.iter().all(|id| *id == 101 || *id == 102));
    assert!(!seen.contains(&103));
}

#[test]
fn lookup_failure_aborts_without_identity() {
    let lookup = FnLookup::new(|_: &str| Err(LookupFailure::Backend("HTTP 503".to_string())));
    let sink = MemorySink::new();
    let resolver = NameResolver::with_config(lookup, &sink, ResolverConfig::default()).unwrap();

    let err = resolver.resolve_str("A Lee", "RFC1").unwrap_err();
    assert!(err.is_lookup_failure());
    assert!(matches!(err, ResolveError::Lookup(LookupFailure::Backend(ref m)) if m == "HTTP 503"));
    assert!(sink.is_empty());
}

#[test]
fn cached_lookup_behind_resolver() {
    let cached = Arc::new(CachedLookup::new(datatracker()));
    let resolver =
        NameResolver::with_config(Arc::clone(&cached), MemorySink::new(), ResolverConfig::default())
            .unwrap();

    resolver.resolve_str("J. Smith", "RFC1").unwrap();
    resolver.resolve_str("J. Smith", "RFC2").unwrap();
    resolver.resolve_str("K. Smith", "RFC3").unwrap();

    assert_eq!(cached.misses(), 1);
    assert_eq!(cached.hits(), 2);
}

#[test]
fn config_and_directory_load_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let people_path = dir.path().join("people.json");
    let mut people = std::fs::File::create(&people_path).unwrap();
    write!(
        people,
        r#"[{{"id": 1, "name": "Alice Lee"}}, {{"id": 2, "name": "Dr. Amy Lee"}}]"#
    )
    .unwrap();

    let config_path = dir.path().join("resolver.json");
    std::fs::write(
        &config_path,
        r#"{"tie_break": {"type": "lowest_id"}, "synthetic_marker": "!"}"#,
    )
    .unwrap();

    let config = ResolverConfig::from_path(&config_path).unwrap();
    assert_eq!(config.tie_break, TieBreakPolicy::LowestId);

    let directory = InMemoryDirectory::from_path(&people_path).unwrap();
    let resolver = NameResolver::with_config(directory, MemorySink::new(), config).unwrap();

    let picked = resolver.resolve_str("A Lee", "RFC1").unwrap();
    assert_eq!(picked.person().unwrap().id.get(), 1);

    let missing = resolver.resolve_str("Z. Xu", "RFC1").unwrap();
    assert_eq!(missing.key().to_string(), "ZXu!");
}

#[test]
fn resolver_is_shareable_across_threads() {
    let sink = Arc::new(MemorySink::new());
    let resolver = Arc::new(
        NameResolver::with_config(datatracker(), Arc::clone(&sink), ResolverConfig::default())
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || {
                for _ in 0..10 {
                    resolver.resolve_str("A Lee", "RFC1").unwrap();
                    resolver.resolve_str("Z Xu", "RFC1").unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(sink.len(), 80);
}
