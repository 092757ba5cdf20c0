use pretty_assertions::assert_eq;
use refract_model::{Guarded, Instance, Node};
use refract_registry::{AccessCheck, Registry, RegistryBuilder, RegistryError, Representation};
use refract_render::{DEFAULT_MIMETYPE, ResolveError, ResponseBuilder, STATUS_OK};
use serde_json::json;

fn note_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .representation(
            "note",
            None,
            Representation::new("default", |n: &Instance| {
                Node::object([("title", n.field("/title"))])
            }),
        )
        .unwrap();
    builder
        .representation(
            "feed",
            None,
            Representation::new("default", |f: &Instance| {
                Node::object([("url", f.field("/url"))])
            })
            .with_mimetype("application/atom+xml"),
        )
        .unwrap();
    builder.seal()
}

fn note(title: &str) -> Instance {
    Instance::new("note", json!({ "title": title }))
}

// ── Body shapes ──────────────────────────────────────────────────

#[test]
fn zero_objects_bare_gives_empty_object() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry).build().unwrap();
    assert_eq!(response.body, json!({}));
}

#[test]
fn zero_objects_as_list_gives_empty_array() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry).as_list().build().unwrap();
    assert_eq!(response.body, json!([]));
}

#[test]
fn one_object_bare_gives_bare_representation() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .object(note("solo"))
        .build()
        .unwrap();
    assert_eq!(response.body, json!({ "title": "solo" }));
}

#[test]
fn one_object_as_list_gives_single_element_list() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .object(note("solo"))
        .as_list()
        .build()
        .unwrap();
    assert_eq!(response.body, json!([{ "title": "solo" }]));
}

#[test]
fn two_objects_give_list_regardless_of_as_list() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .objects([note("first"), note("second")])
        .build()
        .unwrap();
    assert_eq!(
        response.body,
        json!([{ "title": "first" }, { "title": "second" }])
    );
}

#[test]
fn objects_keep_input_order() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .object(note("a"))
        .objects([note("b"), note("c")])
        .object(note("d"))
        .build()
        .unwrap();

    let titles: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["a", "b", "c", "d"]);
}

// ── Mimetype resolution ──────────────────────────────────────────

#[test]
fn mimetype_defaults_to_application_json() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .object(note("x"))
        .build()
        .unwrap();
    assert_eq!(response.mimetype, DEFAULT_MIMETYPE);
    assert_eq!(response.mimetype, "application/json");
}

#[test]
fn first_declared_mimetype_in_input_order_wins() {
    let registry = note_registry();

    // The note declares nothing, so the scan moves on to the feed.
    let response = ResponseBuilder::new(&registry)
        .objects([note("x"), Instance::new("feed", json!({ "url": "/f" }))])
        .build()
        .unwrap();
    assert_eq!(response.mimetype, "application/atom+xml");

    // Feed first gives the same answer straight away.
    let response = ResponseBuilder::new(&registry)
        .objects([Instance::new("feed", json!({ "url": "/f" })), note("x")])
        .build()
        .unwrap();
    assert_eq!(response.mimetype, "application/atom+xml");
}

#[test]
fn caller_mimetype_override_beats_handler_declarations() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .object(Instance::new("feed", json!({ "url": "/f" })))
        .mimetype("text/plain")
        .build()
        .unwrap();
    assert_eq!(response.mimetype, "text/plain");
}

// ── Status ───────────────────────────────────────────────────────

#[test]
fn status_defaults_to_ok() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .object(note("x"))
        .build()
        .unwrap();
    assert_eq!(response.status, STATUS_OK);
    assert_eq!(response.status, 200);
}

#[test]
fn status_passes_through_unchanged() {
    let registry = note_registry();
    let response = ResponseBuilder::new(&registry)
        .object(note("made"))
        .status(201)
        .build()
        .unwrap();
    assert_eq!(response.status, 201);
}

// ── Versioning ───────────────────────────────────────────────────

#[test]
fn version_flows_into_resolution() {
    let mut builder = RegistryBuilder::new();
    builder
        .representation(
            "note",
            Some(2),
            Representation::new("default", |n: &Instance| {
                Node::object([("headline", n.field("/title"))])
            }),
        )
        .unwrap();
    let registry = builder.seal();

    let response = ResponseBuilder::new(&registry)
        .object(note("v2 only"))
        .version(2)
        .build()
        .unwrap();
    assert_eq!(response.body, json!({ "headline": "v2 only" }));

    let err = ResponseBuilder::new(&registry)
        .object(note("v2 only"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Registry(RegistryError::NoRepresentation { .. })
    ));
}

// ── Root-level removal ───────────────────────────────────────────

fn clearance_registry(grant: bool) -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .representation(
            "secret",
            None,
            Representation::new("default", |s: &Instance| {
                Guarded::suppress("secret", None, "clearance", s.field("/code"))
            }),
        )
        .unwrap();
    builder
        .access_check(
            "secret",
            None,
            AccessCheck::new("default", move |_: &Instance, _: &str| Ok(grant)),
        )
        .unwrap();
    builder
        .representation(
            "note",
            None,
            Representation::new("default", |n: &Instance| {
                Node::object([("title", n.field("/title"))])
            }),
        )
        .unwrap();
    builder.seal()
}

#[test]
fn fully_removed_bare_object_becomes_null() {
    let registry = clearance_registry(false);
    let response = ResponseBuilder::new(&registry)
        .object(Instance::new("secret", json!({ "code": "x" })))
        .build()
        .unwrap();
    assert_eq!(response.body, json!(null));
}

#[test]
fn fully_removed_list_entry_is_dropped() {
    let registry = clearance_registry(false);
    let response = ResponseBuilder::new(&registry)
        .objects([
            Instance::new("note", json!({ "title": "kept" })),
            Instance::new("secret", json!({ "code": "x" })),
        ])
        .build()
        .unwrap();
    assert_eq!(response.body, json!([{ "title": "kept" }]));
}

#[test]
fn granted_root_guard_keeps_the_body() {
    let registry = clearance_registry(true);
    let response = ResponseBuilder::new(&registry)
        .object(Instance::new("secret", json!({ "code": "x" })))
        .build()
        .unwrap();
    assert_eq!(response.body, json!("x"));
}

// ── Failure propagation ──────────────────────────────────────────

#[test]
fn missing_representation_fails_the_whole_response() {
    let registry = note_registry();
    let err = ResponseBuilder::new(&registry)
        .objects([note("fine"), Instance::new("ghost", json!({}))])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Registry(RegistryError::NoRepresentation { .. })
    ));
}
