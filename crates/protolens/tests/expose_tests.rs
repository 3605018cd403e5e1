use protolens::{
    arrays_by_level, enumerate, flatten, nested_mirror, object_proto, Descriptor, Options,
    PropKey, PropObject, Symbol, Value, PARENT_KEY,
};
use std::sync::Arc;

// Baseline: own keys of the object root, inherited by every plain object
fn baseline_len() -> usize {
    object_proto().own_len()
}

// Class-style fixture: instance -> Child.prototype -> Parent.prototype -> object root
fn child_instance() -> Value {
    let mut parent_proto = PropObject::plain();
    parent_proto.set("name", Value::str("Parent"));

    let mut child_proto = PropObject::with_parent(parent_proto.into_ref());
    child_proto.set("constructor", Value::Builtin("Child"));

    Value::object(PropObject::with_parent(child_proto.into_ref()))
}

fn obj_with_symbol() -> (Value, Symbol) {
    let sym = Symbol::new("a");
    let mut obj = PropObject::plain();
    obj.define(sym.clone(), Descriptor::data(Value::str("a")));
    (Value::object(obj), sym)
}

fn obj_with_nonenum() -> Value {
    let mut obj = PropObject::plain();
    obj.define(
        "prop",
        Descriptor::data(Value::str("super-hidden"))
            .writable(false)
            .enumerable(false),
    );
    Value::object(obj)
}

// ============================================================================
// flatten
// ============================================================================

#[test]
fn flatten_of_plain_object_matches_baseline() {
    let keys = flatten(&Value::object(PropObject::plain()), &Options::default());
    assert_eq!(keys.len(), baseline_len());
}

#[test]
fn flatten_length_is_sum_of_own_counts_over_chain() {
    let target = child_instance();
    let obj = target.as_object().unwrap();
    let expected: usize = obj.ancestors().map(|level| level.own_len()).sum();

    assert_eq!(flatten(&target, &Options::default()).len(), expected);
}

#[test]
fn flatten_duplicates_shadowing_keys() {
    let mut obj = PropObject::plain();
    obj.set("hasOwnProperty", Value::str("I'm a duplicate"));

    let keys = flatten(&Value::object(obj), &Options::default());
    assert_eq!(keys.len(), baseline_len() + 1);
}

#[test]
fn flatten_exposes_symbols() {
    let (target, sym) = obj_with_symbol();
    let keys = flatten(&target, &Options::default());

    assert_eq!(keys.len(), baseline_len() + 1);
    assert!(keys.contains(&PropKey::Sym(sym)));
}

#[test]
fn flatten_exposes_nonenumerables() {
    let keys = flatten(&obj_with_nonenum(), &Options::default());
    assert_eq!(keys.len(), baseline_len() + 1);
    assert!(keys.contains(&PropKey::str("prop")));
}

// ============================================================================
// arrays_by_level
// ============================================================================

#[test]
fn arrays_by_level_makes_one_array_per_level() {
    let plain = Value::object(PropObject::plain());
    assert_eq!(arrays_by_level(&plain, &Options::default()).len(), 2);

    let mut with_own = PropObject::plain();
    with_own.set("a", Value::str("a"));
    let with_own = Value::object(with_own);
    assert_eq!(arrays_by_level(&with_own, &Options::default()).len(), 2);

    // A callable sits one level deeper: fn -> function proto -> object root
    let callable = Value::object(PropObject::callable());
    assert_eq!(arrays_by_level(&callable, &Options::default()).len(), 3);

    assert_eq!(arrays_by_level(&child_instance(), &Options::default()).len(), 4);
}

#[test]
fn arrays_by_level_exposes_own_symbols() {
    let (target, _) = obj_with_symbol();
    let levels = arrays_by_level(&target, &Options::default());

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].len(), 1);
    assert!(levels[0][0].is_symbol());
    assert_eq!(levels[1].len(), baseline_len());
}

#[test]
fn arrays_by_level_exposes_ancestor_symbols() {
    let (parent, _) = obj_with_symbol();
    let child = PropObject::with_parent(parent.as_object().unwrap().clone());

    let levels = arrays_by_level(&Value::object(child), &Options::default());
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0].len(), 0);
    assert_eq!(levels[1].len(), 1);
}

#[test]
fn arrays_by_level_exposes_nonenumerables() {
    let levels = arrays_by_level(&obj_with_nonenum(), &Options::default());
    assert_eq!(levels[0].len(), 1);
}

#[test]
fn arrays_by_level_filters_on_pattern() {
    let options = Options::default().filter("pro").unwrap();
    let levels = arrays_by_level(&obj_with_nonenum(), &options);
    assert!(levels[0].contains(&PropKey::str("prop")));

    let options = Options::default().filter("__").unwrap();
    let levels = arrays_by_level(&obj_with_nonenum(), &options);
    assert_eq!(levels[0].len(), 0);
}

#[test]
fn no_matching_pattern_yields_empty_levels() {
    let options = Options::default().filter("zzz-never").unwrap();
    let levels = arrays_by_level(&child_instance(), &options);
    assert_eq!(levels.len(), 4);
    assert!(levels.iter().all(|level| level.is_empty()));
    assert!(flatten(&child_instance(), &options).is_empty());
}

// ============================================================================
// nested_mirror
// ============================================================================

#[test]
fn nested_mirror_of_plain_object_is_one_level_deep() {
    let mirror = nested_mirror(&Value::object(PropObject::plain()), &Options::default()).unwrap();
    let root = mirror.as_object().unwrap();

    // No own keys besides the parent link
    assert_eq!(root.own_len(), 1);
    assert!(root.get_own(&PropKey::str(PARENT_KEY)).is_some());

    let parent = root.get(&PropKey::str(PARENT_KEY)).unwrap().unwrap();
    let parent = parent.as_object().unwrap();
    assert_eq!(parent.own_len(), baseline_len());
    assert!(parent.get_own(&PropKey::str(PARENT_KEY)).is_none());
}

#[test]
fn nested_mirror_maps_keys_to_true() {
    let mirror = nested_mirror(&obj_with_nonenum(), &Options::default()).unwrap();
    let root = mirror.as_object().unwrap();
    assert_eq!(
        root.get(&PropKey::str("prop")).unwrap(),
        Some(Value::Bool(true))
    );
}

#[test]
fn nested_mirror_filters_on_pattern() {
    let options = Options::default().filter("pro").unwrap();
    let mirror = nested_mirror(&obj_with_nonenum(), &options).unwrap();
    assert!(mirror
        .as_object()
        .unwrap()
        .get_own(&PropKey::str("prop"))
        .is_some());

    let options = Options::default().filter("__").unwrap();
    let mirror = nested_mirror(&obj_with_nonenum(), &options).unwrap();
    assert!(mirror
        .as_object()
        .unwrap()
        .get_own(&PropKey::str("prop"))
        .is_none());
}

#[test]
fn nested_mirror_keeps_values_through_getters() {
    let mut obj = PropObject::plain();
    obj.set("answer", Value::Int(42));
    obj.define(
        "computed",
        Descriptor::getter(Arc::new(|| Ok(Value::str("live")))),
    );
    let mirror = nested_mirror(
        &Value::object(obj),
        &Options::default().keep_values(true),
    )
    .unwrap();
    let root = mirror.as_object().unwrap();

    assert_eq!(
        root.get(&PropKey::str("answer")).unwrap(),
        Some(Value::Int(42))
    );
    assert_eq!(
        root.get(&PropKey::str("computed")).unwrap(),
        Some(Value::str("live"))
    );
}

#[test]
fn nested_mirror_propagates_getter_failure_only_when_keeping_values() {
    let mut obj = PropObject::orphan();
    obj.define(
        "volatile",
        Descriptor::getter(Arc::new(|| Err("getter refused".to_string()))),
    );
    let target = Value::object(obj);

    assert!(nested_mirror(&target, &Options::default()).is_ok());

    let err = nested_mirror(&target, &Options::default().keep_values(true)).unwrap_err();
    assert!(err.to_string().contains("property access failed"));
    assert!(err.to_string().contains("volatile"));
}

#[test]
fn nested_mirror_symbol_collision_is_accepted() {
    let sym = Symbol::new("clash");
    let mut obj = PropObject::orphan();
    obj.set("Symbol(clash)", Value::str("string-keyed"));
    obj.define(sym, Descriptor::data(Value::str("symbol-keyed")));
    let target = Value::object(obj);

    // Stringified symbol overwrites the identically-named string key
    let mirror = nested_mirror(&target, &Options::default().keep_values(true)).unwrap();
    let root = mirror.as_object().unwrap();
    assert_eq!(root.own_len(), 1);
    assert_eq!(
        root.get(&PropKey::str("Symbol(clash)")).unwrap(),
        Some(Value::str("symbol-keyed"))
    );

    // Keeping symbols avoids the collision
    let mirror = nested_mirror(
        &target,
        &Options::default().keep_values(true).keep_symbols(true),
    )
    .unwrap();
    assert_eq!(mirror.as_object().unwrap().own_len(), 2);
}

// ============================================================================
// enumerate
// ============================================================================

#[test]
fn enumerate_makes_own_properties_enumerable_and_stringifies_symbols() {
    let mirrored = enumerate(&obj_with_nonenum(), &Options::default()).unwrap();
    let mirrored = mirrored.as_object().unwrap();
    assert!(mirrored.own_entries().all(|(_, desc)| desc.enumerable));
    assert!(mirrored.get_own(&PropKey::str("prop")).is_some());

    let (target, _) = obj_with_symbol();
    let mirrored = enumerate(&target, &Options::default()).unwrap();
    let mirrored = mirrored.as_object().unwrap();
    assert_eq!(mirrored.own_len(), 1);
    assert!(mirrored.get_own(&PropKey::str("Symbol(a)")).is_some());
}

#[test]
fn enumerate_preserves_a_mirrored_chain() {
    for target in [
        Value::object(PropObject::plain()),
        obj_with_nonenum(),
        child_instance(),
        Value::object(PropObject::callable()),
    ] {
        let mirrored = enumerate(&target, &Options::default()).unwrap();
        assert_eq!(
            mirrored.as_object().unwrap().chain_len(),
            target.as_object().unwrap().chain_len()
        );
    }
}

#[test]
fn enumerate_keys_are_reachable_on_the_original() {
    let target = obj_with_nonenum();
    let original = target.as_object().unwrap();

    let mirrored = enumerate(&target, &Options::default()).unwrap();
    let mirrored = mirrored.as_object().unwrap();

    for level in mirrored.ancestors() {
        for (key, _) in level.own_entries() {
            assert!(original.has(&key), "key `{}` not reachable", key);
        }
    }
}

#[test]
fn enumerate_filters_on_pattern() {
    let options = Options::default().filter("pro").unwrap();
    let mirrored = enumerate(&obj_with_nonenum(), &options).unwrap();
    assert!(mirrored
        .as_object()
        .unwrap()
        .get_own(&PropKey::str("prop"))
        .is_some());

    let options = Options::default().filter("__").unwrap();
    let mirrored = enumerate(&obj_with_nonenum(), &options).unwrap();
    assert!(mirrored
        .as_object()
        .unwrap()
        .get_own(&PropKey::str("prop"))
        .is_none());
}

#[test]
fn enumerate_copies_restricted_accessors_without_reading_them() {
    // The function prototype's restricted properties fail on read; the
    // descriptor-preserving copy must survive them untouched.
    let target = Value::object(PropObject::callable());
    let mirrored = enumerate(&target, &Options::default()).unwrap();

    let proto_level: Vec<&protolens::PropObject> =
        mirrored.as_object().unwrap().ancestors().collect();
    let desc = proto_level[1].get_own(&PropKey::str("arguments")).unwrap();
    assert!(desc.is_accessor());
    assert!(desc.enumerable);
}

// ============================================================================
// input immutability
// ============================================================================

#[test]
fn transforms_do_not_mutate_the_input() {
    let target = obj_with_nonenum();
    let before: Vec<PropKey> = target.as_object().unwrap().own_keys();
    let before_chain = target.as_object().unwrap().chain_len();

    let options = Options::default().keep_values(true);
    let _ = flatten(&target, &options);
    let _ = arrays_by_level(&target, &options);
    let _ = nested_mirror(&target, &options).unwrap();
    let _ = enumerate(&target, &options).unwrap();

    assert_eq!(target.as_object().unwrap().own_keys(), before);
    assert_eq!(target.as_object().unwrap().chain_len(), before_chain);
}
