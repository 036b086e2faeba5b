use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn name(n: u32) -> Name {
    Name::new(n)
}

#[test]
fn test_resolve_unbound_is_null() {
    let env = Environment::global();
    assert_eq!(env.resolve_var(name(1)), Value::Null);
}

#[test]
fn test_create_then_resolve() {
    let env = Environment::global();
    assert_eq!(env.create_var(name(1), Value::Int(10)), Ok(()));
    assert_eq!(env.resolve_var(name(1)), Value::Int(10));
}

#[test]
fn test_create_twice_in_same_scope_fails() {
    let env = Environment::global();
    assert_eq!(env.create_var(name(1), Value::Int(1)), Ok(()));
    assert_eq!(
        env.create_var(name(1), Value::Int(2)),
        Err(AlreadyDeclared { name: name(1) })
    );
    assert_eq!(env.resolve_var(name(1)), Value::Int(1));
}

#[test]
fn test_shadowing_in_nested_scope() {
    let global = Environment::global();
    let _ = global.create_var(name(1), Value::Int(1));
    let inner = Environment::enclosed(&global);
    assert_eq!(inner.create_var(name(1), Value::Int(2)), Ok(()));

    assert_eq!(inner.resolve_var(name(1)), Value::Int(2));
    assert_eq!(global.resolve_var(name(1)), Value::Int(1));
}

#[test]
fn test_resolve_walks_outward() {
    let global = Environment::global();
    let _ = global.create_var(name(1), Value::Bool(true));
    let middle = Environment::enclosed(&global);
    let inner = Environment::enclosed(&middle);
    assert_eq!(inner.resolve_var(name(1)), Value::Bool(true));
}

#[test]
fn test_update_overwrites_nearest_binding() {
    let global = Environment::global();
    let _ = global.create_var(name(1), Value::Int(1));
    let inner = Environment::enclosed(&global);
    let _ = inner.create_var(name(1), Value::Int(2));

    inner.update_var(name(1), Value::Int(3));
    assert_eq!(inner.resolve_var(name(1)), Value::Int(3));
    assert_eq!(global.resolve_var(name(1)), Value::Int(1));
}

#[test]
fn test_update_reaches_outer_scope() {
    let global = Environment::global();
    let _ = global.create_var(name(1), Value::Int(1));
    let inner = Environment::enclosed(&global);

    inner.update_var(name(1), Value::Int(5));
    assert!(!inner.has_local(name(1)));
    assert_eq!(global.resolve_var(name(1)), Value::Int(5));
}

#[test]
fn test_update_unbound_lands_in_global() {
    let global = Environment::global();
    let middle = Environment::enclosed(&global);
    let inner = Environment::enclosed(&middle);

    inner.update_var(name(7), Value::Int(9));
    assert!(!inner.has_local(name(7)));
    assert!(!middle.has_local(name(7)));
    assert!(global.has_local(name(7)));
    assert_eq!(global.resolve_var(name(7)), Value::Int(9));
}

#[test]
fn test_clones_share_scope() {
    let env = Environment::global();
    let alias = env.clone();
    let _ = env.create_var(name(1), Value::Int(1));
    alias.update_var(name(1), Value::Int(2));
    assert_eq!(env.resolve_var(name(1)), Value::Int(2));
    assert!(env.same_scope(&alias));
}

#[test]
fn test_outer_and_root() {
    let global = Environment::global();
    let inner = Environment::enclosed(&Environment::enclosed(&global));
    assert!(global.is_global());
    assert!(!inner.is_global());
    assert!(inner.root().same_scope(&global));
    assert!(global.outer().is_none());
    assert!(!inner.same_scope(&global));
}

proptest! {
    #[test]
    fn prop_create_then_resolve(names in proptest::collection::hash_set(1u32..500, 1..20), n in any::<i64>()) {
        let env = Environment::enclosed(&Environment::global());
        for raw in &names {
            prop_assert_eq!(env.create_var(Name::new(*raw), Value::Int(n)), Ok(()));
            prop_assert_eq!(env.resolve_var(Name::new(*raw)), Value::Int(n));
        }
        prop_assert_eq!(env.local_count(), names.len());
    }
}
