//! Tests for default value resolution.

use super::*;
use crate::expr::OverrideExpr;
use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};

#[fixture]
fn no_overrides() -> OverrideTable {
    OverrideTable::new()
}

fn scalar(name: &str) -> TypeDescriptor {
    TypeDescriptor::scalar(name)
}

fn unknown_scalar() -> TypeDescriptor {
    scalar("Uninitializable")
}

#[rstest]
#[case("Int", Expr::integer(0))]
#[case("UInt", Expr::integer(0))]
#[case("Double", Expr::integer(0))]
#[case("Float", Expr::integer(0))]
#[case("CGFloat", Expr::integer(0))]
#[case("TimeInterval", Expr::integer(0))]
#[case("NSInteger", Expr::integer(0))]
#[case("NSUInteger", Expr::integer(0))]
#[case("String", Expr::string(""))]
#[case("NSString", Expr::string(""))]
#[case("Bool", Expr::bool(false))]
#[case("Date", Expr::construct("Date"))]
#[case("Data", Expr::construct("Data"))]
#[case("UUID", Expr::construct("UUID"))]
fn builtin_scalars_resolve(
    no_overrides: OverrideTable,
    #[case] name: &str,
    #[case] expected: Expr,
) -> Result<()> {
    let first = resolve(&scalar(name), &no_overrides);
    let second = resolve(&scalar(name), &no_overrides);
    ensure!(first == Resolution::Value(expected), "{name} resolved to {first:?}");
    ensure!(first == second, "resolution of {name} should be deterministic");
    Ok(())
}

#[rstest]
#[case("Void")]
#[case("()")]
fn void_needs_no_value(no_overrides: OverrideTable, #[case] name: &str) {
    assert_eq!(resolve(&scalar(name), &no_overrides), Resolution::NoValue);
}

#[rstest]
fn url_is_force_unwrapped_initializer(no_overrides: OverrideTable) -> Result<()> {
    let value = resolve(&scalar("URL"), &no_overrides)
        .into_value()
        .ok_or_else(|| anyhow!("URL should resolve"))?;
    let Expr::ForceUnwrap { operand } = value else {
        anyhow::bail!("expected force unwrap, got {value:?}");
    };
    let Expr::Construct {
        type_name,
        arguments,
    } = *operand
    else {
        anyhow::bail!("expected initializer call");
    };
    ensure!(type_name == "URL");
    let [argument] = arguments.as_slice() else {
        anyhow::bail!("expected a single argument, got {arguments:?}");
    };
    ensure!(argument.label.as_deref() == Some("string"));
    ensure!(argument.value == Expr::string("https://apple.com"));
    Ok(())
}

#[rstest]
fn placeholder_url_is_configurable(no_overrides: OverrideTable) -> Result<()> {
    let resolver = Resolver::new(&no_overrides).with_placeholder_url("https://example.invalid");
    let value = resolver
        .resolve(&scalar("URL"))
        .into_value()
        .ok_or_else(|| anyhow!("URL should resolve"))?;
    ensure!(
        format!("{value:?}").contains("https://example.invalid"),
        "placeholder should use the configured URL: {value:?}"
    );
    Ok(())
}

#[rstest]
#[case("int")]
#[case("MyStruct")]
#[case("Uninitializable")]
fn other_scalars_are_unresolved(no_overrides: OverrideTable, #[case] name: &str) {
    assert!(resolve(&scalar(name), &no_overrides).is_unresolved());
}

#[rstest]
#[case(scalar("Int"))]
#[case(unknown_scalar())]
#[case(TypeDescriptor::unknown("(Int) -> String"))]
fn optionals_are_always_absent(no_overrides: OverrideTable, #[case] wrapped: TypeDescriptor) {
    let optional = TypeDescriptor::optional(wrapped);
    assert_eq!(
        resolve(&optional, &no_overrides),
        Resolution::Value(Expr::nil())
    );
}

#[rstest]
fn optionals_ignore_overrides() {
    let overrides: OverrideTable = [("String?", "\"x\""), ("String", "\"y\"")]
        .into_iter()
        .collect();
    let optional = TypeDescriptor::optional(scalar("String"));
    assert_eq!(resolve(&optional, &overrides), Resolution::Value(Expr::nil()));
}

#[rstest]
#[case(TypeDescriptor::sequence(unknown_scalar()), Expr::EmptySequence)]
#[case(TypeDescriptor::sequence(scalar("Int")), Expr::EmptySequence)]
#[case(
    TypeDescriptor::mapping(scalar("String"), unknown_scalar()),
    Expr::EmptyMapping
)]
#[case(
    TypeDescriptor::mapping(unknown_scalar(), scalar("Int")),
    Expr::EmptyMapping
)]
fn containers_are_empty(
    no_overrides: OverrideTable,
    #[case] ty: TypeDescriptor,
    #[case] expected: Expr,
) {
    assert_eq!(resolve(&ty, &no_overrides), Resolution::Value(expected));
}

#[rstest]
fn tuple_preserves_labels_and_order(no_overrides: OverrideTable) -> Result<()> {
    let ty = TypeDescriptor::tuple([
        (Some("id"), scalar("Int")),
        (None, scalar("String")),
        (Some("flag"), scalar("Bool")),
    ]);
    let value = resolve(&ty, &no_overrides)
        .into_value()
        .ok_or_else(|| anyhow!("tuple should resolve"))?;
    let Expr::Tuple { elements } = value else {
        anyhow::bail!("expected tuple, got {value:?}");
    };
    let labels: Vec<Option<&str>> = elements.iter().map(|e| e.label.as_deref()).collect();
    ensure!(labels == [Some("id"), None, Some("flag")], "labels: {labels:?}");
    let values: Vec<&Expr> = elements.iter().map(|e| &e.value).collect();
    ensure!(
        values == [&Expr::integer(0), &Expr::string(""), &Expr::bool(false)],
        "values: {values:?}"
    );
    Ok(())
}

#[rstest]
#[case(TypeDescriptor::tuple([(None::<&str>, scalar("Int")), (None, unknown_scalar())]))]
#[case(TypeDescriptor::tuple([(Some("done"), scalar("Void"))]))]
fn tuple_with_unresolvable_element_is_unresolved(
    no_overrides: OverrideTable,
    #[case] ty: TypeDescriptor,
) {
    assert!(resolve(&ty, &no_overrides).is_unresolved());
}

#[rstest]
fn tuple_elements_consult_overrides() -> Result<()> {
    let overrides: OverrideTable = [("Uninitializable", "Uninitializable.stub")]
        .into_iter()
        .collect();
    let ty = TypeDescriptor::tuple([(None::<&str>, unknown_scalar())]);
    let value = resolve(&ty, &overrides)
        .into_value()
        .ok_or_else(|| anyhow!("override should make tuple resolvable"))?;
    ensure!(
        value
            == Expr::Tuple {
                elements: vec![Labeled {
                    label: None,
                    value: Expr::override_source(OverrideExpr::new("Uninitializable.stub")),
                }],
            }
    );
    Ok(())
}

#[rstest]
fn no_arg_void_closure_is_empty(no_overrides: OverrideTable) {
    assert_eq!(
        resolve(&TypeDescriptor::NoArgVoidFunction, &no_overrides),
        Resolution::Value(Expr::EmptyClosure)
    );
}

#[rstest]
#[case(TypeDescriptor::unknown("(Int) -> Void"))]
#[case(TypeDescriptor::unknown("() -> Int"))]
#[case(TypeDescriptor::unknown("any Store"))]
fn unknown_shapes_are_unresolved(no_overrides: OverrideTable, #[case] ty: TypeDescriptor) {
    assert!(resolve(&ty, &no_overrides).is_unresolved());
}

#[rstest]
fn opaque_resolves_through_constraint() {
    let overrides: OverrideTable = [("Store", "InMemoryStore()")].into_iter().collect();
    assert_eq!(
        resolve(&TypeDescriptor::opaque("Store"), &overrides),
        Resolution::Value(Expr::override_source(OverrideExpr::new("InMemoryStore()")))
    );
    assert_eq!(
        resolve(&TypeDescriptor::opaque("Bool"), &OverrideTable::new()),
        Resolution::Value(Expr::bool(false))
    );
    assert!(resolve(&TypeDescriptor::opaque("Sink"), &overrides).is_unresolved());
}

#[rstest]
#[case("String")]
#[case("Int")]
#[case("URL")]
#[case("MyStruct")]
fn overrides_win_over_builtins(#[case] name: &str) {
    let overrides: OverrideTable = [(name, "custom")].into_iter().collect();
    assert_eq!(
        resolve(&scalar(name), &overrides),
        Resolution::Value(Expr::override_source(OverrideExpr::new("custom")))
    );
}

#[rstest]
fn unrelated_overrides_do_not_change_builtins() {
    let overrides: OverrideTable = [("MyStruct", "MyStruct(id: 1)")].into_iter().collect();
    assert_eq!(
        resolve(&scalar("Int"), &overrides),
        Resolution::Value(Expr::integer(0))
    );
}
