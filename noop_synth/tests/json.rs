//! Exchanging declarations and results as JSON.

use anyhow::{Context, Result, ensure};
use noop_synth::model::{Anchor, Declaration, Requirement, TypeDescriptor, Visibility};
use noop_synth::overrides::{OverrideArgument, OverrideKey};
use noop_synth::{SynthError, synthesize};
use rstest::rstest;
use serde_json::{Value, json};

const DECLARATION: &str = r#"{
    "declaration": "interface",
    "name": "SessionStore",
    "visibility": ["public"],
    "anchor": 1,
    "requirements": [
        {
            "requirement": "property",
            "name": "current",
            "annotation": {
                "type": { "kind": "optional", "wrapped": { "kind": "scalar", "name": "Session" } },
                "anchor": 3
            },
            "anchor": 2
        },
        {
            "requirement": "method",
            "name": "load",
            "parameters": [
                { "firstName": "id", "type": { "kind": "scalar", "name": "UUID" } }
            ],
            "returnType": { "type": { "kind": "scalar", "name": "Session" }, "anchor": 5 },
            "effects": { "suspending": true, "failable": true },
            "anchor": 4
        },
        {
            "requirement": "method",
            "name": "token",
            "returnType": { "type": { "kind": "scalar", "name": "Token" }, "anchor": 7 },
            "anchor": 6
        }
    ]
}"#;

#[rstest]
fn declaration_decodes_from_host_json() -> Result<()> {
    let declaration = Declaration::from_json(DECLARATION)?;
    let Declaration::Interface(interface) = &declaration else {
        anyhow::bail!("expected an interface, got {declaration:?}");
    };
    ensure!(interface.effective_visibility() == Visibility::Public);
    ensure!(declaration.anchor() == Anchor(1));
    let Some(Requirement::Property(property)) = interface.requirements.first() else {
        anyhow::bail!("first requirement should be a property");
    };
    ensure!(
        property.annotation.ty == TypeDescriptor::optional(TypeDescriptor::scalar("Session"))
    );
    let Some(Requirement::Method(load)) = interface.requirements.get(1) else {
        anyhow::bail!("second requirement should be a method");
    };
    ensure!(load.effects.suspending && load.effects.failable);
    ensure!(load.generics.is_none());
    Ok(())
}

#[rstest]
fn non_interface_decodes_from_host_json() -> Result<()> {
    let declaration =
        Declaration::from_json(r#"{ "declaration": "other", "kind": "struct", "name": "Point" }"#)?;
    ensure!(declaration.anchor() == Anchor::default());
    ensure!(matches!(declaration, Declaration::Other { ref kind, .. } if kind == "struct"));
    Ok(())
}

#[rstest]
fn override_argument_decodes_from_host_json() -> Result<()> {
    let argument = OverrideArgument::from_json(
        r#"{
            "argument": "mapping",
            "anchor": 10,
            "entries": [
                { "key": { "key": "stringLiteral", "value": "Token", "anchor": 11 }, "value": "Token.empty" },
                { "key": { "key": "expression", "source": "Self.name", "anchor": 12 }, "value": "x" }
            ]
        }"#,
    )?;
    let OverrideArgument::Mapping { entries, anchor } = &argument else {
        anyhow::bail!("expected a mapping, got {argument:?}");
    };
    ensure!(*anchor == Anchor(10));
    let keys: Vec<_> = entries.iter().map(|entry| entry.key.clone()).collect();
    ensure!(
        keys == vec![
            OverrideKey::literal("Token", Anchor(11)),
            OverrideKey::expression("Self.name", Anchor(12)),
        ]
    );
    Ok(())
}

#[rstest]
fn absent_argument_is_the_default_document() -> Result<()> {
    let argument = OverrideArgument::from_json(r#"{ "argument": "absent" }"#)?;
    ensure!(argument == OverrideArgument::default());
    Ok(())
}

#[rstest]
fn synthesis_encodes_for_the_host() -> Result<()> {
    let declaration = Declaration::from_json(DECLARATION)?;
    let argument = OverrideArgument::mapping([noop_synth::overrides::OverrideEntry::new(
        OverrideKey::literal("Session", Anchor(20)),
        "Session.guest",
    )]);
    let synthesis = synthesize(&declaration, &argument);
    let encoded: Value = serde_json::from_str(&synthesis.to_json()?)?;

    let implementation = encoded
        .get("implementation")
        .context("implementation missing")?;
    ensure!(implementation["name"] == "NoopSessionStore");
    ensure!(implementation["conformsTo"] == "SessionStore");
    ensure!(implementation["visibility"] == "public");

    let members = implementation["members"]
        .as_array()
        .context("members should be an array")?;
    let tags: Vec<_> = members.iter().map(|member| member["member"].clone()).collect();
    ensure!(
        tags == vec![json!("property"), json!("method"), json!("method"), json!("initializer")],
        "unexpected members {tags:?}"
    );
    ensure!(
        members[0]["getter"]
            == json!([{
                "stmt": "return",
                "value": { "expr": "literal", "literal": { "literal": "nil" } }
            }])
    );
    ensure!(
        members[1]["body"]
            == json!([{ "stmt": "return", "value": { "expr": "override", "source": "Session.guest" } }])
    );
    ensure!(
        members[2]["body"]
            == json!([{ "stmt": "abort", "message": "Cannot generate default value for type 'Token'" }])
    );

    let message = &synthesis
        .diagnostics
        .first()
        .context("expected a diagnostic")?
        .message;
    ensure!(
        encoded["diagnostics"]
            == json!([{
                "kind": "unresolvedDefaultValue",
                "severity": "warning",
                "message": message,
                "anchor": 7
            }]),
        "unexpected diagnostics {}",
        encoded["diagnostics"]
    );
    Ok(())
}

#[rstest]
fn raised_failure_encodes_type_name() -> Result<()> {
    let declaration = Declaration::from_json(DECLARATION)?;
    let synthesis = synthesize(&declaration, &OverrideArgument::Absent);
    let encoded: Value = serde_json::from_str(&synthesis.to_json()?)?;
    let body = &encoded["implementation"]["members"][1]["body"];
    ensure!(
        *body
            == json!([{
                "stmt": "raise",
                "error": { "case": "defaultValueUnavailable", "typeName": "Session" }
            }]),
        "unexpected body {body}"
    );
    Ok(())
}

#[rstest]
#[case::not_json("protocol Foo {}")]
#[case::unknown_tag(r#"{ "declaration": "extension", "name": "Foo" }"#)]
#[case::missing_name(r#"{ "declaration": "interface" }"#)]
fn malformed_declarations_are_json_errors(#[case] input: &str) {
    let error = Declaration::from_json(input).expect_err("input should be rejected");
    assert!(matches!(error, SynthError::Json(_)), "unexpected {error:?}");
}
