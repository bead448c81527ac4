use docmacro_core::badge::{BadgeRenderer, RELEASES_URL, render};
use docmacro_core::macros::{MacroCall, MacroRegistry, parse_call};
use rstest::rstest;

fn value_span(version: &str) -> String {
    format!(r#"<span class="since__value">{version}</span>"#)
}

#[rstest]
#[case("0.5.0")]
#[case("2.0.0-rc1")]
#[case("v1")]
#[case("2024.10")]
fn version_embedded_once_in_value_span(#[case] version: &str) {
    let out = render(version);
    assert_eq!(out.matches(version).count(), 1);
    assert!(out.contains(&value_span(version)));
}

#[rstest]
#[case("0.5.0")]
#[case("")]
#[case("1.0.0+build.7")]
fn markup_is_balanced(#[case] version: &str) {
    let out = render(version);
    assert_eq!(out.matches("<a ").count(), 1);
    assert_eq!(out.matches("</a>").count(), 1);
    assert_eq!(out.matches("<span").count(), 5);
    assert_eq!(out.matches("</span>").count(), 5);
    assert!(out.contains(&format!(r#"href="{RELEASES_URL}""#)));
    assert!(out.contains(r#"target="_blank""#));
}

#[test]
fn exact_output_for_050() {
    assert_eq!(
        render("0.5.0"),
        concat!(
            r#"<a href="https://github.com/janoszen/containerssh/releases" target="_blank">"#,
            r#"<span class="since"><span class="since__hide">(</span>"#,
            r#"<span class="since__text">since</span> "#,
            r#"<span class="since__value">0.5.0</span>"#,
            r#"<span class="since__hide">)</span></span></a>"#,
        )
    );
}

#[test]
fn empty_version_renders_empty_value_span() {
    assert!(render("").contains(r#"<span class="since__value"></span>"#));
}

#[rstest]
#[case(r#"since("0.5.0")"#, "0.5.0")]
#[case("since('2.0.0-rc1')", "2.0.0-rc1")]
#[case("since(1.2.3)", "1.2.3")]
#[case(r#"since("")"#, "")]
fn macro_call_matches_renderer(#[case] expr: &str, #[case] version: &str) {
    let registry = MacroRegistry::with_builtins(&BadgeRenderer::default());
    let call = parse_call(expr).unwrap();
    assert_eq!(registry.invoke(&call).unwrap(), render(version));
}

#[test]
fn missing_version_is_invalid_argument() {
    let registry = MacroRegistry::with_builtins(&BadgeRenderer::default());
    let err = registry.invoke(&MacroCall::new("since", Vec::new())).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument to macro 'since': missing version");
}
