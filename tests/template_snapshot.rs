use html_interpolate::{Replacements, substitute};

static TEMPLATE: &str = include_str!("fixtures/index.html");
static EXPECTED: &str = include_str!("fixtures/index.expected.html");

#[test]
fn fixture_template_matches_snapshot() {
    let replacements: Replacements = [
        ("PUBLIC_URL", "/static"),
        ("APP_NAME", "Demo"),
        ("APP-DESCRIPTION", "Starter app"),
        ("BUILD.ID", "2026.10"),
    ]
    .into_iter()
    .collect();

    let rendered = substitute(TEMPLATE, &replacements).expect("substitute");
    assert_eq!(
        rendered.trim(),
        EXPECTED.trim(),
        "Interpolated template diverged from recorded snapshot"
    );
}
