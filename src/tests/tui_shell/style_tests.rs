use super::*;

#[test]
fn severity_colors() {
    assert_eq!(severity_style(&Severity::Critical).fg, Some(Color::Red));
    assert_eq!(severity_style(&Severity::High).fg, Some(Color::LightRed));
    assert_eq!(severity_style(&Severity::Medium).fg, Some(Color::Blue));
    assert_eq!(severity_style(&Severity::Low).fg, Some(Color::Gray));
    assert_eq!(
        severity_style(&Severity::Other("informational".to_string())),
        Style::default()
    );
}

#[test]
fn locked_controls_are_dimmed() {
    let base = Style::default().fg(Color::Green);
    assert!(locked(base, true).add_modifier.contains(Modifier::DIM));
    assert_eq!(locked(base, false), base);
}
