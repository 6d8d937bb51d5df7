//! Unit tests for the text styling formatter

use mlt::theme::{colored_text, write_bright, Color, StyleRequest, ANSI_RESET};

const SAMPLES: &[&str] = &[
    "",
    "OK",
    "multi\nline",
    "✅ All tests passed!",
    "\x1b[31malready red\x1b[0m",
    "   ",
];

#[test]
fn unstyled_text_still_gets_default_codes() {
    for text in SAMPLES {
        assert_eq!(
            colored_text(text, Color::Default, Color::Default, false),
            format!("\x1b[39;49m{}\x1b[0m", text)
        );
    }
}

#[test]
fn foreground_codes_for_every_base_color() {
    for color in Color::BASE {
        let styled = colored_text("x", color, Color::Default, false);
        assert_eq!(styled, format!("\x1b[3{};49mx\x1b[0m", color as u8));
    }
}

#[test]
fn background_codes_for_every_base_color() {
    for color in Color::BASE {
        let styled = colored_text("x", Color::Default, color, false);
        assert_eq!(styled, format!("\x1b[39;4{}mx\x1b[0m", color as u8));
    }
}

#[test]
fn bold_token_is_first_and_only_when_requested() {
    for color in Color::ALL {
        let bold = StyleRequest::new("t").fg(color).bg(color).bold(true);
        let plain = StyleRequest::new("t").fg(color).bg(color);

        assert_eq!(bold.codes()[0], "1");
        assert_eq!(bold.codes().len(), 3);
        assert_eq!(plain.codes().len(), 2);
        assert!(!plain.codes().contains(&"1".to_string()));
    }
}

#[test]
fn reset_is_always_appended() {
    for color in Color::ALL {
        for bold in [false, true] {
            let styled = colored_text("payload", color, Color::Default, bold);
            assert!(styled.ends_with(&format!("payload{}", ANSI_RESET)));
        }
    }
}

#[test]
fn nested_styles_are_not_collapsed() {
    let inner = colored_text("T", Color::Red, Color::Default, false);
    let outer = colored_text(&inner, Color::Green, Color::Default, false);

    assert_eq!(outer, "\x1b[32;49m\x1b[31;49mT\x1b[0m\x1b[0m");
    assert_eq!(outer.matches("\x1b[0m").count(), 2);
    assert_eq!(outer.matches(";49m").count(), 2);
}

#[test]
fn documented_scenarios() {
    assert_eq!(
        colored_text("OK", Color::Red, Color::Default, true),
        "\x1b[1;31;49mOK\x1b[0m"
    );
    assert_eq!(
        colored_text("OK", Color::Green, Color::Default, false),
        "\x1b[32;49mOK\x1b[0m"
    );
    assert_eq!(
        colored_text("", Color::Default, Color::Default, false),
        "\x1b[39;49m\x1b[0m"
    );
    assert_eq!(
        colored_text("warn", Color::Yellow, Color::Black, true),
        "\x1b[1;33;40mwarn\x1b[0m"
    );
}

#[test]
fn style_request_display_matches_colored_text() {
    let request = StyleRequest::new("hi").fg(Color::Magenta).bg(Color::White);
    assert_eq!(
        format!("{}", request),
        colored_text("hi", Color::Magenta, Color::White, false)
    );
}

#[test]
fn bright_lines_for_each_preset() {
    for (color, code) in [(Color::Red, 31), (Color::Green, 32), (Color::Yellow, 33)] {
        let mut out = Vec::new();
        write_bright(&mut out, color, "msg").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("\x1b[1;{};49mmsg\x1b[0m\n", code)
        );
    }
}
