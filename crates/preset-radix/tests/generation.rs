//! End-to-end generation tests: options in, theme colors and CSS out.

use cssparser::{ParseError, Parser, ParserInput, Token};
use preset_radix::colors::{is_overlay, radix, ColorSource, OVERLAY_SCALES};
use preset_radix::emit::Target;
use preset_radix::{
    ColorMode, Preflights, Preset, PresetOptions, RadixPreset, RuleBody, ThemeColor, ThemeColors,
};

// ============================================================================
// Helpers
// ============================================================================

fn preset(options: PresetOptions) -> RadixPreset {
    RadixPreset::new(&options).unwrap()
}

fn resolve_all(preset: &mut RadixPreset, classes: &[&str]) {
    for class in classes {
        preset.resolve_class(class);
    }
}

/// Walks the CSS token stream, failing on malformed tokens, and returns the
/// number of `{}` blocks at any depth.
fn count_blocks<'i>(parser: &mut Parser<'i, '_>) -> usize {
    let mut blocks = 0;
    while let Ok(token) = parser.next() {
        match token.clone() {
            Token::CurlyBracketBlock => {
                blocks += 1;
                blocks += parser
                    .parse_nested_block(|nested| Ok::<_, ParseError<'i, ()>>(count_blocks(nested)))
                    .unwrap();
            }
            token @ (Token::BadString(_) | Token::BadUrl(_) | Token::CloseCurlyBracket) => {
                panic!("malformed CSS at {:?}", token)
            }
            _ => {}
        }
    }
    blocks
}

fn css_block_count(css: &str) -> usize {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    count_blocks(&mut parser)
}

// ============================================================================
// Palette
// ============================================================================

#[test]
fn test_every_base_scale_maps_twelve_steps() {
    let source = radix();
    let preset = preset(PresetOptions::new());
    let colors = preset.theme_colors();

    for scale in source.base_scale_names() {
        for name in [scale.to_string(), format!("{}A", scale)] {
            let Some(ThemeColor::Shades(shades)) = colors.get(&name) else {
                panic!("missing shades for {}", name);
            };
            let steps: Vec<u8> = shades.keys().copied().collect();
            assert_eq!(steps, (1..=12).collect::<Vec<u8>>(), "steps of {}", name);
            for (step, reference) in shades {
                assert_eq!(reference, &format!("var(--{}{})", name, step));
            }
        }
    }
}

#[test]
fn test_bundled_table_covers_every_radix_scale() {
    let source = radix();
    assert_eq!(source.base_scale_names().len(), 31);

    let mut preset = preset(PresetOptions::new());
    for class in ["bg-pink-6", "bg-sand-3", "text-crimson-a9", "bg-mauve-2", "bg-orange-5"] {
        assert!(preset.resolve_class(class).is_some(), "{} not resolved", class);
    }
    let css = preset.preflight_css();
    assert!(css.contains("--pink6: #efbfdd;"));
    assert!(css.contains("--pink6: #692955;"));
    assert!(css.contains("--crimsonA9: #e2005bc2;"));
}

#[test]
fn test_unknown_scale_is_not_recognized() {
    let mut preset = preset(
        PresetOptions::new()
            .alias("brand", "blue")
            .alias("x", "not-a-real-color"),
    );

    assert!(!preset.config().palette.contains_key("x"));
    assert!(!preset.theme_colors().contains_key("x"));
    assert!(!preset.theme_colors().contains_key("xA"));
    assert!(!preset.palette().matcher().aliases().iter().any(|a| a == "x"));
    assert_eq!(preset.resolve_class("bg-x-6"), None);
    assert_eq!(preset.preflight_css(), "");
}

#[test]
fn test_replace_theme_keeps_keywords() {
    let preset = preset(PresetOptions::new().alias("brand", "blue").extends(false));
    let mut colors = ThemeColors::new();
    colors.insert("red".to_string(), ThemeColor::Plain("#f00".to_string()));
    preset.extend_theme(&mut colors);

    assert!(!colors.contains_key("red"));
    assert_eq!(colors["inherit"], ThemeColor::Plain("inherit".to_string()));
    assert_eq!(colors["brandA"].shade(12), Some("var(--brandA12)"));
}

// ============================================================================
// Eager emission
// ============================================================================

#[test]
fn test_eager_emission_covers_light_and_dark() {
    let source = radix();
    let preset = preset(PresetOptions::new().preflights(Preflights::All));
    let light = preset.declarations().bucket(Target::Light);
    let dark = preset.declarations().bucket(Target::Dark);

    for scale in source.base_scale_names() {
        for step in 1..=12u8 {
            for (key_scale, alpha) in [(scale.to_string(), ""), (format!("{}A", scale), "A")] {
                let key = format!("{}{}", key_scale, step);
                let light_literal = source.color(&key_scale, &key).unwrap();
                let dark_scale = format!("{}Dark{}", scale, alpha);
                let dark_literal = source.color(&dark_scale, &key).unwrap();

                let name = format!("--{}{}{}", scale, alpha, step);
                assert!(light.contains(&format!("{}: {};", name, light_literal)));
                assert!(dark.contains(&format!("{}: {};", name, dark_literal)));
            }
        }
    }
}

#[test]
fn test_eager_alias_emitted_before_matching() {
    let mut preset = preset(
        PresetOptions::new()
            .alias("brand", "blue")
            .preflights(Preflights::only(["brand"])),
    );
    let light = preset.declarations().bucket(Target::Light);
    assert!(light.contains("--brand6: #acd8fc;"));
    assert!(preset
        .declarations()
        .bucket(Target::Dark)
        .contains("--brand6: #104d87;"));

    let before = preset.declarations().clone();
    assert_eq!(preset.resolve_class("bg-brand-6"), Some(RuleBody::empty()));
    assert_eq!(preset.declarations(), &before);
}

#[test]
fn test_overlays_never_reach_dark_bucket() {
    for scale in OVERLAY_SCALES {
        assert!(is_overlay(scale));
        let mut preset = preset(
            PresetOptions::new()
                .alias("eager", scale)
                .alias("lazy", scale)
                .preflights(Preflights::only(["eager"])),
        );
        resolve_all(&mut preset, &["bg-lazy-1", "bg-lazy-a7", "text-lazyA-12"]);

        assert_eq!(preset.declarations().bucket(Target::Light).len(), 15);
        assert!(preset.declarations().bucket(Target::Dark).is_empty());
        assert!(!preset.preflight_css().contains(".dark"));
    }
}

// ============================================================================
// CSS output
// ============================================================================

#[test]
fn test_numeric_ordering_in_blocks() {
    let mut preset = preset(PresetOptions::new());
    resolve_all(&mut preset, &["bg-blue-10", "bg-blue-9", "bg-blue-1"]);
    let css = preset.preflight_css();

    let pos = |needle: &str| css.find(needle).unwrap();
    assert!(pos("--blue1:") < pos("--blue9:"));
    assert!(pos("--blue9:") < pos("--blue10:"));
}

#[test]
fn test_dark_disabled_omits_dark_block() {
    let mut preset = preset(PresetOptions::new().disable_dark());
    preset.resolve_class("bg-blue-a5");

    assert_eq!(
        preset.declarations().bucket(Target::Light).entries(),
        ["--blueA5: #0093ff3d;"]
    );
    assert!(preset.declarations().bucket(Target::Dark).is_empty());
    assert_eq!(preset.preflight_css(), ":root {\n  --blueA5: #0093ff3d;\n}");
}

#[test]
fn test_media_block_follows_selectors() {
    let mut preset = preset(
        PresetOptions::new()
            .alias("brand", "blue")
            .alias("overlay", "blackA")
            .prefix("color")
            .media(ColorMode::Dark),
    );
    resolve_all(
        &mut preset,
        &["bg-brand-6", "text-brand-a11", "bg-overlay-a3", "p-4"],
    );

    insta::assert_snapshot!(preset.preflight_css(), @r"
:root {
  --color-brand6: #acd8fc;
  --color-brandA11: #006dcbf2;
  --color-overlayA3: #00000026;
}
.dark {
  --color-brand6: #104d87;
  --color-brandA11: #70b8ff;
}
@media (prefers-color-scheme: dark) {
  :root {
    --color-brand6: #104d87;
    --color-brandA11: #70b8ff;
  }
}
");
}

#[test]
fn test_light_media_uses_dark_selector() {
    let mut preset = preset(
        PresetOptions::new()
            .alias("brand", "blue")
            .light(".light")
            .dark(":root")
            .media(ColorMode::Light),
    );
    preset.resolve_class("bg-brand-9");

    insta::assert_snapshot!(preset.preflight_css(), @r"
.light {
  --brand9: #0090ff;
}
:root {
  --brand9: #0090ff;
}
@media (prefers-color-scheme: light) {
  :root {
    --brand9: #0090ff;
  }
}
");
}

#[test]
fn test_generated_css_is_well_formed() {
    let mut preset = preset(
        PresetOptions::new()
            .media(ColorMode::Dark)
            .preflights(Preflights::only(["slate"])),
    );
    resolve_all(&mut preset, &["bg-blue-1", "border-tomato-a12", "text-amber-7"]);
    let css = preset.preflight_css();

    // :root, .dark, @media and its nested :root
    assert_eq!(css_block_count(&css), 4);
}

#[test]
fn test_nothing_matched_yields_empty_css() {
    let mut preset = preset(PresetOptions::new().media(ColorMode::Dark));
    resolve_all(&mut preset, &["flex", "bg-red", "text-blue-0", "bg-blue-"]);
    assert_eq!(preset.preflight_css(), "");
}

// ============================================================================
// Options and sessions
// ============================================================================

#[test]
fn test_prefix_normalization() {
    for (input, expected) in [("color", "--color-"), ("-x", "--x-"), ("--already-", "--already-")] {
        let preset = preset(PresetOptions::new().prefix(input));
        assert_eq!(preset.config().prefix, expected);
    }
}

#[test]
fn test_unknown_option_rejected() {
    let err = PresetOptions::from_yaml("palette:\n  brand: blue\nthemes: []").unwrap_err();
    assert!(err.to_string().contains("themes"));
}

#[test]
fn test_options_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("radix.yaml");
    std::fs::write(
        &path,
        "palette:\n  accent: violet\nprefix: rx\ndark: false\nmedia: 12\n",
    )
    .unwrap();

    let mut preset = preset(PresetOptions::from_file(&path).unwrap());
    assert_eq!(preset.config().media, None);
    preset.resolve_class("bg-accent-9");
    assert_eq!(preset.preflight_css(), ":root {\n  --rx-accent9: #6e56cf;\n}");
}

#[test]
fn test_sessions_do_not_share_buckets() {
    let options = PresetOptions::new().alias("brand", "blue");
    let mut first = preset(options.clone());
    let mut second = preset(options);

    first.resolve_class("bg-brand-1");
    second.resolve_class("bg-brand-2");

    assert!(first.preflight_css().contains("--brand1:"));
    assert!(!first.preflight_css().contains("--brand2:"));
    assert!(second.preflight_css().contains("--brand2:"));
    assert!(!second.preflight_css().contains("--brand1:"));
}
