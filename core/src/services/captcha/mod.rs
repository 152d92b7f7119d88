//! Visual challenge code generation.
//!
//! Produces a short human-legible text and an SVG rendering of it with
//! noise lines and per-glyph jitter. Rendering uses fresh randomness on
//! every call; the same text never needs to reproduce the same image.

use rand::rngs::OsRng;
use rand::Rng;

/// Characters a challenge may contain. Digits and uppercase letters with
/// the ambiguous glyphs (0, O, 1, I, L) excluded.
const ALPHABET: &[u8] = b"23456789ABCDEFGHJKMNPQRSTUVWXYZ";

/// Number of characters in a challenge.
const CODE_LENGTH: usize = 4;

const IMAGE_WIDTH: u32 = 160;
const IMAGE_HEIGHT: u32 = 60;
const NOISE_LINES: usize = 8;
const NOISE_DOTS: usize = 40;

/// A generated visual challenge.
#[derive(Debug, Clone)]
pub struct Captcha {
    /// The text the user must read off the image
    pub text: String,
    /// SVG image bytes embedding the text
    pub image: Vec<u8>,
}

/// Stateless challenge generator; safe for concurrent use from independent
/// requests because each call draws from `OsRng` with no shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptchaGenerator;

impl CaptchaGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a challenge text and its rendered image.
    pub fn generate(&self) -> Captcha {
        let mut rng = OsRng;

        let text: String = (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();

        let image = render_svg(&text, &mut rng).into_bytes();

        Captcha { text, image }
    }
}

/// Render the challenge text as an SVG with visual noise.
fn render_svg(text: &str, rng: &mut impl Rng) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{IMAGE_WIDTH}" height="{IMAGE_HEIGHT}">"#
    );
    svg.push_str(r##"<rect width="100%" height="100%" fill="#f4f4f4"/>"##);

    for _ in 0..NOISE_LINES {
        let x1 = rng.gen_range(0..IMAGE_WIDTH);
        let y1 = rng.gen_range(0..IMAGE_HEIGHT);
        let x2 = rng.gen_range(0..IMAGE_WIDTH);
        let y2 = rng.gen_range(0..IMAGE_HEIGHT);
        svg.push_str(&format!(
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="rgba(0,0,0,0.25)" stroke-width="1"/>"#
        ));
    }

    for _ in 0..NOISE_DOTS {
        let cx = rng.gen_range(0..IMAGE_WIDTH);
        let cy = rng.gen_range(0..IMAGE_HEIGHT);
        svg.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="1" fill="rgba(0,0,0,0.3)"/>"#
        ));
    }

    let char_width = IMAGE_WIDTH as f32 / (text.len() as f32 + 1.0);
    for (i, c) in text.chars().enumerate() {
        let x = char_width * (i as f32 + 0.7);
        let y = 40 + rng.gen_range(-8..=8);
        let rotation = rng.gen_range(-20..=20);
        let color = format!(
            "rgb({},{},{})",
            rng.gen_range(0..120),
            rng.gen_range(0..120),
            rng.gen_range(0..120)
        );
        svg.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-family="monospace" font-size="34" font-weight="bold" fill="{color}" transform="rotate({rotation} {x} {y})">{c}</text>"#
        ));
    }

    svg.push_str("</svg>");
    svg
}
