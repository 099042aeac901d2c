//! Content generator: picks a kind, then a template, then fills placeholders.

mod templates;

use chrono::NaiveDateTime;
use rand::Rng;

use crate::domain::{ContentKind, GeneratedArtifact};

pub use templates::{SnippetTemplate, templates_for};

/// Timestamp layout rendered into snippet bodies.
pub const CONTENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Values substituted into a template. Drawn in a fixed order so a seeded
/// source reproduces the same snippet.
#[derive(Debug, Clone)]
struct Placeholders {
    name: &'static str,
    class: &'static str,
    color: &'static str,
    seed: u32,
    rounds: u32,
    step: u32,
    arg: u32,
    number: u32,
}

impl Placeholders {
    fn draw<R: Rng + ?Sized>(rng: &mut R, kind: ContentKind) -> Self {
        Self {
            name: *pick(rng, templates::names_for(kind)),
            class: *pick(rng, templates::CLASS_NAMES),
            color: *pick(rng, templates::COLORS),
            seed: rng.gen_range(1..=100),
            rounds: rng.gen_range(1..=10),
            step: rng.gen_range(1..=50),
            arg: rng.gen_range(1..=20),
            number: rng.gen_range(1..=1000),
        }
    }

    fn fill(&self, body: &str, timestamp: &str) -> String {
        body.replace("{{timestamp}}", timestamp)
            .replace("{{name}}", self.name)
            .replace("{{class}}", self.class)
            .replace("{{color}}", self.color)
            .replace("{{seed}}", &self.seed.to_string())
            .replace("{{rounds}}", &self.rounds.to_string())
            .replace("{{step}}", &self.step.to_string())
            .replace("{{arg}}", &self.arg.to_string())
            .replace("{{number}}", &self.number.to_string())
    }
}

fn choose_template<R: Rng + ?Sized>(rng: &mut R, kind: ContentKind) -> &'static SnippetTemplate {
    pick(rng, templates_for(kind))
}

/// Generate a snippet of a uniformly chosen kind.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> GeneratedArtifact {
    let kind = *pick(rng, &ContentKind::ALL);
    generate_kind(rng, kind, now)
}

/// Generate a snippet of a specific kind.
pub fn generate_kind<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ContentKind,
    now: NaiveDateTime,
) -> GeneratedArtifact {
    let template = choose_template(rng, kind);
    let placeholders = Placeholders::draw(rng, kind);
    let timestamp = now.format(CONTENT_TIMESTAMP_FORMAT).to_string();

    GeneratedArtifact { content: placeholders.fill(template.body, &timestamp), kind, created_at: now }
}
