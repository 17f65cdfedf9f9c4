use sqlx::PgPool;
use uuid::Uuid;

use crate::common::SlugError;
use crate::services::Collection;

/// Probe bound for the collision loop. Pathological input (thousands of
/// rows sharing one base) fails loudly instead of looping forever.
pub const MAX_SLUG_PROBES: u32 = 10_000;

/// Normalizes free text into slug form: lowercase ASCII letters and
/// digits, runs of whitespace/underscores/hyphens collapsed into one
/// hyphen, everything else dropped, no leading or trailing hyphen. May
/// return an empty string when nothing survives. Non-ASCII letters are
/// dropped, not transliterated ("Café" becomes "caf").
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }

    out
}

/// Returns the first collision-free slug in `scope` derived from
/// `text`, probing `base`, `base-1`, `base-2`, ... `exclude` skips the
/// row being re-slugged on update.
///
/// Allocation-then-insert is not atomic: a concurrent allocation of the
/// same base can hand both callers the same candidate, and the scope's
/// unique index rejects the loser on insert.
pub async fn allocate_unique_slug(
    pool: &PgPool,
    scope: Collection,
    text: &str,
    exclude: Option<Uuid>,
) -> Result<String, SlugError> {
    let normalized = slugify(text);
    let base = if normalized.chars().count() < 2 {
        scope.untitled_base().to_string()
    } else {
        normalized
    };

    for attempt in 0..MAX_SLUG_PROBES {
        let candidate = if attempt == 0 {
            base.clone()
        } else {
            format!("{base}-{attempt}")
        };

        if !slug_taken(pool, scope, &candidate, exclude).await? {
            return Ok(candidate);
        }
    }

    Err(SlugError::SpaceExhausted {
        base,
        attempts: MAX_SLUG_PROBES,
    })
}

async fn slug_taken(
    pool: &PgPool,
    scope: Collection,
    candidate: &str,
    exclude: Option<Uuid>,
) -> Result<bool, sqlx::Error> {
    // Table names come from the Collection enum, never from input.
    let sql = format!(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM {}
            WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
        )
        "#,
        scope.table()
    );

    sqlx::query_scalar::<_, bool>(&sql)
        .bind(candidate)
        .bind(exclude)
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("Hello World!!!"), "hello-world");
        assert_eq!(slugify("Rock & Roll: a retrospective"), "rock-roll-a-retrospective");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("a  __ b --- c"), "a-b-c");
    }

    #[test]
    fn slugify_trims_edge_hyphens() {
        assert_eq!(slugify("--Hello--"), "hello");
        assert_eq!(slugify("  spaced out  "), "spaced-out");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn slugify_can_return_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("¡¿"), "");
    }

    #[test]
    fn slugify_output_charset() {
        let slug = slugify("Mixed CASE, punctuation… and 123 numbers_here");
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }
}
