// src/application/queries/report.rs
use crate::application::normalize::{
    int_or_zero, normalize_article, scalar_text, str_or_null, truthy,
};
use crate::domain::article::slugify;
use serde::Serialize;
use serde_json::Value;
use std::{collections::HashMap, fmt};

pub const DEFAULT_TOP_N: usize = 3;
const UNCATEGORIZED: &str = "N/A";

/// One input row of the report, already normalized.
///
/// Only rows carrying a truthy `published` flag reach the report; a row
/// without the flag counts as unpublished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub views: u64,
    pub author: String,
    pub published: bool,
    pub tags: Vec<String>,
}

impl ReportRow {
    #[must_use]
    pub fn from_value(row: &Value) -> Self {
        let normalized = normalize_article(row);
        let category = str_or_null(row.get("category").and_then(scalar_text).as_deref())
            .unwrap_or_else(|| UNCATEGORIZED.to_owned());
        let tags = row
            .get("tags")
            .and_then(Value::as_array)
            .map_or_else(Vec::new, |tags| {
                tags.iter()
                    .filter_map(|t| str_or_null(t.as_str()))
                    .collect::<Vec<_>>()
            });

        Self {
            id: row.get("id").map_or(0, int_or_zero),
            title: normalized.title,
            category,
            views: normalized.views,
            author: normalized.author,
            published: row.get("published").and_then(truthy).unwrap_or(false),
            tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub views: u64,
    pub author: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub count: usize,
    pub views_sum: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleReport {
    pub published: Vec<ReportLine>,
    pub top: Vec<ReportLine>,
    pub by_author: Vec<Tally>,
    pub by_category: Vec<Tally>,
    pub tags: Vec<Tally>,
    pub summary: ReportSummary,
}

/// Counts keys in first-seen order.
fn tally<'a, I>(keys: I) -> Vec<Tally>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<Tally> = Vec::new();
    for key in keys {
        let slot = *slots.entry(key).or_insert_with(|| {
            tallies.push(Tally {
                key: key.to_owned(),
                count: 0,
            });
            tallies.len() - 1
        });
        tallies[slot].count += 1;
    }
    tallies
}

/// Builds the report over published rows only.
///
/// `top` holds at most `top_n` lines, by views descending; ties keep input
/// order. The views total saturates at `u64::MAX`.
#[must_use]
pub fn build_report(rows: &[ReportRow], top_n: usize) -> ArticleReport {
    let published: Vec<&ReportRow> = rows.iter().filter(|r| r.published).collect();

    let lines: Vec<ReportLine> = published
        .iter()
        .map(|r| ReportLine {
            id: r.id,
            title: r.title.clone(),
            slug: slugify(&r.title),
            views: r.views,
            author: r.author.clone(),
            category: r.category.clone(),
        })
        .collect();

    let mut top = lines.clone();
    top.sort_by(|a, b| b.views.cmp(&a.views));
    top.truncate(top_n);

    let summary = published
        .iter()
        .fold(ReportSummary::default(), |mut acc, r| {
            acc.count += 1;
            acc.views_sum = acc.views_sum.saturating_add(r.views);
            acc
        });

    tracing::debug!(
        rows = rows.len(),
        published = summary.count,
        top_n,
        "article report built"
    );

    let by_author = tally(published.iter().map(|r| r.author.as_str()));
    let by_category = tally(published.iter().map(|r| r.category.as_str()));
    let tags = tally(
        published
            .iter()
            .flat_map(|r| r.tags.iter().map(String::as_str)),
    );

    ArticleReport {
        published: lines,
        top,
        by_author,
        by_category,
        tags,
        summary,
    }
}

impl fmt::Display for ArticleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} (views):", self.top.len())?;
        for line in &self.top {
            writeln!(f, "- {} ({} vues) - {}", line.title, line.views, line.slug)?;
        }

        writeln!(f, "\nPar auteur:")?;
        for t in &self.by_author {
            writeln!(f, "- {}: {} article(s)", t.key, t.count)?;
        }

        writeln!(f, "\nPar categorie:")?;
        for t in &self.by_category {
            writeln!(f, "- {}: {}", t.key, t.count)?;
        }

        writeln!(f, "\nTags:")?;
        for t in &self.tags {
            writeln!(f, "- {}: {}", t.key, t.count)?;
        }

        write!(
            f,
            "\nTotal: {} article(s), {} vues",
            self.summary.count, self.summary.views_sum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_rows() -> Vec<ReportRow> {
        let raw = json!([
            {"id": 1, "title": "Intro Laravel", "category": "php", "views": 120, "author": "Amina", "published": true, "tags": ["php", "laravel"]},
            {"id": 2, "title": "PHP 8 en pratique", "category": "php", "views": 300, "author": "Yassine", "published": true, "tags": ["php"]},
            {"id": 3, "title": "Composer & Autoload", "category": "outils", "views": 90, "author": "Amina", "published": false, "tags": ["composer", "php"]},
            {"id": 4, "title": "Validation FormRequest", "category": "laravel", "views": 210, "author": "Sara", "published": true, "tags": ["laravel", "validation"]}
        ]);
        raw.as_array()
            .unwrap()
            .iter()
            .map(ReportRow::from_value)
            .collect()
    }

    #[test]
    fn only_published_rows_are_projected() {
        let report = build_report(&sample_rows(), DEFAULT_TOP_N);
        let slugs: Vec<_> = report.published.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(
            slugs,
            ["intro-laravel", "php-8-en-pratique", "validation-formrequest"]
        );
    }

    #[test]
    fn top_is_sorted_by_views_descending() {
        let report = build_report(&sample_rows(), 2);
        let ids: Vec<_> = report.top.iter().map(|l| l.id).collect();
        assert_eq!(ids, [2, 4]);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows: Vec<ReportRow> = [
            json!({"id": 1, "title": "a", "views": 5, "published": true}),
            json!({"id": 2, "title": "b", "views": 5, "published": "yes"}),
        ]
            .iter()
            .map(ReportRow::from_value)
            .collect();
        let report = build_report(&rows, 10);
        let ids: Vec<_> = report.top.iter().map(|l| l.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn tallies_keep_first_seen_order() {
        let report = build_report(&sample_rows(), DEFAULT_TOP_N);
        let authors: Vec<_> = report
            .by_author
            .iter()
            .map(|t| (t.key.as_str(), t.count))
            .collect();
        assert_eq!(authors, [("Amina", 1), ("Yassine", 1), ("Sara", 1)]);

        let tags: Vec<_> = report.tags.iter().map(|t| (t.key.as_str(), t.count)).collect();
        assert_eq!(tags, [("php", 2), ("laravel", 2), ("validation", 1)]);

        let categories: Vec<_> = report
            .by_category
            .iter()
            .map(|t| (t.key.as_str(), t.count))
            .collect();
        assert_eq!(categories, [("php", 2), ("laravel", 1)]);
    }

    #[test]
    fn summary_counts_published_views() {
        let report = build_report(&sample_rows(), DEFAULT_TOP_N);
        assert_eq!(
            report.summary,
            ReportSummary {
                count: 3,
                views_sum: 630
            }
        );
    }

    #[test]
    fn display_lists_top_entries() {
        let text = build_report(&sample_rows(), DEFAULT_TOP_N).to_string();
        assert!(text.starts_with("Top 3 (views):\n- PHP 8 en pratique (300 vues) - php-8-en-pratique\n"));
        assert!(text.contains("- Amina: 1 article(s)"));
        assert!(text.ends_with("Total: 3 article(s), 630 vues"));
    }

    #[test]
    fn missing_fields_fall_back() {
        let row = ReportRow::from_value(&json!({"title": "Solo", "tags": ["", " x ", 3]}));
        assert_eq!(row.id, 0);
        assert_eq!(row.category, "N/A");
        assert_eq!(row.tags, ["x"]);
        assert!(!row.published);
    }

    #[test]
    fn rows_without_published_flag_are_left_out() {
        let rows: Vec<ReportRow> = [
            json!({"id": 1, "title": "Brouillon", "views": 40}),
            json!({"id": 2, "title": "Nul", "views": 10, "published": null}),
            json!({"id": 3, "title": "Zero", "views": 10, "published": 0}),
        ]
        .iter()
        .map(ReportRow::from_value)
        .collect();

        let report = build_report(&rows, DEFAULT_TOP_N);
        assert!(report.published.is_empty());
        assert!(report.top.is_empty());
        assert_eq!(report.summary, ReportSummary::default());
    }

    #[test]
    fn views_total_saturates_instead_of_overflowing() {
        let rows: Vec<ReportRow> = [
            json!({"id": 1, "title": "Viral", "views": u64::MAX, "published": true}),
            json!({"id": 2, "title": "Suite", "views": 1, "published": true}),
        ]
        .iter()
        .map(ReportRow::from_value)
        .collect();

        let report = build_report(&rows, DEFAULT_TOP_N);
        assert_eq!(report.summary.count, 2);
        assert_eq!(report.summary.views_sum, u64::MAX);
    }
}
