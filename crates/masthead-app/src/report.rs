//! Report - A read-only summary of the registries
//!
//! These DTOs exist for output only. The domain types themselves are not
//! serializable.

use std::fmt;

use masthead_domain::{Author, ArticleRepository, MagazineRepository, Newsroom};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub magazines: Vec<MagazineSummary>,
    pub authors: Vec<AuthorSummary>,
    pub top_publisher: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineSummary {
    pub name: String,
    pub category: String,
    pub article_titles: Option<Vec<String>>,
    pub contributors: Vec<String>,
    pub contributing_authors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub name: String,
    pub articles: usize,
    pub magazines: Vec<String>,
    pub topic_areas: Vec<String>,
}

/// Summarize every registered magazine and the given authors
pub fn build<M, A>(newsroom: &Newsroom<M, A>, authors: &[Author]) -> masthead_domain::Result<Report>
where
    M: MagazineRepository,
    A: ArticleRepository,
{
    let names = |list: Vec<Author>| -> Vec<String> {
        list.iter().map(|a| a.name().to_string()).collect()
    };

    let mut magazines = Vec::new();
    for magazine in newsroom.magazines()? {
        magazines.push(MagazineSummary {
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
            article_titles: newsroom.magazine_article_titles(&magazine)?,
            contributors: names(newsroom.magazine_contributors(&magazine)?),
            contributing_authors: newsroom
                .magazine_contributing_authors(&magazine)?
                .map(names),
        });
    }

    let mut summaries = Vec::new();
    for author in authors {
        summaries.push(AuthorSummary {
            name: author.name().to_string(),
            articles: newsroom.author_articles(author)?.len(),
            magazines: newsroom
                .author_magazines(author)?
                .iter()
                .map(|m| m.name().to_string())
                .collect(),
            topic_areas: newsroom.author_topic_areas(author)?.into_iter().collect(),
        });
    }

    Ok(Report {
        magazines,
        authors: summaries,
        top_publisher: newsroom.top_publisher()?.map(|m| m.name().to_string()),
    })
}

/// Plain-text rendering
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Magazines")?;
        for m in &self.magazines {
            writeln!(f, "  {} [{}]", m.name, m.category)?;
            match &m.article_titles {
                Some(titles) => {
                    for title in titles {
                        writeln!(f, "    - {}", title)?;
                    }
                }
                None => writeln!(f, "    (no articles)")?,
            }
            if !m.contributors.is_empty() {
                writeln!(f, "    contributors: {}", m.contributors.join(", "))?;
            }
            if let Some(prolific) = &m.contributing_authors {
                writeln!(f, "    contributing authors: {}", prolific.join(", "))?;
            }
        }

        writeln!(f, "Authors")?;
        for a in &self.authors {
            let topics = if a.topic_areas.is_empty() {
                "none".to_string()
            } else {
                a.topic_areas.join(", ")
            };
            writeln!(f, "  {} ({} articles) topics: {}", a.name, a.articles, topics)?;
        }

        writeln!(
            f,
            "Top publisher: {}",
            self.top_publisher.as_deref().unwrap_or("none")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masthead_adapter::in_memory_newsroom;

    #[test]
    fn test_build_report() {
        let mut newsroom = in_memory_newsroom();
        let carry = Author::new("Carry Bradshaw").unwrap();
        let giorgio = Author::new("Giorgio Faletti").unwrap();
        let vogue = newsroom.create_magazine("Vogue", "Fashion").unwrap();
        newsroom.create_magazine("AD", "Architecture").unwrap();
        newsroom.add_article(&carry, &vogue, "Dating life in NYC").unwrap();

        let report = build(&newsroom, &[carry, giorgio]).unwrap();

        assert_eq!(report.magazines.len(), 2);
        assert_eq!(
            report.magazines[0].article_titles,
            Some(vec!["Dating life in NYC".to_string()])
        );
        assert_eq!(report.magazines[1].article_titles, None);
        assert_eq!(report.magazines[0].contributing_authors, None);
        assert_eq!(report.authors[0].topic_areas, vec!["Fashion".to_string()]);
        assert!(report.authors[1].topic_areas.is_empty());
        assert_eq!(report.top_publisher.as_deref(), Some("Vogue"));
    }

    #[test]
    fn test_render_text() {
        let mut newsroom = in_memory_newsroom();
        let carry = Author::new("Carry Bradshaw").unwrap();
        let giorgio = Author::new("Giorgio Faletti").unwrap();
        let vogue = newsroom.create_magazine("Vogue", "Fashion").unwrap();
        newsroom.create_magazine("AD", "Architecture").unwrap();
        newsroom.add_article(&carry, &vogue, "Dating life in NYC").unwrap();

        let text = build(&newsroom, &[carry, giorgio]).unwrap().to_string();

        assert!(text.starts_with("Magazines\n  Vogue [Fashion]\n    - Dating life in NYC\n"));
        assert!(text.contains("  AD [Architecture]\n    (no articles)\n"));
        assert!(text.contains("    contributors: Carry Bradshaw\n"));
        assert!(text.contains("  Carry Bradshaw (1 articles) topics: Fashion\n"));
        assert!(text.contains("  Giorgio Faletti (0 articles) topics: none\n"));
        assert!(text.ends_with("Top publisher: Vogue\n"));
    }

    #[test]
    fn test_render_empty_report_text_and_json() {
        let newsroom = in_memory_newsroom();
        let report = build(&newsroom, &[]).unwrap();

        assert_eq!(
            report.to_string(),
            "Magazines\nAuthors\nTop publisher: none\n"
        );

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["top_publisher"].is_null());
        assert_eq!(json["magazines"], serde_json::json!([]));
    }
}
