use std::io::{self, Write};

use crate::models::ScoredResult;

/// Print up to `limit` result cards
pub fn render_results<W: Write>(out: &mut W, results: &[ScoredResult], limit: usize) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No results found.")?;
        return Ok(());
    }

    writeln!(out, "\t{}", "__".repeat(40))?;
    writeln!(out, "\n{}Search Response:\n", "\t".repeat(5))?;

    for result in results.iter().take(limit) {
        render_card(out, result)?;
    }

    if results.len() > limit {
        writeln!(out, "\n{}... and {} more", "\t".repeat(3), results.len() - limit)?;
    }

    Ok(())
}

fn render_card<W: Write>(out: &mut W, result: &ScoredResult) -> io::Result<()> {
    let indent = "\t".repeat(3);
    let rule = "_".repeat(45);

    writeln!(out, "{}{}", indent, rule)?;
    writeln!(out, "\n{}{}", "\t".repeat(5), result.name)?;
    writeln!(out, "\n{}Average Review:{}\t\t {}", indent, result.rating, result.cuisine)?;
    writeln!(out, "\n{}Miles Away:{}\t\tPrice/person:${}", indent, result.distance, result.price)?;
    writeln!(out, "{}{}", indent, rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> ScoredResult {
        ScoredResult {
            name: name.to_string(),
            rating: 4,
            distance: 2,
            price: 15,
            cuisine: "Indian".to_string(),
            score: 1.0,
        }
    }

    fn render(results: &[ScoredResult], limit: usize) -> String {
        let mut out = Vec::new();
        render_results(&mut out, results, limit).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[], 5), "No results found.\n");
    }

    #[test]
    fn test_card_contents() {
        let text = render(&[result("Spicy Palace")], 5);

        assert!(text.contains("Spicy Palace"));
        assert!(text.contains("Average Review:4\t\t Indian"));
        assert!(text.contains("Miles Away:2\t\tPrice/person:$15"));
    }

    #[test]
    fn test_limit() {
        let results: Vec<_> = (0..7).map(|i| result(&format!("Place {}", i))).collect();
        let text = render(&results, 5);

        assert!(text.contains("Place 4"));
        assert!(!text.contains("Place 5"));
        assert!(text.contains("... and 2 more"));
    }
}
