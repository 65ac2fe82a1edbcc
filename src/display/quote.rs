//! Quote and favorite display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::FavoriteQuote;
use crate::services::quote::{CatalogQuote, FavoriteStats};

#[derive(Tabled)]
struct FavoriteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Quote")]
    text: String,
}

/// Format a catalog quote, marking it when it is already a favorite
pub fn format_catalog_quote(quote: &CatalogQuote, is_favorite: bool) -> String {
    format!(
        "\"{}\"\n  [{}]{}\n",
        quote.text,
        quote.id(),
        if is_favorite { " ★ favorite" } else { "" }
    )
}

/// Format favorites as a table
pub fn format_favorite_list(quotes: &[FavoriteQuote]) -> String {
    if quotes.is_empty() {
        return "No favorite quotes saved.".to_string();
    }

    let rows = quotes.iter().map(|q| FavoriteRow {
        id: q.id.to_string(),
        saved: q.saved_at.format("%Y-%m-%d").to_string(),
        text: q.text.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format favorite counts
pub fn format_favorite_stats(stats: &FavoriteStats) -> String {
    format!(
        "Favorites: {} ({} saved in the last week)",
        stats.total, stats.recent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteId;
    use crate::services::quote::catalog_quote;

    #[test]
    fn test_catalog_quote_marks_favorite() {
        let quote = catalog_quote(0).unwrap();
        assert!(format_catalog_quote(&quote, true).contains("★ favorite"));
        assert!(!format_catalog_quote(&quote, false).contains("favorite"));
        assert!(format_catalog_quote(&quote, false).contains("[q-0]"));
    }

    #[test]
    fn test_favorite_list() {
        assert_eq!(format_favorite_list(&[]), "No favorite quotes saved.");

        let quotes = vec![FavoriteQuote::new(QuoteId::new("q-4"), "Rest if you must.")];
        let output = format_favorite_list(&quotes);
        assert!(output.contains("q-4"));
        assert!(output.contains("Rest if you must."));
    }

    #[test]
    fn test_favorite_stats() {
        let output = format_favorite_stats(&FavoriteStats { total: 5, recent: 2 });
        assert_eq!(output, "Favorites: 5 (2 saved in the last week)");
    }
}
