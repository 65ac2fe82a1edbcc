//! Quote CLI commands
//!
//! Draw quotes from the catalog and manage favorites.

use chrono::Utc;
use clap::Subcommand;

use crate::display::quote::{format_catalog_quote, format_favorite_list, format_favorite_stats};
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::models::QuoteId;
use crate::services::quote::draw_quote;
use crate::services::FavoriteService;
use crate::storage::Storage;

/// Quote subcommands
#[derive(Subcommand)]
pub enum QuoteCommands {
    /// Show a random quote from the catalog
    Draw,
    /// Save a quote as a favorite
    Save {
        /// Catalog id (q-<n>) of the quote to save
        id: Option<String>,
        /// Save your own text instead of a catalog quote
        #[arg(short, long, conflicts_with = "id")]
        text: Option<String>,
    },
    /// Remove a favorite
    #[command(alias = "unsave")]
    Remove {
        /// Favorite id
        id: String,
    },
    /// List favorites
    List {
        /// Only show favorites containing this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a random favorite
    Random,
    /// Favorite counts
    Stats,
}

/// Handle a quote command
pub fn handle_quote_command(storage: &Storage, cmd: QuoteCommands) -> MoodfolioResult<()> {
    let service = FavoriteService::new(storage);
    let mut rng = rand::thread_rng();

    match cmd {
        QuoteCommands::Draw => {
            let quote = draw_quote(&mut rng);
            let saved = service.is_favorite(&quote.id())?;
            print!("{}", format_catalog_quote(&quote, saved));
            if !saved {
                println!("Save it with: moodfolio quote save {}", quote.id());
            }
        }

        QuoteCommands::Save { id, text } => {
            let favorite = match (id, text) {
                (_, Some(text)) => service.add_custom(&text)?,
                (Some(id), None) => {
                    let index = id
                        .strip_prefix("q-")
                        .and_then(|n| n.parse::<usize>().ok())
                        .ok_or_else(|| {
                            MoodfolioError::Validation(format!(
                                "'{}' is not a catalog id (expected q-<n>)",
                                id
                            ))
                        })?;
                    service.add_from_catalog(index)?
                }
                (None, None) => {
                    return Err(MoodfolioError::Validation(
                        "Give a catalog id or --text".into(),
                    ))
                }
            };
            println!("Saved favorite [{}]: {}", favorite.id, favorite.text);
        }

        QuoteCommands::Remove { id } => {
            if service.delete(&QuoteId::new(id.clone()))? {
                println!("Removed favorite {}", id);
            } else {
                println!("No favorite with id {}", id);
            }
        }

        QuoteCommands::List { search } => {
            let quotes = match search {
                Some(keyword) => service.search(&keyword)?,
                None => service.list()?,
            };
            println!("{}", format_favorite_list(&quotes));
        }

        QuoteCommands::Random => match service.random(&mut rng)? {
            Some(quote) => println!("\"{}\"\n  [{}]", quote.text, quote.id),
            None => println!("No favorite quotes saved."),
        },

        QuoteCommands::Stats => {
            println!("{}", format_favorite_stats(&service.stats(Utc::now())?));
        }
    }

    Ok(())
}
