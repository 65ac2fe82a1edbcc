//! Fortune service
//!
//! Draws a daily fortune from a weighted catalog and pins it to a date. A
//! redraw that lands on exactly the previous result is retried once; the
//! second result is kept whatever it is.

use chrono::{NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::audit::EntityType;
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::models::fortune::{LUCKY_NUMBER_MAX, LUCKY_NUMBER_MIN};
use crate::models::{Fortune, FortuneEntry, FortuneLevel, LuckyColor, LuckyItem};
use crate::storage::Storage;

/// Pick an index with probability `weights[i] / sum(weights)`.
///
/// Draws `r` from `1..=total` and walks the weights in order, subtracting
/// each one; the first index where `r` drops to zero or below wins. Returns
/// `None` when the weights sum to zero.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[u32], rng: &mut R) -> Option<usize> {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return None;
    }

    let mut r = rng.gen_range(1..=total) as i64;
    for (index, &weight) in weights.iter().enumerate() {
        r -= i64::from(weight);
        if r <= 0 {
            return Some(index);
        }
    }

    // Unreachable while r <= total
    Some(weights.len() - 1)
}

/// One level in the catalog
#[derive(Debug, Clone)]
pub struct LevelSpec {
    pub level: FortuneLevel,
    pub weight: u32,
    /// Display color for the level
    pub color: String,
    pub interpretations: Vec<String>,
}

/// Everything a draw picks from
#[derive(Debug, Clone)]
pub struct FortuneCatalog {
    levels: Vec<LevelSpec>,
    colors: Vec<LuckyColor>,
    items: Vec<LuckyItem>,
    directions: Vec<String>,
}

impl FortuneCatalog {
    /// Build a catalog, checking that every pool can be drawn from
    pub fn new(
        levels: Vec<LevelSpec>,
        colors: Vec<LuckyColor>,
        items: Vec<LuckyItem>,
        directions: Vec<String>,
    ) -> MoodfolioResult<Self> {
        if levels.is_empty() {
            return Err(MoodfolioError::Validation("Fortune catalog has no levels".into()));
        }
        if let Some(bad) = levels.iter().find(|s| s.weight == 0) {
            return Err(MoodfolioError::Validation(format!(
                "Fortune level {} has zero weight",
                bad.level.label()
            )));
        }
        if let Some(bad) = levels.iter().find(|s| s.interpretations.is_empty()) {
            return Err(MoodfolioError::Validation(format!(
                "Fortune level {} has no interpretations",
                bad.level.label()
            )));
        }
        if colors.is_empty() || items.is_empty() || directions.is_empty() {
            return Err(MoodfolioError::Validation(
                "Fortune catalog needs at least one color, item, and direction".into(),
            ));
        }

        Ok(Self {
            levels,
            colors,
            items,
            directions,
        })
    }

    /// Levels in draw order
    pub fn levels(&self) -> &[LevelSpec] {
        &self.levels
    }

    /// Draw a fortune
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Fortune {
        let weights: Vec<u32> = self.levels.iter().map(|s| s.weight).collect();
        let chosen = weighted_index(&weights, rng)
            .and_then(|i| self.levels.get(i))
            .unwrap_or(&self.levels[self.levels.len() - 1]);

        Fortune {
            level: chosen.level,
            color: chosen.color.clone(),
            interpretation: pick(&chosen.interpretations, rng),
            lucky_color: pick(&self.colors, rng),
            lucky_number: rng.gen_range(LUCKY_NUMBER_MIN..=LUCKY_NUMBER_MAX),
            lucky_item: pick(&self.items, rng),
            lucky_direction: pick(&self.directions, rng),
            drawn_at: Utc::now(),
        }
    }
}

// Pools are checked non-empty in `FortuneCatalog::new`
fn pick<T: Clone, R: Rng + ?Sized>(pool: &[T], rng: &mut R) -> T {
    pool.choose(rng).cloned().unwrap_or_else(|| pool[0].clone())
}

impl Default for FortuneCatalog {
    fn default() -> Self {
        let level = |level, weight, color: &str, lines: &[&str]| LevelSpec {
            level,
            weight,
            color: color.to_string(),
            interpretations: lines.iter().map(|s| s.to_string()).collect(),
        };
        let color = |name: &str, hex: &str| LuckyColor {
            name: name.to_string(),
            hex: hex.to_string(),
        };
        let item = |item: &str, suggestion: &str| LuckyItem {
            item: item.to_string(),
            suggestion: suggestion.to_string(),
        };

        Self {
            levels: vec![
                level(
                    FortuneLevel::GreatBlessing,
                    10,
                    "#dc2626",
                    &[
                        "Everything lines up today. Start the thing you have been putting off.",
                        "Good news is on its way. Share it with someone close.",
                        "Your effort pays off in a visible way today.",
                    ],
                ),
                level(
                    FortuneLevel::Blessing,
                    20,
                    "#ea580c",
                    &[
                        "Steady progress. Keep the pace you have set.",
                        "A conversation today opens a useful door.",
                        "Small kindness returns to you twice over.",
                    ],
                ),
                level(
                    FortuneLevel::SmallBlessing,
                    25,
                    "#ca8a04",
                    &[
                        "Little wins add up. Notice them.",
                        "A quiet day with a pleasant surprise near the end.",
                        "Tidy one corner of your life and feel lighter.",
                    ],
                ),
                level(
                    FortuneLevel::Neutral,
                    25,
                    "#16a34a",
                    &[
                        "An ordinary day. Ordinary is a fine place to rest.",
                        "Nothing pushes you either way. Choose your own direction.",
                        "Keep to your routine and the day keeps to you.",
                    ],
                ),
                level(
                    FortuneLevel::Misfortune,
                    15,
                    "#2563eb",
                    &[
                        "Double-check before you send. Haste costs more than it saves.",
                        "Plans may slip. Leave room in your schedule.",
                        "Be gentle with yourself if things go sideways.",
                    ],
                ),
                level(
                    FortuneLevel::GreatMisfortune,
                    5,
                    "#7c3aed",
                    &[
                        "Lie low and avoid big decisions. Tomorrow looks brighter.",
                        "Setbacks are temporary. Rest, then try again.",
                    ],
                ),
            ],
            colors: vec![
                color("Crimson", "#dc143c"),
                color("Sky blue", "#87ceeb"),
                color("Forest green", "#228b22"),
                color("Sunflower", "#ffc512"),
                color("Lavender", "#b57edc"),
                color("Coral", "#ff7f50"),
                color("Ivory", "#fffff0"),
                color("Charcoal", "#36454f"),
            ],
            items: vec![
                item("Notebook", "Write down one thing you are grateful for."),
                item("Houseplant", "Water it and take a slow breath."),
                item("Headphones", "Put on a song you loved years ago."),
                item("Umbrella", "Carry it even if the sky looks clear."),
                item("Tea", "Brew a cup and drink it without a screen."),
                item("Sneakers", "Take a ten-minute walk outside."),
                item("Postcard", "Send a note to an old friend."),
                item("Key ring", "Clear out what you no longer need."),
            ],
            directions: ["East", "South", "West", "North", "Northeast", "Southeast", "Southwest", "Northwest"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Service for daily fortunes
pub struct FortuneService<'a> {
    storage: &'a Storage,
    catalog: FortuneCatalog,
}

impl<'a> FortuneService<'a> {
    /// Create a fortune service using the built-in catalog
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_catalog(storage, FortuneCatalog::default())
    }

    /// Create a fortune service with a custom catalog
    pub fn with_catalog(storage: &'a Storage, catalog: FortuneCatalog) -> Self {
        Self { storage, catalog }
    }

    /// The catalog draws come from
    pub fn catalog(&self) -> &FortuneCatalog {
        &self.catalog
    }

    /// Draw a fortune and store it as the entry for `date`
    pub fn draw<R: Rng + ?Sized>(&self, date: NaiveDate, rng: &mut R) -> MoodfolioResult<FortuneEntry> {
        let fortune = self.catalog.draw(rng);
        self.save(fortune.into_entry(date))
    }

    /// Draw again for `date`.
    ///
    /// If the new result has the same outcome as the stored one, draws exactly
    /// once more and keeps that result.
    pub fn redraw<R: Rng + ?Sized>(&self, date: NaiveDate, rng: &mut R) -> MoodfolioResult<FortuneEntry> {
        let previous = self.storage.fortunes.get(date)?.map(|e| e.to_fortune());

        let mut fortune = self.catalog.draw(rng);
        if previous.as_ref().is_some_and(|p| p.same_outcome(&fortune)) {
            log::debug!("Redraw repeated the previous fortune; drawing once more");
            fortune = self.catalog.draw(rng);
        }

        self.save(fortune.into_entry(date))
    }

    /// Store an entry, replacing any entry for the same date
    pub fn save(&self, entry: FortuneEntry) -> MoodfolioResult<FortuneEntry> {
        entry.validate().map_err(MoodfolioError::Validation)?;

        let replaced = self.storage.fortunes.upsert(entry.clone())?;
        self.storage.fortunes.save()?;

        let id = entry.date.to_string();
        let name = Some(entry.level.label().to_string());
        match replaced {
            Some(before) => {
                self.storage
                    .log_update(EntityType::FortuneEntry, id, name, &before, &entry)?
            }
            None => self.storage.log_create(EntityType::FortuneEntry, id, name, &entry)?,
        }

        Ok(entry)
    }

    /// The stored fortune for a date
    pub fn get(&self, date: NaiveDate) -> MoodfolioResult<Option<FortuneEntry>> {
        self.storage.fortunes.get(date)
    }

    /// All stored fortunes in insertion order
    pub fn list(&self) -> MoodfolioResult<Vec<FortuneEntry>> {
        self.storage.fortunes.get_all()
    }

    /// Delete the fortune for a date. Returns whether one existed.
    pub fn delete(&self, date: NaiveDate) -> MoodfolioResult<bool> {
        let Some(removed) = self.storage.fortunes.delete(date)? else {
            return Ok(false);
        };
        self.storage.fortunes.save()?;
        self.storage.log_delete(
            EntityType::FortuneEntry,
            date.to_string(),
            Some(removed.level.label().to_string()),
            &removed,
        )?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoodfolioPaths;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn single_outcome_catalog() -> FortuneCatalog {
        FortuneCatalog::new(
            vec![LevelSpec {
                level: FortuneLevel::Neutral,
                weight: 1,
                color: "#16a34a".into(),
                interpretations: vec!["only".into()],
            }],
            vec![LuckyColor {
                name: "Ivory".into(),
                hex: "#fffff0".into(),
            }],
            vec![LuckyItem {
                item: "Tea".into(),
                suggestion: "Sip".into(),
            }],
            vec!["East".into()],
        )
        .unwrap()
    }

    #[test]
    fn test_weighted_index_frequencies_converge() {
        let weights = [10u32, 20, 25, 25, 15, 5];
        let total: u32 = weights.iter().sum();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 6];
        let samples = 200_000;

        for _ in 0..samples {
            counts[weighted_index(&weights, &mut rng).unwrap()] += 1;
        }

        for (i, &w) in weights.iter().enumerate() {
            let expected = f64::from(w) / f64::from(total);
            let observed = counts[i] as f64 / samples as f64;
            assert!(
                (expected - observed).abs() < 0.01,
                "level {}: expected {:.3}, observed {:.3}",
                i,
                expected,
                observed
            );
        }
    }

    #[test]
    fn test_weighted_index_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_index(&[], &mut rng), None);
        assert_eq!(weighted_index(&[0, 0], &mut rng), None);
        for _ in 0..100 {
            assert_eq!(weighted_index(&[0, 3, 0], &mut rng), Some(1));
        }
    }

    #[test]
    fn test_catalog_rejects_empty_pools() {
        let err = FortuneCatalog::new(vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, MoodfolioError::Validation(_)));

        let zero_weight = LevelSpec {
            level: FortuneLevel::Neutral,
            weight: 0,
            color: "#000".into(),
            interpretations: vec!["x".into()],
        };
        assert!(FortuneCatalog::new(vec![zero_weight], vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn test_default_catalog_covers_all_levels() {
        let catalog = FortuneCatalog::default();
        let levels: Vec<_> = catalog.levels().iter().map(|s| s.level).collect();
        assert_eq!(levels, FortuneLevel::all());
    }

    #[test]
    fn test_draw_fields_in_range() {
        let catalog = FortuneCatalog::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let fortune = catalog.draw(&mut rng);
            assert!((1..=99).contains(&fortune.lucky_number));
            let chosen = catalog
                .levels()
                .iter()
                .find(|s| s.level == fortune.level)
                .unwrap();
            assert!(chosen.interpretations.contains(&fortune.interpretation));
            assert_eq!(chosen.color, fortune.color);
        }
    }

    #[test]
    fn test_draw_persists_for_date() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FortuneService::new(&storage);
        let mut rng = StdRng::seed_from_u64(3);
        let d = date("2024-03-10");

        let first = service.draw(d, &mut rng).unwrap();
        assert_eq!(service.get(d).unwrap(), Some(first));

        let second = service.draw(d, &mut rng).unwrap();
        assert_eq!(service.get(d).unwrap(), Some(second));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_redraw_differs_from_previous_with_default_catalog() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FortuneService::new(&storage);
        let mut rng = StdRng::seed_from_u64(11);
        let d = date("2024-03-10");

        let mut previous = service.draw(d, &mut rng).unwrap().to_fortune();
        for _ in 0..200 {
            let next = service.redraw(d, &mut rng).unwrap().to_fortune();
            assert!(!next.same_outcome(&previous));
            previous = next;
        }
    }

    #[test]
    fn test_redraw_accepts_repeat_when_pool_has_one_outcome() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FortuneService::with_catalog(&storage, single_outcome_catalog());
        let mut rng = StdRng::seed_from_u64(5);
        let d = date("2024-03-10");

        service.draw(d, &mut rng).unwrap();

        // Retry is bounded: the call returns even if every draw matches
        let redrawn = service.redraw(d, &mut rng).unwrap();
        assert_eq!(redrawn.level, FortuneLevel::Neutral);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_redraw_without_previous_is_a_draw() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FortuneService::new(&storage);
        let mut rng = StdRng::seed_from_u64(9);
        let d = date("2024-03-11");

        let entry = service.redraw(d, &mut rng).unwrap();
        assert_eq!(entry.date, d);
        assert!(service.get(d).unwrap().is_some());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FortuneService::new(&storage);
        let mut rng = StdRng::seed_from_u64(2);
        let d = date("2024-03-10");

        assert!(!service.delete(d).unwrap());
        service.draw(d, &mut rng).unwrap();
        assert!(service.delete(d).unwrap());
        assert!(service.get(d).unwrap().is_none());
    }
}
