use crate::db::tables::select_rows;
use crate::errors::{AppError, AppResult};
use crate::models::drill::{DRILLS_TABLE, Drill};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// Category selector value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

pub struct DrillLogic;

impl DrillLogic {
    /// Load every drill row from the database.
    pub fn load(db_path: &str) -> AppResult<Vec<Drill>> {
        select_rows(db_path, DRILLS_TABLE, None, false)?
            .iter()
            .map(|row| Drill::from_row(row))
            .collect()
    }

    /// Selector options: "all" first, then the distinct categories, sorted.
    pub fn categories(drills: &[Drill]) -> Vec<String> {
        let distinct: BTreeSet<&str> = drills
            .iter()
            .map(|d| d.class.as_str())
            .filter(|c| *c != ALL_CATEGORIES)
            .collect();

        std::iter::once(ALL_CATEGORIES)
            .chain(distinct)
            .map(str::to_string)
            .collect()
    }

    pub fn filter<'a>(drills: &'a [Drill], category: &str) -> Vec<&'a Drill> {
        drills
            .iter()
            .filter(|d| category == ALL_CATEGORIES || d.class == category)
            .collect()
    }

    /// Pick one drill uniformly at random from `category`.
    pub fn pick<'a, G: Rng + ?Sized>(
        drills: &'a [Drill],
        category: &str,
        rng: &mut G,
    ) -> AppResult<&'a Drill> {
        Self::filter(drills, category)
            .choose(rng)
            .copied()
            .ok_or_else(|| AppError::NoDrills(category.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn drill(class: &str, from: &str) -> Drill {
        Drill {
            class: class.to_string(),
            from: from.to_string(),
            instruction: format!("work from {from}"),
        }
    }

    fn population() -> Vec<Drill> {
        vec![
            drill("escapes", "mount"),
            drill("escapes", "side control"),
            drill("passing", "closed guard"),
            drill("passing", "half guard"),
            drill("sweeps", "butterfly"),
            drill("sweeps", "de la riva"),
        ]
    }

    #[test]
    fn categories_start_with_all_and_are_distinct() {
        assert_eq!(
            DrillLogic::categories(&population()),
            vec!["all", "escapes", "passing", "sweeps"]
        );
        assert_eq!(DrillLogic::categories(&[]), vec!["all"]);
    }

    #[test]
    fn all_samples_the_whole_population() {
        let drills = population();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..500)
            .map(|_| DrillLogic::pick(&drills, ALL_CATEGORIES, &mut rng).unwrap())
            .map(|d| d.class.as_str())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn category_restricts_the_pick() {
        let drills = population();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let d = DrillLogic::pick(&drills, "passing", &mut rng).unwrap();
            assert_eq!(d.class, "passing");
        }
    }

    #[test]
    fn empty_selection_is_an_error() {
        let drills = population();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            DrillLogic::pick(&drills, "takedowns", &mut rng),
            Err(AppError::NoDrills(c)) if c == "takedowns"
        ));
        assert!(DrillLogic::pick(&[], ALL_CATEGORIES, &mut rng).is_err());
    }
}
