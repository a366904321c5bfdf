//! Stem derivation rules.
//!
//! The month stem follows from the year stem (五虎遁) and the hour stem from
//! the day stem (五鼠遁). Both are pure index arithmetic: year/day stems pair
//! up five apart (甲己, 乙庚, ...) and each pair fixes a starting stem, from
//! which the result advances one step per branch.

use crate::branch::Branch;
use crate::stem::Stem;

/// Month stem for a month branch in a year with the given stem (Five-Tiger).
///
/// The 寅 month of a 甲 or 己 year is 丙寅; months count from 寅.
pub fn derive_month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    let start = (year_stem.index() % 5) as i64 * 2 + 2;
    let months_from_yin = (month_branch.index() as i64 - 2).rem_euclid(12);
    Stem::wrapping(start + months_from_yin)
}

/// Hour stem for an hour branch on a day with the given stem (Five-Rat).
///
/// The 子 hour of a 甲 or 己 day is 甲子; hours count from 子.
pub fn derive_hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    let start = (day_stem.index() % 5) as i64 * 2;
    Stem::wrapping(start + hour_branch.index() as i64)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::polarity::Polarity;

    // Rows by year-stem group, columns 寅 through 丑.
    const FIVE_TIGER: [&str; 5] = [
        "丙丁戊己庚辛壬癸甲乙丙丁",
        "戊己庚辛壬癸甲乙丙丁戊己",
        "庚辛壬癸甲乙丙丁戊己庚辛",
        "壬癸甲乙丙丁戊己庚辛壬癸",
        "甲乙丙丁戊己庚辛壬癸甲乙",
    ];

    // Rows by day-stem group, columns 子 through 亥.
    const FIVE_RAT: [&str; 5] = [
        "甲乙丙丁戊己庚辛壬癸甲乙",
        "丙丁戊己庚辛壬癸甲乙丙丁",
        "戊己庚辛壬癸甲乙丙丁戊己",
        "庚辛壬癸甲乙丙丁戊己庚辛",
        "壬癸甲乙丙丁戊己庚辛壬癸",
    ];

    #[test]
    fn known_pairs() {
        assert_eq!(derive_month_stem(Stem::Jia, Branch::Yin), Stem::Bing);
        assert_eq!(derive_month_stem(Stem::Yi, Branch::Yin), Stem::Wu);
        assert_eq!(derive_month_stem(Stem::Ding, Branch::Yin), Stem::Ren);
        assert_eq!(derive_month_stem(Stem::Wu, Branch::Yin), Stem::Jia);
        assert_eq!(derive_month_stem(Stem::Jia, Branch::Zi), Stem::Bing);
        assert_eq!(derive_hour_stem(Stem::Jia, Branch::Zi), Stem::Jia);
        assert_eq!(derive_hour_stem(Stem::Gui, Branch::Hai), Stem::Gui);
    }

    #[test]
    fn five_tiger_table() {
        for year in Stem::ALL {
            let row: Vec<char> = FIVE_TIGER[year.index() % 5].chars().collect();
            for (col, &glyph) in row.iter().enumerate() {
                let branch = Branch::wrapping(col as i64 + 2);
                assert_eq!(
                    derive_month_stem(year, branch).glyph(),
                    glyph,
                    "{year} year, {branch} month"
                );
            }
        }
    }

    #[test]
    fn five_rat_table() {
        for day in Stem::ALL {
            let row: Vec<char> = FIVE_RAT[day.index() % 5].chars().collect();
            for (col, &glyph) in row.iter().enumerate() {
                let branch = Branch::wrapping(col as i64);
                assert_eq!(
                    derive_hour_stem(day, branch).glyph(),
                    glyph,
                    "{day} day, {branch} hour"
                );
            }
        }
    }

    fn any_stem() -> impl Strategy<Value = Stem> {
        (0usize..10).prop_map(|i| Stem::ALL[i])
    }

    fn any_branch() -> impl Strategy<Value = Branch> {
        (0usize..12).prop_map(|i| Branch::ALL[i])
    }

    proptest! {
        #[test]
        fn derived_stem_shares_branch_polarity(stem in any_stem(), branch in any_branch()) {
            prop_assert_eq!(derive_month_stem(stem, branch).polarity(), branch.polarity());
            prop_assert_eq!(derive_hour_stem(stem, branch).polarity(), branch.polarity());
        }

        #[test]
        fn derivation_is_deterministic(stem in any_stem(), branch in any_branch()) {
            prop_assert_eq!(derive_month_stem(stem, branch), derive_month_stem(stem, branch));
            prop_assert_eq!(derive_hour_stem(stem, branch), derive_hour_stem(stem, branch));
        }

        #[test]
        fn six_branches_cover_five_stems(stem in any_stem(), yang in any::<bool>()) {
            let polarity = if yang { Polarity::Yang } else { Polarity::Yin };
            let months: HashSet<Stem> = Branch::with_polarity(polarity)
                .map(|b| derive_month_stem(stem, b))
                .collect();
            let hours: HashSet<Stem> = Branch::with_polarity(polarity)
                .map(|b| derive_hour_stem(stem, b))
                .collect();
            prop_assert_eq!(months.len(), 5);
            prop_assert_eq!(hours.len(), 5);
            prop_assert!(months.iter().all(|s| s.polarity() == polarity));
        }
    }
}
