//! Cascading parent/dependent selector support.
//!
//! A cascading pair is a parent selector (country) and a dependent selector
//! (division) whose candidates are a filter of a larger reference map keyed
//! by the parent's id. Repopulating is the only operation the pattern needs;
//! concrete forms wire it to their parent-change handler and to initial
//! population.

use crate::lookup::LookupMap;

use super::controls::SelectBox;

/// Replaces the dependent selector's candidates with exactly the entries
/// whose parent id matches `parent_id`, sorted by display key.
///
/// Ties on the display key keep ascending id order (the sort is stable over
/// the map's iteration order). Any prior selection is cleared — after a
/// parent change a previously chosen dependent may no longer belong. The
/// selector is disabled when the candidate set is empty or the form is
/// read-only.
pub fn repopulate_dependents<D: Clone>(
    select: &mut SelectBox<D>,
    all: &LookupMap<D>,
    parent_id: u64,
    parent_of: impl Fn(&D) -> u64,
    display: impl Fn(&D) -> &str,
    read_only: bool,
) {
    let mut candidates: Vec<D> = all
        .values()
        .filter(|d| parent_of(d) == parent_id)
        .cloned()
        .collect();
    candidates.sort_by(|a, b| display(a).cmp(display(b)));

    let empty = candidates.is_empty();
    select.set_items(candidates);
    select.set_enabled(!read_only && !empty);
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::model::Division;

    use super::*;

    fn make_divisions() -> LookupMap<Division> {
        [
            (5, Division::new(5, "Ontario", 2)),
            (7, Division::new(7, "Alberta", 2)),
            (9, Division::new(9, "Quebec", 2)),
            (11, Division::new(11, "Vermont", 1)),
        ]
        .into_iter()
        .collect()
    }

    fn repopulate(select: &mut SelectBox<Division>, parent_id: u64, read_only: bool) {
        repopulate_dependents(
            select,
            &make_divisions(),
            parent_id,
            |d| d.country_id,
            |d| &d.name,
            read_only,
        );
    }

    #[test]
    fn candidates_are_filtered_and_sorted() {
        let mut select = SelectBox::new("division_box");
        repopulate(&mut select, 2, false);
        let names: Vec<&str> = select.items().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alberta", "Ontario", "Quebec"]);
        assert!(select.enabled());
    }

    #[test]
    fn empty_candidate_set_disables_selector() {
        let mut select = SelectBox::new("division_box");
        repopulate(&mut select, 99, false);
        assert!(select.items().is_empty());
        assert!(!select.enabled());
    }

    #[test]
    fn read_only_disables_selector_even_with_candidates() {
        let mut select = SelectBox::new("division_box");
        repopulate(&mut select, 2, true);
        assert_eq!(select.items().len(), 3);
        assert!(!select.enabled());
    }

    #[test]
    fn parent_change_clears_prior_selection() {
        let mut select = SelectBox::new("division_box");
        repopulate(&mut select, 2, false);
        assert!(select.select_by(|d| d.id == 7));
        repopulate(&mut select, 1, false);
        assert_eq!(select.selected(), None);
        let names: Vec<&str> = select.items().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Vermont"]);
    }

    #[test]
    fn duplicate_display_keys_keep_id_order() {
        let divisions: LookupMap<Division> = [
            (4, Division::new(4, "Springfield", 1)),
            (2, Division::new(2, "Springfield", 1)),
        ]
        .into_iter()
        .collect();
        let mut select = SelectBox::new("division_box");
        repopulate_dependents(&mut select, &divisions, 1, |d| d.country_id, |d| &d.name, false);
        let ids: Vec<u64> = select.items().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[quickcheck]
    fn candidates_match_parent_and_stay_sorted(parents: Vec<u8>, chosen: u8) -> bool {
        let divisions: LookupMap<Division> = parents
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let id = i as u64 + 1;
                (
                    id,
                    Division::new(id, format!("d{:03}", (i * 37) % 100), u64::from(p % 4)),
                )
            })
            .collect();
        let chosen = u64::from(chosen % 4);

        let mut select = SelectBox::new("division_box");
        repopulate_dependents(
            &mut select,
            &divisions,
            chosen,
            |d| d.country_id,
            |d| &d.name,
            false,
        );

        let items = select.items();
        let expected = divisions.values().filter(|d| d.country_id == chosen).count();
        items.len() == expected
            && items.iter().all(|d| d.country_id == chosen)
            && items.windows(2).all(|w| w[0].name <= w[1].name)
            && select.selected().is_none()
    }
}
