use crate::catalog::Catalog;
use crate::model::{DiseaseDef, Era, Region};

/// Diseases legally present for an era/region/year.
///
/// A disease qualifies iff its era list contains the (remapped) era, its
/// region list contains the region, the year falls inside its optional
/// first/last window, and the Columbian Exchange rule does not exclude it
/// for this side of the ocean.
pub fn resolve(catalog: &Catalog, era: Era, region: Region, year: i32) -> Vec<&DiseaseDef> {
    catalog
        .diseases
        .iter()
        .filter(|d| {
            d.eras.contains(&era)
                && d.regions.contains(&region)
                && d.first_year.is_none_or(|first| year >= first)
                && d.last_year.is_none_or(|last| year <= last)
                && !catalog.exchange.excludes(&d.id, region, year)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&DiseaseDef]) -> Vec<String> {
        list.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn medieval_europe_has_the_plague() {
        let catalog = Catalog::builtin();
        let available = resolve(&catalog, Era::Medieval, Region::WesternEurope, 1348);
        assert!(ids(&available).contains(&"bubonic_plague".to_string()));
        // Cholera is not a medieval disease in the catalog.
        assert!(!ids(&available).contains(&"cholera".to_string()));
    }

    #[test]
    fn pre_contact_new_world_excludes_old_world_pool() {
        let catalog = Catalog::builtin();
        let available = resolve(&catalog, Era::Medieval, Region::Mesoamerica, 1400);
        let found = ids(&available);
        for id in &catalog.exchange.new_world_absent {
            assert!(!found.contains(id), "{id} leaked into the pre-contact New World");
        }
    }

    #[test]
    fn post_contact_new_world_admits_old_world_diseases() {
        let catalog = Catalog::builtin();
        let available = resolve(&catalog, Era::Colonial, Region::Mesoamerica, 1520);
        assert!(ids(&available).contains(&"smallpox".to_string()));
    }

    #[test]
    fn pre_contact_old_world_has_no_syphilis() {
        let catalog = Catalog::builtin();
        let before = resolve(&catalog, Era::Renaissance, Region::WesternEurope, 1490);
        assert!(!ids(&before).contains(&"syphilis".to_string()));
        let after = resolve(&catalog, Era::Renaissance, Region::WesternEurope, 1495);
        assert!(ids(&after).contains(&"syphilis".to_string()));
    }

    #[test]
    fn year_window_bounds_are_inclusive() {
        let catalog = Catalog::builtin();
        // Sweating sickness only exists 1485–1551.
        let in_window = resolve(&catalog, Era::Renaissance, Region::WesternEurope, 1485);
        assert!(ids(&in_window).contains(&"sweating_sickness".to_string()));
        let at_end = resolve(&catalog, Era::Renaissance, Region::WesternEurope, 1551);
        assert!(ids(&at_end).contains(&"sweating_sickness".to_string()));
        let after = resolve(&catalog, Era::Renaissance, Region::WesternEurope, 1552);
        assert!(!ids(&after).contains(&"sweating_sickness".to_string()));
    }

    #[test]
    fn region_list_filters() {
        let catalog = Catalog::builtin();
        // Malaria does not circulate in Western Europe in the catalog.
        let available = resolve(&catalog, Era::Medieval, Region::WesternEurope, 1300);
        assert!(!ids(&available).contains(&"malaria".to_string()));
        let med = resolve(&catalog, Era::Medieval, Region::Mediterranean, 1300);
        assert!(ids(&med).contains(&"malaria".to_string()));
    }
}
