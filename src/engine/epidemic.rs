use crate::catalog::Catalog;
use crate::model::{DiseaseDef, Era, Region};

/// First available disease with an active epidemic for this exact
/// era/region pair and year. First match wins; there is no tie-break on
/// severity.
pub fn find_epidemic<'a>(
    available: &[&'a DiseaseDef],
    catalog: &Catalog,
    era: Era,
    region: Region,
    year: i32,
) -> Option<&'a DiseaseDef> {
    available.iter().copied().find(|d| {
        catalog
            .prevalence_for(&d.id, era, region)
            .is_some_and(|p| p.epidemic_years.contains(&year))
    })
}
