//! The release catalog index

use indexmap::IndexMap;

use crate::catalog::entry::CatalogEntry;
use crate::catalog::error::CatalogError;

/// Immutable table of known IDE releases
///
/// Dual-keyed: [`Catalog::lookup`] accepts a marketing version ("2024.3") or
/// a bare branch number ("243") and resolves both to the same entry. Entries
/// are held sorted by build number ascending. Built once, read-only
/// afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_marketing: IndexMap<String, usize>,
    by_branch: IndexMap<u32, usize>,
}

impl Catalog {
    /// Build the catalog from a list of entries
    ///
    /// Fails fast on a wildcard build number, a duplicate branch, or a
    /// duplicate marketing version; bad entries are never silently dropped.
    pub fn new(mut entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        entries.sort_by(|a, b| a.build_number.cmp(&b.build_number));

        let mut by_marketing = IndexMap::with_capacity(entries.len());
        let mut by_branch: IndexMap<u32, usize> = IndexMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            // Releases are shipped builds; wildcards belong only in
            // declarations.
            if !entry.build_number.is_concrete() {
                return Err(CatalogError::WildcardBuildNumber {
                    version: entry.marketing_version.clone(),
                    build: entry.build_number.to_string(),
                });
            }
            if let Some(&existing) = by_branch.get(&entry.build_number.branch()) {
                return Err(CatalogError::DuplicateBranch {
                    branch: entry.build_number.branch(),
                    first: entries[existing].marketing_version.clone(),
                    second: entry.marketing_version.clone(),
                });
            }
            if by_marketing
                .insert(entry.marketing_version.clone(), index)
                .is_some()
            {
                return Err(CatalogError::DuplicateMarketingVersion(
                    entry.marketing_version.clone(),
                ));
            }
            by_branch.insert(entry.build_number.branch(), index);
        }

        Ok(Self {
            entries,
            by_marketing,
            by_branch,
        })
    }

    /// Resolve a marketing version or a bare branch number to its entry
    ///
    /// Failure means "cannot verify", not "incompatible".
    pub fn lookup(&self, version: &str) -> Result<&CatalogEntry, CatalogError> {
        let key = version.trim();
        if let Some(&index) = self.by_marketing.get(key) {
            return Ok(&self.entries[index]);
        }
        if let Ok(branch) = key.parse::<u32>() {
            if let Some(&index) = self.by_branch.get(&branch) {
                return Ok(&self.entries[index]);
            }
        }
        Err(CatalogError::UnknownVersion(version.to_string()))
    }

    /// Entries sorted by build number ascending
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BuildNumber;
    use chrono::NaiveDate;

    fn entry(marketing: &str, branch: u32, build: u32, fix: u32) -> CatalogEntry {
        CatalogEntry {
            marketing_version: marketing.to_string(),
            build_number: BuildNumber::new(branch, build, fix),
            release_date: NaiveDate::from_ymd_opt(2024, 11, 12).unwrap(),
            recommended_toolchain: "JDK 21".to_string(),
        }
    }

    #[test]
    fn new_sorts_entries_by_build_number() {
        let catalog = Catalog::new(vec![
            entry("2025.1", 251, 23774, 435),
            entry("2024.3", 243, 21565, 193),
            entry("2024.2", 242, 20224, 300),
        ])
        .unwrap();

        let branches: Vec<u32> = catalog
            .entries()
            .iter()
            .map(|e| e.build_number.branch())
            .collect();
        assert_eq!(branches, vec![242, 243, 251]);
    }

    #[test]
    fn new_rejects_wildcard_build_numbers() {
        let mut wildcard = entry("2024.3", 243, 0, 0);
        wildcard.build_number = BuildNumber::parse_until("243.*").unwrap();

        let result = Catalog::new(vec![wildcard]);

        assert!(matches!(
            result,
            Err(CatalogError::WildcardBuildNumber { version, .. }) if version == "2024.3"
        ));
    }

    #[test]
    fn new_rejects_duplicate_branch() {
        let result = Catalog::new(vec![
            entry("2024.3", 243, 21565, 193),
            entry("2024.3 EAP", 243, 20000, 0),
        ]);

        match result {
            Err(CatalogError::DuplicateBranch {
                branch,
                first,
                second,
            }) => {
                assert_eq!(branch, 243);
                // Sorted by build number, so the EAP build comes first.
                assert_eq!(first, "2024.3 EAP");
                assert_eq!(second, "2024.3");
            }
            other => panic!("expected DuplicateBranch, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_duplicate_marketing_version() {
        let result = Catalog::new(vec![
            entry("2024.3", 243, 21565, 193),
            entry("2024.3", 244, 1, 0),
        ]);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateMarketingVersion(version)) if version == "2024.3"
        ));
    }

    #[test]
    fn lookup_resolves_marketing_version_and_branch_to_the_same_entry() {
        let catalog = Catalog::new(vec![
            entry("2024.3", 243, 21565, 193),
            entry("2025.1", 251, 23774, 435),
        ])
        .unwrap();

        let by_marketing = catalog.lookup("2024.3").unwrap();
        let by_branch = catalog.lookup("243").unwrap();
        assert_eq!(by_marketing, by_branch);
        assert_eq!(by_marketing.build_number, BuildNumber::new(243, 21565, 193));
    }

    #[test]
    fn lookup_trims_its_input() {
        let catalog = Catalog::new(vec![entry("2024.3", 243, 21565, 193)]).unwrap();
        assert!(catalog.lookup(" 243 ").is_ok());
    }

    #[test]
    fn lookup_fails_for_unknown_version() {
        let catalog = Catalog::new(vec![entry("2024.3", 243, 21565, 193)]).unwrap();

        assert!(matches!(
            catalog.lookup("2077.1"),
            Err(CatalogError::UnknownVersion(version)) if version == "2077.1"
        ));
    }

    #[test]
    fn empty_catalog_is_valid_but_resolves_nothing() {
        let catalog = Catalog::new(vec![]).unwrap();

        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.lookup("243"),
            Err(CatalogError::UnknownVersion(_))
        ));
    }
}
