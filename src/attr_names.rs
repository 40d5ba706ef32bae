//! Names of public framework attributes (`android.R.attr`), used when a
//! document strips attribute names down to their resource id.

/// Sorted by id for binary search.
static ATTRIBUTE_NAMES: &[(u32, &str)] = &include!("attr_table.rs");

/// Look up the well-known name of a framework attribute id
pub fn attribute_name(id: u32) -> Option<&'static str> {
    ATTRIBUTE_NAMES
        .binary_search_by_key(&id, |(key, _)| *key)
        .ok()
        .map(|index| ATTRIBUTE_NAMES[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in ATTRIBUTE_NAMES.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "{:#x} must sort before {:#x}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(attribute_name(0x0101_0003), Some("name"));
        assert_eq!(attribute_name(0x0101_020c), Some("minSdkVersion"));
        assert_eq!(attribute_name(0x0101_021b), Some("versionCode"));
        assert_eq!(attribute_name(0x0101_0000), Some("theme"));
        assert_eq!(attribute_name(0x0101_057a), Some("appComponentFactory"));
        assert_eq!(attribute_name(0x0101_00f4), Some("layout_width"));
        assert_eq!(attribute_name(0x0101_0459), Some("layout_columnWeight"));
        assert_eq!(attribute_name(0x0101_03b5), Some("layout_marginStart"));
        assert_eq!(attribute_name(0x0101_0599), Some("foregroundServiceType"));
        assert_eq!(attribute_name(0x0101_063e), Some("dataExtractionRules"));
        assert_eq!(attribute_name(0x7f01_0000), None);
        assert_eq!(attribute_name(0), None);
    }
}
