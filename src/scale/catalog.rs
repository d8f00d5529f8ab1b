/// One named hydrophobicity scale: the public name used on the command line,
/// its AAindex accession, whether the published values run on an inverted
/// convention (high = hydrophilic), and the embedded 20-value data resource.
#[derive(Debug)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub aaindex_id: &'static str,
    pub inverted: bool,
    pub(crate) data: &'static str,
}

impl CatalogEntry {
    /// File name used when loading from a scales directory instead of the
    /// embedded resource.
    pub fn file_name(&self) -> String {
        format!("{}.dat", self.aaindex_id)
    }
}

/// The fixed scale catalog. Inverted scales are flipped during
/// normalization so that 1.0 always means most hydrophobic.
pub static CATALOG: [CatalogEntry; 19] = [
    CatalogEntry {
        name: "Argos",
        aaindex_id: "ARGP820101",
        inverted: false,
        data: include_str!("../../data/scales/ARGP820101.dat"),
    },
    CatalogEntry {
        name: "Black",
        aaindex_id: "BLAS910101",
        inverted: false,
        data: include_str!("../../data/scales/BLAS910101.dat"),
    },
    CatalogEntry {
        name: "Casari",
        aaindex_id: "CASG920101",
        inverted: false,
        data: include_str!("../../data/scales/CASG920101.dat"),
    },
    CatalogEntry {
        name: "Cid",
        aaindex_id: "CIDH920105",
        inverted: false,
        data: include_str!("../../data/scales/CIDH920105.dat"),
    },
    CatalogEntry {
        name: "Eisenberg",
        aaindex_id: "EISD840101",
        inverted: false,
        data: include_str!("../../data/scales/EISD840101.dat"),
    },
    CatalogEntry {
        name: "Engelman",
        aaindex_id: "ENGD860101",
        inverted: true,
        data: include_str!("../../data/scales/ENGD860101.dat"),
    },
    CatalogEntry {
        name: "Fasman",
        aaindex_id: "FASG890101",
        inverted: true,
        data: include_str!("../../data/scales/FASG890101.dat"),
    },
    CatalogEntry {
        name: "Fauchere",
        aaindex_id: "FAUJ830101",
        inverted: false,
        data: include_str!("../../data/scales/FAUJ830101.dat"),
    },
    CatalogEntry {
        name: "Goldsack",
        aaindex_id: "GOLD730101",
        inverted: false,
        data: include_str!("../../data/scales/GOLD730101.dat"),
    },
    CatalogEntry {
        name: "Hopp",
        aaindex_id: "HOPT810101",
        inverted: true,
        data: include_str!("../../data/scales/HOPT810101.dat"),
    },
    CatalogEntry {
        name: "Jones",
        aaindex_id: "JOND750101",
        inverted: false,
        data: include_str!("../../data/scales/JOND750101.dat"),
    },
    CatalogEntry {
        name: "Kyte",
        aaindex_id: "KYTJ820101",
        inverted: false,
        data: include_str!("../../data/scales/KYTJ820101.dat"),
    },
    CatalogEntry {
        name: "Levitt",
        aaindex_id: "LEVM760101",
        inverted: true,
        data: include_str!("../../data/scales/LEVM760101.dat"),
    },
    CatalogEntry {
        name: "Ponnuswamy",
        aaindex_id: "PONP930101",
        inverted: false,
        data: include_str!("../../data/scales/PONP930101.dat"),
    },
    CatalogEntry {
        name: "Prabhakaran",
        aaindex_id: "PRAM900101",
        inverted: true,
        data: include_str!("../../data/scales/PRAM900101.dat"),
    },
    CatalogEntry {
        name: "Radzicka",
        aaindex_id: "RADA880108",
        inverted: false,
        data: include_str!("../../data/scales/RADA880108.dat"),
    },
    CatalogEntry {
        name: "Rose",
        aaindex_id: "ROSG850102",
        inverted: false,
        data: include_str!("../../data/scales/ROSG850102.dat"),
    },
    CatalogEntry {
        name: "Wolfenden",
        aaindex_id: "WOLR790101",
        inverted: false,
        data: include_str!("../../data/scales/WOLR790101.dat"),
    },
    CatalogEntry {
        name: "Zimmerman",
        aaindex_id: "ZIMJ680101",
        inverted: false,
        data: include_str!("../../data/scales/ZIMJ680101.dat"),
    },
];

/// Look up a catalog entry by its public name. Case-sensitive.
pub(crate) fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Names of all scales in the catalog, in catalog order.
pub fn scale_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_scales() {
        let kyte = find("Kyte").unwrap();
        assert_eq!(kyte.aaindex_id, "KYTJ820101");
        assert!(!kyte.inverted);

        let hopp = find("Hopp").unwrap();
        assert_eq!(hopp.aaindex_id, "HOPT810101");
        assert!(hopp.inverted);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert!(find("kyte").is_none());
        assert!(find("KYTE").is_none());
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("Doolittle").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_catalog_size_and_inversions() {
        assert_eq!(CATALOG.len(), 19);
        let inverted: Vec<&str> = CATALOG
            .iter()
            .filter(|entry| entry.inverted)
            .map(|entry| entry.name)
            .collect();
        assert_eq!(
            inverted,
            vec!["Engelman", "Fasman", "Hopp", "Levitt", "Prabhakaran"]
        );
    }

    #[test]
    fn test_file_names_follow_accession() {
        assert_eq!(find("Rose").unwrap().file_name(), "ROSG850102.dat");
    }
}
