//! Product Catalogs
//!
//! Fixed option lists used by the station, rodent and fumigation forms.

/// A registered product and its L number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub title: &'static str,
    pub l_number: &'static str,
}

const fn product(title: &'static str, l_number: &'static str) -> Product {
    Product { title, l_number }
}

pub const POISONS: &[Product] = &[
    product("Rodenthor Block", "L9396"),
    product("Supa Kill - Rat & Mouse Weatbait", "L5198"),
    product("Supa kill block", "L6325"),
    product("Bayer Racumin Tracking Powder", "L2800"),
];

pub const NON_POISONS: &[Product] = &[product("Supa Kill - Rat & Mouse Block", "RDT1008")];

pub const LIQUIDS: &[Product] = &[product("Supa Kill Rat & Mouse Liquid", "L5987")];

pub const SERVICE_CHEMICALS: &[Product] = &[
    product("Alphathrin", "L7850"),
    product("Roach Force", "L8652"),
    product("Flushing Agent", "L4970"),
    product("Bandit 350, SC", "L8001"),
    product("Fly Bait", "L7579"),
];

/// Selection value meaning "not in the catalog"
pub const OTHER: &str = "other";

/// Station bait category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoisonType {
    Poison,
    NonPoison,
    Liquid,
    Other,
}

impl PoisonType {
    pub const ALL: [PoisonType; 4] = [
        PoisonType::Poison,
        PoisonType::NonPoison,
        PoisonType::Liquid,
        PoisonType::Other,
    ];

    /// Wire value for `station_poison_type`
    pub fn as_str(self) -> &'static str {
        match self {
            PoisonType::Poison => "poison",
            PoisonType::NonPoison => "non-poison",
            PoisonType::Liquid => "liquid",
            PoisonType::Other => OTHER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PoisonType::Poison => "Poison",
            PoisonType::NonPoison => "Non Poison",
            PoisonType::Liquid => "Liquid Based",
            PoisonType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Products offered for this type; empty for `Other`
    pub fn products(self) -> &'static [Product] {
        match self {
            PoisonType::Poison => POISONS,
            PoisonType::NonPoison => NON_POISONS,
            PoisonType::Liquid => LIQUIDS,
            PoisonType::Other => &[],
        }
    }
}

/// L number for any station product title, empty when unknown
pub fn station_l_number(title: &str) -> &'static str {
    find_l_number(POISONS.iter().chain(NON_POISONS).chain(LIQUIDS), title)
}

/// L number for a fumigation chemical, empty when unknown or "other"
pub fn chemical_l_number(title: &str) -> &'static str {
    find_l_number(SERVICE_CHEMICALS.iter(), title)
}

fn find_l_number<'a>(mut products: impl Iterator<Item = &'a Product>, title: &str) -> &'static str {
    products.find(|p| p.title == title).map(|p| p.l_number).unwrap_or("")
}

pub const QTY_UNITS: &[&str] = &["Block", "Tank", "ml", "kg", "g"];

pub const DEFAULT_QTY_UNIT: &str = "Block";

/// Station remark options: (value, label)
pub const STATION_REMARKS: &[(&str, &str)] = &[
    ("cleaned", "Cleaned"),
    ("wet", "Wet"),
    ("eaten", "Eaten"),
    ("none", "None"),
];

/// Fumigation treated-area checklist: (field, label)
pub const TREATED_AREAS: &[(&str, &str)] = &[
    ("area_kitchen", "Kitchen"),
    ("area_zink", "Zink"),
    ("area_bakery", "Bakery"),
    ("area_deli", "Deli"),
    ("area_backdoor", "Backdoor"),
    ("area_front_desk", "Front Desk"),
    ("area_store", "Store"),
    ("area_office", "Office"),
    ("area_lockers", "Lockers"),
    ("area_rubish", "Rubish"),
];

/// Fumigation treated-for checklist: (field, label)
pub const TARGET_PESTS: &[(&str, &str)] = &[
    ("for_cockroaches", "Cockroaches"),
    ("for_fleas", "Fleas"),
    ("for_lice", "Lice"),
    ("for_ants", "Ants"),
    ("for_rodents", "Rodents"),
    ("for_flies", "Flies"),
    ("for_fishmoths", "Fishmoths"),
    ("for_bedbugs", "Bedbugs"),
    ("for_termites", "Termites"),
    ("for_crickets", "Crickets"),
];

/// Legacy rodent batch-number fields: (field, label)
pub const RODENT_BATCH_PRODUCTS: &[(&str, &str)] = &[
    ("rodenthor", "Rodenthor Block (L9396)"),
    ("ratmouse_weat", "Supa Kill - Rat & Mouse Weatbait (L 5198)"),
    ("ratmouse_liquid", "Supa Kill Rat & Mouse Liquid (L 5987)"),
    ("kill_block", "Supa Kill Block (L 6325)"),
    ("non_poison", "Supa Kill - Rat & Mouse Block (RDT1008)"),
    ("bayer", "Bayer Racumin Tracking Powder (L 2800)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_l_number_spans_all_categories() {
        assert_eq!(station_l_number("Rodenthor Block"), "L9396");
        assert_eq!(station_l_number("Supa Kill - Rat & Mouse Block"), "RDT1008");
        assert_eq!(station_l_number("Supa Kill Rat & Mouse Liquid"), "L5987");
        assert_eq!(station_l_number("Homemade"), "");
    }

    #[test]
    fn test_chemical_l_number() {
        assert_eq!(chemical_l_number("Bandit 350, SC"), "L8001");
        assert_eq!(chemical_l_number(OTHER), "");
    }

    #[test]
    fn test_poison_type_round_trip_and_products() {
        for t in PoisonType::ALL {
            assert_eq!(PoisonType::parse(t.as_str()), Some(t));
        }
        assert_eq!(PoisonType::parse("gas"), None);
        assert!(PoisonType::Other.products().is_empty());
        assert_eq!(PoisonType::Poison.products().len(), 4);
    }
}
