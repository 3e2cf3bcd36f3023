//! # Field Labels
//!
//! Display labels depend on regional terminology carried in the metadata
//! "name type" strings. Each vocabulary is closed; unrecognized terms fall
//! back to a neutral default.
//!
//! | Field | Source | Default |
//! |-------|--------|---------|
//! | administrative area | `state_name_type` | State/Province |
//! | postal code | `zip_name_type`, then country | Postal Code |
//! | dependent locality | `sublocality_name_type`, Iran override | District |
//! | city | `locality_name_type` | City |

use addrform_core::{AddressField, CountryCode};
use addrform_metadata::CountryMetadata;

pub const NAME_LABEL: &str = "Full Name";
pub const ORGANIZATION_LABEL: &str = "Organization";
pub const STREET_ADDRESS_LABEL: &str = "Street Address";
pub const SORTING_CODE_LABEL: &str = "Sorting Code";

const DEFAULT_ADMIN_AREA_LABEL: &str = "State/Province";
const DEFAULT_POSTAL_CODE_LABEL: &str = "Postal Code";
const DEFAULT_DEPENDENT_LOCALITY_LABEL: &str = "District";
const DEFAULT_LOCALITY_LABEL: &str = "City";

/// Normalize a name-type term: trimmed, lowercase, `-` read as `_`.
fn term(name_type: Option<&str>) -> Option<String> {
    name_type
        .map(|t| t.trim().to_ascii_lowercase().replace('-', "_"))
        .filter(|t| !t.is_empty())
}

/// Label for the administrative area.
pub fn admin_area_label(state_name_type: Option<&str>) -> &'static str {
    match term(state_name_type).as_deref() {
        Some("area") => "Area",
        Some("county") => "County",
        Some("department") => "Department",
        Some("district") => "District",
        Some("do_si") => "Do/Si",
        Some("emirate") => "Emirate",
        Some("island") => "Island",
        Some("oblast") => "Oblast",
        Some("parish") => "Parish",
        Some("prefecture") => "Prefecture",
        Some("province") => "Province",
        Some("region") => "Region",
        Some("state") => "State",
        _ => DEFAULT_ADMIN_AREA_LABEL,
    }
}

/// Label for the postal code. Countries without a `zip_name_type` get a
/// fixed label for the few whose terminology is well known.
pub fn postal_code_label(country: &CountryCode, zip_name_type: Option<&str>) -> &'static str {
    match term(zip_name_type).as_deref() {
        Some("pin") => "PIN Code",
        Some("postal") => "Postal Code",
        Some("zip") => "ZIP Code",
        Some("eircode") => "Eircode",
        _ => match country.as_str() {
            "US" => "ZIP Code",
            "IE" => "Eircode",
            "IN" => "PIN Code",
            _ => DEFAULT_POSTAL_CODE_LABEL,
        },
    }
}

/// Label for the dependent locality. Iran is always "District" whatever
/// its upstream term says.
pub fn dependent_locality_label(
    country: &CountryCode,
    sublocality_name_type: Option<&str>,
) -> &'static str {
    if country.as_str() == "IR" {
        return "District";
    }
    match term(sublocality_name_type).as_deref() {
        Some("neighborhood") => "Neighborhood",
        Some("district") => "District",
        Some("suburb") => "Suburb",
        Some("village_township") => "Village/Township",
        Some("ward") => "Ward",
        _ => DEFAULT_DEPENDENT_LOCALITY_LABEL,
    }
}

/// Label for the city.
pub fn locality_label(locality_name_type: Option<&str>) -> &'static str {
    match term(locality_name_type).as_deref() {
        Some("city") => "City",
        Some("district") => "District",
        Some("post_town") => "Post Town",
        Some("suburb") => "Suburb",
        _ => DEFAULT_LOCALITY_LABEL,
    }
}

/// Label for any field of a country's schema.
pub fn label_for(field: AddressField, country: &CountryCode, metadata: &CountryMetadata) -> &'static str {
    match field {
        AddressField::Name => NAME_LABEL,
        AddressField::Organization => ORGANIZATION_LABEL,
        AddressField::AddressLine1 => "Address Line 1",
        AddressField::AddressLine2 => "Address Line 2",
        AddressField::AddressLine3 => "Address Line 3",
        AddressField::DependentLocality => {
            dependent_locality_label(country, metadata.sublocality_name_type.as_deref())
        }
        AddressField::City => locality_label(metadata.locality_name_type.as_deref()),
        AddressField::AdministrativeArea => {
            admin_area_label(metadata.state_name_type.as_deref())
        }
        AddressField::PostalCode => {
            postal_code_label(country, metadata.zip_name_type.as_deref())
        }
        AddressField::SortingCode => SORTING_CODE_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        CountryCode::parse(s).unwrap()
    }

    #[test]
    fn admin_area_vocabulary() {
        assert_eq!(admin_area_label(Some("state")), "State");
        assert_eq!(admin_area_label(Some("province")), "Province");
        assert_eq!(admin_area_label(Some("prefecture")), "Prefecture");
        assert_eq!(admin_area_label(Some("county")), "County");
        assert_eq!(admin_area_label(Some("region")), "Region");
        assert_eq!(admin_area_label(Some("do_si")), "Do/Si");
        assert_eq!(admin_area_label(Some("Emirate")), "Emirate");
    }

    #[test]
    fn admin_area_default() {
        assert_eq!(admin_area_label(None), "State/Province");
        assert_eq!(admin_area_label(Some("")), "State/Province");
        assert_eq!(admin_area_label(Some("canton")), "State/Province");
    }

    #[test]
    fn postal_code_from_name_type() {
        let fr = code("FR");
        assert_eq!(postal_code_label(&fr, Some("pin")), "PIN Code");
        assert_eq!(postal_code_label(&fr, Some("postal")), "Postal Code");
        assert_eq!(postal_code_label(&fr, Some("zip")), "ZIP Code");
        assert_eq!(postal_code_label(&fr, Some("eircode")), "Eircode");
    }

    #[test]
    fn postal_code_country_fallbacks() {
        assert_eq!(postal_code_label(&code("US"), None), "ZIP Code");
        assert_eq!(postal_code_label(&code("IE"), None), "Eircode");
        assert_eq!(postal_code_label(&code("IN"), Some("unknown")), "PIN Code");
        assert_eq!(postal_code_label(&code("DE"), None), "Postal Code");
    }

    #[test]
    fn name_type_wins_over_country_fallback() {
        assert_eq!(postal_code_label(&code("US"), Some("postal")), "Postal Code");
    }

    #[test]
    fn dependent_locality_vocabulary() {
        let br = code("BR");
        assert_eq!(dependent_locality_label(&br, Some("neighborhood")), "Neighborhood");
        assert_eq!(dependent_locality_label(&br, Some("suburb")), "Suburb");
        assert_eq!(dependent_locality_label(&br, Some("village_township")), "Village/Township");
        assert_eq!(dependent_locality_label(&br, Some("village-township")), "Village/Township");
        assert_eq!(dependent_locality_label(&br, Some("ward")), "Ward");
        assert_eq!(dependent_locality_label(&br, None), "District");
    }

    #[test]
    fn unlisted_dependent_locality_terms_use_default() {
        assert_eq!(dependent_locality_label(&code("IE"), Some("townland")), "District");
        assert_eq!(dependent_locality_label(&code("BR"), Some("barrio")), "District");
    }

    #[test]
    fn iran_dependent_locality_is_district() {
        assert_eq!(dependent_locality_label(&code("IR"), Some("neighborhood")), "District");
    }

    #[test]
    fn locality_vocabulary() {
        assert_eq!(locality_label(None), "City");
        assert_eq!(locality_label(Some("post_town")), "Post Town");
        assert_eq!(locality_label(Some("suburb")), "Suburb");
        assert_eq!(locality_label(Some("district")), "District");
    }

    #[test]
    fn label_for_dispatches_per_field() {
        let metadata = CountryMetadata {
            state_name_type: Some("state".to_string()),
            zip_name_type: Some("zip".to_string()),
            ..CountryMetadata::default()
        };
        let us = code("US");
        assert_eq!(label_for(AddressField::AdministrativeArea, &us, &metadata), "State");
        assert_eq!(label_for(AddressField::PostalCode, &us, &metadata), "ZIP Code");
        assert_eq!(label_for(AddressField::City, &us, &metadata), "City");
        assert_eq!(label_for(AddressField::AddressLine2, &us, &metadata), "Address Line 2");
        assert_eq!(label_for(AddressField::SortingCode, &us, &metadata), "Sorting Code");
    }
}
