use super::types::Listing;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load listings from a YAML file, or JSON when the extension is `.json`.
///
/// The file holds a plain list of listings. Duplicate ids are rejected.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    if !path.exists() {
        anyhow::bail!("Listings file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let listings: Vec<Listing> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse listings: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse listings: invalid YAML in {}", path.display()))?
    };

    let mut seen = HashSet::new();
    for listing in &listings {
        if !seen.insert(listing.id.as_str()) {
            anyhow::bail!(
                "Duplicate listing id '{}' in {}",
                listing.id,
                path.display()
            );
        }
    }

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const YAML: &str = r#"
- id: a
  name: Kos A
  price: 500000
  distance: 0.3
  facility: 8
  rating: 4.7
  security: 9
- id: b
  name: Kos B
  price: 1250000
  distance: 2.5
  facility: 4
  rating: 3.1
  security: 5
  active: false
"#;

    #[test]
    fn test_load_missing_file() {
        let temp_path = env::temp_dir().join("kos_rank_test_missing_listings.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_listings(&temp_path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_yaml() {
        let temp_path = env::temp_dir().join("kos_rank_test_listings.yaml");
        fs::write(&temp_path, YAML).unwrap();

        let listings = load_listings(&temp_path).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id, "a");
        assert!(listings[0].active);
        assert!(!listings[1].active);
        assert_eq!(listings[1].price, 1_250_000.0);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_json() {
        let temp_path = env::temp_dir().join("kos_rank_test_listings.json");
        let json = r#"[{"id":"j","name":"Kos J","price":700000,"distance":1.0,
            "facility":6,"rating":4.0,"security":7}]"#;
        fs::write(&temp_path, json).unwrap();

        let listings = load_listings(&temp_path).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].name, "Kos J");

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let temp_path = env::temp_dir().join("kos_rank_test_duplicate_listings.yaml");
        let yaml = YAML.replace("id: b", "id: a");
        fs::write(&temp_path, yaml).unwrap();

        let err = load_listings(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Duplicate listing id 'a'"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let temp_path = env::temp_dir().join("kos_rank_test_bad_listings.yaml");
        fs::write(&temp_path, "- id: a\n  name: missing fields\n").unwrap();

        let err = load_listings(&temp_path).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));

        let _ = fs::remove_file(&temp_path);
    }
}
