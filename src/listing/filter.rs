use super::types::Listing;

/// Keep only listings that are switched on
pub fn active_listings(listings: Vec<Listing>) -> Vec<Listing> {
    listings.into_iter().filter(|l| l.active).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_listing(id: &str, active: bool) -> Listing {
        Listing {
            id: id.to_string(),
            name: format!("Kos {}", id),
            price: 800_000.0,
            distance: 1.0,
            facility: 5.0,
            rating: 4.0,
            security: 5.0,
            active,
        }
    }

    #[test]
    fn test_inactive_listings_dropped() {
        let listings = vec![
            create_test_listing("a", true),
            create_test_listing("b", false),
            create_test_listing("c", true),
        ];
        let active = active_listings(listings);
        assert_eq!(
            active.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_all_inactive() {
        let listings = vec![create_test_listing("a", false)];
        assert!(active_listings(listings).is_empty());
    }
}
