use crate::domain::model::{CmaResponse, Comparable};

/// Truncating `price / area`, or 0 when `area` is not positive.
pub fn price_per_area(price: i64, area: i64) -> i64 {
    if area <= 0 {
        return 0;
    }
    price / area
}

/// Averages comparable sale prices into an estimate for `subject_id`.
///
/// The estimate is the truncated integer mean, and 0 for an empty set.
/// Comparables are returned untouched.
pub fn aggregate(subject_id: &str, comparables: Vec<Comparable>) -> CmaResponse {
    // i128 sum; the mean of i64 values always fits back in i64.
    let total: i128 = comparables.iter().map(|c| i128::from(c.sale_price)).sum();

    let estimated_value = if comparables.is_empty() {
        0
    } else {
        (total / comparables.len() as i128) as i64
    };

    CmaResponse {
        property_id: subject_id.to_string(),
        comparables,
        estimated_value,
    }
}

/// Fills in `price_per_area` where the source left it unset.
pub fn normalize_comparables(comparables: &mut [Comparable]) {
    for comp in comparables.iter_mut() {
        if comp.price_per_area == 0 && comp.area_size > 0 {
            comp.price_per_area = price_per_area(comp.sale_price, comp.area_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comps(prices: &[i64]) -> Vec<Comparable> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| Comparable::new(format!("{} Test St", i + 1), p, 1000, 0))
            .collect()
    }

    #[test]
    fn test_price_per_area() {
        assert_eq!(price_per_area(1_100_000, 1300), 846);
        assert_eq!(price_per_area(1_150_000, 1400), 821);
        assert_eq!(price_per_area(999, 1000), 0);
    }

    #[test]
    fn test_price_per_area_non_positive_area() {
        assert_eq!(price_per_area(1_100_000, 0), 0);
        assert_eq!(price_per_area(-500, 0), 0);
        assert_eq!(price_per_area(1_100_000, -20), 0);
    }

    #[test]
    fn test_price_per_area_truncates_toward_zero() {
        assert_eq!(price_per_area(-7, 2), -3);
    }

    #[test]
    fn test_aggregate_empty() {
        let result = aggregate("X", Vec::new());
        assert_eq!(result.property_id, "X");
        assert_eq!(result.estimated_value, 0);
        assert!(result.comparables.is_empty());
    }

    #[test]
    fn test_aggregate_mean() {
        let result = aggregate("12345", comps(&[1_100_000, 1_150_000, 1_200_000]));
        assert_eq!(result.property_id, "12345");
        assert_eq!(result.estimated_value, 1_150_000);
        assert_eq!(result.comparables.len(), 3);
    }

    #[test]
    fn test_aggregate_truncates() {
        let result = aggregate("67890", comps(&[750_000, 780_000, 760_000]));
        assert_eq!(result.estimated_value, 763_333);
    }

    #[test]
    fn test_aggregate_large_prices_do_not_overflow() {
        let big = i64::MAX / 2 + 1;
        let result = aggregate("p", comps(&[big, big]));
        assert_eq!(result.estimated_value, big);

        let result = aggregate("p", comps(&[i64::MAX, i64::MAX, i64::MAX]));
        assert_eq!(result.estimated_value, i64::MAX);
    }

    #[test]
    fn test_aggregate_passes_comparables_through() {
        let input = vec![
            Comparable::new("789 Oak St", 1_200_000, 1380, 870),
            Comparable::new("1 Zero Ln", 300_000, 0, 0),
        ];
        let result = aggregate("p-1", input.clone());
        assert_eq!(result.comparables, input);
    }

    #[test]
    fn test_normalize_fills_missing_only() {
        let mut input = vec![
            Comparable::new("123 Main St", 1_100_000, 1300, 0),
            Comparable::new("789 Oak St", 1_200_000, 1380, 870),
            Comparable::new("Lot 4", 90_000, 0, 0),
        ];
        normalize_comparables(&mut input);

        assert_eq!(input[0].price_per_area, 846);
        assert_eq!(input[1].price_per_area, 870);
        assert_eq!(input[2].price_per_area, 0);
    }
}
