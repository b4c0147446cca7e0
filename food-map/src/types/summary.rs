use super::PointOfInterest;

/// Aggregate statistics shown under the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_locations: usize,
    pub total_meals: u64,
    pub meal_range: Option<(u32, u32)>,
}

impl Summary {
    pub fn from_places(places: &[PointOfInterest]) -> Self {
        let total_meals = places.iter().map(|p| u64::from(p.meals)).sum();
        let meal_range = places.iter().map(|p| p.meals).fold(None::<(u32, u32)>, |range, meals| {
            Some(match range {
                None => (meals, meals),
                Some((min, max)) => (min.min(meals), max.max(meals)),
            })
        });

        Self {
            total_locations: places.len(),
            total_meals,
            meal_range,
        }
    }

    pub fn total_meals_text(&self) -> String {
        format!("{} meals", group_thousands(self.total_meals))
    }

    pub fn range_text(&self) -> String {
        match self.meal_range {
            Some((min, max)) => format!("{} - {} meals per location", min, max),
            None => String::from("no locations"),
        }
    }
}

/// Formats `n` with a comma every three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(923), "923");
        assert_eq!(group_thousands(4134), "4,134");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_of_empty_dataset() {
        let summary = Summary::from_places(&[]);
        assert_eq!(summary.total_locations, 0);
        assert_eq!(summary.total_meals, 0);
        assert_eq!(summary.meal_range, None);
        assert_eq!(summary.range_text(), "no locations");
    }

    #[test]
    fn test_summary_texts() {
        let places = vec![
            PointOfInterest::new("A", 40.7, -73.9, 900, ""),
            PointOfInterest::new("B", 40.7, -73.9, 1200, ""),
        ];
        let summary = Summary::from_places(&places);

        assert_eq!(summary.meal_range, Some((900, 1200)));
        assert_eq!(summary.total_meals_text(), "2,100 meals");
        assert_eq!(summary.range_text(), "900 - 1200 meals per location");
    }
}
