use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    pub field: String,
    pub direction: SortDirection,
}

/// Ordered multi-column sort specification.
///
/// The first entry is the primary sort key. Each header click runs the
/// per-field cycle unsorted → ascending → descending → unsorted; a
/// direction flip mutates the entry in place, so a field keeps its
/// priority position until it leaves the cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    entries: Vec<SortEntry>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial specification with a single ascending field.
    pub fn single(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            entries: vec![SortEntry {
                field: field.into(),
                direction,
            }],
        }
    }

    pub fn toggle(&mut self, field: &str) {
        if let Some(position) = self.entries.iter().position(|e| e.field == field) {
            match self.entries[position].direction {
                SortDirection::Ascending => {
                    self.entries[position].direction = SortDirection::Descending;
                }
                SortDirection::Descending => {
                    self.entries.remove(position);
                }
            }
        } else {
            self.entries.push(SortEntry {
                field: field.to_string(),
                direction: SortDirection::Ascending,
            });
        }
    }

    pub fn direction_of(&self, field: &str) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.direction)
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `sort` request parameter: comma-joined `field:direction`
    /// pairs, or `None` when nothing is sorted.
    pub fn to_param(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(|e| format!("{}:{}", e.field, e.direction.as_str()))
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_three_states() {
        let mut sort = SortSpec::new();

        sort.toggle("createdAt");
        assert_eq!(sort.direction_of("createdAt"), Some(SortDirection::Ascending));

        sort.toggle("createdAt");
        assert_eq!(
            sort.direction_of("createdAt"),
            Some(SortDirection::Descending)
        );

        sort.toggle("createdAt");
        assert_eq!(sort.direction_of("createdAt"), None);
        assert!(sort.is_empty());
    }

    #[test]
    fn multi_field_order_is_insertion_order() {
        let mut sort = SortSpec::new();
        sort.toggle("pickupAt");
        sort.toggle("price");
        assert_eq!(sort.to_param().unwrap(), "pickupAt:asc,price:asc");

        // Flipping the first field keeps its priority position.
        sort.toggle("pickupAt");
        assert_eq!(sort.to_param().unwrap(), "pickupAt:desc,price:asc");
    }

    #[test]
    fn removed_field_drops_out_of_the_param() {
        let mut sort = SortSpec::new();
        sort.toggle("a");
        sort.toggle("b");
        sort.toggle("a");
        sort.toggle("a");
        assert_eq!(sort.to_param().unwrap(), "b:asc");
    }

    #[test]
    fn empty_spec_has_no_param() {
        assert_eq!(SortSpec::new().to_param(), None);
    }
}
