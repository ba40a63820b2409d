use hashbrown::{HashMap, HashSet};

/// Hands out entrance names for one graph build. The first entrance into a
/// region is named after the region; later ones get a bracketed counter,
/// e.g. `Pyramid Map [2]`.
#[derive(Default, Clone, Debug)]
pub struct EntranceNames {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl EntranceNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, target: &str) -> String {
        let count = self.counts.entry(target.to_string()).or_insert(0);
        loop {
            *count += 1;
            let name = if *count == 1 {
                target.to_string()
            } else {
                format!("{target} [{count}]")
            };
            // A region can itself be named like a suffixed entrance.
            if self.issued.insert(name.clone()) {
                return name;
            }
        }
    }

    pub fn is_issued(&self, name: &str) -> bool {
        self.issued.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_is_bare() {
        let mut names = EntranceNames::new();
        assert_eq!(names.assign("Cractus"), "Cractus");
        assert_eq!(names.assign("Catbat"), "Catbat");
        assert_eq!(names.assign("Cractus"), "Cractus [2]");
    }

    #[test]
    fn test_five_entrances_into_one_region() {
        let mut names = EntranceNames::new();
        let assigned: Vec<String> = (0..5).map(|_| names.assign("Pyramid Map")).collect();
        assert_eq!(
            assigned,
            vec![
                "Pyramid Map",
                "Pyramid Map [2]",
                "Pyramid Map [3]",
                "Pyramid Map [4]",
                "Pyramid Map [5]",
            ]
        );
        let unique: HashSet<&String> = assigned.iter().collect();
        assert_eq!(unique.len(), 5);

        let mut again = EntranceNames::new();
        let reassigned: Vec<String> = (0..5).map(|_| again.assign("Pyramid Map")).collect();
        assert_eq!(assigned, reassigned);
    }

    #[test]
    fn test_suffix_never_collides_with_region_name() {
        let mut names = EntranceNames::new();
        assert_eq!(names.assign("Hub"), "Hub");
        assert_eq!(names.assign("Hub [2]"), "Hub [2]");
        assert_eq!(names.assign("Hub"), "Hub [3]");
        assert_eq!(names.assign("Hub [2]"), "Hub [2] [2]");
        assert!(names.is_issued("Hub [3]"));
        assert!(!names.is_issued("Hub [4]"));
    }

    #[test]
    fn test_trailing_whitespace_does_not_collide() {
        let mut names = EntranceNames::new();
        let a = names.assign("Level");
        let b = names.assign("Level ");
        let c = names.assign("Level");
        assert_ne!(a.trim(), c.trim());
        assert_ne!(b, c);
    }
}
