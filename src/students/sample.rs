//! Random sample records for trying out the database at scale

use rand::Rng;

use super::database::StudentDatabase;

pub const MAX_SAMPLE: u32 = 10_000;
/// Generated IDs are `FIRST_SAMPLE_ID..FIRST_SAMPLE_ID + count`.
pub const FIRST_SAMPLE_ID: u32 = 1000;

const MAJORS: &[&str] = &["Computer Science", "Mathematics", "Engineering", "Physics", "Chemistry"];

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "David", "Emma", "Frank", "Grace", "Henry", "Iris", "Jack", "Kate", "Liam",
    "Maya", "Noah", "Olivia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Add `count` random records, calling `on_record` after each attempt.
///
/// IDs already present are skipped. Returns how many records were added.
pub fn generate_sample<R: Rng + ?Sized>(
    db: &mut StudentDatabase,
    rng: &mut R,
    count: u32,
    mut on_record: impl FnMut(),
) -> usize {
    let mut added = 0;
    for offset in 0..count.min(MAX_SAMPLE) {
        let id = FIRST_SAMPLE_ID + offset;
        let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
        let gpa = (rng.gen_range(2.0..=4.0_f64) * 100.0).round() / 100.0;
        let major = pick(rng, MAJORS);

        match db.add(id, &name, gpa, major) {
            Ok(()) => added += 1,
            Err(e) => tracing::debug!("Skipping sample {}: {}", id, e),
        }
        on_record();
    }
    tracing::info!("Generated {} of {} sample records", added, count);
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_valid_records() {
        let mut db = StudentDatabase::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut ticks = 0;

        let added = generate_sample(&mut db, &mut rng, 250, || ticks += 1);
        assert_eq!(added, 250);
        assert_eq!(ticks, 250);
        assert_eq!(db.len(), 250);

        for record in db.all() {
            assert!((FIRST_SAMPLE_ID..FIRST_SAMPLE_ID + 250).contains(&record.id));
            assert!((2.0..=4.0).contains(&record.gpa));
            assert!(((record.gpa * 100.0).round() - record.gpa * 100.0).abs() < 1e-6);
            assert!(MAJORS.contains(&record.major.as_str()));
        }
    }

    #[test]
    fn test_existing_ids_are_skipped() {
        let mut db = StudentDatabase::new();
        db.add(FIRST_SAMPLE_ID + 1, "Kept Record", 3.0, "Art").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let added = generate_sample(&mut db, &mut rng, 5, || {});
        assert_eq!(added, 4);
        assert_eq!(db.len(), 5);
        assert_eq!(db.get(FIRST_SAMPLE_ID + 1).unwrap().name, "Kept Record");
    }
}
