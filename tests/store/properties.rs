use hp_catalog::{estimate, next_id, AftermarketProduct, CarModel, InMemoryRecordStore, PerformanceGains, RecordStore};
use proptest::prelude::*;

use crate::support::car;

fn part(id: usize, hp: u32) -> AftermarketProduct {
    AftermarketProduct {
        id: id.to_string(),
        name: format!("Part {id}"),
        category: "Performance".into(),
        compatible_models: Default::default(),
        performance_gains: PerformanceGains {
            hp: f64::from(hp),
            torque: 0.0,
        },
        price: 1.0,
        vendor: "Vendor".into(),
    }
}

proptest! {
    #[test]
    fn next_id_is_one_past_the_largest(ids in prop::collection::vec(0u64..1_000_000, 1..50)) {
        let text: Vec<String> = ids.iter().map(|n| n.to_string()).collect();
        let expected = ids.iter().max().unwrap() + 1;
        prop_assert_eq!(next_id(text.iter().map(String::as_str)), Some(expected.to_string()));
    }

    #[test]
    fn store_ids_follow_seeded_max(seed_ids in prop::collection::btree_set(1u64..10_000, 0..20), creates in 1usize..10) {
        let mut document = hp_catalog::Document::new();
        for id in &seed_ids {
            let mut seeded = car("Seed", "Car", 2000, 100.0);
            seeded.id = id.to_string();
            document.car_models.push(serde_json::to_value(seeded).unwrap());
        }
        let store = InMemoryRecordStore::with_document(document);
        let start = seed_ids.iter().max().copied().unwrap_or(0);

        for n in 1..=creates {
            let stored = store.create(car("New", "Car", 2024, 150.0)).unwrap();
            prop_assert_eq!(stored.id, (start + n as u64).to_string());
        }
        let listed = store.list::<CarModel>().unwrap();
        prop_assert_eq!(listed.len(), seed_ids.len() + creates);
    }

    #[test]
    fn theoretical_hp_is_base_plus_gains(base in 50u32..1_500, gains in prop::collection::vec(0u32..500, 0..12)) {
        let car = car("Any", "Car", 2010, f64::from(base));
        let parts: Vec<AftermarketProduct> = gains.iter().enumerate().map(|(i, hp)| part(i, *hp)).collect();
        let total: u32 = gains.iter().sum();

        let result = estimate(Some(&car), &parts).unwrap();
        prop_assert_eq!(result.theoretical_horsepower, f64::from(base + total));
        prop_assert_eq!(result.horsepower_gain, f64::from(total));
        prop_assert_eq!(result.base_horsepower, f64::from(base));
    }
}
