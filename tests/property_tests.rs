mod common;

use common::recorded_machine;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal_macros::dec;
use vending_machine::application::outcome::Outcome;
use vending_machine::domain::catalog::Catalog;
use vending_machine::domain::money::Money;

const COINS: &[&str] = &["nickel", "dime", "quarter", "penny", "slug", "QUARTER", " dime "];
const PRODUCTS: &[&str] = &["cola", "chips", "candy", "gum", "Chips"];

fn coin_value(name: &str) -> Money {
    match name.trim().to_lowercase().as_str() {
        "nickel" => Money::new(dec!(0.05)),
        "dime" => Money::new(dec!(0.10)),
        "quarter" => Money::new(dec!(0.25)),
        _ => Money::ZERO,
    }
}

#[test]
fn test_random_sessions_keep_balance_invariants() {
    let catalog = Catalog::standard();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let (mut machine, recorder) = recorded_machine();

        for _ in 0..40 {
            let before = machine.balance();
            recorder.clear();

            match rng.gen_range(0..10) {
                0..=5 => {
                    let coin = *COINS.choose(&mut rng).unwrap();
                    machine.insert_coin(coin);
                    assert_eq!(machine.balance(), before + coin_value(coin));
                }
                6..=8 => {
                    let name = *PRODUCTS.choose(&mut rng).unwrap();
                    let outcome = machine.select_product(name).unwrap();
                    match catalog.price_of(name) {
                        Some(price) if before >= price => {
                            assert!(matches!(outcome, Outcome::PurchaseCompleted { .. }));
                            assert_eq!(recorder.change(), [before - price]);
                            assert_eq!(machine.balance(), Money::ZERO);
                        }
                        _ => {
                            assert!(matches!(outcome, Outcome::Declined(_)));
                            assert!(recorder.dispensed().is_empty());
                            assert_eq!(machine.balance(), before);
                        }
                    }
                }
                _ => {
                    let outcome = machine.return_coins().unwrap();
                    if before.is_zero() {
                        assert_eq!(outcome, Outcome::NothingToReturn);
                        assert!(recorder.change().is_empty());
                    } else {
                        assert_eq!(outcome, Outcome::Refunded(before));
                        assert_eq!(recorder.change(), [before]);
                    }
                    assert_eq!(machine.balance(), Money::ZERO);
                }
            }

            assert!(machine.balance() >= Money::ZERO);
            assert_eq!(machine.current_status(), machine.current_status());
        }
    }
}
