//! Fleet commands: the operations behind the interactive menu.
//!
//! Each command takes the fleet plus already-validated input; obtaining and
//! tokenizing that input is the shell's job. Every command either succeeds
//! or returns one named [`CommandError`] condition without mutating the
//! fleet.

use crate::codec::{decode_boat_with_options, DecodeOptions};
use crate::error::CommandError;
use crate::model::{Boat, LocationDetail};
use crate::store::Fleet;

/// Formats the inventory rows, one per boat, in current (name-sorted) order.
///
/// Read-only and restartable: calling it again without intervening mutation
/// yields an identical sequence.
pub fn list(fleet: &Fleet) -> impl Iterator<Item = String> + '_ {
    fleet.iter().map(format_row)
}

/// Formats one inventory row in the aligned reference layout, e.g.
///
/// ```text
/// Big Brother            20'    slip   # 27   Owes $1450.00
/// ```
pub fn format_row(boat: &Boat) -> String {
    let mut row = format!("{:<22} {:>2}' ", boat.name, boat.length);
    match &boat.location {
        LocationDetail::Slip(n) => {
            row.push_str(&format!("   slip   # {n:>2}   Owes ${:>7.2}", boat.amount_owed));
        }
        LocationDetail::Land(c) => {
            row.push_str(&format!("   land      {c}   Owes ${:>7.2}", boat.amount_owed));
        }
        LocationDetail::Trailer(tag) => {
            row.push_str(&format!("trailer {tag:>6}   Owes ${:>7.2}", boat.amount_owed));
        }
        LocationDetail::Storage(n) => {
            row.push_str(&format!("storage   # {n:>2}   Owes ${:>7.2}", boat.amount_owed));
        }
    }
    row
}

/// Decodes `record` as a record line and inserts the boat.
///
/// A malformed record or a full fleet leaves the fleet untouched.
pub fn add(fleet: &mut Fleet, record: &str, options: &DecodeOptions) -> Result<(), CommandError> {
    let boat = decode_boat_with_options(record, options)?;
    fleet.insert(boat)
}

/// Removes the first boat matching `name`.
pub fn remove(fleet: &mut Fleet, name: &str) -> Result<(), CommandError> {
    fleet.remove(name).map(|_| ())
}

/// Accepts a payment against a boat's balance and returns the new balance.
///
/// A payment larger than the balance is rejected with the current balance
/// attached; the balance can reach exactly zero but never go negative.
pub fn accept_payment(fleet: &mut Fleet, name: &str, amount: f64) -> Result<f64, CommandError> {
    let index = fleet.find(name).ok_or_else(|| CommandError::NotFound {
        name: name.to_string(),
    })?;
    let boat = &mut fleet.boats_mut()[index];
    if amount > boat.amount_owed {
        return Err(CommandError::PaymentExceedsBalance {
            balance: boat.amount_owed,
        });
    }
    boat.amount_owed -= amount;
    Ok(boat.amount_owed)
}

/// Adds one month's charge, `rate(kind) * length`, to every boat.
pub fn apply_monthly_charge(fleet: &mut Fleet) {
    for boat in fleet.boats_mut() {
        boat.amount_owed += boat.kind().monthly_rate() * f64::from(boat.length);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::model::LocationKind;

    fn sample_fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new("Big Brother", 20, LocationDetail::Slip(27), 1450.0))
            .unwrap();
        fleet
            .insert(Boat::new("Ahoy", 18, LocationDetail::Land('C'), 100.0))
            .unwrap();
        fleet
    }

    #[test]
    fn test_list_rows_in_store_order() {
        let fleet = sample_fleet();
        let rows: Vec<String> = list(&fleet).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Ahoy"));
        assert!(rows[1].starts_with("Big Brother"));
        assert!(rows[1].contains("slip"));
        assert!(rows[1].contains("# 27"));
        assert!(rows[1].contains("$1450.00"));
    }

    #[test]
    fn test_list_is_idempotent() {
        let fleet = sample_fleet();
        let first: Vec<String> = list(&fleet).collect();
        let second: Vec<String> = list(&fleet).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_invalid_record_no_mutation() {
        let mut fleet = sample_fleet();
        let err = add(&mut fleet, "garbage line", &DecodeOptions::strict());
        assert!(matches!(err, Err(CommandError::InvalidRecord(_))));
        assert_eq!(fleet.len(), 2);
    }

    #[test]
    fn test_add_full_fleet_no_mutation() {
        let mut fleet = Fleet::with_capacity(1);
        fleet
            .insert(Boat::new("a", 1, LocationDetail::Slip(1), 0.0))
            .unwrap();
        let err = add(&mut fleet, "b,1,slip,2,0.00", &DecodeOptions::strict());
        assert_eq!(err, Err(CommandError::CapacityExceeded { capacity: 1 }));
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn test_remove_not_found() {
        let mut fleet = sample_fleet();
        assert_eq!(
            remove(&mut fleet, "Nessie"),
            Err(CommandError::NotFound {
                name: "Nessie".to_string()
            })
        );
        assert!(remove(&mut fleet, "ahoy").is_ok());
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn test_payment_guard() {
        let mut fleet = sample_fleet();
        assert_eq!(
            accept_payment(&mut fleet, "Ahoy", 100.01),
            Err(CommandError::PaymentExceedsBalance { balance: 100.0 })
        );
        assert_eq!(fleet.get(fleet.find("Ahoy").unwrap()).unwrap().amount_owed, 100.0);

        assert_eq!(accept_payment(&mut fleet, "Ahoy", 40.0), Ok(60.0));
        assert_eq!(accept_payment(&mut fleet, "Ahoy", 60.0), Ok(0.0));
    }

    #[test]
    fn test_monthly_charge_linearity() {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new("s", 20, LocationDetail::Slip(1), 10.0))
            .unwrap();
        fleet
            .insert(Boat::new("l", 18, LocationDetail::Land('A'), 0.0))
            .unwrap();
        fleet
            .insert(Boat::new(
                "t",
                34,
                LocationDetail::Trailer("TAG".to_string()),
                5.0,
            ))
            .unwrap();
        fleet
            .insert(Boat::new("g", 26, LocationDetail::Storage(2), 1.0))
            .unwrap();

        let before: Vec<f64> = fleet.iter().map(|b| b.amount_owed).collect();
        apply_monthly_charge(&mut fleet);
        for (boat, old) in fleet.iter().zip(before) {
            let expected = old + boat.kind().monthly_rate() * f64::from(boat.length);
            assert!((boat.amount_owed - expected).abs() < 1e-9);
        }
        // Spot-check one rate against the table.
        let slip = fleet.get(fleet.find("s").unwrap()).unwrap();
        assert!((slip.amount_owed - (10.0 + 12.50 * 20.0)).abs() < 1e-9);
        assert_eq!(slip.kind(), LocationKind::Slip);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Load one record, bill a month, pay it off, then overpay by a cent.
        let data = "Big Brother,20,slip,27,1450.00\n";
        let mut fleet = Fleet::load(Cursor::new(data), None, &DecodeOptions::strict()).unwrap();
        assert_eq!(fleet.len(), 1);

        let rows: Vec<String> = list(&fleet).collect();
        assert!(rows[0].contains("# 27"));
        assert!(rows[0].contains("$1450.00"));

        apply_monthly_charge(&mut fleet);
        let owed = fleet.get(0).unwrap().amount_owed;
        assert!((owed - 1700.0).abs() < 1e-9);

        assert_eq!(accept_payment(&mut fleet, "Big Brother", 1700.0), Ok(0.0));
        assert_eq!(
            accept_payment(&mut fleet, "Big Brother", 0.01),
            Err(CommandError::PaymentExceedsBalance { balance: 0.0 })
        );
    }
}
